use std::fmt;

#[derive(Debug)]
pub enum ScraperError {
    /// The HTTP call could not complete: connection, TLS, timeout or body read.
    Transport(reqwest::Error),
    Config(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl ScraperError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ScraperError::Transport(_))
    }
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Transport(e) => write!(f, "Transport error: {}", e),
            ScraperError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ScraperError::Io(e) => write!(f, "IO error: {}", e),
            ScraperError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for ScraperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScraperError::Transport(e) => Some(e),
            ScraperError::Io(e) => Some(e),
            ScraperError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ScraperError {
    fn from(err: reqwest::Error) -> Self {
        ScraperError::Transport(err)
    }
}

impl From<std::io::Error> for ScraperError {
    fn from(err: std::io::Error) -> Self {
        ScraperError::Io(err)
    }
}

impl From<serde_json::Error> for ScraperError {
    fn from(err: serde_json::Error) -> Self {
        ScraperError::Json(err)
    }
}

/// Config file loading reports through `anyhow` context chains.
impl From<anyhow::Error> for ScraperError {
    fn from(err: anyhow::Error) -> Self {
        ScraperError::Config(format!("{:#}", err))
    }
}

pub type Result<T> = std::result::Result<T, ScraperError>;
