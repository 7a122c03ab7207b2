mod api;
mod defaults;
mod output;
mod validation;

use crate::api::Endpoint;
use crate::cli::Args;
use crate::error::ScraperError;
use crate::models::Credentials;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use api::ApiConfig;
pub use defaults::{
    is_truthy, ENDPOINT_ENV, PASSWORD_ENV, TIMEOUT_ENV, USERNAME_ENV, VERBOSE_ENV,
};
pub use output::{DefaultsConfig, OutputConfig};
pub use validation::expand_env_var_in_string;

/// Fully resolved runtime settings.
pub struct Config {
    pub credentials: Credentials,
    pub endpoint: Endpoint,
    pub timeout: Option<Duration>,
    pub verbose: bool,
    pub pretty: bool,
    pub output_file: Option<PathBuf>,
    pub defaults: DefaultsConfig,
}

/// On-disk configuration. Credentials are only read from flags or the environment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> crate::error::Result<Self> {
        let file_config = FileConfig::load()?;
        Self::resolve(args, file_config, |key| env::var(key).ok())
    }

    /// Precedence: CLI args > environment > config file > default.
    pub fn resolve<F>(args: &Args, file_config: FileConfig, env_lookup: F) -> crate::error::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Credentials never come from the config file
        let username = args
            .username
            .clone()
            .or_else(|| env_lookup(USERNAME_ENV))
            .ok_or_else(|| missing_env(USERNAME_ENV))?;
        let password = args
            .password
            .clone()
            .or_else(|| env_lookup(PASSWORD_ENV))
            .ok_or_else(|| missing_env(PASSWORD_ENV))?;

        let endpoint = match args.endpoint.clone().or_else(|| env_lookup(ENDPOINT_ENV)) {
            Some(raw) => raw.parse::<Endpoint>().map_err(ScraperError::Config)?,
            None => file_config.api.endpoint.clone().unwrap_or_default(),
        };

        let timeout_secs = match args.timeout {
            Some(secs) => Some(secs),
            None => match env_lookup(TIMEOUT_ENV) {
                Some(raw) => Some(
                    raw.trim()
                        .parse::<u64>()
                        .map_err(|_| {
                            ScraperError::Config(format!(
                                "{} must be a number of seconds, got '{}'",
                                TIMEOUT_ENV, raw
                            ))
                        })?,
                ),
                None => file_config.api.timeout_secs,
            },
        };

        let verbose = args.verbose
            || env_lookup(VERBOSE_ENV)
                .map(|v| is_truthy(&v))
                .or(file_config.output.verbose)
                .unwrap_or(false);

        let pretty = args.pretty || file_config.output.pretty.unwrap_or(false);

        let output_file = args.output.clone().or_else(|| {
            file_config
                .output
                .file
                .as_deref()
                .map(expand_env_var_in_string)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        });

        Ok(Config {
            credentials: Credentials::new(username, password),
            endpoint,
            timeout: timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
            verbose,
            pretty,
            output_file,
            defaults: file_config.defaults,
        })
    }
}

fn missing_env(name: &str) -> ScraperError {
    ScraperError::Config(format!("{} environment variable not set", name))
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        // No config file found, return default
        Ok(FileConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str());
        let config: FileConfig = if extension == Some("yaml") || extension == Some("yml") {
            serde_yaml::from_str(&contents).with_context(|| {
                format!("Failed to parse YAML config file: {}", path.display())
            })?
        } else {
            serde_json::from_str(&contents).with_context(|| {
                format!("Failed to parse JSON config file: {}", path.display())
            })?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory (local override)
        for ext in ["yaml", "yml", "json"] {
            paths.push(PathBuf::from(format!("{}.{}", defaults::LOCAL_CONFIG_STEM, ext)));
        }

        // 2. User's config directory
        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join(defaults::CONFIG_DIR_NAME);
            for ext in ["yaml", "yml", "json"] {
                paths.push(config_dir.join(format!("{}.{}", defaults::CONFIG_DIR_NAME, ext)));
            }
        }

        paths
    }
}
