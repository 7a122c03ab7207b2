use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const REALTIME_BASE: &str = "https://realtime.oxylabs.io";
pub const PUSH_PULL_BASE: &str = "https://data.oxylabs.io";
const QUERIES_PATH: &str = "/v1/queries";

/// Which API host receives the query.
///
/// `Realtime` answers with results on the open connection; `PushPull` queues
/// the job and answers with its status. The crate does not assume anything
/// else about the difference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Endpoint {
    #[default]
    Realtime,
    PushPull,
    Custom(String),
}

impl Endpoint {
    pub fn base(&self) -> &str {
        match self {
            Endpoint::Realtime => REALTIME_BASE,
            Endpoint::PushPull => PUSH_PULL_BASE,
            Endpoint::Custom(base) => base,
        }
    }

    /// Full URL of the queries resource.
    pub fn queries_url(&self) -> String {
        let base = self.base();
        if base.ends_with(QUERIES_PATH) {
            base.to_string()
        } else if base.ends_with("/v1") {
            format!("{}/queries", base)
        } else if base.ends_with("/v1/") {
            format!("{}queries", base)
        } else {
            format!("{}{}", base.trim_end_matches('/'), QUERIES_PATH)
        }
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Err("Endpoint must not be empty".to_string()),
            "realtime" => Ok(Endpoint::Realtime),
            "push-pull" | "push_pull" | "data" => Ok(Endpoint::PushPull),
            _ if trimmed.starts_with("http://") || trimmed.starts_with("https://") => {
                Ok(Endpoint::Custom(trimmed.to_string()))
            }
            _ => Err(format!(
                "Unknown endpoint '{}' (expected realtime, push-pull or an http(s) URL)",
                trimmed
            )),
        }
    }
}

impl TryFrom<String> for Endpoint {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.to_string()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Realtime => f.write_str("realtime"),
            Endpoint::PushPull => f.write_str("push-pull"),
            Endpoint::Custom(base) => f.write_str(base),
        }
    }
}
