use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
    #[serde(default)]
    pub pretty: Option<bool>,
    /// Path the response body is written to; `${VAR}` references are expanded
    #[serde(default)]
    pub file: Option<String>,
}

/// Descriptor fields filled in when the command line leaves them unset.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub geo_location: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}
