use crate::api::Endpoint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub endpoint: Option<Endpoint>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}
