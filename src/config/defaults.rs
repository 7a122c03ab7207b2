pub const USERNAME_ENV: &str = "OXYLABS_USERNAME";
pub const PASSWORD_ENV: &str = "OXYLABS_PASSWORD";
pub const ENDPOINT_ENV: &str = "OXYLABS_ENDPOINT";
pub const TIMEOUT_ENV: &str = "OXYLABS_TIMEOUT";
pub const VERBOSE_ENV: &str = "OXYLABS_VERBOSE";

pub const CONFIG_DIR_NAME: &str = "oxyshop";
pub const LOCAL_CONFIG_STEM: &str = ".oxyshop";

pub fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}
