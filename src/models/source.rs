use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scraper sources used for Google Shopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Source {
    /// Generic Google scraper, driven by a full `url`
    Google,
    GoogleShoppingSearch,
    GoogleShoppingProduct,
    GoogleShoppingPricing,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Google => "google",
            Source::GoogleShoppingSearch => "google_shopping_search",
            Source::GoogleShoppingProduct => "google_shopping_product",
            Source::GoogleShoppingPricing => "google_shopping_pricing",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
