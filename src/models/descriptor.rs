use super::source::Source;
use crate::error::{Result, ScraperError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const GOOGLE_SHOPPING_BASE: &str = "https://www.google.com/search";

pub const SOURCE: &str = "source";
pub const URL: &str = "url";
pub const QUERY: &str = "query";
pub const DOMAIN: &str = "domain";
pub const GEO_LOCATION: &str = "geo_location";
pub const PAGES: &str = "pages";
pub const CONTEXT: &str = "context";
pub const PARSE: &str = "parse";

/// A single scraper-specific option, e.g. `sort_by=pd` or `min_price=20`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextParam {
    pub key: String,
    pub value: Value,
}

impl ContextParam {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse `key=value`. The value becomes a JSON scalar when it reads as one
    /// and prints back identically (`20`, `true`); anything else, including
    /// numbers too long to survive as `i64`/`u64`/`f64`, stays a string.
    pub fn parse(input: &str) -> Result<Self> {
        let (key, raw) = input.split_once('=').ok_or_else(|| {
            ScraperError::Config(format!("Expected key=value, got '{}'", input))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(ScraperError::Config(format!(
                "Missing key in '{}'",
                input
            )));
        }

        Ok(Self::new(key, scalar_value(raw)))
    }
}

fn scalar_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(v @ (Value::Bool(_) | Value::Null)) => v,
        Ok(Value::Number(n)) if n.to_string() == raw => Value::Number(n),
        Ok(Value::String(s)) => Value::String(s),
        _ => Value::String(raw.to_string()),
    }
}

/// Query parameters sent to the scraper API.
///
/// The payload is an opaque JSON object: every key, recognized or not, lives
/// in one map, so a key can only appear once and whatever JSON the caller
/// provides is sent as is. The typed setters are conveniences; which fields
/// are legal for a given `source` is decided by the remote API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestDescriptor {
    fields: Map<String, Value>,
}

impl RequestDescriptor {
    pub fn new(source: impl Into<String>) -> Self {
        Self::default().with_source(source)
    }

    pub fn shopping_search(query: impl Into<String>) -> Self {
        Self::new(Source::GoogleShoppingSearch.as_str()).with_query(query)
    }

    /// `token` is either the opaque product token from search results or a
    /// numeric product id.
    pub fn shopping_product(token: impl Into<String>) -> Self {
        Self::new(Source::GoogleShoppingProduct.as_str()).with_query(token)
    }

    pub fn shopping_pricing(product_id: impl Into<String>) -> Self {
        Self::new(Source::GoogleShoppingPricing.as_str()).with_query(product_id)
    }

    pub fn shopping_url(url: impl Into<String>) -> Self {
        Self::new(Source::Google.as_str()).with_url(url)
    }

    pub fn with_source(self, source: impl Into<String>) -> Self {
        self.with_field(SOURCE, source.into())
    }

    pub fn with_url(self, url: impl Into<String>) -> Self {
        self.with_field(URL, url.into())
    }

    pub fn with_query(self, query: impl Into<String>) -> Self {
        self.with_field(QUERY, query.into())
    }

    pub fn with_domain(self, domain: impl Into<String>) -> Self {
        self.with_field(DOMAIN, domain.into())
    }

    pub fn with_geo_location(self, geo_location: impl Into<String>) -> Self {
        self.with_field(GEO_LOCATION, geo_location.into())
    }

    pub fn with_pages(self, pages: u32) -> Self {
        self.with_field(PAGES, pages)
    }

    pub fn with_parse(self, parse: bool) -> Self {
        self.with_field(PARSE, parse)
    }

    /// Appends to `context`, keeping insertion order. A `context` that is not
    /// an array is replaced.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let entry = serde_json::json!({ "key": key.into(), "value": value.into() });
        match self.fields.get_mut(CONTEXT) {
            Some(Value::Array(items)) => items.push(entry),
            _ => {
                self.fields.insert(CONTEXT.to_string(), Value::Array(vec![entry]));
            }
        }
        self
    }

    /// Sets any top-level key, replacing a previous value for the same key.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Sets `key` only when it is absent.
    pub fn set_default(&mut self, key: &str, value: impl Into<Value>) {
        if !self.fields.contains_key(key) {
            self.fields.insert(key.to_string(), value.into());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn source(&self) -> Option<&str> {
        self.get_str(SOURCE)
    }

    /// Entries of `context` that have the `{key, value}` shape, in order.
    pub fn context(&self) -> Vec<ContextParam> {
        self.get(CONTEXT)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Any JSON object is accepted; values are not checked.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Map<String, Value>> for RequestDescriptor {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Google Shopping results URL for `query`, for use with the `google` source.
///
/// The query is percent-encoded with spaces as `%20`.
pub fn google_shopping_url(query: &str) -> Result<String> {
    let mut url = reqwest::Url::parse_with_params(
        GOOGLE_SHOPPING_BASE,
        &[("tbm", "shop"), ("q", query), ("hl", "en")],
    )
    .map_err(|e| ScraperError::Config(format!("Invalid shopping URL: {}", e)))?;

    // form encoding turns spaces into '+'; a literal '+' is already %2B
    let query_string = url.query().map(|q| q.replace('+', "%20"));
    url.set_query(query_string.as_deref());

    Ok(url.to_string())
}
