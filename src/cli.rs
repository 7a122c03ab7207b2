use crate::config::DefaultsConfig;
use crate::error::Result;
use crate::models::{
    ContextParam, RequestDescriptor, Source, DOMAIN, GEO_LOCATION, PAGES, PARSE, QUERY, SOURCE, URL,
};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "oxyshop")]
#[command(about = "Query Google Shopping through the Oxylabs Web Scraper API", long_about = None)]
pub struct Args {
    #[arg(short = 's', long = "source", value_enum, help = "Scraper source to invoke")]
    pub source: Option<Source>,

    #[arg(short = 'q', long = "query", help = "Search term, product token or product id")]
    pub query: Option<String>,

    #[arg(long = "url", help = "Target page URL (alternative to --query)")]
    pub url: Option<String>,

    #[arg(long = "domain", help = "Top-level domain to scrape from (e.g. com)")]
    pub domain: Option<String>,

    #[arg(long = "geo-location", help = "Geographic context for the scrape")]
    pub geo_location: Option<String>,

    #[arg(long = "pages", help = "Number of result pages to retrieve")]
    pub pages: Option<u32>,

    #[arg(long = "parse", help = "Ask the API for structured results")]
    pub parse: bool,

    #[arg(
        long = "context",
        value_name = "KEY=VALUE",
        help = "Scraper-specific option, repeatable (e.g. sort_by=pd)"
    )]
    pub context: Vec<String>,

    #[arg(
        long = "field",
        value_name = "KEY=VALUE",
        help = "Extra top-level payload field, repeatable"
    )]
    pub fields: Vec<String>,

    #[arg(long = "payload", help = "JSON file with a full request payload")]
    pub payload: Option<PathBuf>,

    #[arg(
        long = "endpoint",
        help = "realtime, push-pull, or a custom base URL"
    )]
    pub endpoint: Option<String>,

    #[arg(long = "timeout", help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long = "username", help = "API username (defaults to $OXYLABS_USERNAME)")]
    pub username: Option<String>,

    #[arg(long = "password", help = "API password (defaults to $OXYLABS_PASSWORD)")]
    pub password: Option<String>,

    #[arg(short = 'o', long = "output", help = "Also write the response to this file")]
    pub output: Option<PathBuf>,

    #[arg(long = "pretty", help = "Indent JSON responses")]
    pub pretty: bool,

    #[arg(short = 'v', long = "verbose", help = "Log request details to stderr")]
    pub verbose: bool,
}

impl Args {
    /// Build the request payload: `--payload` file first, then individual flags
    /// on top, then `--field` overrides, then file-config defaults for whatever
    /// is still unset.
    pub fn to_descriptor(&self, defaults: &DefaultsConfig) -> Result<RequestDescriptor> {
        let mut descriptor = match &self.payload {
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                RequestDescriptor::from_json(&contents)?
            }
            None => RequestDescriptor::default(),
        };

        if let Some(source) = self.source {
            descriptor.set(SOURCE, source.as_str());
        }
        if let Some(query) = &self.query {
            descriptor.set(QUERY, query.as_str());
        }
        if let Some(url) = &self.url {
            descriptor.set(URL, url.as_str());
        }
        if let Some(domain) = &self.domain {
            descriptor.set(DOMAIN, domain.as_str());
        }
        if let Some(geo_location) = &self.geo_location {
            descriptor.set(GEO_LOCATION, geo_location.as_str());
        }
        if let Some(pages) = self.pages {
            descriptor.set(PAGES, pages);
        }
        if self.parse {
            descriptor.set(PARSE, true);
        }

        for raw in &self.context {
            let param = ContextParam::parse(raw)?;
            descriptor = descriptor.with_context(param.key, param.value);
        }

        // Raw fields are applied last and win over the typed flags
        for raw in &self.fields {
            let param = ContextParam::parse(raw)?;
            descriptor.set(param.key, param.value);
        }

        if !descriptor.contains(SOURCE) {
            let source = if descriptor.contains(URL) && !descriptor.contains(QUERY) {
                Source::Google
            } else {
                Source::GoogleShoppingSearch
            };
            descriptor.set(SOURCE, source.as_str());
        }

        if let Some(domain) = &defaults.domain {
            descriptor.set_default(DOMAIN, domain.as_str());
        }
        if let Some(geo_location) = &defaults.geo_location {
            descriptor.set_default(GEO_LOCATION, geo_location.as_str());
        }

        Ok(descriptor)
    }
}
