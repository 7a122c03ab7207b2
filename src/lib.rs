pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod ui;

pub use api::{dispatch, Dispatcher, Endpoint, RawResponse};
pub use error::{Result, ScraperError};
pub use models::{ContextParam, Credentials, RequestDescriptor, Source};
