pub mod client;
pub mod endpoint;
pub mod response;

pub use client::{dispatch, Dispatcher, RawResponse};
pub use endpoint::Endpoint;
pub use response::pretty_body;
