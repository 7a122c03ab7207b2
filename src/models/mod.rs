mod credentials;
mod descriptor;
mod source;

pub use credentials::Credentials;
pub use descriptor::{
    google_shopping_url, ContextParam, RequestDescriptor, CONTEXT, DOMAIN, GEO_LOCATION, PAGES,
    PARSE, QUERY, SOURCE, URL,
};
pub use source::Source;
