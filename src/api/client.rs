use super::endpoint::Endpoint;
use crate::error::{Result, ScraperError};
use crate::models::{Credentials, RequestDescriptor};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

/// Status and body of a completed HTTP exchange. The body bytes are kept
/// exactly as received and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as UTF-8; invalid sequences become U+FFFD. The response charset
    /// header is ignored.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends request descriptors to the queries resource of one endpoint.
///
/// Stateless apart from the pooled `reqwest::Client`; credentials are passed
/// per call and never stored.
pub struct Dispatcher {
    client: reqwest::Client,
    queries_url: String,
}

impl Dispatcher {
    pub fn new(endpoint: &Endpoint) -> Result<Self> {
        Self::with_timeout(endpoint, None)
    }

    pub fn with_timeout(endpoint: &Endpoint, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            queries_url: endpoint.queries_url(),
        })
    }

    pub fn queries_url(&self) -> &str {
        &self.queries_url
    }

    /// POST `descriptor` and return the response body as text.
    ///
    /// Non-2xx statuses are not errors; the body is returned as received,
    /// decoded as UTF-8 (see [`RawResponse::text`]). Use
    /// [`Dispatcher::dispatch_raw`] for the exact bytes.
    pub async fn dispatch(
        &self,
        descriptor: &RequestDescriptor,
        credentials: &Credentials,
    ) -> Result<String> {
        Ok(self.dispatch_raw(descriptor, credentials).await?.text())
    }

    /// Like [`Dispatcher::dispatch`], keeping the HTTP status alongside the body.
    pub async fn dispatch_raw(
        &self,
        descriptor: &RequestDescriptor,
        credentials: &Credentials,
    ) -> Result<RawResponse> {
        let payload = descriptor.to_json()?;
        let authorization = HeaderValue::from_str(&credentials.authorization_header())
            .map_err(|e| ScraperError::Config(format!("Invalid authorization header: {}", e)))?;

        let response = self
            .client
            .post(&self.queries_url)
            .header(AUTHORIZATION, authorization)
            .body(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}

/// Single-shot helper: build a client for `endpoint`, send once, return the body.
pub async fn dispatch(
    endpoint: &Endpoint,
    descriptor: &RequestDescriptor,
    credentials: &Credentials,
) -> Result<String> {
    Dispatcher::new(endpoint)?
        .dispatch(descriptor, credentials)
        .await
}
