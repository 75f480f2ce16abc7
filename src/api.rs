//! HTTP access to the NewsAPI `top-headlines` endpoint.
//!
//! # Architecture
//!
//! - [`HeadlinesApi`]: the seam the fetcher talks through
//! - [`NewsApiClient`]: the reqwest-backed implementation
//!
//! The client issues exactly one GET per call. There is no retry, no backoff
//! and no request timeout: a hung upstream blocks the run until the
//! connection itself gives up.

use reqwest::Client;
use std::time::Instant;
use tracing::{info, instrument, warn};
use url::Url;

use crate::error::FetchError;
use crate::utils::{API_KEY_PARAM, redact_api_key};

/// Default NewsAPI endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/top-headlines";

/// Something that can return the raw body of a top-headlines query.
///
/// Status codes are not interpreted here; NewsAPI reports failures inside
/// the JSON body and the fetcher decides what to do with it.
pub trait HeadlinesApi {
    /// Run one top-headlines query.
    ///
    /// # Arguments
    ///
    /// * `api_key` - NewsAPI key, sent as the `apiKey` query parameter
    ///
    /// # Returns
    ///
    /// The response body as text, whatever the HTTP status, or a
    /// [`FetchError`] if no body could be read.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let body = client.top_headlines("YOUR_KEY").await?;
    /// let envelope = TopHeadlinesEnvelope::parse(&body)?;
    /// ```
    async fn top_headlines(&self, api_key: &str) -> Result<String, FetchError>;
}

/// Query parameters fixed for the lifetime of a client.
#[derive(Debug, Clone)]
pub struct HeadlinesQuery {
    pub endpoint: Url,
    pub category: String,
    pub language: String,
}

/// [`HeadlinesApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    http: Client,
    query: HeadlinesQuery,
}

impl NewsApiClient {
    pub fn new(query: HeadlinesQuery) -> Self {
        Self {
            http: Client::new(),
            query,
        }
    }

    /// Full request URL with category, language and key appended.
    pub fn request_url(&self, api_key: &str) -> Url {
        let mut url = self.query.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("category", &self.query.category)
            .append_pair("language", &self.query.language)
            .append_pair(API_KEY_PARAM, api_key);
        url
    }
}

impl HeadlinesApi for NewsApiClient {
    #[instrument(level = "info", skip_all)]
    async fn top_headlines(&self, api_key: &str) -> Result<String, FetchError> {
        let url = self.request_url(api_key);
        let shown = redact_api_key(&url);
        let t0 = Instant::now();

        info!(url = %shown, "Requesting top headlines");
        let res = self.http.get(url).send().await;
        let resp = match res {
            Ok(resp) => resp,
            Err(e) => {
                warn!(url = %shown, error = %e, "Request failed");
                return Err(e.into());
            }
        };

        let status = resp.status();
        let body = resp.text().await?;
        info!(
            http_status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Received top headlines response"
        );
        Ok(body)
    }
}
