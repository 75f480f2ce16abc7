//! The fetch half of a run: decide between live headlines and fallback
//! content.
//!
//! [`NewsFetcher::fetch_outcome`] reports which path was taken;
//! [`NewsFetcher::fetch_health_news`] collapses that into the bundle to write.
//! Every outcome other than [`FetchOutcome::Live`] yields the same fallback
//! bundle.

use serde_json::Value;
use tracing::{error, info, instrument, warn};
use url::Url;

use crate::api::{HeadlinesApi, HeadlinesQuery, NewsApiClient};
use crate::cli::Cli;
use crate::clock::Clock;
use crate::error::FetchError;
use crate::fallback::{LIVE_TIP, generate_fallback_data};
use crate::models::{Article, MAX_ARTICLES, NewsBundle};
use crate::utils::truncate_for_log;
use crate::wire::TopHeadlinesEnvelope;

/// Bytes of a rejected upstream reply kept in logs.
const RAW_LOG_LIMIT: usize = 2000;

/// Everything the fetcher needs, resolved up front.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// `NEWS_API_KEY`. `None` means fallback without touching the network.
    pub api_key: Option<String>,
    pub endpoint: Url,
    pub category: String,
    pub language: String,
    pub max_articles: usize,
}

impl FetcherConfig {
    /// Resolve configuration from parsed arguments.
    ///
    /// An empty key counts as absent, and `max_articles` is clamped to
    /// [`MAX_ARTICLES`].
    pub fn from_cli(cli: &Cli) -> Result<Self, FetchError> {
        Ok(Self {
            api_key: cli.api_key.clone().filter(|k| !k.trim().is_empty()),
            endpoint: Url::parse(&cli.endpoint)?,
            category: cli.category.clone(),
            language: cli.language.clone(),
            max_articles: cli.max_articles.min(MAX_ARTICLES),
        })
    }

    /// The parts of the configuration the HTTP client needs.
    ///
    /// # Returns
    ///
    /// A [`HeadlinesQuery`] with the endpoint and both filters; the key is
    /// left out and supplied per request.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let client = NewsApiClient::new(config.query());
    /// ```
    pub fn query(&self) -> HeadlinesQuery {
        HeadlinesQuery {
            endpoint: self.endpoint.clone(),
            category: self.category.clone(),
            language: self.language.clone(),
        }
    }
}

/// How a fetch attempt ended.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Upstream answered `"ok"`.
    Live(NewsBundle),
    /// No key configured.
    MissingKey,
    /// Upstream answered with a status other than `"ok"`.
    UpstreamError {
        status: Option<Value>,
        code: Option<Value>,
        message: Option<Value>,
        raw: String,
    },
    /// The request failed or the reply could not be decoded.
    TransportError(FetchError),
}

impl FetchOutcome {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchOutcome::Live(_) => "live",
            FetchOutcome::MissingKey => "missing_key",
            FetchOutcome::UpstreamError { .. } => "upstream_error",
            FetchOutcome::TransportError(_) => "transport_error",
        }
    }

    /// The bundle to persist: the live one, or fallback for anything else.
    pub fn into_bundle(self, clock: &impl Clock) -> NewsBundle {
        match self {
            FetchOutcome::Live(bundle) => bundle,
            _ => generate_fallback_data(clock),
        }
    }
}

/// Fetches the daily health headlines.
#[derive(Debug)]
pub struct NewsFetcher<A, C> {
    api: A,
    clock: C,
    config: FetcherConfig,
}

impl<C: Clock> NewsFetcher<NewsApiClient, C> {
    /// Fetcher backed by the real HTTP client.
    pub fn with_http(config: FetcherConfig, clock: C) -> Self {
        let api = NewsApiClient::new(config.query());
        Self::new(api, clock, config)
    }
}

impl<A: HeadlinesApi, C: Clock> NewsFetcher<A, C> {
    /// Create a fetcher over any [`HeadlinesApi`].
    ///
    /// # Arguments
    ///
    /// * `api` - Source of the raw top-headlines body
    /// * `clock` - Supplies `updated_at` for live and fallback bundles
    /// * `config` - Key and filters; a `None` key means no request is made
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let api = NewsApiClient::new(config.query());
    /// let fetcher = NewsFetcher::new(api, SystemClock, config);
    /// let bundle = fetcher.fetch_health_news().await;
    /// ```
    pub fn new(api: A, clock: C, config: FetcherConfig) -> Self {
        Self { api, clock, config }
    }

    /// Fetch and return the bundle to write. Never fails.
    pub async fn fetch_health_news(&self) -> NewsBundle {
        let outcome = self.fetch_outcome().await;
        info!(outcome = outcome.kind(), "Fetch finished");
        outcome.into_bundle(&self.clock)
    }

    /// Fetch and report which path was taken, logging each non-live case.
    #[instrument(level = "info", skip_all)]
    pub async fn fetch_outcome(&self) -> FetchOutcome {
        let Some(api_key) = self.config.api_key.as_deref() else {
            info!("No API key found; generating static fallback data");
            return FetchOutcome::MissingKey;
        };

        let body = match self.api.top_headlines(api_key).await {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "Error fetching news; using fallback data");
                return FetchOutcome::TransportError(e);
            }
        };

        match self.interpret(&body) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    error = %e,
                    response_preview = %truncate_for_log(&body, RAW_LOG_LIMIT),
                    "Error decoding news response; using fallback data"
                );
                FetchOutcome::TransportError(e)
            }
        }
    }

    fn interpret(&self, body: &str) -> Result<FetchOutcome, FetchError> {
        let envelope = TopHeadlinesEnvelope::parse(body)?;

        if !envelope.is_ok() {
            warn!(
                status = ?envelope.status,
                code = ?envelope.code,
                message = ?envelope.message,
                raw = %truncate_for_log(body, RAW_LOG_LIMIT),
                "API error; using fallback data"
            );
            return Ok(FetchOutcome::UpstreamError {
                status: envelope.status,
                code: envelope.code,
                message: envelope.message,
                raw: body.to_string(),
            });
        }

        let upstream_count = match &envelope.articles {
            Some(Value::Array(items)) => items.len(),
            _ => 0,
        };
        let articles = self.take_articles(envelope.articles)?;
        info!(
            upstream = upstream_count,
            total_results = ?envelope.total_results,
            kept = articles.len(),
            "Using live headlines"
        );

        Ok(FetchOutcome::Live(NewsBundle::new(
            self.clock.timestamp(),
            LIVE_TIP,
            articles,
        )))
    }

    /// Keep the first `max_articles` entries as sent.
    ///
    /// A missing key means no articles. Anything other than an array,
    /// `null` included, is malformed.
    fn take_articles(&self, articles: Option<Value>) -> Result<Vec<Article>, FetchError> {
        let items = match articles {
            None => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(other) => serde_json::from_value::<Vec<Value>>(other)?,
        };
        items
            .into_iter()
            .take(self.config.max_articles)
            .map(|item| serde_json::from_value(item).map_err(FetchError::from))
            .collect()
    }
}
