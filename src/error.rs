use std::io;
use std::path::PathBuf;

/// Failure while talking to the headlines endpoint or decoding its reply.
///
/// Every variant is recoverable: the fetcher turns it into fallback content.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

/// Failure while persisting the bundle. Not recoverable.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
