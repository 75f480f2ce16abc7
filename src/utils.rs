//! Small helpers for logging and the filesystem.

use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};
use url::Url;

use crate::error::OutputError;

/// Query parameter NewsAPI reads the key from.
pub const API_KEY_PARAM: &str = "apiKey";

/// Truncate a string for logging purposes.
///
/// Cuts on a char boundary at or below `max` bytes and appends
/// `"…(+N bytes)"`. Upstream payloads are mostly Arabic, so a plain byte
/// slice would split multi-byte characters.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Render a request URL with the API key masked.
///
/// # Arguments
///
/// * `url` - A request URL, possibly carrying an `apiKey` query parameter
///
/// # Returns
///
/// The URL as a string with the `apiKey` value replaced by `***`; other
/// parameters are kept in order.
pub fn redact_api_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Create the parent directory of `path` if it has one.
///
/// A bare file name (no directory component) needs nothing created.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    fs::create_dir_all(parent)
        .await
        .map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    debug!(dir = %parent.display(), "Output directory ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        // Each Arabic letter is two bytes in UTF-8.
        let s = "صحة".repeat(10);
        let result = truncate_for_log(&s, 5);
        assert!(result.starts_with("صح"));
        assert!(result.ends_with("…(+56 bytes)"));
    }

    #[test]
    fn test_redact_api_key() {
        let url = Url::parse(
            "https://newsapi.org/v2/top-headlines?category=health&language=ar&apiKey=secret",
        )
        .unwrap();
        let shown = redact_api_key(&url);
        assert!(!shown.contains("secret"));
        assert!(shown.contains("apiKey=***") || shown.contains("apiKey=%2A%2A%2A"));
        assert!(shown.contains("category=health"));
    }

    #[tokio::test]
    async fn test_ensure_parent_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("data/nested/daily_news.json");
        ensure_parent_dir(&target).await.unwrap();
        assert!(tmp.path().join("data/nested").is_dir());
        // Idempotent.
        ensure_parent_dir(&target).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_parent_dir_bare_file_name() {
        ensure_parent_dir(Path::new("daily_news.json")).await.unwrap();
    }
}
