//! Command-line interface definitions.
//!
//! Every option has a default, so running the binary with no arguments does
//! one fetch-write cycle against NewsAPI. Options can also come from the
//! environment (or a `.env` file).

use clap::Parser;

use crate::api::DEFAULT_ENDPOINT;
use crate::models::MAX_ARTICLES;

/// Default location of the digest, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "data/daily_news.json";

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Fallback content only
/// health_news_digest
///
/// # Live headlines
/// NEWS_API_KEY=YOUR_KEY health_news_digest
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// NewsAPI key; without one the static fallback digest is written
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Where to write the JSON digest
    #[arg(short, long, env = "NEWS_OUTPUT_FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Top-headlines endpoint
    #[arg(long, env = "NEWS_API_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// NewsAPI category filter
    #[arg(long, default_value = "health")]
    pub category: String,

    /// NewsAPI language filter
    #[arg(long, default_value = "ar")]
    pub language: String,

    /// Number of headlines to keep (at most 5)
    #[arg(long, default_value_t = MAX_ARTICLES)]
    pub max_articles: usize,
}

/// Environment variables [`Cli`] reads.
#[cfg(test)]
pub(crate) const CLI_ENV_VARS: [&str; 3] = ["NEWS_API_KEY", "NEWS_OUTPUT_FILE", "NEWS_API_ENDPOINT"];

/// Parse `args` with exactly the `env` pairs set among [`CLI_ENV_VARS`].
///
/// The process environment is shared between test threads, so access is
/// serialized and the previous values are restored before returning.
#[cfg(test)]
pub(crate) fn parse_with_env(args: &[&str], env: &[(&str, &str)]) -> Result<Cli, clap::Error> {
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let saved: Vec<_> = CLI_ENV_VARS
        .iter()
        .map(|k| (*k, std::env::var_os(k)))
        .collect();
    // SAFETY: every test that touches these variables holds ENV_LOCK.
    unsafe {
        for key in CLI_ENV_VARS {
            std::env::remove_var(key);
        }
        for (key, value) in env {
            std::env::set_var(key, value);
        }
    }

    let mut argv = vec!["health_news_digest"];
    argv.extend_from_slice(args);
    let parsed = Cli::try_parse_from(argv);

    unsafe {
        for (key, value) in saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::FetcherConfig;

    #[test]
    fn test_cli_defaults() {
        let cli = parse_with_env(&[], &[]).unwrap();

        assert_eq!(cli.api_key, None);
        assert_eq!(cli.output, "data/daily_news.json");
        assert_eq!(cli.endpoint, "https://newsapi.org/v2/top-headlines");
        assert_eq!(cli.category, "health");
        assert_eq!(cli.language, "ar");
        assert_eq!(cli.max_articles, 5);
    }

    #[test]
    fn test_cli_flags() {
        let cli = parse_with_env(
            &["--api-key", "k", "-o", "/tmp/out.json", "--max-articles", "3"],
            &[],
        )
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert_eq!(cli.output, "/tmp/out.json");
        assert_eq!(cli.max_articles, 3);
    }

    #[test]
    fn test_cli_reads_environment() {
        let cli = parse_with_env(
            &[],
            &[
                ("NEWS_API_KEY", "from-env"),
                ("NEWS_OUTPUT_FILE", "/srv/site/news.json"),
                ("NEWS_API_ENDPOINT", "http://localhost:8080/v2/top-headlines"),
            ],
        )
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("from-env"));
        assert_eq!(cli.output, "/srv/site/news.json");
        assert_eq!(cli.endpoint, "http://localhost:8080/v2/top-headlines");
        assert_eq!(
            FetcherConfig::from_cli(&cli).unwrap().api_key.as_deref(),
            Some("from-env")
        );
    }

    #[test]
    fn test_cli_flags_override_environment() {
        let cli = parse_with_env(&["--api-key", "flag"], &[("NEWS_API_KEY", "env")]).unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("flag"));
    }

    #[test]
    fn test_config_from_cli() {
        let cli = parse_with_env(&["--api-key", "  ", "--max-articles", "50"], &[]).unwrap();
        let config = FetcherConfig::from_cli(&cli).unwrap();

        assert_eq!(config.api_key, None);
        assert_eq!(config.max_articles, MAX_ARTICLES);
        assert_eq!(config.endpoint.host_str(), Some("newsapi.org"));
    }

    #[test]
    fn test_config_rejects_bad_endpoint() {
        let cli = parse_with_env(&["--endpoint", "not a url"], &[]).unwrap();
        assert!(FetcherConfig::from_cli(&cli).is_err());
    }
}
