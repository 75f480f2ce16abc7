//! Data models for the daily health digest.
//!
//! - [`Article`]: a headline as returned by NewsAPI (or a fallback literal)
//! - [`NewsBundle`]: the document written to disk on every run
//!
//! Articles are kept as the JSON object upstream sent, so whatever NewsAPI
//! returns is written back out key for key.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Upper bound on the number of articles kept in a bundle.
pub const MAX_ARTICLES: usize = 5;

/// A single headline.
///
/// The object is stored untouched: no field is required, typed or added.
/// The accessors only read the common NewsAPI fields when they are strings.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Article(pub Map<String, Value>);

impl Article {
    /// Build an article with the four fields the digest shows.
    ///
    /// # Arguments
    ///
    /// * `title` - Headline text
    /// * `description` - One-line summary
    /// * `url` - Link to the full story (`"#"` for static content)
    /// * `url_to_image` - Thumbnail URL, written as `urlToImage`
    pub fn new(title: &str, description: &str, url: &str, url_to_image: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("title".into(), title.into());
        fields.insert("description".into(), description.into());
        fields.insert("url".into(), url.into());
        fields.insert("urlToImage".into(), url_to_image.into());
        Self(fields)
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    pub fn url(&self) -> Option<&str> {
        self.str_field("url")
    }

    pub fn url_to_image(&self) -> Option<&str> {
        self.str_field("urlToImage")
    }

    /// Raw access to any upstream field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// The digest produced by one run.
///
/// `updated_at` is the local wall-clock time of generation in ISO-8601
/// without an offset, e.g. `2025-05-06T08:00:00.000000`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewsBundle {
    pub updated_at: String,
    pub tip: String,
    pub articles: Vec<Article>,
}

impl NewsBundle {
    /// Assemble a bundle, keeping at most [`MAX_ARTICLES`] articles in order.
    pub fn new(updated_at: String, tip: &str, mut articles: Vec<Article>) -> Self {
        articles.truncate(MAX_ARTICLES);
        Self {
            updated_at,
            tip: tip.to_string(),
            articles,
        }
    }
}
