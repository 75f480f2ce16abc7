use serde_json::{Map, Value};

/// Top-level reply of the NewsAPI `top-headlines` endpoint.
///
/// Only `status` decides anything. The other fields are kept as raw values
/// so an unexpected type in `code`, `message` or `totalResults` never turns
/// an `"ok"` reply into a decode failure. `articles` keeps an explicit
/// `null` apart from a missing key.
#[derive(Debug)]
pub(crate) struct TopHeadlinesEnvelope {
    pub(crate) status: Option<Value>,
    pub(crate) code: Option<Value>,
    pub(crate) message: Option<Value>,
    pub(crate) total_results: Option<Value>,
    pub(crate) articles: Option<Value>,
}

impl TopHeadlinesEnvelope {
    /// Decode a reply body. Fails unless the body is a JSON object.
    pub(crate) fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let mut fields: Map<String, Value> = serde_json::from_str(body)?;
        Ok(Self {
            status: fields.remove("status"),
            code: fields.remove("code"),
            message: fields.remove("message"),
            total_results: fields.remove("totalResults"),
            articles: fields.remove("articles"),
        })
    }

    pub(crate) fn is_ok(&self) -> bool {
        matches!(&self.status, Some(Value::String(s)) if s == "ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_null_articles_apart_from_missing() {
        let null = TopHeadlinesEnvelope::parse(r#"{"status":"ok","articles":null}"#).unwrap();
        assert_eq!(null.articles, Some(Value::Null));

        let missing = TopHeadlinesEnvelope::parse(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(missing.articles, None);
    }

    #[test]
    fn test_parse_accepts_odd_side_fields() {
        let env = TopHeadlinesEnvelope::parse(
            r#"{"status":"ok","totalResults":"12","code":7,"message":["x"],"articles":[]}"#,
        )
        .unwrap();
        assert!(env.is_ok());
        assert_eq!(env.total_results, Some(Value::from("12")));
    }

    #[test]
    fn test_is_ok_requires_the_literal_string() {
        for body in [r#"{"status":"OK"}"#, r#"{"status":true}"#, r#"{}"#] {
            assert!(!TopHeadlinesEnvelope::parse(body).unwrap().is_ok());
        }
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        for body in ["[1, 2, 3, 4, 5]", "\"ok\"", "", "<html></html>"] {
            assert!(TopHeadlinesEnvelope::parse(body).is_err(), "{body:?}");
        }
    }
}
