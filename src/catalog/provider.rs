//! Catalog provider abstraction and the default TMDb implementation.
//!
//! A provider knows what the "list popular items" request looks like and how
//! to read its response. It never performs I/O itself: the plugin host sends
//! the [`HttpRequest`] through Zellij's web request API, and the background
//! worker hands the raw response back to [`CatalogProvider::decode_list_response`].

use crate::domain::{CatalogItem, MarqueeError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Default TMDb API root.
pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";

/// Default language sent with catalog requests.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// A GET request described independently of any HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
}

/// The remote capability that lists popular catalog items.
///
/// Split into request construction and response decoding so the host can own
/// transport. Implementations must be `Send` because the decoder runs on the
/// worker thread.
pub trait CatalogProvider: Send {
    /// Describes the request for one page of popular items.
    fn list_popular_request(&self, page: u32) -> HttpRequest;

    /// Turns a raw response into items.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Fetch`] for non-2xx statuses and
    /// [`MarqueeError::Decode`] for payloads that are not a valid list.
    fn decode_list_response(&self, status: u16, body: &[u8]) -> Result<Vec<CatalogItem>>;
}

/// TMDb v3 provider for `/movie/popular`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmdbProvider {
    api_key: String,
    api_base: String,
    language: String,
}

#[derive(Deserialize)]
struct PopularPage {
    results: Vec<CatalogItem>,
}

#[derive(Deserialize)]
struct ErrorBody {
    status_message: Option<String>,
}

impl TmdbProvider {
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: api_base.into(),
            language: language.into(),
        }
    }

    /// Builds a provider from plugin configuration.
    #[must_use]
    pub fn from_config(config: &crate::Config) -> Self {
        Self::new(
            config.api_key.clone().unwrap_or_default(),
            config.api_base.clone(),
            config.language.clone(),
        )
    }
}

impl Default for TmdbProvider {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_API_BASE, DEFAULT_LANGUAGE)
    }
}

impl CatalogProvider for TmdbProvider {
    fn list_popular_request(&self, page: u32) -> HttpRequest {
        let base = self.api_base.trim_end_matches('/');
        let url = format!(
            "{base}/movie/popular?api_key={}&language={}&page={}",
            self.api_key,
            self.language,
            page.max(1)
        );

        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        HttpRequest { url, headers }
    }

    fn decode_list_response(&self, status: u16, body: &[u8]) -> Result<Vec<CatalogItem>> {
        if !(200..300).contains(&status) {
            let detail = serde_json::from_slice::<ErrorBody>(body)
                .ok()
                .and_then(|e| e.status_message);

            return Err(MarqueeError::Fetch(match detail {
                Some(message) => format!("catalog service responded with HTTP {status}: {message}"),
                None => format!("catalog service responded with HTTP {status}"),
            }));
        }

        let page: PopularPage = serde_json::from_slice(body)?;
        Ok(page.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> TmdbProvider {
        TmdbProvider::new("k3y", "https://api.example.test/3/", "de-DE")
    }

    #[test]
    fn request_targets_popular_page() {
        let request = provider().list_popular_request(2);
        assert_eq!(
            request.url,
            "https://api.example.test/3/movie/popular?api_key=k3y&language=de-DE&page=2"
        );
        assert_eq!(request.headers.get("Accept").map(String::as_str), Some("application/json"));
    }

    #[test]
    fn decodes_results_array() {
        let body = br#"{"page":1,"results":[
            {"id":1,"title":"A","poster_path":"/a.jpg","overview":"o","vote_average":7.1,"release_date":"2020-01-02"},
            {"id":2,"title":"B","vote_average":5}
        ],"total_pages":10}"#;

        let items = provider().decode_list_response(200, body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].poster_path.as_deref(), Some("/a.jpg"));
        assert_eq!(items[1].title, "B");
    }

    #[test]
    fn non_success_status_carries_service_message() {
        let body = br#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key."}"#;
        let err = provider().decode_list_response(401, body).unwrap_err();

        assert!(matches!(err, MarqueeError::Fetch(_)));
        assert!(err.to_string().contains("HTTP 401: Invalid API key"));
    }

    #[test]
    fn non_success_status_without_json_body() {
        let err = provider().decode_list_response(503, b"<html>down</html>").unwrap_err();
        assert_eq!(err.to_string(), "catalog service responded with HTTP 503");
    }

    #[test]
    fn malformed_payload_is_decode_error() {
        let err = provider().decode_list_response(200, br#"{"results": "nope"}"#).unwrap_err();
        assert!(matches!(err, MarqueeError::Decode(_)));
    }
}
