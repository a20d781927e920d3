// web_app/api/tmdb.rs - TMDB movie-metadata client
//
// Two listings are used: `/discover/movie` sorted by popularity for the
// empty search box, and `/search/movie` for a typed term. Requests carry
// the API read token as a bearer header.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use thiserror::Error;
use tracing::debug;

use crate::web_app::api::config::AppConfig;
use crate::web_app::model::{Movie, MovieListing, MovieQuery};

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("TMDB is not configured: {0}")]
    NotConfigured(String),
    #[error("request to {path} failed: {source}")]
    Request {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{path} returned HTTP {status}")]
    Status {
        path: &'static str,
        status: u16,
        body: String,
    },
    #[error("failed to decode {path} response: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Source of movie listings
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn fetch_movies(&self, query: &MovieQuery) -> Result<Vec<Movie>, CatalogError>;
}

/// TMDB API client
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CatalogError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CatalogError::NotConfigured(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::new(config.tmdb_api_key.clone(), config.tmdb_base_url.clone())
    }

    /// Build the GET request for `query` without sending it
    pub fn request(&self, query: &MovieQuery) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, query.path());

        self.client
            .get(url)
            .query(&query.params())
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn fetch_movies(&self, query: &MovieQuery) -> Result<Vec<Movie>, CatalogError> {
        let path = query.path();
        debug!("TMDB {}", query);

        let response = self
            .request(query)
            .send()
            .await
            .map_err(|source| CatalogError::Request { path, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                path,
                status: status.as_u16(),
                body,
            });
        }

        let listing: MovieListing = response
            .json()
            .await
            .map_err(|source| CatalogError::Decode { path, source })?;

        debug!("TMDB {} returned {} movies", query, listing.results.len());
        Ok(listing.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TmdbClient {
        TmdbClient::new("secret-token", "https://api.themoviedb.org/3/").unwrap()
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = TmdbClient::new("", "https://api.themoviedb.org/3");
        assert!(matches!(result, Err(CatalogError::NotConfigured(_))));
    }

    #[test]
    fn test_discover_request() {
        let request = client().request(&MovieQuery::Discover).build().unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.themoviedb.org/3/discover/movie?sort_by=popularity.desc"
        );
    }

    #[test]
    fn test_search_request_encodes_query() {
        let query = MovieQuery::Search("fast & furious".to_string());
        let request = client().request(&query).build().unwrap();
        assert_eq!(request.url().path(), "/3/search/movie");
        assert_eq!(request.url().query(), Some("query=fast+%26+furious"));

        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, vec![("query".to_string(), "fast & furious".to_string())]);
    }

    #[test]
    fn test_request_headers() {
        let request = client().request(&MovieQuery::Discover).build().unwrap();
        let headers = request.headers();
        assert_eq!(headers[AUTHORIZATION], "Bearer secret-token");
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn test_status_error_message() {
        let err = CatalogError::Status {
            path: "/search/movie",
            status: 401,
            body: "{}".to_string(),
        };
        assert_eq!(err.to_string(), "/search/movie returned HTTP 401");
    }
}
