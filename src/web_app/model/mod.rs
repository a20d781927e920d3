// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend and backend, plus the view state
// of the movie listing.

use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "db-tools")]
use sqlx::FromRow;

/// Base URL for TMDB poster images
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Poster shown when TMDB has no artwork for a movie (served from `public/`)
pub const NO_POSTER_PATH: &str = "/no-movie.svg";

/// Message shown to the user when the movie listing cannot be fetched
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching movies. Please try again later.";

/// Movie record as returned by the TMDB discover and search endpoints
///
/// Only `id` is required; everything else defaults, whether missing or
/// `null`, so that sparse records still render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl Movie {
    /// Full poster URL, if TMDB provided a poster path
    pub fn tmdb_poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", TMDB_IMAGE_BASE, path))
    }

    /// Poster URL with the local placeholder as fallback
    pub fn poster_url(&self) -> String {
        self.tmdb_poster_url()
            .unwrap_or_else(|| NO_POSTER_PATH.to_string())
    }

    /// Year part of `release_date` ("1999-03-30" -> "1999")
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
    }

    /// Rating with one decimal, or "N/A" when TMDB has no votes
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(rating) if rating > 0.0 => format!("{:.1}", rating),
            _ => "N/A".to_string(),
        }
    }
}

/// Response envelope of the TMDB listing endpoints
///
/// A missing or `null` results array decodes to an empty list. The payload
/// is never inspected for an application-level failure flag.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MovieListing {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    null_as_default(deserializer)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Which TMDB listing a search term maps to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MovieQuery {
    /// Popular movies, used when the search box is empty
    Discover,
    /// Free-text title search
    Search(String),
}

impl MovieQuery {
    pub fn from_term(term: &str) -> Self {
        if term.is_empty() {
            MovieQuery::Discover
        } else {
            MovieQuery::Search(term.to_string())
        }
    }

    /// Endpoint path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            MovieQuery::Discover => "/discover/movie",
            MovieQuery::Search(_) => "/search/movie",
        }
    }

    /// Query-string parameters (URL-encoded by the HTTP client)
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            MovieQuery::Discover => vec![("sort_by", "popularity.desc".to_string())],
            MovieQuery::Search(term) => vec![("query", term.clone())],
        }
    }

    pub fn search_term(&self) -> Option<&str> {
        match self {
            MovieQuery::Discover => None,
            MovieQuery::Search(term) => Some(term),
        }
    }
}

impl std::fmt::Display for MovieQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieQuery::Discover => write!(f, "discover (popularity.desc)"),
            MovieQuery::Search(term) => write!(f, "search '{}'", term),
        }
    }
}

/// Aggregated search popularity for one search term
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db-tools", derive(FromRow))]
pub struct TrendingMovie {
    pub id: String,
    pub search_term: String,
    pub search_count: i64,
    pub movie_id: i64,
    pub title: String,
    pub poster_url: String,
}

impl TrendingMovie {
    /// First record for a search term, represented by `movie`
    pub fn first_search(search_term: &str, movie: &Movie) -> Self {
        TrendingMovie {
            id: uuid::Uuid::new_v4().to_string(),
            search_term: search_term.to_string(),
            search_count: 1,
            movie_id: movie.id,
            title: movie.title.clone(),
            poster_url: movie.tmdb_poster_url().unwrap_or_default(),
        }
    }

    pub fn display_poster(&self) -> &str {
        if self.poster_url.is_empty() {
            NO_POSTER_PATH
        } else {
            &self.poster_url
        }
    }
}

/// View state of the main movie listing
///
/// `begin_fetch` and `finish_fetch` bracket every fetch; `finish_fetch`
/// clears the loading flag on both the success and the failure path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovieListState {
    pub movies: Vec<Movie>,
    pub error_message: Option<String>,
    pub is_loading: bool,
}

impl MovieListState {
    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Apply the outcome of a fetch. On failure the previous movies stay.
    pub fn finish_fetch<E: std::fmt::Display>(&mut self, outcome: Result<Vec<Movie>, E>) {
        match outcome {
            Ok(movies) => self.movies = movies,
            Err(e) => {
                tracing::error!("Error fetching movies: {}", e);
                self.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        self.is_loading = false;
    }
}
