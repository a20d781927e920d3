// web_app/api/search.rs - Search orchestration behind the server functions
//
// `search` picks the TMDB listing for a term, returns its movies, and
// reports successful non-empty searches to the search count store in a
// detached task. `trending` reads the store and never fails.

use std::sync::{Arc, Mutex, OnceLock};

use tokio::task::JoinHandle;

use crate::web_app::api::search_counts::SearchCountStore;
use crate::web_app::api::tmdb::{CatalogError, MovieCatalog};
use crate::web_app::model::{Movie, MovieQuery, TrendingMovie};

static SERVICE: OnceLock<Arc<MovieSearchService>> = OnceLock::new();
static TEST_SERVICE_OVERRIDE: Mutex<Option<Arc<MovieSearchService>>> = Mutex::new(None);

/// Register the service used by the server functions
pub fn init_service(service: Arc<MovieSearchService>) {
    if SERVICE.set(service).is_err() {
        tracing::warn!("Search service already initialized");
    }
}

/// Set a service override for testing
pub fn set_test_service(service: Arc<MovieSearchService>) {
    let mut guard = TEST_SERVICE_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(service);
}

/// Get the registered service
pub fn get_service() -> Option<Arc<MovieSearchService>> {
    {
        let guard = TEST_SERVICE_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref service) = *guard {
            return Some(service.clone());
        }
    }

    SERVICE.get().cloned()
}

pub struct MovieSearchService {
    catalog: Arc<dyn MovieCatalog>,
    store: Arc<dyn SearchCountStore>,
    trending_limit: i64,
}

impl MovieSearchService {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        store: Arc<dyn SearchCountStore>,
        trending_limit: i64,
    ) -> Self {
        Self {
            catalog,
            store,
            trending_limit,
        }
    }

    /// Fetch the listing for `term`: popular movies when empty, title
    /// search otherwise.
    pub async fn search(&self, term: &str) -> Result<Vec<Movie>, CatalogError> {
        let query = MovieQuery::from_term(term);
        let movies = self.catalog.fetch_movies(&query).await?;

        if let (Some(search_term), Some(top)) = (query.search_term(), movies.first()) {
            self.spawn_report(search_term.to_string(), top.clone());
        }

        Ok(movies)
    }

    /// Record `(search_term, movie)` without waiting for the store
    pub fn spawn_report(&self, search_term: String, movie: Movie) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            match store.update_search_count(&search_term, &movie).await {
                Ok(()) => tracing::debug!("Recorded search '{}' -> movie {}", search_term, movie.id),
                Err(e) => tracing::warn!("Failed to record search '{}': {}", search_term, e),
            }
        })
    }

    /// Most searched terms; an empty list when the store fails
    pub async fn trending(&self) -> Vec<TrendingMovie> {
        match self.store.get_trending_movies(self.trending_limit).await {
            Ok(movies) => movies,
            Err(e) => {
                tracing::error!("Error fetching trending movies: {}", e);
                Vec::new()
            }
        }
    }
}
