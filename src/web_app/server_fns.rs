// web_app/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates the real body on the server and an HTTP
// stub on the client, so this file is compiled for both ssr and hydrate.

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn service() -> Result<std::sync::Arc<crate::web_app::api::search::MovieSearchService>, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use std::sync::Arc;
    use crate::web_app::api::search::{self, MovieSearchService};

    if let Some(service) = use_context::<Arc<MovieSearchService>>() {
        return Ok(service);
    }

    if let Some(service) = search::get_service() {
        return Ok(service);
    }

    match extract().await {
        Ok(req) => {
            let req: HttpRequest = req;
            if let Some(service) = req.app_data::<Data<MovieSearchService>>() {
                return Ok(service.clone().into_inner());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Search service not available"))
}

/// Movies for a search term; popular movies for an empty term
#[server(FetchMovies, "/api")]
pub async fn fetch_movies(query: String) -> Result<Vec<Movie>, ServerFnError> {
    tracing::info!("Movie request: query='{}'", query);

    let service = service().await?;
    let results = service.search(&query).await;

    match &results {
        Ok(movies) => tracing::info!("Fetched {} movies", movies.len()),
        Err(e) => tracing::error!("Movie fetch failed: {}", e),
    }

    results.map_err(|e| ServerFnError::new(format!("Failed to fetch movies: {}", e)))
}

/// Most searched movies, loaded once when the page mounts
#[server(GetTrendingMovies, "/api")]
pub async fn get_trending_movies() -> Result<Vec<TrendingMovie>, ServerFnError> {
    let service = service().await?;
    Ok(service.trending().await)
}
