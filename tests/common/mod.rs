// common/mod.rs - Shared test utilities
//
// - movie(): compact Movie builder
// - FakeCatalog / RecordingStore: in-process collaborators for the search
//   service
// - start_mock_tmdb(): an actix-web server standing in for the TMDB API
// - create_test_pool(): PostgreSQL pool from DATABASE_URL

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use async_trait::async_trait;
use tokio::sync::mpsc;

use movie_finder::web_app::api::search_counts::{SearchCountStore, StoreError};
use movie_finder::web_app::api::tmdb::{CatalogError, MovieCatalog};
use movie_finder::web_app::model::{Movie, MovieQuery, TrendingMovie};

pub fn movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/{}.jpg", id)),
        popularity: 50.0,
        vote_average: Some(7.7),
        original_language: Some("en".to_string()),
        release_date: Some("2005-06-10".to_string()),
        overview: None,
    }
}

/// Catalog returning canned movies, or an HTTP status error
pub struct FakeCatalog {
    movies: Vec<Movie>,
    fail_status: Option<u16>,
    calls: Mutex<Vec<MovieQuery>>,
}

impl FakeCatalog {
    pub fn returning(movies: Vec<Movie>) -> Arc<Self> {
        Arc::new(Self {
            movies,
            fail_status: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            movies: Vec::new(),
            fail_status: Some(status),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<MovieQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieCatalog for FakeCatalog {
    async fn fetch_movies(&self, query: &MovieQuery) -> Result<Vec<Movie>, CatalogError> {
        self.calls.lock().unwrap().push(query.clone());
        match self.fail_status {
            Some(status) => Err(CatalogError::Status {
                path: query.path(),
                status,
                body: String::new(),
            }),
            None => Ok(self.movies.clone()),
        }
    }
}

/// Store that forwards every reported search to a channel
pub struct RecordingStore {
    reports: mpsc::UnboundedSender<(String, Movie)>,
    trending: Vec<TrendingMovie>,
    fail: bool,
}

impl RecordingStore {
    pub fn new(
        trending: Vec<TrendingMovie>,
        fail: bool,
    ) -> (Arc<Self>, mpsc::UnboundedReceiver<(String, Movie)>) {
        let (reports, rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                reports,
                trending,
                fail,
            }),
            rx,
        )
    }
}

#[async_trait]
impl SearchCountStore for RecordingStore {
    async fn get_trending_movies(&self, limit: i64) -> Result<Vec<TrendingMovie>, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("store is down".to_string()));
        }
        Ok(self
            .trending
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update_search_count(&self, search_term: &str, movie: &Movie) -> Result<(), StoreError> {
        let _ = self.reports.send((search_term.to_string(), movie.clone()));
        if self.fail {
            return Err(StoreError::Unavailable("store is down".to_string()));
        }
        Ok(())
    }
}

/// Wait for the next reported search
pub async fn next_report(
    rx: &mut mpsc::UnboundedReceiver<(String, Movie)>,
) -> Option<(String, Movie)> {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .ok()
        .flatten()
}

/// True when nothing is reported within a short grace period
pub async fn no_report(rx: &mut mpsc::UnboundedReceiver<(String, Movie)>) -> bool {
    tokio::time::timeout(Duration::from_millis(150), rx.recv())
        .await
        .is_err()
}

// ===== Mock TMDB server =====

#[derive(Clone, Debug)]
pub enum MockReply {
    Json(serde_json::Value),
    Status(u16),
    Raw(&'static str),
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
}

struct MockState {
    reply: MockReply,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockTmdb {
    pub base_url: String,
    state: web::Data<MockState>,
}

impl MockTmdb {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn mock_handler(req: HttpRequest, state: web::Data<MockState>) -> HttpResponse {
    state.requests.lock().unwrap().push(RecordedRequest {
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        authorization: req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    match &state.reply {
        MockReply::Json(body) => HttpResponse::Ok().json(body),
        MockReply::Status(code) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status)
                .content_type("application/json")
                .body(r#"{"status_code": 7, "status_message": "Invalid API key"}"#)
        }
        MockReply::Raw(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(*body),
    }
}

/// Start a mock TMDB API on an ephemeral port. Must run on the actix
/// runtime (`#[actix_web::test]`).
pub async fn start_mock_tmdb(reply: MockReply) -> std::io::Result<MockTmdb> {
    let state = web::Data::new(MockState {
        reply,
        requests: Mutex::new(Vec::new()),
    });

    let server = HttpServer::new({
        let state = state.clone();
        move || {
            App::new()
                .app_data(state.clone())
                .default_service(web::to(mock_handler))
        }
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    Ok(MockTmdb {
        base_url: format!("http://{}/3", addr),
        state,
    })
}

/// Create a database connection pool for testing
pub async fn create_test_pool() -> anyhow::Result<sqlx::PgPool> {
    dotenv::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set in environment"))?;
    let pool = movie_finder::web_app::api::db::create_pool(&database_url).await?;
    Ok(pool)
}
