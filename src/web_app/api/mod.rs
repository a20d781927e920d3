// web_app/api/mod.rs - Server-side logic
//
// - config: environment configuration
// - db: PostgreSQL pool setup and schema
// - tmdb: movie-metadata API client
// - search_counts: search popularity store (PostgreSQL and in-memory)
// - search: orchestration used by the server functions

pub mod config;
pub mod db;
pub mod search;
pub mod search_counts;
pub mod tmdb;
