// web_app/api/search_counts.rs - Search popularity store
//
// Every successful non-empty search bumps a counter keyed by the search
// term; the first movie of the first search for a term becomes its
// representative. The trending strip shows the terms with the highest
// counts.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::web_app::model::{Movie, TrendingMovie};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("search count store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait SearchCountStore: Send + Sync {
    /// Top `limit` records ordered by search count, most searched first
    async fn get_trending_movies(&self, limit: i64) -> Result<Vec<TrendingMovie>, StoreError>;

    /// Increment the count for `search_term`, creating it with `movie` if new
    async fn update_search_count(&self, search_term: &str, movie: &Movie) -> Result<(), StoreError>;
}

/// PostgreSQL-backed store (`trending.search_counts`)
#[derive(Clone)]
pub struct PgSearchCountStore {
    pool: PgPool,
}

impl PgSearchCountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SearchCountStore for PgSearchCountStore {
    async fn get_trending_movies(&self, limit: i64) -> Result<Vec<TrendingMovie>, StoreError> {
        let rows = sqlx::query_as::<_, TrendingMovie>(
            r#"
            SELECT id, search_term, search_count, movie_id, title, poster_url
            FROM trending.search_counts
            ORDER BY search_count DESC, updated_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn update_search_count(&self, search_term: &str, movie: &Movie) -> Result<(), StoreError> {
        let record = TrendingMovie::first_search(search_term, movie);

        sqlx::query(
            r#"
            INSERT INTO trending.search_counts (id, search_term, search_count, movie_id, title, poster_url)
            VALUES ($1, $2, 1, $3, $4, $5)
            ON CONFLICT (search_term) DO UPDATE SET
                search_count = trending.search_counts.search_count + 1,
                updated_at = NOW()
            "#,
        )
        .bind(&record.id)
        .bind(&record.search_term)
        .bind(record.movie_id)
        .bind(&record.title)
        .bind(&record.poster_url)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Process-local store, used in tests and when the database is unreachable
#[derive(Default)]
pub struct InMemorySearchCountStore {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    // search term -> (record, sequence of its last update)
    records: HashMap<String, (TrendingMovie, u64)>,
    sequence: u64,
}

impl InMemorySearchCountStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Unavailable("search count lock poisoned".to_string()))
    }
}

#[async_trait]
impl SearchCountStore for InMemorySearchCountStore {
    async fn get_trending_movies(&self, limit: i64) -> Result<Vec<TrendingMovie>, StoreError> {
        let state = self.lock()?;

        let mut ranked: Vec<&(TrendingMovie, u64)> = state.records.values().collect();
        ranked.sort_by(|(a, a_seq), (b, b_seq)| {
            b.search_count
                .cmp(&a.search_count)
                .then_with(|| b_seq.cmp(a_seq))
        });

        Ok(ranked
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|(record, _)| record.clone())
            .collect())
    }

    async fn update_search_count(&self, search_term: &str, movie: &Movie) -> Result<(), StoreError> {
        // Sequence and record change under one lock, so update order and
        // recency order agree
        let mut state = self.lock()?;
        state.sequence += 1;
        let sequence = state.sequence;

        state
            .records
            .entry(search_term.to_string())
            .and_modify(|(record, seq)| {
                record.search_count += 1;
                *seq = sequence;
            })
            .or_insert_with(|| (TrendingMovie::first_search(search_term, movie), sequence));

        Ok(())
    }
}
