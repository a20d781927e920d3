// web_app/api/db.rs - Database connection pool setup
//
// Pool creation for the search count store and the idempotent schema it
// needs. The server creates the schema on start, the fixtures before every
// database test.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Statements creating the search count table, safe to run on every start
pub const SCHEMA_SQL: &[&str] = &[
    "CREATE SCHEMA IF NOT EXISTS trending",
    r#"
    CREATE TABLE IF NOT EXISTS trending.search_counts (
        id TEXT PRIMARY KEY,
        search_term TEXT NOT NULL UNIQUE,
        search_count BIGINT NOT NULL DEFAULT 1,
        movie_id BIGINT NOT NULL,
        title TEXT NOT NULL,
        poster_url TEXT NOT NULL DEFAULT '',
        created_at TIMESTAMP NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMP NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS search_counts_count_idx
        ON trending.search_counts (search_count DESC, updated_at DESC)
    "#,
];

/// Create a PostgreSQL connection pool for `database_url`
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Create the `trending` schema and table if they do not exist
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA_SQL {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("Search count schema is ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_idempotent_sql() {
        for statement in SCHEMA_SQL {
            assert!(
                statement.contains("IF NOT EXISTS"),
                "statement must be re-runnable: {}",
                statement
            );
        }
    }

    #[test]
    fn test_search_term_is_unique() {
        let table = SCHEMA_SQL[1];
        assert!(table.contains("search_term TEXT NOT NULL UNIQUE"));
    }
}
