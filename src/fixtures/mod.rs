// fixtures/mod.rs - Test fixtures module
//
// A fixture is reusable setup code: each table fixture knows the SQL that
// creates and populates it, so database tests start from a known state
// without repeating that SQL.

pub mod tables;

/// A simple trait that all test tables must implement
pub trait TestTable {
    /// The SQL commands to create and populate this table
    /// Returns a slice of SQL strings that should be executed in order
    fn setup_sql() -> &'static [&'static str];

    /// The SQL commands that remove this table's data
    fn teardown_sql() -> &'static [&'static str];
}

/// Create the search count schema and load `T`'s rows
pub async fn install<T: TestTable>(pool: &sqlx::PgPool) -> Result<(), sqlx::Error> {
    crate::web_app::api::db::ensure_schema(pool).await?;
    for statement in T::setup_sql() {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Remove `T`'s rows
pub async fn uninstall<T: TestTable>(pool: &sqlx::PgPool) -> Result<(), sqlx::Error> {
    for statement in T::teardown_sql() {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
