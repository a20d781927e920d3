// fixtures/tables/mod.rs
//
// Test table definitions. Each table is a struct implementing TestTable.

pub mod search_counts;

pub use search_counts::SearchCountsTable;
