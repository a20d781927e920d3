// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, ErrorDisplay, Badge)
// - search.rs: Debounced search bar
// - movie.rs: Movie cards, grid and the trending strip

pub mod common;
pub mod movie;
pub mod search;

// Re-export commonly used components for convenience
pub use common::*;
pub use movie::*;
pub use search::*;
