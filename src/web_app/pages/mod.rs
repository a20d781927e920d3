// web_app/pages/mod.rs - Page components module
//
// - MovieBrowserPage: popular movies, debounced search and trending strip

pub mod browse;

// Re-export page components
pub use browse::MovieBrowserPage;
