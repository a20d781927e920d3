// web_app/mod.rs - Movie Finder web application
//
// Layout by compilation target:
// - model, debounce: plain Rust, built for every target (and tested without
//   features)
// - server_fns: #[server] declarations; the ssr build gets the bodies, the
//   hydrate build gets HTTP stubs
// - api: TMDB client, search count store and search service (ssr only)
// - components, pages, app: the Leptos view tree (ssr and hydrate)

pub mod debounce;
pub mod model;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(feature = "ssr")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
