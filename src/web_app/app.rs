// web_app/app.rs - Movie Finder root
//
// Title, meta tags and the cargo-leptos stylesheet; the browser page is the
// only route.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::MovieBrowserPage;

pub const APP_TITLE: &str = "Movie Finder";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Browse popular films, search the TMDB catalog and see what others search for" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/movie_finder.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=MovieBrowserPage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-950 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-600 mb-4">"404"</h1>
                <p class="text-xl text-gray-400 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors"
                >
                    "Back to movies"
                </a>
            </div>
        </div>
    }
}
