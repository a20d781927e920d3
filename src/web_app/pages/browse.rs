// web_app/pages/browse.rs - Movie browser page
//
// Owns the search state and the listing state. Every change of the
// debounced term starts a fetch; a slower earlier fetch that finishes
// after a newer one overwrites it (no request ordering). The trending
// strip loads once and stays hidden if it fails.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::model::MovieListState;
use crate::web_app::server_fns::{fetch_movies, get_trending_movies};

/// Main page component
#[component]
pub fn MovieBrowserPage() -> impl IntoView {
    // Search state
    let search_term = RwSignal::new(String::new());
    let debounced_term = RwSignal::new(String::new());

    // Listing state, written only by the fetch below. Starts out loading
    // because the first fetch runs as soon as the page hydrates.
    let list_state = RwSignal::new(MovieListState {
        is_loading: true,
        ..MovieListState::default()
    });

    Effect::new(move || {
        let term = debounced_term.get();
        list_state.update(|state| state.begin_fetch());
        spawn_local(async move {
            let outcome = fetch_movies(term).await;
            list_state.update(|state| state.finish_fetch(outcome));
        });
    });

    // Trending strip, loaded once on mount
    let trending = Resource::new(|| (), |_| get_trending_movies());

    view! {
        <main class="min-h-screen bg-slate-950 font-sans text-gray-100">
            <div class="max-w-7xl mx-auto px-5 py-12 xs:p-10">
                <header class="text-center">
                    <img src="/hero.svg" alt="Hero banner" class="w-full max-w-lg h-auto mx-auto" />
                    <h1 class="text-4xl sm:text-6xl font-bold mt-6 leading-tight">
                        "Find "
                        <span class="bg-gradient-to-r from-indigo-300 to-purple-400 bg-clip-text text-transparent">
                            "Movies"
                        </span>
                        " You'll Enjoy Without the Hassle"
                    </h1>
                    <SearchBar search_term=search_term debounced_term=debounced_term />
                </header>

                <Transition fallback=|| ()>
                    {move || {
                        trending
                            .get()
                            .and_then(|result| {
                                result
                                    .map_err(|e| tracing::warn!("Trending movies unavailable: {}", e))
                                    .ok()
                            })
                            .filter(|movies| !movies.is_empty())
                            .map(|movies| view! { <TrendingList movies=movies /> })
                    }}
                </Transition>

                <section class="all-movies mt-16 space-y-9">
                    <h2 class="text-2xl font-bold text-white">
                        {move || {
                            let term = debounced_term.get();
                            if term.is_empty() {
                                "Popular Movies".to_string()
                            } else {
                                format!("Results for \"{}\"", term)
                            }
                        }}
                    </h2>

                    {move || {
                        let state = list_state.get();
                        if state.is_loading {
                            view! { <Loading message="Loading movies..." /> }.into_any()
                        } else if let Some(error) = state.error_message {
                            view! { <ErrorDisplay error=error /> }.into_any()
                        } else {
                            view! { <MovieGrid movies=state.movies /> }.into_any()
                        }
                    }}
                </section>
            </div>
        </main>
    }
}
