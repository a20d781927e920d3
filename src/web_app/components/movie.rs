// web_app/components/movie.rs - Movie display components
//
// - MovieCard: poster, title, rating, language and year
// - MovieGrid: grid of cards keyed by TMDB id
// - TrendingList: ranked strip of the most searched movies

use leptos::prelude::*;

use super::common::Badge;
use crate::web_app::model::{Movie, TrendingMovie};

/// Card for a single movie in the listing
#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    let poster = movie.poster_url();
    let rating = movie.rating_label();
    let language = movie.original_language.clone().unwrap_or_default();
    let year = movie.release_year().unwrap_or("N/A").to_string();
    let title = if movie.title.is_empty() {
        "Untitled".to_string()
    } else {
        movie.title.clone()
    };

    view! {
        <li class="movie-card bg-gray-900 p-4 rounded-2xl shadow-inner shadow-indigo-900/20 list-none">
            <img
                src=poster
                alt=title.clone()
                loading="lazy"
                class="rounded-lg h-auto w-full"
            />
            <div class="mt-4">
                <h3 class="text-white font-bold text-base line-clamp-1">{title}</h3>
                <div class="mt-2 flex flex-row items-center flex-wrap gap-2">
                    <div class="flex items-center gap-1">
                        <span class="text-yellow-400">"★"</span>
                        <p class="font-bold text-base text-white">{rating}</p>
                    </div>
                    <span class="text-gray-500">"•"</span>
                    <Badge variant="indigo">{language}</Badge>
                    <span class="text-gray-500">"•"</span>
                    <Badge>{year}</Badge>
                </div>
            </div>
        </li>
    }
}

/// Grid of movie cards with an empty state
#[component]
pub fn MovieGrid(movies: Vec<Movie>) -> impl IntoView {
    if movies.is_empty() {
        return view! {
            <div class="text-center py-16 border border-dashed border-gray-700 rounded-2xl">
                <h3 class="text-xl font-bold text-gray-200 mb-2">"No movies found"</h3>
                <p class="text-gray-500">"Try a different title."</p>
            </div>
        }
        .into_any();
    }

    view! {
        <ul class="grid grid-cols-1 gap-5 xs:grid-cols-2 md:grid-cols-3 lg:grid-cols-4">
            <For
                each=move || movies.clone()
                key=|movie| movie.id
                children=move |movie| view! { <MovieCard movie=movie /> }
            />
        </ul>
    }
    .into_any()
}

/// Ranked list of the most searched movies
#[component]
pub fn TrendingList(movies: Vec<TrendingMovie>) -> impl IntoView {
    view! {
        <section class="trending mt-16">
            <h2 class="text-2xl font-bold text-white mb-6">"Trending Movies"</h2>
            <ul class="flex flex-row overflow-x-auto gap-5 -mt-4 w-full">
                {movies
                    .into_iter()
                    .enumerate()
                    .map(|(index, movie)| {
                        let poster = movie.display_poster().to_string();
                        view! {
                            <li class="min-w-[230px] flex flex-row items-center" title=movie.search_term.clone()>
                                <p class="fancy-text mt-[22px] text-nowrap text-6xl font-bold text-indigo-300">
                                    {index + 1}
                                </p>
                                <img
                                    src=poster
                                    alt=movie.title.clone()
                                    class="w-[127px] h-[163px] rounded-lg object-cover -ml-3.5"
                                />
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
