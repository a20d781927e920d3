// web_app/components/common.rs - Status and label components
//
// Spinner and error box for the movie listing states, and the badge used
// on movie cards. No signals; everything comes in through props.

use leptos::prelude::*;

/// Spinner shown while a listing request is in flight
#[component]
pub fn Loading(
    /// Caption under the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12" role="status">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-indigo-200 border-t-indigo-500"></div>
            <span class="mt-4 text-gray-300 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// User-facing fetch error. The cause itself only goes to the log.
#[component]
pub fn ErrorDisplay(error: String) -> impl IntoView {
    view! {
        <p class="bg-red-950/40 border border-red-800 rounded-xl p-6 text-red-400" role="alert">
            {error}
        </p>
    }
}

/// Small label for language and release year
#[component]
pub fn Badge(
    children: Children,
    /// "indigo", "yellow"; anything else renders gray
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

pub(crate) fn badge_class(variant: &str) -> &'static str {
    match variant {
        "yellow" => "px-2 py-0.5 text-xs font-medium rounded bg-yellow-900/40 text-yellow-300",
        "indigo" => "px-2 py-0.5 text-xs font-medium rounded bg-indigo-900/40 text-indigo-200",
        _ => "px-2 py-0.5 text-xs font-medium rounded bg-gray-800 text-gray-300",
    }
}
