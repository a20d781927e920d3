// web_app/components/search.rs - Debounced search bar
//
// The input writes `search_term` on every keystroke so typing stays
// responsive. `debounced_term`, which drives the fetch, is only written
// once the input has been quiet for the debounce delay.

use std::time::Duration;

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::debounce::{Debouncer, SEARCH_DEBOUNCE};

/// Search bar component
#[component]
pub fn SearchBar(
    /// Text currently in the input
    search_term: RwSignal<String>,
    /// Text that has been stable for `delay`
    debounced_term: RwSignal<String>,
    /// Quiet period before `debounced_term` follows `search_term`
    #[prop(default = SEARCH_DEBOUNCE)]
    delay: Duration,
) -> impl IntoView {
    let debouncer = StoredValue::new(Debouncer::<String>::new());
    let pending_timer = StoredValue::new(None::<TimeoutHandle>);

    let cancel_timer = move || {
        if let Some(handle) = pending_timer.get_value() {
            handle.clear();
        }
        pending_timer.set_value(None);
    };

    let on_input = move |value: String| {
        search_term.set(value.clone());

        let mut ticket = 0;
        debouncer.update_value(|d| ticket = d.push(value));
        cancel_timer();

        let handle = set_timeout_with_handle(
            move || {
                let mut settled = None;
                debouncer.update_value(|d| settled = d.settle(ticket));
                if let Some(term) = settled {
                    debounced_term.set(term);
                }
            },
            delay,
        );
        match handle {
            Ok(handle) => pending_timer.set_value(Some(handle)),
            Err(_) => tracing::warn!("Could not schedule search debounce timer"),
        }
    };

    // Escape clears the search right away
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            debouncer.update_value(|d| d.cancel());
            cancel_timer();
            search_term.set(String::new());
            debounced_term.set(String::new());
        }
    };

    view! {
        <div class="search w-full max-w-3xl mx-auto mt-10">
            <div class="relative flex items-center bg-gray-900/70 rounded-xl px-4 py-3 shadow-inner">
                <span class="text-gray-400 mr-3">"🔍"</span>
                <input
                    type="text"
                    placeholder="Search through thousands of movies"
                    class="w-full bg-transparent outline-none text-gray-100 placeholder-gray-500 text-base"
                    prop:value=move || search_term.get()
                    on:input=move |ev| on_input(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </div>
        </div>
    }
}
