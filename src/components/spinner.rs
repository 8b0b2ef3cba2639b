//! Neutral loading indicator.

use leptos::prelude::*;

/// Centered spinner shown while a page or the session restore is pending.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading">
            <div class="spinner__circle"></div>
        </div>
    }
}
