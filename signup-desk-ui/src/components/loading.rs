//! Loading Component

use leptos::*;

/// Placeholder shown until the first activity fetch settles
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <p class="loading">
            <span class="loading-spinner" />
            "Loading activities..."
        </p>
    }
}
