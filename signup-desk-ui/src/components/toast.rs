//! Toast Notification Component
//!
//! Shows the page banner for signup and unregister outcomes. The
//! controller hides it again after the configured delay.

use leptos::*;
use signup_desk::Severity;

use crate::state::use_app_context;

/// Banner below the signup form
#[component]
pub fn Toast() -> impl IntoView {
    let view_state = use_app_context().view;
    let banner = create_memo(move |_| view_state.with(|s| s.banner.clone()));

    let class = move || {
        banner.with(|b| match b {
            Some(b) => b.severity.class(),
            None => "hidden",
        })
    };

    view! {
        <div id="message" class=class>
            {move || banner.with(|b| b.as_ref().map(|b| view! { <ToastIcon severity=b.severity /> }))}
            {move || banner.with(|b| b.as_ref().map(|b| b.text.clone()))}
        </div>
    }
}

#[component]
fn ToastIcon(severity: Severity) -> impl IntoView {
    let icon = match severity {
        Severity::Success => "✓",
        Severity::Error => "✕",
    };

    view! { <span class="toast-icon">{icon}" "</span> }
}
