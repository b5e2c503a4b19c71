//! User Button Component
//!
//! Identity indicator in the header. Opens the logout dialog when a
//! teacher is signed in and the login dialog otherwise.

use leptos::*;
use signup_desk::view::IdentityIndicator;

use crate::state::use_app_context;

const ACTIVE_BACKGROUND: &str = "#4caf50";

#[component]
pub fn UserButton() -> impl IntoView {
    let context = use_app_context();
    let session = context.session;

    let indicator = create_memo(move |_| session.with(|s| IdentityIndicator::for_session(s.as_ref())));

    let on_click = move |_| context.open_account_dialog();

    view! {
        <button
            id="user-btn"
            title=move || indicator.get().title
            style:background-color=move || indicator.get().active.then_some(ACTIVE_BACKGROUND)
            on:click=on_click
        >
            {move || indicator.get().label}
        </button>
    }
}
