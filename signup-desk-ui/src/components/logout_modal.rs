//! Logout Modal Component

use leptos::*;
use signup_desk::view::logged_in_label;

use crate::state::use_app_context;

/// Shows who is signed in and offers logout
#[component]
pub fn LogoutModal() -> impl IntoView {
    let context = use_app_context();
    let view_state = context.view;
    let session = context.session;

    let open = move || view_state.with(|s| s.logout_open);
    let label = move || session.with(|s| s.as_ref().map(logged_in_label).unwrap_or_default());

    let controller = context.controller.clone();
    let on_close = move |_| controller.close_logout_dialog();

    let on_logout = move |_| context.logout();

    view! {
        <div id="logout-modal" class="modal" class:hidden=move || !open()>
            <div class="modal-content">
                <span id="close-logout-modal" class="close" on:click=on_close>"×"</span>
                <h3>"Teacher Account"</h3>
                <p id="logged-in-user">{label}</p>
                <button id="logout-btn" on:click=on_logout>"Logout"</button>
            </div>
        </div>
    }
}
