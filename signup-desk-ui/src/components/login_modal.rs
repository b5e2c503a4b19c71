//! Login Modal Component
//!
//! Teacher credentials dialog. The result line stays inside the dialog;
//! after a successful login the controller closes it on a short delay.

use leptos::*;

use crate::state::use_app_context;

#[component]
pub fn LoginModal() -> impl IntoView {
    let context = use_app_context();
    let view_state = context.view;

    let open = move || view_state.with(|s| s.login_open);
    let username = move || view_state.with(|s| s.login_form.username.clone());
    let password = move || view_state.with(|s| s.login_form.password.clone());
    let message = create_memo(move |_| view_state.with(|s| s.login_message.clone()));

    let on_submit = {
        let context = context.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let form = view_state.with_untracked(|s| s.login_form.clone());
            context.login(form.username, form.password);
        }
    };

    let controller = context.controller.clone();
    let on_username = move |ev| {
        let value = event_target_value(&ev);
        controller.update_login_form(|f| f.username = value);
    };

    let controller = context.controller.clone();
    let on_password = move |ev| {
        let value = event_target_value(&ev);
        controller.update_login_form(|f| f.password = value);
    };

    let controller = context.controller.clone();
    let on_close = move |_| controller.close_login_dialog();

    let message_class = move || {
        message.with(|m| match m {
            Some(banner) => banner.severity.class(),
            None => "hidden",
        })
    };
    let message_text = move || message.with(|m| m.as_ref().map(|b| b.text.clone()));

    view! {
        <div id="login-modal" class="modal" class:hidden=move || !open()>
            <div class="modal-content">
                <span id="close-login-modal" class="close" on:click=on_close>"×"</span>
                <h3>"Teacher Login"</h3>
                <form id="login-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username:"</label>
                        <input
                            type="text"
                            id="username"
                            required
                            prop:value=username
                            on:input=on_username
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password:"</label>
                        <input
                            type="password"
                            id="password"
                            required
                            prop:value=password
                            on:input=on_password
                        />
                    </div>
                    <button type="submit">"Login"</button>
                </form>
                <div id="login-message" class=message_class>{message_text}</div>
            </div>
        </div>
    }
}
