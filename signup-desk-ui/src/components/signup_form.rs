//! Signup Form Component
//!
//! Email plus activity selector. Field values live in the controller's
//! view state so a successful signup clears them.

use leptos::*;
use signup_desk::view::activity_options;

use crate::state::use_app_context;

/// Signup form
#[component]
pub fn SignupForm() -> impl IntoView {
    let context = use_app_context();
    let view_state = context.view;

    // Options are derived from the latest fetch, never accumulated
    let options = create_memo(move |_| view_state.with(|s| activity_options(&s.activities)));

    let email = move || view_state.with(|s| s.signup_form.email.clone());
    let activity = move || view_state.with(|s| s.signup_form.activity.clone());

    let on_submit = {
        let context = context.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let form = view_state.with_untracked(|s| s.signup_form.clone());
            context.signup(form.email, form.activity);
        }
    };

    let controller = context.controller.clone();
    let on_email = move |ev| {
        let value = event_target_value(&ev);
        controller.update_signup_form(|f| f.email = value);
    };

    let controller = context.controller.clone();
    let on_activity = move |ev| {
        let value = event_target_value(&ev);
        controller.update_signup_form(|f| f.activity = value);
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@school.edu"
                    prop:value=email
                    on:input=on_email
                />
            </div>

            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select id="activity" required prop:value=activity on:change=on_activity>
                    <option value="">"-- Select an activity --"</option>
                    <For
                        each=move || options.get()
                        key=|name| name.clone()
                        children=move |name| {
                            view! { <option value=name.clone()>{name}</option> }
                        }
                    />
                </select>
            </div>

            <button type="submit">"Sign Up"</button>
        </form>
    }
}
