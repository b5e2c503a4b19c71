//! App Root Component
//!
//! Page layout and the application context provider.

use leptos::*;
use signup_desk::ClientConfig;

use crate::components::{ActivityList, LoginModal, LogoutModal, SignupForm, Toast, UserButton};
use crate::state::provide_app_context;

/// Root application component
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // Build the controller and share it with all components
    let context = provide_app_context(config);
    context.start();

    view! {
        <header>
            <div class="header-content">
                <div>
                    <h1>"Extracurricular Activities"</h1>
                    <h2>"Sign up, browse rosters and manage participants"</h2>
                </div>
                <UserButton />
            </div>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <Toast />
            </section>
        </main>

        <LoginModal />
        <LogoutModal />
    }
}
