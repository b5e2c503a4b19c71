//! Global Application State
//!
//! The controller plus the reactive signals components render from.
//! The session lives here, in the hosting shell, and is handed to the
//! controller per action.

use leptos::*;
use signup_desk::{ClientConfig, Session, ViewController, ViewState};
use std::rc::{Rc, Weak};

use super::storage::LocalSessionStore;
use super::timers::GlooScheduler;
use crate::api::{get_api_base, GlooBackend};

/// Controller wired to the browser
pub type Controller = ViewController<GlooBackend, LocalSessionStore, GlooScheduler>;

/// Application state provided to all components
#[derive(Clone)]
pub struct AppContext {
    pub controller: Rc<Controller>,
    /// Current authenticated identity, if any
    pub session: RwSignal<Option<Session>>,
    /// Latest controller state
    pub view: RwSignal<ViewState>,
}

/// Build the controller and provide the context to the component tree
pub fn provide_app_context(config: ClientConfig) -> AppContext {
    let backend = GlooBackend::new(&get_api_base(&config.api.base_url));
    let store = LocalSessionStore::new(config.session.storage_key.clone());

    // The scheduler delivers fired tasks back into the controller that owns it
    let controller = Rc::new_cyclic(|weak: &Weak<Controller>| {
        let weak = weak.clone();
        let scheduler = GlooScheduler::new(move |task| {
            if let Some(controller) = weak.upgrade() {
                spawn_local(async move { controller.on_deferred(task).await });
            }
        });
        ViewController::new(backend, store, scheduler, config)
    });

    let view = create_rw_signal(controller.state());
    controller.subscribe(move |state| view.set(state.clone()));

    let context = AppContext {
        controller,
        session: create_rw_signal(None),
        view,
    };

    provide_context(context.clone());
    context
}

/// Fetch the context provided by the root component
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found")
}

impl AppContext {
    /// Restore the stored session and load activities
    pub fn start(&self) {
        self.session.set(self.controller.restore_session());

        let controller = Rc::clone(&self.controller);
        spawn_local(async move {
            let _ = controller.load_activities().await;
        });
    }

    /// Identity button: logout dialog when signed in, login dialog otherwise
    pub fn open_account_dialog(&self) {
        let session = self.session.get_untracked();
        self.controller.open_account_dialog(session.as_ref());
    }

    pub fn login(&self, username: String, password: String) {
        let controller = Rc::clone(&self.controller);
        let session = self.session;
        spawn_local(async move {
            if let Ok(signed_in) = controller.login(&username, &password).await {
                session.set(Some(signed_in));
            }
        });
    }

    pub fn logout(&self) {
        let Some(current) = self.session.get_untracked() else {
            self.controller.close_logout_dialog();
            return;
        };

        let controller = Rc::clone(&self.controller);
        let session = self.session;
        spawn_local(async move {
            if controller.logout(&current).await.is_ok() {
                session.set(None);
            }
        });
    }

    pub fn signup(&self, email: String, activity: String) {
        let controller = Rc::clone(&self.controller);
        spawn_local(async move {
            let _ = controller.signup(&email, &activity).await;
        });
    }

    pub fn unregister(&self, activity: String, email: String) {
        let controller = Rc::clone(&self.controller);
        let current = self.session.get_untracked();
        spawn_local(async move {
            let _ = controller.unregister(current.as_ref(), &activity, &email).await;
        });
    }
}
