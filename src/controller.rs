//! View Controller
//!
//! The sign-up / unregister / login state machine. Each user action is one
//! request/response round trip against the [`Backend`] followed by a state
//! update; hosts render [`ViewState`] through the pure functions in
//! [`crate::view`].
//!
//! All methods take `&self`: state lives behind a `RefCell` that is never
//! borrowed across an `.await`, so overlapping actions (two quick clicks)
//! are allowed and simply race at the backend.
//!
//! # Example
//!
//! ```rust,ignore
//! let controller = ViewController::new(backend, store, scheduler, ClientConfig::default());
//! let mut session = controller.initialize().await;
//!
//! if let Ok(s) = controller.login("teacher", "secret").await {
//!     session = Some(s);
//! }
//! controller.unregister(session.as_ref(), "Chess Club", "a@x.com").await?;
//! ```

use std::cell::{Cell, RefCell};

use crate::api::Backend;
use crate::config::ClientConfig;
use crate::error::{ActionError, ApiError};
use crate::scheduler::{Deferred, Scheduler, TimerId};
use crate::session::{Session, SessionStore};
use crate::view::banner::{
    GENERIC_REJECTION, LOGIN_FAILED, LOGIN_REJECTED, SIGNUP_FAILED, UNREGISTER_FAILED,
};
use crate::view::{ActivitySnapshot, Banner};

/// Signup form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

/// Login dialog fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Everything the page shows apart from the session itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub activities: ActivitySnapshot,
    /// Page-level transient message (signup / unregister)
    pub banner: Option<Banner>,
    pub login_open: bool,
    /// Message inside the login dialog
    pub login_message: Option<Banner>,
    pub logout_open: bool,
    pub signup_form: SignupForm,
    pub login_form: LoginForm,
}

type Listener = Box<dyn Fn(&ViewState)>;

/// Orchestrates session flow, activity loading and the four user actions
pub struct ViewController<B, S, T> {
    backend: B,
    store: S,
    scheduler: T,
    config: ClientConfig,
    state: RefCell<ViewState>,
    banner_timer: Cell<Option<TimerId>>,
    login_timer: Cell<Option<TimerId>>,
    listener: RefCell<Option<Listener>>,
}

impl<B, S, T> ViewController<B, S, T>
where
    B: Backend,
    S: SessionStore,
    T: Scheduler,
{
    pub fn new(backend: B, store: S, scheduler: T, config: ClientConfig) -> Self {
        Self {
            backend,
            store,
            scheduler,
            config,
            state: RefCell::new(ViewState::default()),
            banner_timer: Cell::new(None),
            login_timer: Cell::new(None),
            listener: RefCell::new(None),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    /// Copy of the current view state
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Register the single change listener, replacing any previous one
    ///
    /// Called with a fresh snapshot after every state change.
    pub fn subscribe(&self, listener: impl Fn(&ViewState) + 'static) {
        *self.listener.borrow_mut() = Some(Box::new(listener));
    }

    fn update(&self, f: impl FnOnce(&mut ViewState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };

        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(&snapshot);
        }
    }

    // ============ Startup ============

    /// Restore the stored session, then load activities
    pub async fn initialize(&self) -> Option<Session> {
        let session = self.restore_session();
        let _ = self.load_activities().await;
        session
    }

    /// Read the persisted identity
    ///
    /// Storage failures and empty values count as logged out.
    pub fn restore_session(&self) -> Option<Session> {
        match self.store.load() {
            Ok(Some(username)) => match Session::new(username) {
                Ok(session) => {
                    tracing::info!(username = session.username(), "Session restored");
                    Some(session)
                }
                Err(_) => {
                    tracing::warn!("Ignoring empty stored identity");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored session");
                None
            }
        }
    }

    /// Replace the activity snapshot with a fresh fetch
    ///
    /// Failure shows the static notice in the list area; there is no banner.
    pub async fn load_activities(&self) -> Result<(), ActionError> {
        match self.backend.list_activities().await {
            Ok(activities) => {
                tracing::debug!(count = activities.len(), "Activities loaded");
                self.update(|s| s.activities = ActivitySnapshot::Loaded(activities));
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching activities");
                self.update(|s| s.activities = ActivitySnapshot::Failed);
                Err(e.into())
            }
        }
    }

    // ============ Authentication ============

    /// Authenticate a teacher
    ///
    /// On success the identity is persisted and returned; the dialog shows
    /// the server message and closes after the configured delay.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ActionError> {
        let result = match Session::new(username) {
            Ok(session) => self
                .backend
                .login(session.username(), password)
                .await
                .map(|message| (session, message))
                .map_err(ActionError::from),
            Err(e) => Err(e.into()),
        };

        match result {
            Ok((session, message)) => {
                if let Err(e) = self.store.save(session.username()) {
                    tracing::warn!(error = %e, "Failed to persist session");
                }
                tracing::info!(username = session.username(), "Logged in");

                self.update(|s| s.login_message = Some(Banner::success(message)));

                if let Some(previous) = self.login_timer.take() {
                    self.scheduler.cancel(previous);
                }
                let id = self.scheduler.schedule(
                    self.config.messages.login_close_delay(),
                    Deferred::CompleteLogin,
                );
                self.login_timer.set(Some(id));

                Ok(session)
            }
            Err(err) => {
                log_failure("login", &err);
                let banner = Banner::for_error(&err, LOGIN_REJECTED, LOGIN_FAILED);
                self.update(|s| s.login_message = Some(banner));
                Err(err)
            }
        }
    }

    /// End the session
    ///
    /// Any HTTP answer counts as done. Only a transport failure aborts; it
    /// is logged, the stored identity is kept and the caller keeps its
    /// session.
    pub async fn logout(&self, session: &Session) -> Result<(), ActionError> {
        match self.backend.logout(session.username()).await {
            Ok(()) => {}
            Err(ApiError::Network(e)) => {
                tracing::error!(error = %e, "Error logging out");
                return Err(ApiError::Network(e).into());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Logout response ignored");
            }
        }

        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
        tracing::info!(username = session.username(), "Logged out");

        self.update(|s| s.logout_open = false);
        let _ = self.load_activities().await;
        Ok(())
    }

    // ============ Roster Changes ============

    /// Sign `email` up for `activity`
    pub async fn signup(&self, email: &str, activity: &str) -> Result<(), ActionError> {
        match self.backend.signup(activity, email).await {
            Ok(message) => {
                self.show_banner(Banner::success(message));
                self.update(|s| s.signup_form = SignupForm::default());
                let _ = self.load_activities().await;
                Ok(())
            }
            Err(e) => {
                let err = ActionError::from(e);
                log_failure("signup", &err);
                self.show_banner(Banner::for_error(&err, GENERIC_REJECTION, SIGNUP_FAILED));
                Err(err)
            }
        }
    }

    /// Remove `email` from `activity`
    ///
    /// Refused locally, without a request, when no session is active.
    pub async fn unregister(
        &self,
        session: Option<&Session>,
        activity: &str,
        email: &str,
    ) -> Result<(), ActionError> {
        let Some(session) = session else {
            let err = ActionError::SessionRequired;
            self.show_banner(Banner::for_error(&err, GENERIC_REJECTION, UNREGISTER_FAILED));
            return Err(err);
        };

        match self
            .backend
            .unregister(activity, email, session.username())
            .await
        {
            Ok(message) => {
                self.show_banner(Banner::success(message));
                let _ = self.load_activities().await;
                Ok(())
            }
            Err(e) => {
                let err = ActionError::from(e);
                log_failure("unregister", &err);
                self.show_banner(Banner::for_error(&err, GENERIC_REJECTION, UNREGISTER_FAILED));
                Err(err)
            }
        }
    }

    // ============ Dialogs and Forms ============

    /// The account button: logout dialog when signed in, login dialog otherwise
    pub fn open_account_dialog(&self, session: Option<&Session>) {
        let signed_in = session.is_some();
        self.update(|s| {
            if signed_in {
                s.logout_open = true;
            } else {
                s.login_open = true;
            }
        });
    }

    pub fn close_login_dialog(&self) {
        self.update(|s| {
            s.login_open = false;
            s.login_message = None;
            s.login_form = LoginForm::default();
        });
    }

    pub fn close_logout_dialog(&self) {
        self.update(|s| s.logout_open = false);
    }

    pub fn update_signup_form(&self, f: impl FnOnce(&mut SignupForm)) {
        self.update(|s| f(&mut s.signup_form));
    }

    pub fn update_login_form(&self, f: impl FnOnce(&mut LoginForm)) {
        self.update(|s| f(&mut s.login_form));
    }

    // ============ Deferred Effects ============

    /// Run a task delivered by the scheduler
    pub async fn on_deferred(&self, task: Deferred) {
        match task {
            Deferred::HideBanner => {
                self.banner_timer.set(None);
                self.update(|s| s.banner = None);
            }
            Deferred::CompleteLogin => {
                self.login_timer.set(None);
                self.update(|s| {
                    s.login_open = false;
                    s.login_message = None;
                    s.login_form = LoginForm::default();
                });
                let _ = self.load_activities().await;
            }
        }
    }

    /// Show a page banner, replacing the previous one and its timer
    fn show_banner(&self, banner: Banner) {
        if let Some(previous) = self.banner_timer.take() {
            self.scheduler.cancel(previous);
        }

        self.update(|s| s.banner = Some(banner));

        let id = self
            .scheduler
            .schedule(self.config.messages.dismiss_after(), Deferred::HideBanner);
        self.banner_timer.set(Some(id));
    }
}

fn log_failure(action: &str, err: &ActionError) {
    match err {
        ActionError::Api(e) if e.is_transport() => {
            tracing::error!(action, error = %e, "Request failed");
        }
        _ => {
            tracing::warn!(action, error = %err, "Action rejected");
        }
    }
}
