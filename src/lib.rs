//! # Signup Desk
//!
//! Client core for an activity sign-up service: visitors sign up for
//! activities by email, and a signed-in teacher can remove participants.
//!
//! The crate is host-agnostic. The browser frontend (`signup-desk-ui`)
//! plugs in a fetch backend, `localStorage` and browser timers; native
//! hosts can use [`api::HttpBackend`] and [`session::FileSessionStore`]
//! (default `native` feature).
//!
//! ## Modules
//!
//! - [`controller`]: the view-state machine driving the four user actions
//! - [`view`]: pure view-model rendering and transient messages
//! - [`api`]: backend REST contract and response interpretation
//! - [`session`]: session identity and its persistence
//! - [`scheduler`]: cancellable delayed UI effects
//! - [`models`]: activities as served by the backend
//! - [`config`]: client configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use signup_desk::{
//!     ClientConfig, HttpBackend, ManualScheduler, MemorySessionStore, ViewController,
//! };
//! use signup_desk::view::{activity_list, ActivityListView};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = ClientConfig::default();
//!     config.api.base_url = "http://localhost:8000".to_string();
//!
//!     let backend = HttpBackend::new(&config.api)?;
//!     let controller =
//!         ViewController::new(backend, MemorySessionStore::new(), ManualScheduler::new(), config);
//!
//!     let session = controller.initialize().await;
//!
//!     if let ActivityListView::Cards(cards) =
//!         activity_list(&controller.state().activities, session.as_ref())
//!     {
//!         for card in cards {
//!             println!("{}: {}", card.name, card.availability);
//!         }
//!     }
//!
//!     controller.signup("student@example.com", "Chess Club").await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod view;

// Re-export top-level types for convenience
pub use api::{Backend, Endpoint, Method};

#[cfg(feature = "native")]
pub use api::HttpBackend;

pub use config::{ApiConfig, ClientConfig, ConfigError, LoggingConfig, MessageConfig, SessionConfig};

pub use controller::{LoginForm, SignupForm, ViewController, ViewState};

pub use error::{ActionError, ApiError, ApiResult, SessionError, StoreError};

pub use models::{Activities, Activity, ActivityDetails};

pub use scheduler::{Deferred, ManualScheduler, Scheduler, TimerId};

pub use session::{MemorySessionStore, Session, SessionStore};

#[cfg(feature = "native")]
pub use session::FileSessionStore;

pub use view::{ActivityListView, ActivitySnapshot, Banner, Severity};
