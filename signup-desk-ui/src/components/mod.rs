//! UI Components
//!
//! Leptos components for the sign-up page.

pub mod activity_list;
pub mod loading;
pub mod login_modal;
pub mod logout_modal;
pub mod signup_form;
pub mod toast;
pub mod user_button;

pub use activity_list::ActivityList;
pub use loading::Loading;
pub use login_modal::LoginModal;
pub use logout_modal::LogoutModal;
pub use signup_form::SignupForm;
pub use toast::Toast;
pub use user_button::UserButton;
