//! State Management
//!
//! Application context, browser storage and browser timers.

pub mod global;
pub mod storage;
pub mod timers;

pub use global::{provide_app_context, use_app_context};
