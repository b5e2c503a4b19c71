//! HTTP API
//!
//! Browser implementation of the activity service client.

pub mod client;

pub use client::{get_api_base, GlooBackend};
