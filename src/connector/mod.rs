//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion (Groq HTTP client, mock for tests and offline use)
//! - CLI wiring (container, router, controllers)
//! - Web front end (axum single-page form)

pub mod adapter;
pub mod api;
pub mod web;

pub use adapter::*;
pub use api::*;
