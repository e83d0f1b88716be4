//! # Domain Layer
//!
//! Core models, the topic classification service, and the error type.
//! This layer is independent of external frameworks and infrastructure.

pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
