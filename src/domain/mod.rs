//! # Domain Layer
//!
//! Core planning types: chat messages, interests, the itinerary prompt and
//! the backend configuration model.
//! This layer is independent of external frameworks and infrastructure.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
