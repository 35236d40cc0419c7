//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat backends (Ollama, Groq, offline mock)
//! - Environment configuration
//! - CLI controllers and the HTML form server

pub mod adapter;
pub mod api;
pub mod config;
pub mod web;

pub use adapter::*;
pub use api::{Container, ContainerConfig, Router};
pub use config::{backend_from_env, backend_from_env_file, resolve_backend};
