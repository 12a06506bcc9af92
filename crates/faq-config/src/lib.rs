//! # FAQ Config
//!
//! Configuration management for the multilingual FAQ service.
//! Supports layered configuration from files and environment variables,
//! with validation at load time and runtime refresh.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
