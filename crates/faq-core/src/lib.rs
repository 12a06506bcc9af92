//! # FAQ Core
//!
//! Core types, traits, and error definitions for the multilingual FAQ service.
//! This crate provides the FAQ entity, language codes and the language
//! resolver, plus the error taxonomy shared by every other layer.

pub mod error;
pub mod faq;
pub mod id;
pub mod language;
pub mod result;
#[cfg(feature = "telemetry")]
pub mod telemetry;
pub mod validation;

pub use error::*;
pub use faq::*;
pub use id::*;
pub use language::*;
pub use result::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, Component, HasComponent, Interface, Module};
