//! Service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `faq_service.rs`).

pub mod faq_service_impl;

pub use faq_service_impl::{FaqServiceComponent, FaqServiceComponentParameters};
