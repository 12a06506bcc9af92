//! # FAQ Service
//!
//! The FAQ access layer: cache-aside reads, pattern-based invalidation on
//! writes, per-language fallback resolution, and machine translation of new
//! content.

pub mod cache;
pub mod dto;
pub mod faq_service;
pub mod r#impl;
pub mod translation;

pub use cache::*;
pub use dto::*;
pub use faq_service::*;
pub use r#impl::{FaqServiceComponent, FaqServiceComponentParameters};
pub use translation::*;
