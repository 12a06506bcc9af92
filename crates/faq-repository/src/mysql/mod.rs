//! MySQL repository implementations.

mod faq_repository;

pub use faq_repository::*;
