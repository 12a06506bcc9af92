//! Custom Axum extractors.

mod faq_id;
mod validated;

pub use faq_id::*;
pub use validated::*;
