//! Data Transfer Objects (DTOs).

mod faq_dto;

pub use faq_dto::*;
