//! Cache key generators for consistent key naming.
//!
//! Every cached response carries the language it was rendered in as the
//! last key segment, so invalidation works on wildcard patterns rather than
//! enumerating languages.

use faq_core::FaqId;

/// Key for the list envelope rendered in `lang`.
#[must_use]
pub fn faq_list(lang: &str) -> String {
    format!("faqs:{}", lang)
}

/// Key for a single FAQ projection rendered in `lang`.
#[must_use]
pub fn faq_by_id(id: FaqId, lang: &str) -> String {
    format!("faq:{}:{}", id, lang)
}

/// Pattern matching the list envelope in every language.
#[must_use]
pub fn faq_list_pattern() -> String {
    "faqs:*".to_string()
}

/// Pattern matching one FAQ's projection in every language.
#[must_use]
pub fn faq_invalidation_pattern(id: FaqId) -> String {
    format!("faq:{}:*", id)
}
