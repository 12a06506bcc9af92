//! FAQ access service trait.

use crate::dto::{
    CreateFaqRequest, CreateFaqResponse, FaqDetailResponse, FaqListResponse, UpdateFaqRequest,
    UpdateFaqResponse,
};
use async_trait::async_trait;
use faq_core::{FaqId, FaqResult, Interface};

/// Multilingual FAQ access with a read-through, write-invalidate cache.
///
/// `lang` arguments accept `None` or an empty string for the base language;
/// any other code outside the configured set is a validation error raised
/// before the cache or store is touched.
#[async_trait]
pub trait FaqService: Interface + Send + Sync {
    /// Lists every FAQ rendered in `lang`.
    async fn list_faqs(&self, lang: Option<&str>) -> FaqResult<FaqListResponse>;

    /// Gets one FAQ rendered in `lang`.
    async fn get_faq(&self, id: FaqId, lang: Option<&str>) -> FaqResult<FaqDetailResponse>;

    /// Creates a FAQ, translating it into every target language.
    async fn create_faq(&self, request: CreateFaqRequest) -> FaqResult<CreateFaqResponse>;

    /// Updates a FAQ and recomputes its translations.
    async fn update_faq(&self, id: FaqId, request: UpdateFaqRequest)
        -> FaqResult<UpdateFaqResponse>;

    /// Deletes a FAQ.
    async fn delete_faq(&self, id: FaqId) -> FaqResult<()>;

    /// Drops every cached response. Maintenance only.
    async fn clear_cache(&self);
}
