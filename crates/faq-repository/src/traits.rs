//! Repository trait definitions.

use async_trait::async_trait;
use faq_core::{Faq, FaqId, FaqPatch, FaqResult, Interface, NewFaq};

/// FAQ store.
///
/// The store is the source of truth: it assigns ids and creation
/// timestamps, and its failures propagate to callers unchanged.
#[async_trait]
pub trait FaqRepository: Interface + Send + Sync {
    /// Returns every FAQ, oldest first.
    async fn find_all(&self) -> FaqResult<Vec<Faq>>;

    /// Finds a FAQ by ID.
    async fn find_by_id(&self, id: FaqId) -> FaqResult<Option<Faq>>;

    /// Persists a new FAQ, assigning its id and `created_at`.
    async fn insert(&self, faq: NewFaq) -> FaqResult<Faq>;

    /// Applies a patch. Returns `None` when no FAQ has this id.
    async fn update_by_id(&self, id: FaqId, patch: FaqPatch) -> FaqResult<Option<Faq>>;

    /// Deletes a FAQ. Returns `false` when no FAQ has this id.
    async fn delete_by_id(&self, id: FaqId) -> FaqResult<bool>;
}
