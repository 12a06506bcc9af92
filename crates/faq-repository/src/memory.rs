//! In-memory FAQ store for local development and tests.

use crate::traits::FaqRepository;
use async_trait::async_trait;
use chrono::Utc;
use faq_core::{Faq, FaqId, FaqPatch, FaqResult, NewFaq};
use parking_lot::RwLock;
use shaku::Component;

/// Process-local FAQ store preserving insertion order.
#[derive(Component, Default)]
#[shaku(interface = FaqRepository)]
pub struct InMemoryFaqRepository {
    #[shaku(default)]
    faqs: RwLock<Vec<Faq>>,
}

impl InMemoryFaqRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `faqs`.
    #[must_use]
    pub fn with_faqs(faqs: Vec<Faq>) -> Self {
        Self {
            faqs: RwLock::new(faqs),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faqs.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faqs.read().is_empty()
    }
}

#[async_trait]
impl FaqRepository for InMemoryFaqRepository {
    async fn find_all(&self) -> FaqResult<Vec<Faq>> {
        Ok(self.faqs.read().clone())
    }

    async fn find_by_id(&self, id: FaqId) -> FaqResult<Option<Faq>> {
        Ok(self.faqs.read().iter().find(|f| f.id == id).cloned())
    }

    async fn insert(&self, faq: NewFaq) -> FaqResult<Faq> {
        let created = Faq {
            id: FaqId::new(),
            question: faq.question,
            answer: faq.answer,
            translations: faq.translations,
            created_at: Utc::now(),
        };
        self.faqs.write().push(created.clone());
        Ok(created)
    }

    async fn update_by_id(&self, id: FaqId, patch: FaqPatch) -> FaqResult<Option<Faq>> {
        let mut faqs = self.faqs.write();
        Ok(faqs.iter_mut().find(|f| f.id == id).map(|faq| {
            faq.apply(patch);
            faq.clone()
        }))
    }

    async fn delete_by_id(&self, id: FaqId) -> FaqResult<bool> {
        let mut faqs = self.faqs.write();
        let before = faqs.len();
        faqs.retain(|f| f.id != id);
        Ok(faqs.len() < before)
    }
}
