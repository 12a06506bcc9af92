//! Application state for Axum handlers.

use faq_repository::DatabasePoolInterface;
use faq_service::FaqService;
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub faq_service: Arc<dyn FaqService>,
    /// Probed by `/ready`. Absent when the store is not a database.
    pub database: Option<Arc<dyn DatabasePoolInterface>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(faq_service: Arc<dyn FaqService>) -> Self {
        Self {
            faq_service,
            database: None,
        }
    }

    /// Attaches the database pool checked by the readiness probe.
    #[must_use]
    pub fn with_database(mut self, database: Arc<dyn DatabasePoolInterface>) -> Self {
        self.database = Some(database);
        self
    }

    /// Resolves the handler dependencies from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn FaqService> + HasComponent<dyn DatabasePoolInterface>,
    {
        let faq_service: Arc<dyn FaqService> = module.resolve();
        let database: Arc<dyn DatabasePoolInterface> = module.resolve();
        Self::new(faq_service).with_database(database)
    }
}
