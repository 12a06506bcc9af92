//! FAQ service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{
    CreateFaqRequest, CreateFaqResponse, FaqDetailResponse, FaqListResponse, FaqSummary,
    UpdateFaqRequest, UpdateFaqResponse,
};
use crate::faq_service::FaqService;
use crate::translation::TranslatorInterface;
use async_trait::async_trait;
use faq_core::{FaqError, FaqId, FaqPatch, FaqResult, LanguageResolver, NewFaq, ValidateExt};
use faq_repository::FaqRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

const RESOURCE: &str = "FAQ";

/// Shaku-injectable FAQ service.
#[derive(Component)]
#[shaku(interface = FaqService)]
pub struct FaqServiceComponent {
    #[shaku(inject)]
    repository: Arc<dyn FaqRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(inject)]
    translator: Arc<dyn TranslatorInterface>,
    languages: LanguageResolver,
}

impl FaqServiceComponent {
    /// Creates the service from its collaborators.
    #[must_use]
    pub fn new(
        repository: Arc<dyn FaqRepository>,
        cache: Arc<dyn CacheInterface>,
        translator: Arc<dyn TranslatorInterface>,
        languages: LanguageResolver,
    ) -> Self {
        Self {
            repository,
            cache,
            translator,
            languages,
        }
    }

    /// Drops the list views and this FAQ's views in every language.
    async fn invalidate_faq(&self, id: FaqId) {
        self.cache
            .evict_pattern(&cache_keys::faq_invalidation_pattern(id))
            .await;
        self.cache.evict_pattern(&cache_keys::faq_list_pattern()).await;
    }
}

#[async_trait]
impl FaqService for FaqServiceComponent {
    async fn list_faqs(&self, lang: Option<&str>) -> FaqResult<FaqListResponse> {
        let lang = self.languages.require_supported(lang)?;
        let key = cache_keys::faq_list(lang.as_str());

        self.cache
            .get_or_populate(&key, || async move {
                debug!("Loading FAQ list from store for '{}'", lang);
                let faqs = self.repository.find_all().await?;
                let faqs: Vec<FaqSummary> = faqs
                    .iter()
                    .map(|faq| FaqSummary::project(faq, lang.as_str(), &self.languages))
                    .collect();

                Ok(FaqListResponse {
                    language: lang.clone(),
                    supported_languages: self.languages.all_languages(),
                    count: faqs.len(),
                    faqs,
                })
            })
            .await
    }

    async fn get_faq(&self, id: FaqId, lang: Option<&str>) -> FaqResult<FaqDetailResponse> {
        let lang = self.languages.require_supported(lang)?;
        let key = cache_keys::faq_by_id(id, lang.as_str());

        self.cache
            .get_or_populate(&key, || async move {
                debug!("Loading FAQ {} from store", id);
                let faq = self
                    .repository
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| FaqError::not_found(RESOURCE, id))?;

                Ok(FaqDetailResponse::project(&faq, lang.as_str(), &self.languages))
            })
            .await
    }

    async fn create_faq(&self, request: CreateFaqRequest) -> FaqResult<CreateFaqResponse> {
        request.validate_request()?;

        let outcome = self
            .translator
            .translate_content(&request.question, &request.answer)
            .await;

        let faq = self
            .repository
            .insert(NewFaq {
                question: request.question,
                answer: request.answer,
                translations: outcome.translations,
            })
            .await?;

        self.cache.evict_pattern(&cache_keys::faq_list_pattern()).await;

        info!(
            "FAQ created: {} (translated: {:?}, failed: {:?})",
            faq.id, outcome.report.translated, outcome.report.failed
        );
        Ok(CreateFaqResponse {
            faq,
            translation_report: outcome.report,
        })
    }

    async fn update_faq(
        &self,
        id: FaqId,
        request: UpdateFaqRequest,
    ) -> FaqResult<UpdateFaqResponse> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FaqError::not_found(RESOURCE, id))?;

        let question = request.question().unwrap_or(&existing.question).to_string();
        let answer = request.answer().unwrap_or(&existing.answer).to_string();

        let outcome = self.translator.translate_content(&question, &answer).await;

        let updated = self
            .repository
            .update_by_id(
                id,
                FaqPatch {
                    question: Some(question),
                    answer: Some(answer),
                    translations: Some(outcome.translations),
                },
            )
            .await?
            .ok_or_else(|| FaqError::not_found(RESOURCE, id))?;

        self.invalidate_faq(id).await;

        info!("FAQ updated: {}", id);
        Ok(UpdateFaqResponse {
            faq: FaqDetailResponse::project(&updated, self.languages.base().as_str(), &self.languages),
            translation_report: outcome.report,
        })
    }

    async fn delete_faq(&self, id: FaqId) -> FaqResult<()> {
        if !self.repository.delete_by_id(id).await? {
            return Err(FaqError::not_found(RESOURCE, id));
        }

        self.invalidate_faq(id).await;

        info!("FAQ deleted: {}", id);
        Ok(())
    }

    async fn clear_cache(&self) {
        self.cache.evict_all().await;
        info!("FAQ cache cleared");
    }
}

impl std::fmt::Debug for FaqServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaqServiceComponent").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheLookup, InMemoryCacheService};
    use crate::translation::{TranslationProvider, Translator};
    use chrono::Utc;
    use faq_core::{Faq, LanguageCode, NewFaq, Translation, Translations};
    use faq_repository::InMemoryFaqRepository;
    use mockall::mock;
    use std::time::Duration;

    mock! {
        pub Repo {}

        #[async_trait]
        impl FaqRepository for Repo {
            async fn find_all(&self) -> FaqResult<Vec<Faq>>;
            async fn find_by_id(&self, id: FaqId) -> FaqResult<Option<Faq>>;
            async fn insert(&self, faq: NewFaq) -> FaqResult<Faq>;
            async fn update_by_id(&self, id: FaqId, patch: FaqPatch) -> FaqResult<Option<Faq>>;
            async fn delete_by_id(&self, id: FaqId) -> FaqResult<bool>;
        }
    }

    /// Echoes text tagged with the target; fails for `bn`.
    struct TaggingProvider;

    #[async_trait]
    impl TranslationProvider for TaggingProvider {
        async fn translate(&self, text: &str, _source: &str, target: &str) -> FaqResult<String> {
            if target == "bn" {
                return Err(FaqError::external_service("translation", "bn unavailable"));
            }
            Ok(format!("[{target}] {text}"))
        }
    }

    /// A cache whose backend is always down.
    struct BrokenCache;

    #[async_trait]
    impl CacheInterface for BrokenCache {
        async fn get_raw(&self, _key: &str) -> FaqResult<Option<String>> {
            Err(FaqError::Cache("connection refused".to_string()))
        }
        async fn set_raw(&self, _key: &str, _value: &str) -> FaqResult<()> {
            Err(FaqError::Cache("connection refused".to_string()))
        }
        async fn delete(&self, _key: &str) -> FaqResult<bool> {
            Err(FaqError::Cache("connection refused".to_string()))
        }
        async fn delete_pattern(&self, _pattern: &str) -> FaqResult<u64> {
            Err(FaqError::Cache("connection refused".to_string()))
        }
        async fn clear_all(&self) -> FaqResult<()> {
            Err(FaqError::Cache("connection refused".to_string()))
        }
        fn is_enabled(&self) -> bool {
            true
        }
    }

    /// Returns an empty string for `hi`; tags every other target.
    struct BlankProvider;

    #[async_trait]
    impl TranslationProvider for BlankProvider {
        async fn translate(&self, text: &str, _source: &str, target: &str) -> FaqResult<String> {
            if target == "hi" {
                return Ok(String::new());
            }
            Ok(format!("[{target}] {text}"))
        }
    }

    fn translator() -> Arc<dyn TranslatorInterface> {
        Arc::new(Translator::new(
            Arc::new(TaggingProvider),
            LanguageResolver::default(),
        ))
    }

    fn service_with(
        repository: Arc<dyn FaqRepository>,
        cache: Arc<dyn CacheInterface>,
    ) -> FaqServiceComponent {
        FaqServiceComponent::new(repository, cache, translator(), LanguageResolver::default())
    }

    fn in_memory() -> (FaqServiceComponent, Arc<InMemoryCacheService>) {
        let cache = Arc::new(InMemoryCacheService::new(Duration::from_secs(3600)));
        let service = service_with(Arc::new(InMemoryFaqRepository::new()), cache.clone());
        (service, cache)
    }

    fn stored_faq() -> Faq {
        let mut translations = Translations::new();
        translations.insert("hi".into(), Translation::new("Q1 hi", "A1 hi"));
        Faq {
            id: FaqId::new(),
            question: "Q1".to_string(),
            answer: "A1".to_string(),
            translations,
            created_at: Utc::now(),
        }
    }

    fn create_request(question: &str, answer: &str) -> CreateFaqRequest {
        CreateFaqRequest {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    #[tokio::test]
    async fn test_list_second_call_is_served_from_cache() {
        let faq = stored_faq();
        let mut repo = MockRepo::new();
        repo.expect_find_all()
            .times(1)
            .returning(move || Ok(vec![faq.clone()]));

        let service = service_with(Arc::new(repo), Arc::new(InMemoryCacheService::default()));

        let first = service.list_faqs(Some("hi")).await.unwrap();
        let second = service.list_faqs(Some("hi")).await.unwrap();

        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
        assert_eq!(first.language, "hi");
        assert_eq!(first.count, 1);
        assert_eq!(first.faqs[0].question, "Q1 hi");
        assert_eq!(first.supported_languages.len(), 5);
    }

    #[tokio::test]
    async fn test_list_defaults_to_base_language() {
        let faq = stored_faq();
        let mut repo = MockRepo::new();
        repo.expect_find_all()
            .times(1)
            .returning(move || Ok(vec![faq.clone()]));

        let service = service_with(Arc::new(repo), Arc::new(InMemoryCacheService::default()));

        let none = service.list_faqs(None).await.unwrap();
        let empty = service.list_faqs(Some("")).await.unwrap();

        assert_eq!(none.language, "en");
        assert_eq!(none.faqs[0].question, "Q1");
        assert_eq!(none, empty);
    }

    #[tokio::test]
    async fn test_unsupported_language_never_reaches_store_or_cache() {
        let mut repo = MockRepo::new();
        repo.expect_find_all().never();
        repo.expect_find_by_id().never();
        let cache = Arc::new(InMemoryCacheService::default());

        let service = service_with(Arc::new(repo), cache.clone());

        let err = service.list_faqs(Some("de")).await.unwrap_err();
        assert_eq!(err.field(), Some("lang"));
        let err = service.get_faq(FaqId::new(), Some("de")).await.unwrap_err();
        assert_eq!(err.field(), Some("lang"));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_translation_falls_back() {
        let faq = stored_faq();
        let id = faq.id;
        let mut repo = MockRepo::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(faq.clone())));

        let service = service_with(Arc::new(repo), Arc::new(InMemoryCacheService::default()));

        let es = service.get_faq(id, Some("es")).await.unwrap();
        assert_eq!(es.question, "Q1");
        assert_eq!(es.answer, "A1");
        assert_eq!(
            es.supported_languages,
            vec![LanguageCode::from("en"), LanguageCode::from("hi")]
        );

        // Served from cache: the mock allows a single store call.
        let again = service.get_faq(id, Some("es")).await.unwrap();
        assert_eq!(es, again);
    }

    #[tokio::test]
    async fn test_get_not_found_is_not_cached() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_id().times(2).returning(|_| Ok(None));
        let cache = Arc::new(InMemoryCacheService::default());

        let service = service_with(Arc::new(repo), cache.clone());
        let id = FaqId::new();

        for _ in 0..2 {
            let err = service.get_faq(id, None).await.unwrap_err();
            assert_eq!(err.error_code(), "NOT_FOUND");
        }
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut repo = MockRepo::new();
        repo.expect_find_all()
            .returning(|| Err(FaqError::Database("connection refused".to_string())));

        let service = service_with(Arc::new(repo), Arc::new(InMemoryCacheService::default()));

        let err = service.list_faqs(None).await.unwrap_err();
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }

    #[tokio::test]
    async fn test_cache_outage_degrades_to_store() {
        let faq = stored_faq();
        let mut repo = MockRepo::new();
        repo.expect_find_all()
            .times(2)
            .returning(move || Ok(vec![faq.clone()]));
        repo.expect_delete_by_id().times(1).returning(|_| Ok(true));

        let service = service_with(Arc::new(repo), Arc::new(BrokenCache));

        assert_eq!(service.list_faqs(None).await.unwrap().count, 1);
        assert_eq!(service.list_faqs(None).await.unwrap().count, 1);
        service.delete_faq(FaqId::new()).await.unwrap();
        service.clear_cache().await;
    }

    #[tokio::test]
    async fn test_cache_outage_on_item_reads_and_evictions() {
        let faq = stored_faq();
        let id = faq.id;
        let repository = Arc::new(InMemoryFaqRepository::with_faqs(vec![faq]));
        let service = service_with(repository, Arc::new(BrokenCache));

        let detail = service.get_faq(id, Some("hi")).await.unwrap();
        assert_eq!(detail.question, "Q1 hi");

        // Eviction failures are logged, never surfaced.
        let cache = BrokenCache;
        cache.evict(&cache_keys::faq_by_id(id, "hi")).await;
        assert_eq!(cache.evict_pattern(&cache_keys::faq_list_pattern()).await, 0);
        cache.evict_all().await;

        assert_eq!(service.get_faq(id, None).await.unwrap().question, "Q1");
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_is_bypassed() {
        let (service, cache) = in_memory();
        cache.set_raw("faqs:en", "{not json").await.unwrap();

        let list = service.list_faqs(Some("en")).await.unwrap();
        assert_eq!(list.count, 0);

        // Repopulated with a valid entry.
        let cached = cache.lookup::<FaqListResponse>("faqs:en").await.hit();
        assert_eq!(cached.map(|list| list.count), Some(0));
    }

    // =========================================================================
    // Writes
    // =========================================================================

    #[tokio::test]
    async fn test_create_keeps_successful_translations_only() {
        let (service, _) = in_memory();

        let created = service.create_faq(create_request("Q1", "A1")).await.unwrap();

        assert_eq!(created.faq.translations.get("hi").unwrap().question, "[hi] Q1");
        assert!(!created.faq.translations.contains("bn"));
        assert_eq!(created.translation_report.failed, vec![LanguageCode::from("bn")]);

        let detail = service.get_faq(created.faq.id, Some("bn")).await.unwrap();
        assert_eq!(detail.question, "Q1");
        assert!(detail.supported_languages.contains(&LanguageCode::from("hi")));
        assert!(!detail.supported_languages.contains(&LanguageCode::from("bn")));
    }

    #[tokio::test]
    async fn test_blank_translation_is_served_in_base_language() {
        let translator = Arc::new(Translator::new(
            Arc::new(BlankProvider),
            LanguageResolver::default(),
        ));
        let service = FaqServiceComponent::new(
            Arc::new(InMemoryFaqRepository::new()),
            Arc::new(InMemoryCacheService::default()),
            translator,
            LanguageResolver::default(),
        );

        let created = service.create_faq(create_request("Q1", "A1")).await.unwrap();
        assert!(!created.faq.translations.contains("hi"));
        assert!(created
            .translation_report
            .failed
            .contains(&LanguageCode::from("hi")));

        let detail = service.get_faq(created.faq.id, Some("hi")).await.unwrap();
        assert_eq!(detail.question, "Q1");
        assert_eq!(detail.answer, "A1");
        assert!(!detail.supported_languages.contains(&LanguageCode::from("hi")));
    }

    #[tokio::test]
    async fn test_create_requires_question_and_answer() {
        let mut repo = MockRepo::new();
        repo.expect_insert().never();
        let service = service_with(Arc::new(repo), Arc::new(InMemoryCacheService::default()));

        let err = service.create_faq(create_request("", "A1")).await.unwrap_err();
        assert_eq!(err.field(), Some("question"));
        let err = service.create_faq(create_request("Q1", " ")).await.unwrap_err();
        assert_eq!(err.field(), Some("answer"));
    }

    #[tokio::test]
    async fn test_create_invalidates_every_list_language() {
        let (service, cache) = in_memory();
        let existing = service.create_faq(create_request("Q0", "A0")).await.unwrap();

        for lang in ["en", "hi", "fr"] {
            service.list_faqs(Some(lang)).await.unwrap();
        }
        service.get_faq(existing.faq.id, Some("en")).await.unwrap();
        assert_eq!(cache.len(), 4);

        service.create_faq(create_request("Q1", "A1")).await.unwrap();

        for lang in ["en", "hi", "fr"] {
            assert_eq!(
                cache.lookup::<FaqListResponse>(&cache_keys::faq_list(lang)).await,
                CacheLookup::Miss
            );
        }
        // Item views are untouched by a create.
        assert_eq!(cache.len(), 1);
        assert_eq!(service.list_faqs(Some("hi")).await.unwrap().count, 2);
    }

    #[tokio::test]
    async fn test_update_then_list_is_not_stale() {
        let (service, _) = in_memory();
        let created = service.create_faq(create_request("Q1", "A1")).await.unwrap();
        service.list_faqs(Some("en")).await.unwrap();
        service.get_faq(created.faq.id, Some("hi")).await.unwrap();

        let updated = service
            .update_faq(
                created.faq.id,
                UpdateFaqRequest {
                    question: Some("Q2".to_string()),
                    answer: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.faq.question, "Q2");
        assert_eq!(updated.faq.answer, "A1");
        assert_eq!(updated.faq.created_at, created.faq.created_at);

        let list = service.list_faqs(Some("en")).await.unwrap();
        assert_eq!(list.faqs[0].question, "Q2");

        let hi = service.get_faq(created.faq.id, Some("hi")).await.unwrap();
        assert_eq!(hi.question, "[hi] Q2");
        assert_eq!(hi.answer, "[hi] A1");
    }

    #[tokio::test]
    async fn test_update_blank_field_keeps_existing() {
        let (service, _) = in_memory();
        let created = service.create_faq(create_request("Q1", "A1")).await.unwrap();

        let updated = service
            .update_faq(
                created.faq.id,
                UpdateFaqRequest {
                    question: Some(String::new()),
                    answer: Some("A2".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.faq.question, "Q1");
        assert_eq!(updated.faq.answer, "A2");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        repo.expect_update_by_id().never();

        let service = service_with(Arc::new(repo), Arc::new(InMemoryCacheService::default()));

        let err = service
            .update_faq(FaqId::new(), UpdateFaqRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let (service, cache) = in_memory();
        let created = service.create_faq(create_request("Q1", "A1")).await.unwrap();
        let id = created.faq.id;

        service.get_faq(id, Some("en")).await.unwrap();
        service.get_faq(id, Some("fr")).await.unwrap();
        service.list_faqs(None).await.unwrap();

        service.delete_faq(id).await.unwrap();
        assert!(cache.is_empty());

        let err = service.get_faq(id, Some("en")).await.unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(service.list_faqs(None).await.unwrap().count, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (service, _) = in_memory();
        let err = service.delete_faq(FaqId::new()).await.unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_clear_cache() {
        let (service, cache) = in_memory();
        service.list_faqs(None).await.unwrap();
        service.list_faqs(Some("hi")).await.unwrap();
        assert_eq!(cache.len(), 2);

        service.clear_cache().await;
        assert!(cache.is_empty());
    }
}
