//! Dependency injection modules using Shaku.
//!
//! - `FaqModule`: MySQL store, Redis cache, HTTP translation provider
//! - `InMemoryModule`: process-local store and cache for local development

use deadpool_redis::{Config as RedisPoolConfig, Pool, PoolConfig, Runtime};
use faq_config::{AppConfig, RedisConfig};
use faq_core::{module, FaqError, FaqResult, HasComponent};
use faq_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, InMemoryFaqRepository,
    MySqlFaqRepository,
};
use faq_service::{
    FaqService, FaqServiceComponent, FaqServiceComponentParameters, HttpTranslationProvider,
    InMemoryCacheService, InMemoryCacheServiceParameters, RedisCacheService,
    RedisCacheServiceParameters, TranslationProvider, Translator, TranslatorParameters,
};
use std::sync::Arc;
use tracing::info;

module! {
    pub FaqModule {
        components = [
            DatabasePool,
            MySqlFaqRepository,
            RedisCacheService,
            HttpTranslationProvider,
            Translator,
            FaqServiceComponent,
        ],
        providers = [],
    }
}

module! {
    pub InMemoryModule {
        components = [
            InMemoryFaqRepository,
            InMemoryCacheService,
            HttpTranslationProvider,
            Translator,
            FaqServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the production module: connects MySQL and, when enabled, Redis.
pub async fn build_faq_module(config: &AppConfig) -> FaqResult<Arc<FaqModule>> {
    let db_pool = DatabasePool::connect(&config.database).await?;
    let cache_pool = create_redis_pool(&config.redis)?;
    let provider = translation_provider(config)?;
    let languages = config.languages.resolver();

    let module = FaqModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.pool(),
        })
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: cache_pool,
            ttl: config.redis.ttl(),
        })
        .with_component_override::<dyn TranslationProvider>(Box::new(provider))
        .with_component_parameters::<Translator>(TranslatorParameters {
            languages: languages.clone(),
        })
        .with_component_parameters::<FaqServiceComponent>(FaqServiceComponentParameters {
            languages,
        })
        .build();

    Ok(Arc::new(module))
}

/// Builds a module that needs neither MySQL nor Redis.
pub fn build_in_memory_module(config: &AppConfig) -> FaqResult<Arc<InMemoryModule>> {
    let provider = translation_provider(config)?;
    let languages = config.languages.resolver();

    let module = InMemoryModule::builder()
        .with_component_parameters::<InMemoryCacheService>(InMemoryCacheServiceParameters {
            entries: Default::default(),
            ttl: config.redis.ttl(),
        })
        .with_component_override::<dyn TranslationProvider>(Box::new(provider))
        .with_component_parameters::<Translator>(TranslatorParameters {
            languages: languages.clone(),
        })
        .with_component_parameters::<FaqServiceComponent>(FaqServiceComponentParameters {
            languages,
        })
        .build();

    Ok(Arc::new(module))
}

/// Creates the Redis pool, or `None` when Redis is switched off.
///
/// The pool connects lazily, so an unreachable Redis surfaces later as cache
/// unavailability rather than a startup failure.
pub fn create_redis_pool(config: &RedisConfig) -> FaqResult<Option<Arc<Pool>>> {
    if !config.enabled {
        info!("Redis cache disabled");
        return Ok(None);
    }

    let mut redis_cfg = RedisPoolConfig::from_url(&config.url);
    redis_cfg.pool = Some(PoolConfig::new(config.pool_size as usize));

    let pool = redis_cfg
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| FaqError::Cache(format!("Failed to create Redis pool: {}", e)))?;

    info!("Redis cache pool created ({} connections)", config.pool_size);
    Ok(Some(Arc::new(pool)))
}

fn translation_provider(config: &AppConfig) -> FaqResult<HttpTranslationProvider> {
    let provider = HttpTranslationProvider::from_config(&config.translation)?;
    if provider.is_enabled() {
        info!("Machine translation enabled");
    } else {
        info!("Machine translation disabled; new FAQs are stored untranslated");
    }
    Ok(provider)
}

// ============================================================================
// Service Resolution Helpers
// ============================================================================

/// Resolves the FAQ service from a module.
pub trait ServiceResolver {
    fn faq_service(&self) -> Arc<dyn FaqService>;
}

impl ServiceResolver for FaqModule {
    fn faq_service(&self) -> Arc<dyn FaqService> {
        self.resolve()
    }
}

impl ServiceResolver for InMemoryModule {
    fn faq_service(&self) -> Arc<dyn FaqService> {
        self.resolve()
    }
}

/// Resolves the database pool.
pub trait DatabaseResolver {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl DatabaseResolver for FaqModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
