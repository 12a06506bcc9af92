//! Main application router.

use crate::{
    controllers::{faq_controller, health_controller},
    middleware::logging_middleware,
    openapi::ApiDoc,
    state::AppState,
};
use axum::{http::HeaderValue, middleware, routing::get, Router};
use faq_config::ServerConfig;
use faq_repository::DatabasePoolInterface;
use faq_service::FaqService;
use shaku::{HasComponent, Module};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the application router from a Shaku module.
pub fn create_router<M>(module: &M, server_config: &ServerConfig) -> Router
where
    M: Module + HasComponent<dyn FaqService> + HasComponent<dyn DatabasePoolInterface>,
{
    create_router_with_state(AppState::from_module(module), server_config)
}

/// Creates the application router around already-built state.
pub fn create_router_with_state(state: AppState, server_config: &ServerConfig) -> Router {
    let api_router = Router::new().nest("/faqs", faq_controller::router());

    let timeout = Duration::from_secs(server_config.request_timeout_secs.max(1));

    let router = Router::new()
        .merge(health_controller::router())
        .nest("/api", api_router)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(root))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(logging_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(server_config))
                .layer(TimeoutLayer::new(timeout))
                .layer(CompressionLayer::new()),
        );

    info!("Router created with /api/faqs and Swagger UI at /swagger-ui");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Multilingual FAQ API"
}
