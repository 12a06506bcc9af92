//! OpenAPI documentation for the REST API.

use faq_core::{ErrorResponse, Faq, FaqId, FieldError, Translation, Translations};
use faq_service::{
    CreateFaqRequest, CreateFaqResponse, FaqDetailResponse, FaqListResponse, FaqSummary,
    TranslationReport, UpdateFaqRequest, UpdateFaqResponse,
};
use utoipa::OpenApi;

use crate::controllers::HealthResponse;

/// OpenAPI documentation for the FAQ API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Multilingual FAQ API",
        version = "1.0.0",
        description = "FAQ entries served in the caller's language with base-language fallback"
    ),
    paths(
        crate::controllers::faq_controller::list_faqs,
        crate::controllers::faq_controller::get_faq,
        crate::controllers::faq_controller::create_faq,
        crate::controllers::faq_controller::update_faq,
        crate::controllers::faq_controller::delete_faq,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            FaqId,
            Faq,
            Translations,
            Translation,
            ErrorResponse,
            FieldError,
            CreateFaqRequest,
            UpdateFaqRequest,
            FaqSummary,
            FaqListResponse,
            FaqDetailResponse,
            CreateFaqResponse,
            UpdateFaqResponse,
            TranslationReport,
            HealthResponse,
        )
    ),
    tags(
        (name = "faqs", description = "FAQ management in every supported language"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
