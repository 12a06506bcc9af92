//! FAQ controller.

use crate::{
    extractors::{FaqIdPath, ValidatedJson},
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use faq_service::{
    CreateFaqRequest, CreateFaqResponse, FaqDetailResponse, FaqListResponse, UpdateFaqRequest,
    UpdateFaqResponse,
};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

/// Language selection for read endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LanguageQuery {
    /// Language code; the base language when omitted.
    pub lang: Option<String>,
}

/// Creates the FAQ router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_faqs).post(create_faq))
        .route("/:id", get(get_faq).put(update_faq).delete(delete_faq))
}

/// List every FAQ in one language.
#[utoipa::path(
    get,
    path = "/api/faqs",
    tag = "faqs",
    params(LanguageQuery),
    responses(
        (status = 200, description = "FAQs in the requested language", body = FaqListResponse),
        (status = 400, description = "Unsupported language", body = faq_core::ErrorResponse)
    )
)]
pub async fn list_faqs(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> ApiResult<FaqListResponse> {
    debug!("List FAQs request: lang={:?}", query.lang);

    let response = state.faq_service.list_faqs(query.lang.as_deref()).await?;
    ok(response)
}

/// Get one FAQ in one language.
#[utoipa::path(
    get,
    path = "/api/faqs/{id}",
    tag = "faqs",
    params(
        ("id" = String, Path, description = "FAQ id"),
        LanguageQuery
    ),
    responses(
        (status = 200, description = "FAQ in the requested language", body = FaqDetailResponse),
        (status = 400, description = "Malformed id or unsupported language", body = faq_core::ErrorResponse),
        (status = 404, description = "FAQ not found", body = faq_core::ErrorResponse)
    )
)]
pub async fn get_faq(
    State(state): State<AppState>,
    FaqIdPath(id): FaqIdPath,
    Query(query): Query<LanguageQuery>,
) -> ApiResult<FaqDetailResponse> {
    debug!("Get FAQ request: {} lang={:?}", id, query.lang);

    let response = state.faq_service.get_faq(id, query.lang.as_deref()).await?;
    ok(response)
}

/// Create a FAQ and translate it into every supported language.
#[utoipa::path(
    post,
    path = "/api/faqs",
    tag = "faqs",
    request_body = CreateFaqRequest,
    responses(
        (status = 201, description = "FAQ created", body = CreateFaqResponse),
        (status = 400, description = "Question or answer missing", body = faq_core::ErrorResponse)
    )
)]
pub async fn create_faq(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateFaqRequest>,
) -> Result<(StatusCode, Json<CreateFaqResponse>), AppError> {
    debug!("Create FAQ request");

    let response = state.faq_service.create_faq(request).await?;
    Ok(created(response))
}

/// Update a FAQ's base-language text and re-translate it.
#[utoipa::path(
    put,
    path = "/api/faqs/{id}",
    tag = "faqs",
    params(("id" = String, Path, description = "FAQ id")),
    request_body = UpdateFaqRequest,
    responses(
        (status = 200, description = "FAQ updated", body = UpdateFaqResponse),
        (status = 400, description = "Malformed id or body", body = faq_core::ErrorResponse),
        (status = 404, description = "FAQ not found", body = faq_core::ErrorResponse)
    )
)]
pub async fn update_faq(
    State(state): State<AppState>,
    FaqIdPath(id): FaqIdPath,
    ValidatedJson(request): ValidatedJson<UpdateFaqRequest>,
) -> ApiResult<UpdateFaqResponse> {
    debug!("Update FAQ request: {}", id);

    let response = state.faq_service.update_faq(id, request).await?;
    ok(response)
}

/// Delete a FAQ.
#[utoipa::path(
    delete,
    path = "/api/faqs/{id}",
    tag = "faqs",
    params(("id" = String, Path, description = "FAQ id")),
    responses(
        (status = 204, description = "FAQ deleted"),
        (status = 400, description = "Malformed id", body = faq_core::ErrorResponse),
        (status = 404, description = "FAQ not found", body = faq_core::ErrorResponse)
    )
)]
pub async fn delete_faq(
    State(state): State<AppState>,
    FaqIdPath(id): FaqIdPath,
) -> Result<StatusCode, AppError> {
    debug!("Delete FAQ request: {}", id);

    state.faq_service.delete_faq(id).await?;
    Ok(no_content())
}
