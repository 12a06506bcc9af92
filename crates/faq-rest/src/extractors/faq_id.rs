//! FAQ id path extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use faq_core::{FaqError, FaqId};

/// The `{id}` path segment parsed as a [`FaqId`].
///
/// A malformed id is rejected with a 400 validation error naming `id`.
#[derive(Debug, Clone, Copy)]
pub struct FaqIdPath(pub FaqId);

#[async_trait]
impl<S> FromRequestParts<S> for FaqIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError(FaqError::validation("id", e.body_text())))?;

        FaqId::parse(&raw)
            .map(FaqIdPath)
            .map_err(|_| AppError(FaqError::validation("id", format!("Invalid FAQ id '{}'", raw))))
    }
}
