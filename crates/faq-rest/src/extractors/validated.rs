//! Validated JSON extractor.
//!
//! `ValidatedJson<T>` deserializes the body and runs its `validator` rules.
//! Both unreadable bodies and rule failures are answered with 400 and an
//! [`ErrorResponse`] whose details list every failing field.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use faq_core::{validation_errors_to_faq_error, ErrorResponse, FaqError, FieldError};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON extractor that validates the deserialized value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for validated JSON extraction.
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// Missing content type, unreadable body, or JSON of the wrong shape.
    JsonError(JsonRejection),
    /// Field rules failed.
    ValidationError(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let body = match self {
            Self::JsonError(rejection) => ErrorResponse::from_error(&FaqError::validation(
                "body",
                format!("Invalid JSON: {}", rejection.body_text()),
            )),
            Self::ValidationError(errors) => {
                let details = convert_validation_errors(&errors);
                ErrorResponse::from_error(&validation_errors_to_faq_error(errors))
                    .with_details(details)
            }
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Flattens validator errors into field errors, ordered by field name.
fn convert_validation_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| FieldError {
                field: (*field).to_string(),
                message: err
                    .message
                    .as_ref()
                    .map_or_else(|| format!("Validation failed for field '{}'", field), ToString::to_string),
                code: err.code.to_string(),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}
