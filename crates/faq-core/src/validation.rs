//! Validation utilities.

use crate::FaqError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `FaqError` on failure.
    fn validate_request(&self) -> Result<(), FaqError> {
        self.validate().map_err(validation_errors_to_faq_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `FaqError`.
///
/// The error names the first offending field (alphabetically, so the result
/// is stable); the message lists every field failure.
#[must_use]
pub fn validation_errors_to_faq_error(errors: ValidationErrors) -> FaqError {
    let mut failures: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                ((*field).to_string(), message)
            })
        })
        .collect();
    failures.sort();

    let field = failures
        .first()
        .map_or_else(|| "request".to_string(), |(field, _)| field.clone());
    let message = failures
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ");

    FaqError::validation(field, message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(custom(function = "rules::not_blank", message = "Question is required"))]
        question: String,
        #[validate(custom(function = "rules::not_blank", message = "Answer is required"))]
        answer: String,
    }

    #[test]
    fn test_valid_request_passes() {
        let sample = Sample {
            question: "Q1".to_string(),
            answer: "A1".to_string(),
        };
        assert!(sample.validate_request().is_ok());
    }

    #[test]
    fn test_blank_field_is_named() {
        let sample = Sample {
            question: "Q1".to_string(),
            answer: "   ".to_string(),
        };
        let err = sample.validate_request().unwrap_err();
        assert_eq!(err.field(), Some("answer"));
        assert!(err.to_string().contains("Answer is required"));
    }

    #[test]
    fn test_multiple_failures_name_first_field() {
        let sample = Sample {
            question: String::new(),
            answer: String::new(),
        };
        let err = sample.validate_request().unwrap_err();
        assert_eq!(err.field(), Some("answer"));
        assert!(err.to_string().contains("question: Question is required"));
    }

    #[test]
    fn test_not_blank_rule() {
        assert!(rules::not_blank("text").is_ok());
        assert!(rules::not_blank("").is_err());
        assert!(rules::not_blank(" \t").is_err());
    }
}
