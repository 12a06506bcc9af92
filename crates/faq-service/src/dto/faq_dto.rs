//! FAQ-related DTOs.

use crate::translation::TranslationReport;
use chrono::{DateTime, Utc};
use faq_core::{Faq, FaqId, LanguageCode, LanguageResolver};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a FAQ in the base language.
///
/// Missing fields deserialize as empty so validation can name them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFaqRequest {
    #[serde(default)]
    #[validate(custom(function = "faq_core::rules::not_blank", message = "Question is required"))]
    pub question: String,

    #[serde(default)]
    #[validate(custom(function = "faq_core::rules::not_blank", message = "Answer is required"))]
    pub answer: String,
}

/// Request to update a FAQ. Absent or blank fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFaqRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl UpdateFaqRequest {
    /// Supplied question, if it carries any text.
    #[must_use]
    pub fn question(&self) -> Option<&str> {
        non_blank(self.question.as_deref())
    }

    /// Supplied answer, if it carries any text.
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        non_blank(self.answer.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// One FAQ in a list, rendered in the requested language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqSummary {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

impl FaqSummary {
    #[must_use]
    pub fn project(faq: &Faq, lang: &str, languages: &LanguageResolver) -> Self {
        Self {
            id: faq.id,
            question: languages.resolve_question(faq, lang).to_string(),
            answer: languages.resolve_answer(faq, lang).to_string(),
            created_at: faq.created_at,
        }
    }
}

/// Every FAQ rendered in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqListResponse {
    /// Language the FAQs are rendered in.
    #[schema(value_type = String)]
    pub language: LanguageCode,
    /// Every language a caller may request.
    #[schema(value_type = Vec<String>)]
    pub supported_languages: Vec<LanguageCode>,
    pub count: usize,
    pub faqs: Vec<FaqSummary>,
}

/// One FAQ rendered in the requested language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqDetailResponse {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    /// Languages this FAQ can be read in.
    #[schema(value_type = Vec<String>)]
    pub supported_languages: Vec<LanguageCode>,
}

impl FaqDetailResponse {
    #[must_use]
    pub fn project(faq: &Faq, lang: &str, languages: &LanguageResolver) -> Self {
        Self {
            id: faq.id,
            question: languages.resolve_question(faq, lang).to_string(),
            answer: languages.resolve_answer(faq, lang).to_string(),
            created_at: faq.created_at,
            supported_languages: languages.supported_languages(faq),
        }
    }
}

/// A newly created FAQ with its translations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaqResponse {
    #[serde(flatten)]
    pub faq: Faq,
    pub translation_report: TranslationReport,
}

/// An updated FAQ in the base language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaqResponse {
    #[serde(flatten)]
    pub faq: FaqDetailResponse,
    pub translation_report: TranslationReport,
}
