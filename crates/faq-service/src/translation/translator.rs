//! Fan-out of a question/answer pair to every translation target.

use super::TranslationProvider;
use async_trait::async_trait;
use faq_core::{FaqError, FaqResult, LanguageCode, LanguageResolver, Translation, Translations};
use futures::future::{join_all, try_join};
use serde::{Deserialize, Serialize};
use shaku::{Component, Interface};
use std::sync::Arc;
use tracing::{debug, warn};
use utoipa::ToSchema;

/// Which languages were translated and which were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationReport {
    #[schema(value_type = Vec<String>)]
    pub translated: Vec<LanguageCode>,
    #[schema(value_type = Vec<String>)]
    pub failed: Vec<LanguageCode>,
}

/// Successful translations plus the per-language report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationOutcome {
    pub translations: Translations,
    pub report: TranslationReport,
}

/// Translates FAQ content into every configured target language.
#[async_trait]
pub trait TranslatorInterface: Interface + Send + Sync {
    /// Translates both fields into each target.
    ///
    /// Languages are attempted independently and concurrently. A failure or
    /// a blank result on either field drops only that language; this never
    /// fails as a whole.
    async fn translate_content(&self, question: &str, answer: &str) -> TranslationOutcome;
}

/// Default translator backed by a [`TranslationProvider`].
#[derive(Component)]
#[shaku(interface = TranslatorInterface)]
pub struct Translator {
    #[shaku(inject)]
    provider: Arc<dyn TranslationProvider>,
    languages: LanguageResolver,
}

impl Translator {
    #[must_use]
    pub fn new(provider: Arc<dyn TranslationProvider>, languages: LanguageResolver) -> Self {
        Self { provider, languages }
    }

    async fn translate_pair(
        &self,
        question: &str,
        answer: &str,
        target: &LanguageCode,
    ) -> FaqResult<Translation> {
        let source = self.languages.base().as_str();
        let (question, answer) = try_join(
            self.provider.translate(question, source, target.as_str()),
            self.provider.translate(answer, source, target.as_str()),
        )
        .await?;

        if question.trim().is_empty() || answer.trim().is_empty() {
            return Err(FaqError::external_service(
                "translation",
                format!("empty translation into {}", target),
            ));
        }
        Ok(Translation { question, answer })
    }
}

#[async_trait]
impl TranslatorInterface for Translator {
    async fn translate_content(&self, question: &str, answer: &str) -> TranslationOutcome {
        let targets = self.languages.translation_targets();

        let results = join_all(
            targets
                .iter()
                .map(|target| self.translate_pair(question, answer, target)),
        )
        .await;

        let mut outcome = TranslationOutcome::default();
        for (target, result) in targets.iter().zip(results) {
            match result {
                Ok(translation) => {
                    outcome.translations.insert(target.clone(), translation);
                    outcome.report.translated.push(target.clone());
                }
                Err(e) => {
                    warn!("Translation to {} failed: {}", target, e);
                    outcome.report.failed.push(target.clone());
                }
            }
        }

        debug!(
            "Translated into {} of {} languages",
            outcome.report.translated.len(),
            targets.len()
        );
        outcome
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("languages", &self.languages)
            .finish_non_exhaustive()
    }
}
