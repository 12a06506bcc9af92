//! Language codes and per-language resolution of FAQ text.
//!
//! Resolution never fails: a requested language without a translation falls
//! back to the base-language text. Rejecting unsupported codes is the job of
//! [`LanguageResolver::require_supported`], which callers run before any
//! resolution happens.

use crate::{Faq, FaqError, FaqResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display};

/// Base language used when nothing is configured.
pub const DEFAULT_BASE_LANGUAGE: &str = "en";

/// Translation targets used when nothing is configured.
pub const DEFAULT_TRANSLATION_LANGUAGES: [&str; 4] = ["hi", "bn", "fr", "es"];

/// A language code such as `en` or `hi`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema), schema(value_type = String, example = "hi"))]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LanguageCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Returns the question of `faq` in `code`, falling back to the base text
/// when the translation is missing or blank.
#[must_use]
pub fn resolve_question<'a>(faq: &'a Faq, code: &str, base: &str) -> &'a str {
    if code == base {
        return &faq.question;
    }
    faq.translations
        .get(code)
        .map(|t| t.question.as_str())
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(faq.question.as_str())
}

/// Returns the answer of `faq` in `code`, falling back to the base text
/// when the translation is missing or blank.
#[must_use]
pub fn resolve_answer<'a>(faq: &'a Faq, code: &str, base: &str) -> &'a str {
    if code == base {
        return &faq.answer;
    }
    faq.translations
        .get(code)
        .map(|t| t.answer.as_str())
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(faq.answer.as_str())
}

/// Languages `faq` can be read in: the base language followed by every
/// translated language, without duplicates.
#[must_use]
pub fn supported_languages(faq: &Faq, base: &LanguageCode) -> Vec<LanguageCode> {
    let mut languages = vec![base.clone()];
    for code in faq.translations.codes() {
        if !languages.contains(code) {
            languages.push(code.clone());
        }
    }
    languages
}

/// Validates language codes and resolves FAQ text for a requested language.
///
/// Holds the base language and the translation targets. The targets never
/// contain the base language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageResolver {
    base: LanguageCode,
    targets: Vec<LanguageCode>,
}

impl LanguageResolver {
    /// Creates a resolver. The base language is dropped from `targets` and
    /// duplicates are removed, keeping first occurrence order.
    #[must_use]
    pub fn new<I, S>(base: impl Into<LanguageCode>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LanguageCode>,
    {
        let base = base.into();
        let mut deduped: Vec<LanguageCode> = Vec::new();
        for code in targets.into_iter().map(Into::into) {
            if code != base && !deduped.contains(&code) {
                deduped.push(code);
            }
        }
        Self {
            base,
            targets: deduped,
        }
    }

    /// The base (authoring) language.
    #[must_use]
    pub fn base(&self) -> &LanguageCode {
        &self.base
    }

    /// Languages content is machine-translated into.
    #[must_use]
    pub fn translation_targets(&self) -> &[LanguageCode] {
        &self.targets
    }

    /// Every language a caller may request: base first, then the targets.
    #[must_use]
    pub fn all_languages(&self) -> Vec<LanguageCode> {
        std::iter::once(self.base.clone())
            .chain(self.targets.iter().cloned())
            .collect()
    }

    /// True for the base language or any configured translation target.
    #[must_use]
    pub fn is_supported(&self, code: &str) -> bool {
        self.base == code || self.targets.iter().any(|t| t == code)
    }

    /// Validates a requested language.
    ///
    /// A missing or empty code selects the base language. An unsupported
    /// code is a validation error on the `lang` field.
    pub fn require_supported(&self, code: Option<&str>) -> FaqResult<LanguageCode> {
        let code = match code.map(str::trim) {
            None | Some("") => return Ok(self.base.clone()),
            Some(code) => code,
        };

        if self.is_supported(code) {
            return Ok(LanguageCode::from(code));
        }

        let supported = self
            .all_languages()
            .iter()
            .map(LanguageCode::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Err(FaqError::validation(
            "lang",
            format!("Unsupported language '{code}'. Supported languages are: {supported}"),
        ))
    }

    #[must_use]
    pub fn resolve_question<'a>(&self, faq: &'a Faq, code: &str) -> &'a str {
        resolve_question(faq, code, self.base.as_str())
    }

    #[must_use]
    pub fn resolve_answer<'a>(&self, faq: &'a Faq, code: &str) -> &'a str {
        resolve_answer(faq, code, self.base.as_str())
    }

    #[must_use]
    pub fn supported_languages(&self, faq: &Faq) -> Vec<LanguageCode> {
        supported_languages(faq, &self.base)
    }
}

impl Default for LanguageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_LANGUAGE, DEFAULT_TRANSLATION_LANGUAGES)
    }
}
