//! FAQ entity and its translation map.

use crate::{FaqId, LanguageCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Question and answer rendered in one target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Translation {
    pub question: String,
    pub answer: String,
}

impl Translation {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Translations of a FAQ keyed by language code.
///
/// Keys are a subset of the configured translation targets and never include
/// the base language. A missing key means no translation exists for that
/// language. Keys iterate in sorted order so serialized payloads are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema), schema(value_type = Object))]
#[serde(transparent)]
pub struct Translations(BTreeMap<LanguageCode, Translation>);

impl Translations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the translation for `code`, if one exists.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Translation> {
        self.0.get(code)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    /// Inserts or replaces the translation for `code`.
    pub fn insert(&mut self, code: LanguageCode, translation: Translation) -> Option<Translation> {
        self.0.insert(code, translation)
    }

    /// Language codes that have a translation.
    pub fn codes(&self) -> impl Iterator<Item = &LanguageCode> {
        self.0.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, LanguageCode, Translation> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(LanguageCode, Translation)> for Translations {
    fn from_iter<I: IntoIterator<Item = (LanguageCode, Translation)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Translations {
    type Item = (LanguageCode, Translation);
    type IntoIter = btree_map::IntoIter<LanguageCode, Translation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A persisted FAQ entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    /// Store-assigned identifier.
    pub id: FaqId,
    /// Question in the base language.
    pub question: String,
    /// Answer in the base language (rich text, opaque).
    pub answer: String,
    /// Machine translations of question and answer.
    #[serde(default)]
    pub translations: Translations,
    /// Creation timestamp, set once by the store.
    pub created_at: DateTime<Utc>,
}

impl Faq {
    /// Applies a patch in place. `created_at` and `id` never change.
    pub fn apply(&mut self, patch: FaqPatch) {
        if let Some(question) = patch.question {
            self.question = question;
        }
        if let Some(answer) = patch.answer {
            self.answer = answer;
        }
        if let Some(translations) = patch.translations {
            self.translations = translations;
        }
    }
}

/// A FAQ that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
    pub translations: Translations,
}

/// Partial update of a stored FAQ. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaqPatch {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub translations: Option<Translations>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_faq() -> Faq {
        let translations = [(
            LanguageCode::from("hi"),
            Translation::new("टेस्ट प्रश्न?", "टेस्ट उत्तर"),
        )]
        .into_iter()
        .collect();

        Faq {
            id: FaqId::new(),
            question: "Test Question?".to_string(),
            answer: "Test Answer".to_string(),
            translations,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_apply_patch_keeps_identity_and_created_at() {
        let mut faq = sample_faq();
        let id = faq.id;
        let created_at = faq.created_at;

        faq.apply(FaqPatch {
            question: Some("Updated?".to_string()),
            answer: None,
            translations: Some(Translations::new()),
        });

        assert_eq!(faq.id, id);
        assert_eq!(faq.created_at, created_at);
        assert_eq!(faq.question, "Updated?");
        assert_eq!(faq.answer, "Test Answer");
        assert!(faq.translations.is_empty());
    }

    #[test]
    fn test_translations_serialize_as_plain_map() {
        let faq = sample_faq();
        let json = serde_json::to_value(&faq).unwrap();
        assert_eq!(json["translations"]["hi"]["answer"], "टेस्ट उत्तर");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_translations_iterate_sorted() {
        let mut translations = Translations::new();
        translations.insert("fr".into(), Translation::new("q", "a"));
        translations.insert("bn".into(), Translation::new("q", "a"));
        translations.insert("hi".into(), Translation::new("q", "a"));

        let codes: Vec<&str> = translations.codes().map(LanguageCode::as_str).collect();
        assert_eq!(codes, vec!["bn", "fr", "hi"]);
    }
}
