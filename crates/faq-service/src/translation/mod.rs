//! Machine translation of FAQ content.
//!
//! [`TranslationProvider`] translates one string into one language.
//! [`TranslatorInterface`] fans a question/answer pair out to every
//! translation target and keeps whatever succeeded.

mod provider;
mod translator;

pub use provider::{
    HttpTranslationProvider, HttpTranslationProviderParameters, TranslationProvider,
};
pub use translator::{
    TranslationOutcome, TranslationReport, Translator, TranslatorInterface, TranslatorParameters,
};
