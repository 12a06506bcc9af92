//! Translation provider contract and its LibreTranslate-compatible client.

use async_trait::async_trait;
use faq_config::TranslationConfig;
use faq_core::{FaqError, FaqResult};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use shaku::{Component, Interface};
use tracing::debug;

const SERVICE_NAME: &str = "translation";

/// Translates a single piece of text between two languages.
#[async_trait]
pub trait TranslationProvider: Interface + Send + Sync {
    /// Translates `text` from `source` into `target`.
    ///
    /// Each call is one attempt; there are no retries.
    async fn translate(&self, text: &str, source: &str, target: &str) -> FaqResult<String>;
}

/// HTTP client for a LibreTranslate-compatible API.
///
/// Without an endpoint the provider is switched off and every call fails,
/// so content is stored untranslated.
#[derive(Component, Default)]
#[shaku(interface = TranslationProvider)]
pub struct HttpTranslationProvider {
    client: Client,
    endpoint: Option<String>,
    api_key: Option<String>,
}

impl HttpTranslationProvider {
    /// Creates a provider calling `endpoint`.
    pub fn new(endpoint: &str, api_key: Option<String>, config: &TranslationConfig) -> FaqResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| FaqError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: Some(endpoint.trim_end_matches('/').to_string()),
            api_key,
        })
    }

    /// Builds the provider described by the configuration.
    pub fn from_config(config: &TranslationConfig) -> FaqResult<Self> {
        match (&config.endpoint, config.enabled) {
            (Some(endpoint), true) => Self::new(endpoint, config.api_key.clone(), config),
            _ => Ok(Self::disabled()),
        }
    }

    /// A provider that fails every call.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: String,
}

#[async_trait]
impl TranslationProvider for HttpTranslationProvider {
    async fn translate(&self, text: &str, source: &str, target: &str) -> FaqResult<String> {
        let Some(endpoint) = &self.endpoint else {
            return Err(FaqError::external_service(
                SERVICE_NAME,
                "translation is disabled",
            ));
        };

        debug!("Translating {} chars {} -> {}", text.len(), source, target);

        let request = TranslateRequest {
            q: text,
            source,
            target,
            format: "html",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/translate", endpoint))
            .json(&request)
            .send()
            .await
            .map_err(|e| FaqError::external_service(SERVICE_NAME, format!("HTTP error: {}", e)))?;

        handle_response(response).await
    }
}

async fn handle_response(response: reqwest::Response) -> FaqResult<String> {
    let status = response.status();

    if status == StatusCode::OK {
        let body: TranslateResponse = response.json().await.map_err(|e| {
            FaqError::external_service(SERVICE_NAME, format!("Malformed response: {}", e))
        })?;
        return Ok(body.translated_text);
    }

    let message = match response.json::<ProviderErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => "no error details".to_string(),
    };
    Err(FaqError::external_service(
        SERVICE_NAME,
        format!("Provider returned {}: {}", status, message),
    ))
}
