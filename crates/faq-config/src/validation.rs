//! Configuration validation module.
//!
//! Collects every problem in a loaded configuration so startup can report
//! them together instead of failing on the first one.

use crate::AppConfig;
use std::collections::HashSet;
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout or TTL must be positive.
    NonPositiveDuration { name: String },
    /// Base language is empty.
    MissingBaseLanguage,
    /// Base language also listed as a translation target.
    BaseLanguageInSupported { code: String },
    /// A translation target appears more than once.
    DuplicateLanguage { code: String },
    /// Translation is enabled without an endpoint.
    MissingTranslationEndpoint,
    /// Log format is not `pretty` or `json`.
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { value } => {
                write!(f, "Invalid server port: {} (must be 1-65535)", value)
            }
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({}) cannot be greater than max ({})",
                    min, max
                )
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::NonPositiveDuration { name } => {
                write!(f, "'{}' must be at least 1 second", name)
            }
            Self::MissingBaseLanguage => write!(f, "Base language cannot be empty"),
            Self::BaseLanguageInSupported { code } => {
                write!(
                    f,
                    "Base language '{}' cannot also be a translation target",
                    code
                )
            }
            Self::DuplicateLanguage { code } => {
                write!(f, "Language '{}' is listed more than once", code)
            }
            Self::MissingTranslationEndpoint => {
                write!(f, "Translation endpoint required when translation is enabled")
            }
            Self::InvalidLogFormat { value } => {
                write!(f, "Invalid log format: '{}' (valid: pretty, json)", value)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    const VALID_LOG_FORMATS: &'static [&'static str] = &["pretty", "json"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&config.server, &mut errors);
        Self::validate_database(&config.database, &mut errors);
        Self::validate_redis(&config.redis, &mut errors);
        Self::validate_languages(&config.languages, &mut errors);
        Self::validate_translation(&config.translation, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &crate::ServerConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.port == 0 {
            errors.push(ConfigValidationError::InvalidPort { value: 0 });
        }
        if config.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveDuration {
                name: "server.request_timeout_secs".to_string(),
            });
        }
    }

    fn validate_database(config: &crate::DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.url.trim().is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if !config.url.starts_with("mysql://") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL must start with mysql://".to_string(),
            });
        }

        if config.min_connections > config.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveDuration {
                name: "database.connect_timeout_secs".to_string(),
            });
        }
    }

    fn validate_redis(config: &crate::RedisConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.ttl_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveDuration {
                name: "redis.ttl_secs".to_string(),
            });
        }

        if !config.enabled {
            return;
        }

        if !config.url.starts_with("redis://") && !config.url.starts_with("rediss://") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: "URL must start with redis:// or rediss://".to_string(),
            });
        }
    }

    fn validate_languages(config: &crate::LanguageConfig, errors: &mut Vec<ConfigValidationError>) {
        let base = config.base.trim();
        if base.is_empty() {
            errors.push(ConfigValidationError::MissingBaseLanguage);
        }

        let mut seen = HashSet::new();
        for code in &config.supported {
            if code == base {
                errors.push(ConfigValidationError::BaseLanguageInSupported { code: code.clone() });
            } else if !seen.insert(code.as_str()) {
                errors.push(ConfigValidationError::DuplicateLanguage { code: code.clone() });
            }
        }
    }

    fn validate_translation(config: &crate::TranslationConfig, errors: &mut Vec<ConfigValidationError>) {
        if !config.enabled {
            return;
        }

        match config.endpoint.as_deref().map(str::trim) {
            None | Some("") => errors.push(ConfigValidationError::MissingTranslationEndpoint),
            Some(endpoint) => {
                if Url::parse(endpoint).is_err() {
                    errors.push(ConfigValidationError::InvalidUrl {
                        url_type: "translation endpoint".to_string(),
                        message: format!("Invalid URL format: {}", endpoint),
                    });
                }
            }
        }
    }

    fn validate_observability(config: &crate::ObservabilityConfig, errors: &mut Vec<ConfigValidationError>) {
        let format = config.log_format.to_lowercase();
        if !Self::VALID_LOG_FORMATS.contains(&format.as_str()) {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: config.log_format.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_database_url() {
        let mut config = AppConfig::default();
        config.database.url = String::new();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(
            &errors[0],
            ConfigValidationError::InvalidUrl { url_type, .. } if url_type == "database"
        ));
    }

    #[test]
    fn test_base_language_in_supported() {
        let mut config = AppConfig::default();
        config.languages.supported.push("en".to_string());

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigValidationError::BaseLanguageInSupported {
                code: "en".to_string()
            }]
        );
    }

    #[test]
    fn test_duplicate_language() {
        let mut config = AppConfig::default();
        config.languages.supported = vec!["hi".to_string(), "fr".to_string(), "hi".to_string()];

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigValidationError::DuplicateLanguage {
                code: "hi".to_string()
            }]
        );
    }

    #[test]
    fn test_zero_ttl() {
        let mut config = AppConfig::default();
        config.redis.ttl_secs = 0;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("redis.ttl_secs"));
    }

    #[test]
    fn test_translation_requires_endpoint() {
        let mut config = AppConfig::default();
        config.translation.enabled = true;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors, vec![ConfigValidationError::MissingTranslationEndpoint]);

        config.translation.endpoint = Some("http://localhost:5000".to_string());
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        config.database.min_connections = 50;
        config.observability.log_format = "xml".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
