//! Microsoft Azure Translator provider
//!
//! Integrates with the Azure Translator v3 REST API.
//!
//! # Authentication
//!
//! The provider loads credentials from the `AZURE_TRANSLATOR_KEY` and
//! `AZURE_TRANSLATOR_REGION` environment variables. Obtain a key from the
//! Azure portal (Cognitive Services → Translator).
//!
//! # Example
//!
//! ```ignore
//! use fusion_mt::{AzureTranslatorProvider, TranslationProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = AzureTranslatorProvider::from_env()?;
//!     let result = provider.translate("Hello, world!", "auto", "fr").await?;
//!     println!("{} (from {})", result.text, result.source);
//!     Ok(())
//! }
//! ```

use crate::error::{TranslateError, TranslateResult};
use crate::languages::AUTO_SOURCE;
use crate::provider::{TranslationProvider, validate_locale};
use crate::types::TranslationResult;
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

/// Azure Translator v3 provider
#[derive(Clone)]
pub struct AzureTranslatorProvider {
    api_key: String,
    region: String,
    client: reqwest::Client,
    endpoint: String,
}

impl AzureTranslatorProvider {
    const DEFAULT_ENDPOINT: &'static str = "https://api.cognitive.microsofttranslator.com";

    /// Region used when `AZURE_TRANSLATOR_REGION` is not set
    const DEFAULT_REGION: &'static str = "global";

    /// Maximum characters per request (Azure Translator v3 limit)
    const MAX_CHARS_PER_REQUEST: usize = 50_000;

    /// Create a provider with explicit credentials
    pub fn new(api_key: String, region: String) -> TranslateResult<Self> {
        if api_key.trim().is_empty() {
            return Err(TranslateError::ConfigError(
                "API key cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                TranslateError::NetworkError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key,
            region,
            client,
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Create a provider from `AZURE_TRANSLATOR_KEY` / `AZURE_TRANSLATOR_REGION`
    pub fn from_env() -> TranslateResult<Self> {
        let api_key = std::env::var("AZURE_TRANSLATOR_KEY").map_err(|_| {
            TranslateError::ConfigError(
                "AZURE_TRANSLATOR_KEY environment variable not set".to_string(),
            )
        })?;
        let region = std::env::var("AZURE_TRANSLATOR_REGION")
            .unwrap_or_else(|_| Self::DEFAULT_REGION.to_string());

        Self::new(api_key, region)
    }

    /// Request URL for a source/target pair
    ///
    /// The `auto` source omits the `from` parameter entirely, which is how
    /// the API is told to detect the source language.
    fn request_url(&self, source: &str, target: &str) -> String {
        if source == AUTO_SOURCE {
            format!("{}/translate?api-version=3.0&to={}", self.endpoint, target)
        } else {
            format!(
                "{}/translate?api-version=3.0&from={}&to={}",
                self.endpoint, source, target
            )
        }
    }

    async fn request(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> TranslateResult<TranslationResult> {
        let url = self.request_url(source, target);
        let body = json!([{ "Text": text }]);

        let response = self
            .client
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Ocp-Apim-Subscription-Region", &self.region)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        // HTTP-level rejection is a recoverable provider failure: surface
        // it through the error flag so the caller can fall back, keeping
        // hard Err for transport problems only
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "could not read error response".to_string());
            debug!(%status, %error_text, "translator API rejected request");

            return Ok(TranslationResult::failed(
                format!("{} (Translation failed, please try again)", text),
                source.to_string(),
            ));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ProviderError(format!("Failed to parse API response: {}", e))
        })?;

        let translated = json[0]["translations"][0]["text"].as_str();
        match translated {
            Some(translated) => {
                let detected = json[0]["detectedLanguage"]["language"]
                    .as_str()
                    .unwrap_or(source);
                Ok(TranslationResult::translated(
                    translated.to_string(),
                    detected.to_string(),
                ))
            }
            None => Ok(TranslationResult::failed(
                format!("{} (Translation failed, please try again)", text),
                source.to_string(),
            )),
        }
    }
}

impl std::fmt::Debug for AzureTranslatorProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureTranslatorProvider")
            .field("api_key", &"***")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for AzureTranslatorProvider {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> TranslateResult<TranslationResult> {
        validate_locale(source)?;
        validate_locale(target)?;

        if text.is_empty() {
            return Ok(TranslationResult::empty(source));
        }

        if text.len() > Self::MAX_CHARS_PER_REQUEST {
            return Err(TranslateError::ProviderError(format!(
                "Text exceeds maximum length of {} characters",
                Self::MAX_CHARS_PER_REQUEST
            )));
        }

        self.request(text, source, target).await
    }

    fn name(&self) -> &str {
        "Azure Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Initialization Tests ==========

    #[test]
    fn test_new_with_valid_key() {
        let provider =
            AzureTranslatorProvider::new("test-key".to_string(), "global".to_string());
        assert!(provider.is_ok());
        assert_eq!(provider.unwrap().name(), "Azure Translator");
    }

    #[test]
    fn test_new_with_empty_key() {
        let result = AzureTranslatorProvider::new("".to_string(), "global".to_string());
        match result {
            Err(TranslateError::ConfigError(msg)) => assert!(msg.contains("empty")),
            other => panic!("expected ConfigError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_new_with_whitespace_key() {
        assert!(AzureTranslatorProvider::new("   ".to_string(), "global".to_string()).is_err());
    }

    // ========== URL Construction Tests ==========

    #[test]
    fn test_request_url_with_source() {
        let provider =
            AzureTranslatorProvider::new("test-key".to_string(), "global".to_string()).unwrap();
        let url = provider.request_url("en", "es");
        assert!(url.ends_with("/translate?api-version=3.0&from=en&to=es"));
    }

    #[test]
    fn test_request_url_auto_omits_from() {
        let provider =
            AzureTranslatorProvider::new("test-key".to_string(), "global".to_string()).unwrap();
        let url = provider.request_url("auto", "es");
        assert!(url.ends_with("/translate?api-version=3.0&to=es"));
        assert!(!url.contains("from="));
    }

    // ========== Validation Tests ==========

    #[tokio::test]
    async fn test_translate_empty_text() {
        let provider =
            AzureTranslatorProvider::new("test-key".to_string(), "global".to_string()).unwrap();
        let result = provider.translate("", "en", "fr").await.unwrap();
        assert_eq!(result.text, "");
        assert_eq!(result.source, "en");
    }

    #[tokio::test]
    async fn test_translate_invalid_locale() {
        let provider =
            AzureTranslatorProvider::new("test-key".to_string(), "global".to_string()).unwrap();
        assert!(provider.translate("hello", "en@bad", "fr").await.is_err());
        assert!(provider.translate("hello", "en", "fr#bad").await.is_err());
    }

    #[tokio::test]
    async fn test_translate_text_too_long() {
        let provider =
            AzureTranslatorProvider::new("test-key".to_string(), "global".to_string()).unwrap();
        let long_text = "x".repeat(AzureTranslatorProvider::MAX_CHARS_PER_REQUEST + 1);
        match provider.translate(&long_text, "en", "fr").await {
            Err(TranslateError::ProviderError(msg)) => assert!(msg.contains("exceeds maximum")),
            other => panic!("expected ProviderError, got {:?}", other.map(|_| ())),
        }
    }

    // ========== Debug Implementation Test ==========

    #[test]
    fn test_debug_masks_api_key() {
        let provider =
            AzureTranslatorProvider::new("secret-key".to_string(), "global".to_string()).unwrap();
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("secret-key"));
    }
}
