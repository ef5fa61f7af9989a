//! Core result type shared by the provider seam, the cache and the dispatcher

use serde::{Deserialize, Serialize};

/// Outcome of a translation request
///
/// `source` carries the detected or caller-supplied source language code.
/// `is_mock` marks results produced by the offline pseudo-translation
/// pipeline, `error` marks results a provider returned while signalling a
/// recoverable failure. Callers that need to distinguish real translations
/// from best-effort output must inspect those flags; the text field is
/// always renderable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub text: String,
    pub source: String,
    #[serde(default)]
    pub is_mock: bool,
    #[serde(default)]
    pub error: bool,
}

impl TranslationResult {
    /// Result for empty or whitespace-only input
    pub fn empty(source: &str) -> Self {
        Self {
            text: String::new(),
            source: source.to_string(),
            is_mock: false,
            error: false,
        }
    }

    /// Clean provider translation
    pub fn translated(text: String, source: String) -> Self {
        Self {
            text,
            source,
            is_mock: false,
            error: false,
        }
    }

    /// Result produced by the offline pseudo-translation pipeline
    pub fn mock(text: String, source: String) -> Self {
        Self {
            text,
            source,
            is_mock: true,
            error: false,
        }
    }

    /// Provider-signalled recoverable failure, with best-effort text
    pub fn failed(text: String, source: String) -> Self {
        Self {
            text,
            source,
            is_mock: false,
            error: true,
        }
    }

    /// True for results that did not come from a real provider translation
    pub fn is_fallback(&self) -> bool {
        self.is_mock || self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = TranslationResult::empty("en");
        assert_eq!(result.text, "");
        assert_eq!(result.source, "en");
        assert!(!result.is_mock);
        assert!(!result.error);
        assert!(!result.is_fallback());
    }

    #[test]
    fn test_translated_result() {
        let result = TranslationResult::translated("hola".to_string(), "en".to_string());
        assert_eq!(result.text, "hola");
        assert!(!result.is_fallback());
    }

    #[test]
    fn test_mock_result_is_fallback() {
        let result = TranslationResult::mock("hola".to_string(), "en".to_string());
        assert!(result.is_mock);
        assert!(!result.error);
        assert!(result.is_fallback());
    }

    #[test]
    fn test_failed_result_is_fallback() {
        let result = TranslationResult::failed("".to_string(), "en".to_string());
        assert!(result.error);
        assert!(!result.is_mock);
        assert!(result.is_fallback());
    }

    #[test]
    fn test_serde_round_trip() {
        let result = TranslationResult::mock("hola".to_string(), "es".to_string());
        let json = serde_json::to_string(&result).unwrap();
        let parsed: TranslationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_deserialize_defaults_flags() {
        // Provider payloads without flags parse as clean results
        let parsed: TranslationResult =
            serde_json::from_str(r#"{"text":"hola","source":"en"}"#).unwrap();
        assert!(!parsed.is_mock);
        assert!(!parsed.error);
    }
}
