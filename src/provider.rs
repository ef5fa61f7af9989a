//! Translation provider abstraction
//!
//! The dispatcher talks to the outside world through this trait, so the
//! network provider can be swapped for a mock in tests (or for offline
//! operation) without touching the pipeline.

use crate::error::{TranslateError, TranslateResult};
use crate::types::TranslationResult;
use async_trait::async_trait;

/// Generic trait for translation providers
///
/// Implementations either perform a real network call or simulate one. A
/// provider reports a *recoverable* failure by resolving with a result
/// whose `error` flag is set; transport-level failures are returned as
/// `Err`. The dispatcher treats both identically.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` from `source` into `target`
    ///
    /// `source` may be the `auto` sentinel, in which case the provider is
    /// expected to detect the source language and report it in the result.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> TranslateResult<TranslationResult>;

    /// Name of this provider, for logging
    fn name(&self) -> &str;
}

/// Validate that a language code is in acceptable format
///
/// Accepts alphanumerics, hyphens and underscores (covers ISO 639 codes,
/// region variants like `zh-cn`, and the `auto` sentinel).
pub fn validate_locale(locale: &str) -> TranslateResult<()> {
    if locale.is_empty() {
        return Err(TranslateError::InvalidLocale(
            "language code is empty".to_string(),
        ));
    }
    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TranslateError::InvalidLocale(format!(
            "invalid characters in language code: {}",
            locale
        )));
    }
    Ok(())
}
