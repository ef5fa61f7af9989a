//! Mock translation provider
//!
//! A deterministic, API-free [`TranslationProvider`] used by the test suite
//! and by offline operation: pointing the dispatcher at an always-failing
//! mock forces every request onto the pseudo-translation pipeline without
//! any network access or credentials.
//!
//! # Example
//!
//! ```ignore
//! use fusion_mt::{MockBehavior, MockProvider, TranslationProvider};
//!
//! #[tokio::test]
//! async fn test_provider() {
//!     let mock = MockProvider::new(MockBehavior::Suffix);
//!     let result = mock.translate("hello", "en", "fr").await.unwrap();
//!     assert_eq!(result.text, "hello_fr");
//! }
//! ```

use crate::error::{TranslateError, TranslateResult};
use crate::provider::TranslationProvider;
use crate::types::TranslationResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Behaviors the mock can simulate
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Resolve cleanly with the locale appended: "hello" → "hello_fr"
    Suffix,

    /// Resolve cleanly from predefined (text, target) → translation
    /// mappings, falling back to the suffix form for unknown pairs
    Mappings(HashMap<(String, String), String>),

    /// Resolve with the `error` flag set — a recoverable provider-side
    /// failure that the dispatcher answers with its offline fallback
    Flagged,

    /// Reject outright, simulating a transport failure
    Fail(String),
}

/// Provider double that simulates translation outcomes
///
/// Counts its invocations so cache tests can assert how many calls reached
/// the provider.
#[derive(Debug)]
pub struct MockProvider {
    behavior: MockBehavior,
    /// Optional simulated network latency
    delay_ms: u64,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            delay_ms: 0,
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock with simulated per-call latency
    pub fn with_delay(behavior: MockBehavior, delay_ms: u64) -> Self {
        Self {
            behavior,
            delay_ms,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `translate` has been invoked
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn apply(&self, text: &str, source: &str, target: &str) -> TranslateResult<TranslationResult> {
        match &self.behavior {
            MockBehavior::Suffix => Ok(TranslationResult::translated(
                format!("{}_{}", text, target),
                source.to_string(),
            )),
            MockBehavior::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                let translated = map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target));
                Ok(TranslationResult::translated(translated, source.to_string()))
            }
            MockBehavior::Flagged => Ok(TranslationResult::failed(
                String::new(),
                source.to_string(),
            )),
            MockBehavior::Fail(msg) => Err(TranslateError::NetworkError(msg.clone())),
        }
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> TranslateResult<TranslationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        self.apply(text, source, target)
    }

    fn name(&self) -> &str {
        "Mock Provider"
    }
}
