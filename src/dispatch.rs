//! Translation dispatcher
//!
//! The single public entry point of the crate: checks the result cache,
//! calls the configured provider, and degrades to the offline
//! pseudo-translation pipeline whenever the provider is unreachable or
//! signals failure. `translate` never fails — every outcome is a renderable
//! [`TranslationResult`], with `is_mock`/`error` flags for callers that
//! need to tell real translations from best-effort output.
//!
//! # Example
//!
//! ```ignore
//! use fusion_mt::{MockBehavior, MockProvider, Translator};
//!
//! #[tokio::main]
//! async fn main() {
//!     let translator = Translator::new(Arc::new(MockProvider::new(MockBehavior::Flagged)));
//!     let result = translator.translate("hello", "auto", "es").await;
//!     assert_eq!(result.text, "hola");
//!     assert!(result.is_mock);
//! }
//! ```

use crate::cache::{DEFAULT_CACHE_CAPACITY, TranslationCache};
use crate::detect::LanguageDetector;
use crate::languages::AUTO_SOURCE;
use crate::provider::TranslationProvider;
use crate::pseudo::PseudoTranslator;
use crate::types::TranslationResult;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Cache-fronted translation dispatcher with offline fallback
///
/// All collaborators are injected at construction; there is no process-wide
/// state. The cache and the fallback RNG sit behind mutexes because the
/// dispatcher is shared across tasks on a multi-threaded runtime; both
/// critical sections are short and never held across an await.
pub struct Translator {
    provider: Arc<dyn TranslationProvider>,
    cache: Mutex<TranslationCache>,
    detector: LanguageDetector,
    pseudo: PseudoTranslator,
    rng: Mutex<SmallRng>,
}

impl Translator {
    /// Dispatcher with the default cache capacity
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self::with_capacity(provider, DEFAULT_CACHE_CAPACITY)
    }

    /// Dispatcher with an explicit cache capacity
    pub fn with_capacity(provider: Arc<dyn TranslationProvider>, capacity: usize) -> Self {
        Self {
            provider,
            cache: Mutex::new(TranslationCache::with_capacity(capacity)),
            detector: LanguageDetector::new(),
            pseudo: PseudoTranslator::new(),
            rng: Mutex::new(SmallRng::from_entropy()),
        }
    }

    /// Dispatcher with a seeded fallback RNG, for reproducible output
    pub fn with_seed(provider: Arc<dyn TranslationProvider>, capacity: usize, seed: u64) -> Self {
        Self {
            provider,
            cache: Mutex::new(TranslationCache::with_capacity(capacity)),
            detector: LanguageDetector::new(),
            pseudo: PseudoTranslator::new(),
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Translate `text` from `source` into `target`
    ///
    /// `source` may be [`AUTO_SOURCE`]; when the fallback path has to
    /// resolve it, the language classifier supplies a concrete code.
    /// Results are cached by the exact request triple; a repeated request
    /// is answered from the cache without another provider call.
    /// Concurrent identical requests are not coalesced — each one reaches
    /// the provider on its own.
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> TranslationResult {
        if text.trim().is_empty() {
            return TranslationResult::empty(source);
        }

        let key = TranslationCache::key(text, source, target);
        if let Some(hit) = self.lock_cache().get(&key) {
            debug!(provider = self.provider.name(), "translation served from cache");
            return hit.clone();
        }

        match self.provider.translate(text, source, target).await {
            Ok(result) if !result.error => {
                self.lock_cache().insert(key, result.clone());
                result
            }
            Ok(_) => {
                warn!(
                    provider = self.provider.name(),
                    "provider signalled failure, using offline fallback"
                );
                self.fallback(text, source, target, key)
            }
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    %err,
                    "provider call failed, using offline fallback"
                );
                self.fallback(text, source, target, key)
            }
        }
    }

    /// Number of currently cached translations
    pub fn cached(&self) -> usize {
        self.lock_cache().len()
    }

    /// Pseudo-translate and cache, resolving an `auto` source through the
    /// classifier so the result always reports a concrete language
    fn fallback(&self, text: &str, source: &str, target: &str, key: String) -> TranslationResult {
        let fabricated = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            self.pseudo.translate(text, target, &mut *rng)
        };
        let resolved = if source == AUTO_SOURCE {
            self.detector.detect(text).to_string()
        } else {
            source.to_string()
        };

        let result = TranslationResult::mock(fabricated, resolved);
        self.lock_cache().insert(key, result.clone());
        result
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, TranslationCache> {
        // A poisoned cache is still a valid cache; recover rather than fail
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}
