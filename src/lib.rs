//! # fusion-mt
//!
//! Translation core for the Final Fusion translator: a cache-fronted
//! dispatcher over a third-party translation provider, with a fully
//! offline pseudo-translation fallback.
//!
//! The pipeline has three synchronous stages and one async seam:
//!
//! 1. **Language classifier** — word-frequency scoring over per-language
//!    corpora, used to resolve an `auto` source when the provider cannot.
//! 2. **Phrase table** — canonical English phrases with per-language
//!    translations, substituted with word-boundary precision.
//! 3. **Script generator** — fabricates placeholder text in the target
//!    writing system when the phrase table has nothing to offer.
//! 4. **Provider seam** — an async trait over the real HTTP translator
//!    (Azure) or a mock, fronted by a bounded insertion-order cache.
//!
//! `Translator::translate` never fails: provider outages degrade to the
//! offline pipeline and the result's `is_mock`/`error` flags tell the
//! caller what it got.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fusion_mt::{AzureTranslatorProvider, Translator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(AzureTranslatorProvider::from_env()?);
//!     let translator = Translator::new(provider);
//!
//!     let result = translator.translate("hello", "auto", "es").await;
//!     println!("{} (source: {}, mock: {})", result.text, result.source, result.is_mock);
//!     Ok(())
//! }
//! ```

pub mod azure;
pub mod cache;
pub mod charset;
pub mod corpus;
pub mod detect;
pub mod dispatch;
pub mod error;
pub mod languages;
pub mod mock;
pub mod phrases;
pub mod provider;
pub mod pseudo;
pub mod types;

#[cfg(test)]
mod integration_tests;

pub use azure::AzureTranslatorProvider;
pub use cache::{DEFAULT_CACHE_CAPACITY, TranslationCache};
pub use charset::{ScriptCharset, charset_for, fabricate};
pub use corpus::LanguageCorpus;
pub use detect::LanguageDetector;
pub use dispatch::Translator;
pub use error::{TranslateError, TranslateResult};
pub use languages::{AUTO_SOURCE, BASELINE_LANGUAGE, language_code, language_name, resolve_code};
pub use mock::{MockBehavior, MockProvider};
pub use phrases::PhraseEntry;
pub use provider::{TranslationProvider, validate_locale};
pub use pseudo::PseudoTranslator;
pub use types::TranslationResult;
