//! Offline pseudo-translation pipeline
//!
//! Produces a stand-in translation without any network access: known
//! phrases are substituted from the phrase table, and everything else is
//! replaced with fabricated text in the target writing system. Used by the
//! dispatcher whenever the real provider is unreachable or signals failure.
//!
//! # Example
//!
//! ```ignore
//! use fusion_mt::PseudoTranslator;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let pseudo = PseudoTranslator::new();
//! let mut rng = SmallRng::seed_from_u64(1);
//! assert_eq!(pseudo.translate("hello", "es", &mut rng), "hola");
//! ```

use crate::charset::fabricate;
use crate::languages::BASELINE_LANGUAGE;
use crate::phrases::{PHRASES, PhraseEntry};
use rand::Rng;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Phrase-substituting, script-fabricating mock translator
pub struct PseudoTranslator {
    entries: &'static [PhraseEntry],
    sentence_re: Regex,
}

impl PseudoTranslator {
    /// Translator over the built-in phrase table
    pub fn new() -> Self {
        Self::with_entries(PHRASES)
    }

    /// Translator over an explicit phrase table (scan order = slice order)
    pub fn with_entries(entries: &'static [PhraseEntry]) -> Self {
        Self {
            entries,
            // Runs of non-terminator characters followed by terminators
            sentence_re: Regex::new(r"[^.!?]+[.!?]+").unwrap(),
        }
    }

    /// Pseudo-translate `text` into `target`
    ///
    /// Identity when `target` is the baseline language. A whole-text match
    /// against a canonical phrase short-circuits; otherwise each sentence is
    /// processed independently: phrase substitution where the table has a
    /// `target` entry, whole-sentence fabrication where it does not. Cannot
    /// fail; unusable phrase entries are skipped.
    pub fn translate<R: Rng + ?Sized>(&self, text: &str, target: &str, rng: &mut R) -> String {
        if target == BASELINE_LANGUAGE {
            return text.to_string();
        }

        let lower = text.to_lowercase();
        for entry in self.entries {
            if entry.canonical == lower {
                if let Some(translated) = entry.translation(target) {
                    return translated.to_string();
                }
            }
        }

        let mut result = String::with_capacity(text.len());
        for sentence in self.split_sentences(text) {
            result.push_str(&self.translate_sentence(sentence, target, rng));
        }
        result
    }

    /// Split into sentences, appending any text the terminator rule missed
    fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences: Vec<&str> = self
            .sentence_re
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();

        if sentences.is_empty() {
            return vec![text];
        }

        let covered: usize = sentences.iter().map(|s| s.len()).sum();
        if covered < text.len() {
            // get() rather than indexing: a skipped leading terminator can
            // leave `covered` off a char boundary, and this must not panic
            if let Some(rest) = text.get(covered..) {
                if !rest.trim().is_empty() {
                    sentences.push(rest);
                }
            }
        }
        sentences
    }

    /// Translate one sentence: phrase hits become their table translations,
    /// the stretches between hits are fabricated, and a sentence with no
    /// effective hit at all is fabricated wholesale
    fn translate_sentence<R: Rng + ?Sized>(
        &self,
        sentence: &str,
        target: &str,
        rng: &mut R,
    ) -> String {
        let lower = sentence.to_lowercase();
        // Claimed (start, end, replacement) spans on the original sentence;
        // earlier table entries win overlaps
        let mut spans: Vec<(usize, usize, &str)> = Vec::new();
        let mut changed = false;

        for entry in self.entries {
            if !lower.contains(entry.canonical) {
                continue;
            }
            let Some(replacement) = entry.translation(target) else {
                continue;
            };

            let pattern = format!(r"\b{}\b", regex::escape(entry.canonical));
            let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
                Ok(re) => re,
                Err(err) => {
                    warn!(phrase = entry.canonical, %err, "skipping unusable phrase entry");
                    continue;
                }
            };

            for m in re.find_iter(sentence) {
                let overlaps = spans
                    .iter()
                    .any(|(start, end, _)| m.start() < *end && m.end() > *start);
                if overlaps {
                    continue;
                }
                if m.as_str() != replacement {
                    changed = true;
                }
                spans.push((m.start(), m.end(), replacement));
            }
        }

        // A sentence where nothing effectively changed (no hits, or only
        // identity translations) is fabricated in full rather than left
        // partially untranslated
        if !changed {
            return fabricate(sentence, target, rng);
        }

        spans.sort_by_key(|(start, _, _)| *start);
        let mut out = String::with_capacity(sentence.len());
        let mut pos = 0;
        for (start, end, replacement) in spans {
            if pos < start {
                out.push_str(&fabricate(&sentence[pos..start], target, rng));
            }
            out.push_str(replacement);
            pos = end;
        }
        if pos < sentence.len() {
            out.push_str(&fabricate(&sentence[pos..], target, rng));
        }
        out
    }
}

impl Default for PseudoTranslator {
    fn default() -> Self {
        Self::new()
    }
}
