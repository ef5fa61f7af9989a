//! Frequency-based source-language detection
//!
//! Scores input text against each registered [`LanguageCorpus`] by counting
//! whole-word occurrences of corpus words, then picks the best-scoring
//! language. This is a deliberate simplicity/accuracy tradeoff, not a
//! statistical classifier: it is only consulted when the translation
//! provider is unreachable and a concrete source code has to be reported.

use crate::corpus::{CORPORA, LanguageCorpus};
use crate::languages::BASELINE_LANGUAGE;
use regex::{Regex, RegexBuilder};

/// Word-frequency language classifier
///
/// Word patterns are compiled once at construction; detection itself is a
/// pure function of the input text.
pub struct LanguageDetector {
    patterns: Vec<(&'static str, Vec<Regex>)>,
}

impl LanguageDetector {
    /// Build a detector over the built-in corpora
    pub fn new() -> Self {
        Self::with_corpora(CORPORA)
    }

    /// Build a detector over explicit corpora (registration order is the
    /// tie-break order)
    pub fn with_corpora(corpora: &'static [LanguageCorpus]) -> Self {
        let patterns = corpora
            .iter()
            .map(|corpus| {
                let words = corpus
                    .words()
                    .filter_map(|word| {
                        RegexBuilder::new(&format!(r"\b{}\b", regex::escape(word)))
                            .case_insensitive(true)
                            .build()
                            .ok()
                    })
                    .collect();
                (corpus.code, words)
            })
            .collect();
        Self { patterns }
    }

    /// Detect the most plausible language of `text`
    ///
    /// Returns the language whose corpus words occur strictly most often.
    /// Empty input, input matching no corpus word, and ties all resolve to
    /// the baseline language (the first-registered corpus wins a tie).
    pub fn detect(&self, text: &str) -> &'static str {
        let lower = text.to_lowercase();

        let mut best = BASELINE_LANGUAGE;
        let mut best_count = 0usize;

        for (code, patterns) in &self.patterns {
            let count: usize = patterns.iter().map(|re| re.find_iter(&lower).count()).sum();
            if count > best_count {
                best_count = count;
                best = *code;
            }
        }

        best
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("where are you and what do you have"), "en");
    }

    #[test]
    fn test_detects_spanish() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("hola, cómo estás? yo tengo un niño"), "es");
    }

    #[test]
    fn test_detects_french() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("bonjour tout le monde, comment allez-vous"), "fr");
    }

    #[test]
    fn test_detects_german() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("hallo, wie geht es dir? ich bin alt"), "de");
    }

    #[test]
    fn test_empty_input_defaults_to_baseline() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect(""), BASELINE_LANGUAGE);
    }

    #[test]
    fn test_no_corpus_match_defaults_to_baseline() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("xyzxyzxyz"), BASELINE_LANGUAGE);
        assert_eq!(detector.detect("qqq zzz kkk"), BASELINE_LANGUAGE);
    }

    #[test]
    fn test_case_insensitive_counting() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("HOLA CÓMO ESTÁS YO TENGO"), "es");
    }

    #[test]
    fn test_whole_word_boundaries() {
        let detector = LanguageDetector::new();
        // "holaxx" must not count as "hola"; nothing matches, so baseline
        assert_eq!(detector.detect("holaxx cómoxx"), BASELINE_LANGUAGE);
    }

    #[test]
    fn test_tie_resolves_to_earlier_registration() {
        let detector = LanguageDetector::new();
        // "es" is a verb in both Spanish and German corpora; one occurrence
        // each is a tie, and Spanish registers before German
        assert_eq!(detector.detect("es"), "es");
    }

    #[test]
    fn test_deterministic() {
        let detector = LanguageDetector::new();
        let text = "hola mundo, yo tengo tiempo";
        let first = detector.detect(text);
        for _ in 0..5 {
            assert_eq!(detector.detect(text), first);
        }
    }
}
