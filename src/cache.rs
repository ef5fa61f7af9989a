//! Bounded in-memory cache for translation results
//!
//! Keys are the exact concatenation of text, source and target; values are
//! whole [`TranslationResult`]s, including mock fallbacks. Eviction is by
//! insertion order (oldest first) — entries are not reordered on read and
//! never expire by time. The cache is an explicit value handed to the
//! dispatcher, not module-level state, so every test can start fresh.

use crate::types::TranslationResult;
use std::collections::HashMap;
use std::collections::VecDeque;

/// Default number of cached translations
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Insertion-order-evicting translation cache
pub struct TranslationCache {
    capacity: usize,
    entries: HashMap<String, TranslationResult>,
    order: VecDeque<String>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// Cache key for a (text, source, target) request triple
    pub fn key(text: &str, source: &str, target: &str) -> String {
        format!("{}_{}_{}", text, source, target)
    }

    pub fn get(&self, key: &str) -> Option<&TranslationResult> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a result, evicting the oldest entry if at capacity
    ///
    /// Inserting an already-present key replaces the value in place without
    /// touching its eviction slot. A zero-capacity cache stores nothing.
    pub fn insert(&mut self, key: String, value: TranslationResult) {
        if self.capacity == 0 {
            return;
        }
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            return;
        }
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(text: &str) -> TranslationResult {
        TranslationResult::translated(text.to_string(), "en".to_string())
    }

    #[test]
    fn test_key_format() {
        assert_eq!(TranslationCache::key("hello", "en", "es"), "hello_en_es");
    }

    #[test]
    fn test_get_after_insert() {
        let mut cache = TranslationCache::new();
        cache.insert("k1".to_string(), result("hola"));
        assert_eq!(cache.get("k1").map(|r| r.text.as_str()), Some("hola"));
        assert!(cache.get("k2").is_none());
    }

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let mut cache = TranslationCache::with_capacity(3);
        cache.insert("k1".to_string(), result("a"));
        cache.insert("k2".to_string(), result("b"));
        cache.insert("k3".to_string(), result("c"));
        cache.insert("k4".to_string(), result("d"));

        assert_eq!(cache.len(), 3);
        assert!(!cache.contains("k1"));
        assert!(cache.contains("k2"));
        assert!(cache.contains("k4"));
    }

    #[test]
    fn test_eviction_is_insertion_order_not_access_order() {
        let mut cache = TranslationCache::with_capacity(2);
        cache.insert("k1".to_string(), result("a"));
        cache.insert("k2".to_string(), result("b"));
        // Reading k1 must not protect it
        let _ = cache.get("k1");
        cache.insert("k3".to_string(), result("c"));

        assert!(!cache.contains("k1"));
        assert!(cache.contains("k2"));
        assert!(cache.contains("k3"));
    }

    #[test]
    fn test_full_capacity_churn() {
        let capacity = DEFAULT_CACHE_CAPACITY;
        let mut cache = TranslationCache::new();
        for i in 0..=capacity {
            cache.insert(format!("k{}", i), result("x"));
        }
        assert_eq!(cache.len(), capacity);
        assert!(!cache.contains("k0"));
        assert!(cache.contains(&format!("k{}", capacity)));
    }

    #[test]
    fn test_reinsert_existing_key_keeps_size() {
        let mut cache = TranslationCache::with_capacity(2);
        cache.insert("k1".to_string(), result("a"));
        cache.insert("k1".to_string(), result("b"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("k1").map(|r| r.text.as_str()), Some("b"));
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let mut cache = TranslationCache::with_capacity(0);
        cache.insert("k1".to_string(), result("a"));
        assert!(cache.is_empty());
        assert!(cache.get("k1").is_none());
    }
}
