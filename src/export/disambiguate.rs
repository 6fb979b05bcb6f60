//! Frame key collision handling.
//!
//! Duplicate sprite names are common when sprites are instantiated from
//! prefabs, so two frames on one page can sanitize to the same key. The
//! document never overwrites and never drops a frame; instead it asks a
//! `Disambiguator` for a replacement key.

use std::collections::HashMap;

/// Strategy for renaming a frame key that already exists in a document.
pub trait Disambiguator {
    /// Produce a replacement for `key`. Called repeatedly until the
    /// returned key is free, so implementations should not return the
    /// same value twice for one input.
    fn disambiguate(&mut self, key: &str) -> String;
}

/// Appends a freshly generated 128-bit random identifier in hex.
///
/// Keys for second and later duplicates are not reproducible across runs.
#[derive(Debug, Default)]
pub struct RandomSuffix;

impl Disambiguator for RandomSuffix {
    fn disambiguate(&mut self, key: &str) -> String {
        let id: u128 = rand::random();
        format!("{}_{:032x}", key, id)
    }
}

/// Appends an occurrence counter: `key_2`, `key_3`, ...
///
/// Deterministic alternative for reproducible output.
#[derive(Debug, Default)]
pub struct CounterSuffix {
    counts: HashMap<String, u32>,
}

impl CounterSuffix {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Disambiguator for CounterSuffix {
    fn disambiguate(&mut self, key: &str) -> String {
        let count = self.counts.entry(key.to_string()).or_insert(1);
        *count += 1;
        format!("{}_{}", key, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_suffix_format() {
        let mut policy = RandomSuffix;
        let key = policy.disambiguate("Hero.png");
        assert!(key.starts_with("Hero.png_"));
        let suffix = &key["Hero.png_".len()..];
        assert_eq!(suffix.len(), 32);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_random_suffix_distinct() {
        let mut policy = RandomSuffix;
        let a = policy.disambiguate("Hero.png");
        let b = policy.disambiguate("Hero.png");
        assert_ne!(a, b);
    }

    #[test]
    fn test_counter_suffix_sequence() {
        let mut policy = CounterSuffix::new();
        assert_eq!(policy.disambiguate("Hero.png"), "Hero.png_2");
        assert_eq!(policy.disambiguate("Hero.png"), "Hero.png_3");
        assert_eq!(policy.disambiguate("Hero.png"), "Hero.png_4");
    }

    #[test]
    fn test_counter_suffix_independent_keys() {
        let mut policy = CounterSuffix::new();
        assert_eq!(policy.disambiguate("a.png"), "a.png_2");
        assert_eq!(policy.disambiguate("b.png"), "b.png_2");
        assert_eq!(policy.disambiguate("a.png"), "a.png_3");
    }
}
