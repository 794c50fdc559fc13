/// N-gram frequency model: a sliding-window (stride 1) histogram of every
/// length-`n` run of characters in one document.
///
/// Input: "人人人人", n=2 → {"人人": 3}
use std::collections::HashMap;

use crate::error::{Result, SegError};

/// Immutable histogram of overlapping n-gram occurrences.
#[derive(Debug, Clone)]
pub struct NGramModel {
    n: usize,
    counts: HashMap<Box<[char]>, usize>,
}

impl NGramModel {
    /// Count every window `chars[i..i + n]` for `i` in `0..=len - n`.
    ///
    /// Text shorter than `n` yields an empty model. `n == 0` is rejected.
    pub fn build(chars: &[char], n: usize) -> Result<Self> {
        if n == 0 {
            return Err(SegError::invalid("n", n, "must be greater than zero"));
        }

        let mut counts: HashMap<Box<[char]>, usize> = HashMap::new();
        if chars.len() >= n {
            for window in chars.windows(n) {
                match counts.get_mut(window) {
                    Some(count) => *count += 1,
                    None => {
                        counts.insert(window.into(), 1);
                    }
                }
            }
        }

        let model = NGramModel { n, counts };
        log::debug!(
            "n-gram model built: n={} windows={} distinct={}",
            n,
            model.total(),
            model.distinct()
        );
        Ok(model)
    }

    pub fn from_text(text: &str, n: usize) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        Self::build(&chars, n)
    }

    /// Occurrence count of `gram`; 0 for an empty or unseen gram.
    pub fn frequency(&self, gram: &[char]) -> usize {
        if gram.is_empty() || self.counts.is_empty() {
            return 0;
        }
        self.counts.get(gram).copied().unwrap_or(0)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of distinct grams.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts, i.e. the number of windows scanned.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_overlapping_windows_counted() {
        let model = NGramModel::from_text("人人人人", 2).unwrap();
        assert_eq!(model.frequency(&chars("人人")), 3);
        assert_eq!(model.distinct(), 1);
        assert_eq!(model.total(), 3);
    }

    #[test]
    fn test_total_matches_window_count() {
        let text = "abcabcab";
        for n in 1..=10 {
            let model = NGramModel::from_text(text, n).unwrap();
            assert_eq!(model.total(), (text.len() + 1).saturating_sub(n));
        }
    }

    #[test]
    fn test_trigram_counts() {
        let model = NGramModel::from_text("abcabc", 3).unwrap();
        assert_eq!(model.frequency(&chars("abc")), 2);
        assert_eq!(model.frequency(&chars("bca")), 1);
        assert_eq!(model.frequency(&chars("cab")), 1);
        assert_eq!(model.frequency(&chars("xyz")), 0);
    }

    #[test]
    fn test_short_and_empty_text() {
        let model = NGramModel::from_text("ab", 3).unwrap();
        assert!(model.is_empty());
        assert_eq!(model.frequency(&chars("ab")), 0);

        let model = NGramModel::from_text("", 2).unwrap();
        assert!(model.is_empty());
        assert_eq!(model.total(), 0);
    }

    #[test]
    fn test_empty_gram_is_zero() {
        let model = NGramModel::from_text("aaaa", 1).unwrap();
        assert_eq!(model.frequency(&[]), 0);
        assert_eq!(model.frequency(&['a']), 4);
    }

    #[test]
    fn test_case_sensitive() {
        let model = NGramModel::from_text("abAB", 2).unwrap();
        assert_eq!(model.frequency(&chars("ab")), 1);
        assert_eq!(model.frequency(&chars("AB")), 1);
        assert_eq!(model.frequency(&chars("Ab")), 0);
    }

    #[test]
    fn test_zero_n_rejected() {
        match NGramModel::from_text("abc", 0) {
            Err(SegError::InvalidParameter { name, value, .. }) => {
                assert_eq!(name, "n");
                assert_eq!(value, 0);
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_supplementary_plane_chars_are_single_units() {
        let model = NGramModel::from_text("𠀋𠀋𠀋", 2).unwrap();
        assert_eq!(model.frequency(&chars("𠀋𠀋")), 2);
        assert_eq!(model.n(), 2);
    }
}
