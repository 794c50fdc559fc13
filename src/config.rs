use std::ops::RangeInclusive;

use crate::error::{Result, SegError};

/// Smallest window length the segmenter accepts.
pub const MIN_N: usize = 2;

/// What to do with a candidate token that is empty or whitespace-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankTokens {
    /// Silently discard it. Cut positions are unaffected.
    #[default]
    Drop,
    /// Emit it like any other token, so the output is an exact partition.
    Keep,
}

/// Per-call segmentation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentConfig {
    /// Window length in characters.
    pub n: usize,
    /// A straddling window whose count is `<= threshold` marks a cut.
    pub threshold: usize,
    pub blank_tokens: BlankTokens,
}

impl SegmentConfig {
    pub fn new(n: usize, threshold: usize) -> Self {
        SegmentConfig {
            n,
            threshold,
            blank_tokens: BlankTokens::Drop,
        }
    }

    pub fn with_blank_tokens(mut self, blank_tokens: BlankTokens) -> Self {
        self.blank_tokens = blank_tokens;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.n < MIN_N {
            return Err(SegError::invalid(
                "n",
                self.n,
                format!("must be at least {}", MIN_N),
            ));
        }
        Ok(())
    }
}

/// Narrower parameter ranges and size caps advertised by a front end.
///
/// The core only enforces `n >= 2`; these are checked before calling it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    pub n: RangeInclusive<usize>,
    pub threshold: RangeInclusive<usize>,
    /// Maximum UTF-8 size of the raw input, if capped.
    pub max_input_bytes: Option<usize>,
}

impl Limits {
    /// Ranges accepted by the command-line tool.
    pub fn cli() -> Self {
        Limits {
            n: 2..=9,
            threshold: 1..=99,
            max_input_bytes: None,
        }
    }

    /// Ranges accepted by interactive front ends, which also cap input at 32 KiB.
    pub fn interactive() -> Self {
        Limits {
            n: 2..=5,
            threshold: 1..=9,
            max_input_bytes: Some(32 * 1024),
        }
    }

    pub fn with_max_input_bytes(mut self, max_input_bytes: Option<usize>) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    /// Report the first violated limit.
    pub fn check(&self, config: &SegmentConfig, input: &str) -> Result<()> {
        if !self.n.contains(&config.n) {
            return Err(SegError::invalid(
                "n",
                config.n,
                format!("must be in [{}, {}]", self.n.start(), self.n.end()),
            ));
        }
        if !self.threshold.contains(&config.threshold) {
            return Err(SegError::invalid(
                "threshold",
                config.threshold,
                format!(
                    "must be in [{}, {}]",
                    self.threshold.start(),
                    self.threshold.end()
                ),
            ));
        }
        if let Some(limit) = self.max_input_bytes {
            if input.len() > limit {
                return Err(SegError::InputTooLarge {
                    size: input.len(),
                    limit,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_small_n() {
        assert!(SegmentConfig::new(2, 0).validate().is_ok());
        for n in [0, 1] {
            match SegmentConfig::new(n, 1).validate() {
                Err(SegError::InvalidParameter { name, value, .. }) => {
                    assert_eq!(name, "n");
                    assert_eq!(value, n);
                }
                other => panic!("expected InvalidParameter, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_default_blank_policy_is_drop() {
        assert_eq!(SegmentConfig::new(2, 1).blank_tokens, BlankTokens::Drop);
        assert_eq!(BlankTokens::default(), BlankTokens::Drop);
    }

    #[test]
    fn test_cli_limits() {
        let limits = Limits::cli();
        assert!(limits.check(&SegmentConfig::new(9, 99), "x").is_ok());
        assert!(limits.check(&SegmentConfig::new(10, 1), "x").is_err());
        assert!(limits.check(&SegmentConfig::new(2, 0), "x").is_err());
        assert!(limits.check(&SegmentConfig::new(2, 100), "x").is_err());
    }

    #[test]
    fn test_interactive_limits_cap_size() {
        let limits = Limits::interactive();
        let small = "字".repeat(100);
        assert!(limits.check(&SegmentConfig::new(2, 1), &small).is_ok());

        // 3 bytes per character: 11_000 * 3 > 32 KiB
        let big = "字".repeat(11_000);
        match limits.check(&SegmentConfig::new(2, 1), &big) {
            Err(SegError::InputTooLarge { size, limit }) => {
                assert_eq!(size, 33_000);
                assert_eq!(limit, 32_768);
            }
            other => panic!("expected InputTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_threshold_error_names_parameter() {
        let err = Limits::interactive()
            .check(&SegmentConfig::new(3, 10), "abc")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter: threshold=10 (must be in [1, 9])"
        );
    }
}
