/// Boundary-decision segmenter.
///
/// One greedy left-to-right pass over the normalized text. At every boundary the
/// length-`n` window made of the character before it and the `n - 1` characters
/// after it is looked up in the document's own n-gram histogram. A window seen
/// `<= threshold` times is rare, so the boundary becomes a cut. Earlier cuts are
/// never revisited.
///
/// Input: "abcabc", n=3, threshold=1 → ["ab", "c", "abc"]
use crate::config::{BlankTokens, Limits, SegmentConfig};
use crate::error::Result;
use crate::ngram::NGramModel;
use crate::normalize::{is_blank, normalize};

/// A token with its location in the normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Index of the first character.
    pub position: usize,
    /// UTF-8 byte offset of the first character.
    pub byte_offset: usize,
}

/// Segmenter bound to one validated configuration.
///
/// Holds no per-document state, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: SegmentConfig,
}

impl Segmenter {
    pub fn new(config: SegmentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Segmenter { config })
    }

    pub fn config(&self) -> &SegmentConfig {
        &self.config
    }

    /// Normalize `raw` and split it into tokens in document order.
    pub fn segment(&self, raw: &str) -> Result<Vec<Token>> {
        let text = normalize(raw);
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let n = self.config.n;
        let chars: Vec<char> = text.chars().collect();
        if chars.len() <= n {
            return Ok(vec![Token {
                text,
                position: 0,
                byte_offset: 0,
            }]);
        }

        // offsets[i] is the byte offset of chars[i]; offsets[len] == text.len()
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());

        let model = NGramModel::build(&chars, n)?;
        let mut tokens = Vec::new();
        let mut start = 0;

        // Windows running past the end are never scored; the tail is flushed below.
        let last_scored = chars.len() - n + 1;
        for boundary in 1..=last_scored {
            let gram_start = boundary - 1;
            let count = model.frequency(&chars[gram_start..gram_start + n]);
            if count <= self.config.threshold {
                log::trace!("cut at {} (count={})", boundary, count);
                self.emit(&mut tokens, &text, &offsets, start, boundary);
                start = boundary;
            }
        }

        if start < chars.len() {
            self.emit(&mut tokens, &text, &offsets, start, chars.len());
        }

        log::debug!(
            "segmented {} chars into {} tokens (n={}, threshold={})",
            chars.len(),
            tokens.len(),
            n,
            self.config.threshold
        );
        Ok(tokens)
    }

    fn emit(
        &self,
        tokens: &mut Vec<Token>,
        text: &str,
        offsets: &[usize],
        start: usize,
        end: usize,
    ) {
        let candidate = &text[offsets[start]..offsets[end]];
        if self.config.blank_tokens == BlankTokens::Drop && is_blank(candidate) {
            return;
        }
        tokens.push(Token {
            text: candidate.to_string(),
            position: start,
            byte_offset: offsets[start],
        });
    }
}

/// Tokenize `raw` with window length `n` and rarity `threshold`.
///
/// Fails only when `n < 2`.
pub fn tokenize(raw: &str, n: usize, threshold: usize) -> Result<Vec<String>> {
    let segmenter = Segmenter::new(SegmentConfig::new(n, threshold))?;
    Ok(into_texts(segmenter.segment(raw)?))
}

/// Check front-end `limits` first, then tokenize.
pub fn segment_checked(raw: &str, config: &SegmentConfig, limits: &Limits) -> Result<Vec<String>> {
    limits.check(config, raw)?;
    let segmenter = Segmenter::new(*config)?;
    Ok(into_texts(segmenter.segment(raw)?))
}

/// Join tokens with a single ASCII space.
pub fn join_tokens(tokens: &[String]) -> String {
    tokens.join(" ")
}

fn into_texts(tokens: Vec<Token>) -> Vec<String> {
    tokens.into_iter().map(|t| t.text).collect()
}
