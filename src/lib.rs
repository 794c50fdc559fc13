//! CrossNGram: dictionary-free text segmentation from in-document n-gram frequency
//!
//! A deterministic three-stage pipeline:
//! - NFKC normalization with whitespace collapse
//! - Sliding-window n-gram histogram built from the text itself
//! - Greedy boundary decisions: a rare straddling window marks a cut

pub mod error;
pub mod normalize;
pub mod ngram;
pub mod segmenter;
pub mod config;
pub mod io;

pub use config::{BlankTokens, Limits, SegmentConfig};
pub use error::{Result, SegError};
pub use ngram::NGramModel;
pub use normalize::normalize;
pub use segmenter::{join_tokens, segment_checked, tokenize, Segmenter, Token};
