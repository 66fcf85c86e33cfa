//! Dictionary-driven segmenters.
//!
//! Both segmenters normalize the input with a [`CharFilter`], enumerate the
//! dictionary matches of the normalized text with a
//! [`MatchFinder`](crate::analysis::matcher::MatchFinder), and turn the
//! matches into an ordered token list that covers the whole normalized
//! string.
//!
//! - [`greedy::GreedySegmenter`] - longest match at each position
//! - [`shortest_path::PathSegmenter`] - minimum-weight path over the match graph
//!
//! [`CharFilter`]: crate::analysis::char_filter::CharFilter

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so segmenters can be shared by parallel
/// readers of the same dictionary.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod greedy;
pub mod shortest_path;

pub use greedy::GreedySegmenter;
pub use shortest_path::{DEFAULT_LENGTH_EXPONENT, PathSegmenter, PathWeighting, SegmentPath};
