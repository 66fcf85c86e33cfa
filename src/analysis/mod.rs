//! Text analysis: normalization, match discovery and segmentation.

pub mod char_filter;
pub mod matcher;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use char_filter::{CharFilter, PatternStripCharFilter};
pub use matcher::{Match, MatchFinder, Run};
pub use token::{Token, TokenStream};
pub use tokenizer::{GreedySegmenter, PathSegmenter, Tokenizer};
