//! # hanseg
//!
//! Dictionary-driven word segmentation for scripts written without spaces
//! between words, such as Chinese.
//!
//! ## Features
//!
//! - Character trie dictionary with exact lookup, prefix enumeration and
//!   pruning deletion
//! - Exhaustive match discovery with prefix pruning
//! - Greedy longest-match segmentation
//! - Shortest-path segmentation that minimizes fragmentation
//! - CEDICT dictionary parsing
//!
//! ## Quick Start
//!
//! ```
//! use hanseg::{build_dictionary, greedy_segment, path_segment};
//!
//! let dict = build_dictionary(["中国", "中", "国", "人民"]);
//!
//! assert_eq!(greedy_segment(&dict, "中国人民"), vec!["中国", "人民"]);
//! assert_eq!(path_segment(&dict, "中国人民").unwrap(), vec!["中国", "人民"]);
//! ```
//!
//! Offsets reported anywhere in this crate are code-point indices into the
//! normalized text (see [`analysis::char_filter`]), not byte offsets.

pub mod analysis;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod segmenter;
pub mod util;

pub use analysis::matcher::{Match, MatchFinder, Run};
pub use dictionary::{PrefixDictionary, build_dictionary};
pub use error::{HansegError, PathfindingError, Result};

use analysis::tokenizer::{GreedySegmenter, PathSegmenter};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Enumerate the dictionary matches in `text`, grouped into runs.
///
/// The text is scanned as given, without normalization.
pub fn scan_matches<V>(dictionary: &PrefixDictionary<V>, text: &str) -> Vec<Run> {
    MatchFinder::new(dictionary).scan(text)
}

/// Segment `text` by taking the longest dictionary match at each position.
pub fn greedy_segment<V>(dictionary: &PrefixDictionary<V>, text: &str) -> Vec<String> {
    GreedySegmenter::new(dictionary).segment(text)
}

/// Segment `text` along the minimum-weight path through its matches.
///
/// Returns [`HansegError::Pathfinding`] when no path exists.
pub fn path_segment<V>(dictionary: &PrefixDictionary<V>, text: &str) -> Result<Vec<String>> {
    PathSegmenter::new(dictionary).segment(text)
}
