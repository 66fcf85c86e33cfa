//! Char filters that normalize text before segmentation.
//!
//! Segment boundaries are computed against the filtered string, not the raw
//! input, so every offset reported by the match finder and the segmenters
//! refers to the output of the char filter.
//!
//! # Examples
//!
//! ```
//! use hanseg::analysis::char_filter::{CharFilter, PatternStripCharFilter};
//!
//! let filter = PatternStripCharFilter::new();
//! assert_eq!(filter.filter("中国，你好！ ok"), "中国你好ok");
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::error::{HansegError, Result};

/// Default pattern: any run of non-word characters (punctuation, whitespace,
/// symbols).
pub const NON_WORD_PATTERN: &str = r"\W+";

/// Trait for character filters that transform text before segmentation.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// A char filter that deletes every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternStripCharFilter {
    pattern: Arc<Regex>,
}

impl PatternStripCharFilter {
    /// Create a filter that strips non-word characters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter that strips matches of a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| HansegError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(PatternStripCharFilter {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for PatternStripCharFilter {
    fn default() -> Self {
        Self::with_pattern(NON_WORD_PATTERN).expect("Default regex pattern should be valid")
    }
}

impl CharFilter for PatternStripCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_strip"
    }
}
