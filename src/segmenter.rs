//! High-level segmentation facade.
//!
//! [`Segmenter`] owns a shared dictionary and a [`SegmenterConfig`], and picks
//! the greedy or shortest-path strategy per the configured
//! [`SegmentationMode`]. Shortest-path failures are returned to the caller
//! unless `fallback_to_greedy` is switched on explicitly.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use hanseg::dictionary::build_dictionary;
//! use hanseg::segmenter::{SegmentationMode, Segmenter, SegmenterConfig};
//!
//! let dict = Arc::new(build_dictionary(["研究", "研究生", "生命", "命"]));
//! let config = SegmenterConfig {
//!     mode: SegmentationMode::ShortestPath,
//!     ..Default::default()
//! };
//! let segmenter = Segmenter::new(dict, config).unwrap();
//!
//! assert_eq!(segmenter.segment("研究生命").unwrap(), vec!["研究", "生命"]);
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{CharFilter, NON_WORD_PATTERN, PatternStripCharFilter};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{
    DEFAULT_LENGTH_EXPONENT, GreedySegmenter, PathSegmenter, PathWeighting,
};
use crate::dictionary::PrefixDictionary;
use crate::error::{HansegError, Result};

/// Segmentation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentationMode {
    /// Longest match at each position.
    #[default]
    Greedy,
    /// Minimum-weight path over the match graph.
    ShortestPath,
}

impl fmt::Display for SegmentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentationMode::Greedy => write!(f, "greedy"),
            SegmentationMode::ShortestPath => write!(f, "shortest_path"),
        }
    }
}

/// Configuration for [`Segmenter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Strategy used by [`Segmenter::segment`].
    pub mode: SegmentationMode,
    /// Exponent of the shortest-path length penalty.
    pub length_exponent: f64,
    /// Retry with greedy segmentation when no shortest path exists.
    pub fallback_to_greedy: bool,
    /// Regex whose matches are removed before segmentation.
    pub normalize_pattern: String,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        SegmenterConfig {
            mode: SegmentationMode::Greedy,
            length_exponent: DEFAULT_LENGTH_EXPONENT,
            fallback_to_greedy: false,
            normalize_pattern: NON_WORD_PATTERN.to_string(),
        }
    }
}

impl SegmenterConfig {
    /// Parse a JSON configuration; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HansegError::invalid_argument(format!(
                "Failed to read segmenter config '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }
}

/// Dictionary plus strategy, ready to segment text.
pub struct Segmenter<V = ()> {
    dictionary: Arc<PrefixDictionary<V>>,
    config: SegmenterConfig,
    char_filter: Arc<dyn CharFilter>,
    weighting: PathWeighting,
}

impl<V> Segmenter<V> {
    /// Create a segmenter, validating the configuration.
    pub fn new(dictionary: Arc<PrefixDictionary<V>>, config: SegmenterConfig) -> Result<Self> {
        let char_filter = Arc::new(PatternStripCharFilter::with_pattern(
            &config.normalize_pattern,
        )?);
        let weighting = PathWeighting::new(config.length_exponent)?;

        Ok(Segmenter {
            dictionary,
            config,
            char_filter,
            weighting,
        })
    }

    /// The shared dictionary.
    pub fn dictionary(&self) -> &Arc<PrefixDictionary<V>> {
        &self.dictionary
    }

    /// The active configuration.
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// A greedy segmenter over the shared dictionary.
    pub fn greedy(&self) -> GreedySegmenter<'_, V> {
        GreedySegmenter::new(&self.dictionary).with_char_filter(Arc::clone(&self.char_filter))
    }

    /// A shortest-path segmenter over the shared dictionary.
    pub fn shortest_path(&self) -> PathSegmenter<'_, V> {
        PathSegmenter::new(&self.dictionary)
            .with_char_filter(Arc::clone(&self.char_filter))
            .with_weighting(self.weighting)
    }

    /// Segment `text` with the configured strategy.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        match self.config.mode {
            SegmentationMode::Greedy => Ok(self.greedy().segment_tokens(text)),
            SegmentationMode::ShortestPath => match self.shortest_path().segment_tokens(text) {
                Err(e) if e.is_pathfinding() && self.config.fallback_to_greedy => {
                    log::debug!("{e}; falling back to greedy segmentation");
                    Ok(self.greedy().segment_tokens(text))
                }
                result => result,
            },
        }
    }

    /// Segment `text` into words with the configured strategy.
    pub fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .tokenize(text)?
            .into_iter()
            .map(|token| token.text)
            .collect())
    }
}

impl<V: Send + Sync> Segmenter<V> {
    /// Segment many texts in parallel.
    ///
    /// Segmentation only reads the dictionary, so the texts are processed
    /// concurrently; results keep the input order.
    pub fn segment_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Result<Vec<String>>> {
        texts
            .par_iter()
            .map(|text| self.segment(text.as_ref()))
            .collect()
    }

    /// Like [`Segmenter::segment_batch`], keeping token offsets.
    pub fn tokenize_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Result<Vec<Token>>> {
        texts
            .par_iter()
            .map(|text| self.tokenize(text.as_ref()))
            .collect()
    }
}
