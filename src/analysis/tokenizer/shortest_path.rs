//! Shortest-path segmentation.
//!
//! Every dictionary match becomes an edge from its start offset to its end
//! offset, weighted so that long matches are cheap. The cheapest path from
//! offset 0 to the end of the normalized text is the segmentation with the
//! least fragmentation overall, rather than the locally longest choice the
//! greedy segmenter makes.
//!
//! ```text
//! 研究生命   dictionary: 研究 研究生 生命 命
//!
//!   0 --研究 (0.25)--> 2 --生命 (0.25)--> 4      total 0.50
//!   0 --研究生 (0.11)--> 3 --命 (1.00)--> 4      total 1.11
//! ```
//!
//! When the end offset cannot be reached because of an interior gap in
//! dictionary coverage, the search retries with earlier targets and the
//! uncovered tail is appended to the last segment.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Tokenizer;
use crate::analysis::char_filter::{CharFilter, PatternStripCharFilter};
use crate::analysis::matcher::{Match, MatchFinder};
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::dictionary::PrefixDictionary;
use crate::error::{HansegError, PathfindingError, Result};
use crate::util::graph::Graph;

/// Default exponent of the length penalty.
pub const DEFAULT_LENGTH_EXPONENT: f64 = 2.0;

/// Edge weighting for the match graph: `1 / len^length_exponent`.
///
/// Serialized as the bare exponent; deserialization goes through
/// [`PathWeighting::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PathWeighting {
    length_exponent: f64,
}

impl PathWeighting {
    /// Create a weighting with a custom exponent.
    ///
    /// The exponent must be finite and non-negative so that every edge
    /// weight stays non-negative.
    pub fn new(length_exponent: f64) -> Result<Self> {
        if !length_exponent.is_finite() || length_exponent < 0.0 {
            return Err(HansegError::invalid_argument(format!(
                "length exponent must be finite and non-negative, got {length_exponent}"
            )));
        }
        Ok(PathWeighting { length_exponent })
    }

    /// The exponent applied to the match length.
    pub fn length_exponent(&self) -> f64 {
        self.length_exponent
    }

    /// Weight of an edge spanning `len` characters.
    pub fn weight(&self, len: usize) -> f64 {
        1.0 / (len as f64).powf(self.length_exponent)
    }
}

impl TryFrom<f64> for PathWeighting {
    type Error = HansegError;

    fn try_from(length_exponent: f64) -> Result<Self> {
        Self::new(length_exponent)
    }
}

impl From<PathWeighting> for f64 {
    fn from(weighting: PathWeighting) -> Self {
        weighting.length_exponent
    }
}

impl Default for PathWeighting {
    fn default() -> Self {
        PathWeighting {
            length_exponent: DEFAULT_LENGTH_EXPONENT,
        }
    }
}

/// The offsets chosen by shortest-path segmentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPath {
    /// Increasing offsets from 0 to `reached`.
    pub offsets: Vec<usize>,
    /// Total edge weight of the path.
    pub cost: f64,
    /// Length of the normalized text in code points.
    pub text_len: usize,
}

impl SegmentPath {
    /// Last offset reached by the path.
    pub fn reached(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }

    /// Whether the path spans the whole normalized text.
    pub fn is_complete(&self) -> bool {
        self.reached() == self.text_len
    }
}

/// Segmenter that minimizes fragmentation with a shortest-path search.
///
/// # Examples
///
/// ```
/// use hanseg::analysis::tokenizer::PathSegmenter;
/// use hanseg::dictionary::build_dictionary;
///
/// let dict = build_dictionary(["研究", "研究生", "生命", "命"]);
/// let segmenter = PathSegmenter::new(&dict);
///
/// assert_eq!(segmenter.segment("研究生命").unwrap(), vec!["研究", "生命"]);
/// ```
#[derive(Clone)]
pub struct PathSegmenter<'a, V> {
    finder: MatchFinder<'a, V>,
    char_filter: Arc<dyn CharFilter>,
    weighting: PathWeighting,
}

impl<'a, V> PathSegmenter<'a, V> {
    /// Create a path segmenter with the default weighting that strips
    /// non-word characters.
    pub fn new(dictionary: &'a PrefixDictionary<V>) -> Self {
        PathSegmenter {
            finder: MatchFinder::new(dictionary),
            char_filter: Arc::new(PatternStripCharFilter::new()),
            weighting: PathWeighting::default(),
        }
    }

    /// Replace the char filter used for normalization.
    pub fn with_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filter = char_filter;
        self
    }

    /// Replace the edge weighting.
    pub fn with_weighting(mut self, weighting: PathWeighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// The edge weighting in use.
    pub fn weighting(&self) -> PathWeighting {
        self.weighting
    }

    /// Segment `text` into words.
    pub fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .segment_tokens(text)?
            .into_iter()
            .map(|token| token.text)
            .collect())
    }

    /// Segment `text` into tokens with offsets into the normalized text.
    ///
    /// Fails with [`PathfindingError`] when the normalized text is empty,
    /// when its final character is not covered by any dictionary match, or
    /// when no dictionary match starts at offset 0.
    pub fn segment_tokens(&self, text: &str) -> Result<Vec<Token>> {
        let normalized = self.char_filter.filter(text);
        let chars: Vec<char> = normalized.chars().collect();
        let path = self.path_over(&chars)?;

        let mut tokens: Vec<Token> = path
            .offsets
            .windows(2)
            .enumerate()
            .map(|(position, pair)| {
                let text: String = chars[pair[0]..pair[1]].iter().collect();
                Token::with_offsets(text, position, pair[0], pair[1])
            })
            .collect();

        let reached = path.reached();
        if reached < chars.len()
            && let Some(last) = tokens.last_mut()
        {
            last.text.extend(&chars[reached..]);
            last.end_offset = chars.len();
            last.matched = false;
        }

        Ok(tokens)
    }

    /// Find the segmentation path for `text` without materializing tokens.
    pub fn shortest_path(&self, text: &str) -> Result<SegmentPath> {
        let normalized = self.char_filter.filter(text);
        let chars: Vec<char> = normalized.chars().collect();
        self.path_over(&chars)
    }

    fn path_over(&self, chars: &[char]) -> Result<SegmentPath> {
        let n = chars.len();

        log::trace!("path segmentation: scanning {n} chars");
        let matches = self.finder.find_all_chars(chars);

        if n == 0 {
            return Err(Self::failed(n, "empty input"));
        }
        if !matches.iter().any(|m| m.end == n) {
            return Err(Self::failed(
                n,
                "final character is not covered by any dictionary entry",
            ));
        }

        let graph = self.build_graph(&matches);
        log::trace!(
            "path segmentation: graph built with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        for target in (1..=n).rev() {
            if let Some(path) = graph.shortest_path(0, target) {
                if target < n {
                    log::debug!(
                        "offset {n} unreachable, fell back to offset {target} (cost {:.4})",
                        path.cost
                    );
                } else {
                    log::trace!("path segmentation: path found (cost {:.4})", path.cost);
                }
                return Ok(SegmentPath {
                    offsets: path.nodes,
                    cost: path.cost,
                    text_len: n,
                });
            }
        }

        Err(Self::failed(n, "no dictionary entry starts at offset 0"))
    }

    fn build_graph(&self, matches: &[Match]) -> Graph {
        let mut graph = Graph::new();
        for m in matches {
            graph.add_edge(m.start, m.end, self.weighting.weight(m.len()));
        }
        graph
    }

    fn failed(text_len: usize, reason: &str) -> HansegError {
        log::debug!("path segmentation failed: {reason}");
        PathfindingError::new(text_len, reason).into()
    }
}

impl<V: Sync> Tokenizer for PathSegmenter<'_, V> {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(self.segment_tokens(text)?.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "shortest_path"
    }
}
