//! Exhaustive discovery of dictionary matches.
//!
//! [`MatchFinder::scan`] walks every start offset of the input and extends
//! the candidate one character at a time while the candidate is still a
//! prefix of some dictionary entry. Each exact entry found along the way is
//! recorded as a [`Match`]. As soon as a start offset hits a dead end (the
//! candidate is neither an entry nor a prefix of one) the matches collected
//! so far are closed into a [`Run`].
//!
//! Offsets are counted in code points.
//!
//! # Examples
//!
//! ```
//! use hanseg::analysis::matcher::MatchFinder;
//! use hanseg::dictionary::build_dictionary;
//!
//! let dict = build_dictionary(["中国", "中", "国"]);
//! let finder = MatchFinder::new(&dict);
//!
//! let matches = finder.find_all("中国");
//! let texts: Vec<_> = matches.iter().map(|m| m.text.as_str()).collect();
//! assert_eq!(texts, vec!["中", "中国", "国"]);
//! ```

use std::slice;

use serde::{Deserialize, Serialize};

use crate::dictionary::PrefixDictionary;

/// A dictionary hit over the half-open code-point range `start..end`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    /// The matched text.
    pub text: String,
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl Match {
    /// Create a new match.
    pub fn new<S: Into<String>>(text: S, start: usize, end: usize) -> Self {
        Match {
            text: text.into(),
            start,
            end,
        }
    }

    /// Span of the match in code points.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the match spans no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Matches found before the scan hit a dead end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    matches: Vec<Match>,
}

impl Run {
    /// Create a run from matches in discovery order.
    pub fn new(matches: Vec<Match>) -> Self {
        Run { matches }
    }

    /// Matches in discovery order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Number of matches in the run.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the run holds no matches.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Smallest start offset in the run.
    pub fn start(&self) -> Option<usize> {
        self.matches.iter().map(|m| m.start).min()
    }

    /// Largest end offset in the run.
    pub fn end(&self) -> Option<usize> {
        self.matches.iter().map(|m| m.end).max()
    }

    /// Iterate over the matches.
    pub fn iter(&self) -> slice::Iter<'_, Match> {
        self.matches.iter()
    }

    /// Consume the run, returning its matches.
    pub fn into_matches(self) -> Vec<Match> {
        self.matches
    }
}

impl IntoIterator for Run {
    type Item = Match;
    type IntoIter = std::vec::IntoIter<Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a Run {
    type Item = &'a Match;
    type IntoIter = slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Flatten runs into a single list of matches, preserving order.
pub fn flatten(runs: Vec<Run>) -> Vec<Match> {
    runs.into_iter().flat_map(Run::into_matches).collect()
}

/// Enumerates every dictionary entry occurring in a text.
#[derive(Debug)]
pub struct MatchFinder<'a, V> {
    dictionary: &'a PrefixDictionary<V>,
}

impl<V> Clone for MatchFinder<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for MatchFinder<'_, V> {}

impl<'a, V> MatchFinder<'a, V> {
    /// Create a match finder over `dictionary`.
    pub fn new(dictionary: &'a PrefixDictionary<V>) -> Self {
        MatchFinder { dictionary }
    }

    /// The dictionary being searched.
    pub fn dictionary(&self) -> &'a PrefixDictionary<V> {
        self.dictionary
    }

    /// Scan `text` and group the matches into runs.
    ///
    /// The text is used as given; callers that want punctuation removed
    /// should normalize it first.
    pub fn scan(&self, text: &str) -> Vec<Run> {
        let chars: Vec<char> = text.chars().collect();
        self.scan_chars(&chars)
    }

    /// Scan pre-split characters. See [`scan`](Self::scan).
    pub fn scan_chars(&self, chars: &[char]) -> Vec<Run> {
        let n = chars.len();
        let mut runs = Vec::new();
        let mut current = Vec::new();

        for i in 0..n {
            // One trie descent per start offset; `node` tracks chars[i..j].
            let mut node = Some(self.dictionary.root());

            for j in i + 1..=n {
                node = node.and_then(|parent| parent.child(chars[j - 1]));

                match node {
                    Some(found) if found.is_terminal() => {
                        current.push(Match::new(chars[i..j].iter().collect::<String>(), i, j));
                    }
                    // Still a prefix of a longer entry.
                    Some(_) => {}
                    // A single character always counts as a prefix.
                    None if j == i + 1 => {}
                    None => {
                        if !current.is_empty() {
                            runs.push(Run::new(std::mem::take(&mut current)));
                        }
                        break;
                    }
                }
            }
        }

        if !current.is_empty() {
            runs.push(Run::new(current));
        }

        log::trace!(
            "scanned {} chars: {} runs, {} matches",
            n,
            runs.len(),
            runs.iter().map(Run::len).sum::<usize>()
        );
        runs
    }

    /// Scan `text` and return every match in discovery order.
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        flatten(self.scan(text))
    }

    /// Flattened matches over pre-split characters.
    pub fn find_all_chars(&self, chars: &[char]) -> Vec<Match> {
        flatten(self.scan_chars(chars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::build_dictionary;

    fn texts(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn test_find_all_overlapping() {
        let dict = build_dictionary(["中国", "中", "国", "中国人", "人民"]);
        let finder = MatchFinder::new(&dict);

        let matches = finder.find_all("中国人民");
        assert_eq!(texts(&matches), vec!["中", "中国", "中国人", "国", "人民"]);
        assert_eq!(matches[2], Match::new("中国人", 0, 3));
        assert_eq!(matches[4], Match::new("人民", 2, 4));
    }

    #[test]
    fn test_runs_split_on_dead_ends() {
        let dict = build_dictionary(["中国", "台湾"]);
        let finder = MatchFinder::new(&dict);

        // 和 is not in the trie, so the scan dies at offset 2.
        let runs = finder.scan("中国和台湾");
        assert_eq!(runs.len(), 2);
        assert_eq!(texts(runs[0].matches()), vec!["中国"]);
        assert_eq!(texts(runs[1].matches()), vec!["台湾"]);
        assert_eq!(runs[1].start(), Some(3));
        assert_eq!(runs[1].end(), Some(5));
    }

    #[test]
    fn test_prefix_only_extends_without_recording() {
        let dict = build_dictionary(["中华人民"]);
        let finder = MatchFinder::new(&dict);

        assert_eq!(texts(&finder.find_all("中华人民")), vec!["中华人民"]);
        assert!(finder.find_all("中华人").is_empty());
    }

    #[test]
    fn test_offsets_are_code_points() {
        let dict = build_dictionary(["é", "ab"]);
        let finder = MatchFinder::new(&dict);

        let matches = finder.find_all("éab");
        assert_eq!(matches, vec![Match::new("é", 0, 1), Match::new("ab", 1, 3)]);
    }

    #[test]
    fn test_empty_input_and_dictionary() {
        let dict = build_dictionary(["中国"]);
        assert!(MatchFinder::new(&dict).scan("").is_empty());

        let empty = build_dictionary(Vec::<String>::new());
        assert!(MatchFinder::new(&empty).scan("中国").is_empty());
    }

    #[test]
    fn test_flatten_preserves_order() {
        let runs = vec![
            Run::new(vec![Match::new("a", 0, 1)]),
            Run::new(vec![Match::new("b", 2, 3), Match::new("bc", 2, 4)]),
        ];
        let flat = flatten(runs);
        assert_eq!(texts(&flat), vec!["a", "b", "bc"]);
    }
}
