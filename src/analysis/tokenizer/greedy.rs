//! Greedy longest-match segmentation.

use std::sync::Arc;

use super::Tokenizer;
use crate::analysis::char_filter::{CharFilter, PatternStripCharFilter};
use crate::analysis::matcher::{Match, MatchFinder};
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::dictionary::PrefixDictionary;
use crate::error::Result;

/// Left-to-right segmenter that always takes the longest match.
///
/// Characters that start no dictionary match are emitted as one-character
/// tokens, so the output always reconstructs the normalized input.
///
/// # Examples
///
/// ```
/// use hanseg::analysis::tokenizer::GreedySegmenter;
/// use hanseg::dictionary::build_dictionary;
///
/// let dict = build_dictionary(["中国", "中", "国", "人民"]);
/// let segmenter = GreedySegmenter::new(&dict);
///
/// assert_eq!(segmenter.segment("中国，人民！"), vec!["中国", "人民"]);
/// assert_eq!(segmenter.segment("美国"), vec!["美", "国"]);
/// ```
#[derive(Clone)]
pub struct GreedySegmenter<'a, V> {
    finder: MatchFinder<'a, V>,
    char_filter: Arc<dyn CharFilter>,
}

impl<'a, V> GreedySegmenter<'a, V> {
    /// Create a greedy segmenter that strips non-word characters.
    pub fn new(dictionary: &'a PrefixDictionary<V>) -> Self {
        GreedySegmenter {
            finder: MatchFinder::new(dictionary),
            char_filter: Arc::new(PatternStripCharFilter::new()),
        }
    }

    /// Replace the char filter used for normalization.
    pub fn with_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filter = char_filter;
        self
    }

    /// Segment `text` into words.
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.segment_tokens(text)
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    /// Segment `text` into tokens with offsets into the normalized text.
    pub fn segment_tokens(&self, text: &str) -> Vec<Token> {
        let normalized = self.char_filter.filter(text);
        let chars: Vec<char> = normalized.chars().collect();
        let matches = self.finder.find_all_chars(&chars);
        let longest = longest_by_start(&matches, chars.len());

        let mut tokens = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let position = tokens.len();
            match longest[i] {
                Some(m) => {
                    tokens.push(Token::with_offsets(m.text.clone(), position, m.start, m.end));
                    i = m.end;
                }
                None => {
                    tokens.push(Token::unmatched(chars[i].to_string(), position, i, i + 1));
                    i += 1;
                }
            }
        }

        log::trace!(
            "greedy segmentation: {} chars, {} matches, {} tokens",
            chars.len(),
            matches.len(),
            tokens.len()
        );
        tokens
    }
}

/// Longest match starting at each offset; ties keep the first one seen.
fn longest_by_start(matches: &[Match], len: usize) -> Vec<Option<&Match>> {
    let mut longest: Vec<Option<&Match>> = vec![None; len];
    for m in matches {
        let slot = &mut longest[m.start];
        if slot.is_none_or(|best| m.len() > best.len()) {
            *slot = Some(m);
        }
    }
    longest
}

impl<V: Sync> Tokenizer for GreedySegmenter<'_, V> {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(self.segment_tokens(text).into_token_stream())
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::build_dictionary;

    #[test]
    fn test_longest_match_wins() {
        let dict = build_dictionary(["中国", "中", "国"]);
        let segmenter = GreedySegmenter::new(&dict);
        assert_eq!(segmenter.segment("中国"), vec!["中国"]);
    }

    #[test]
    fn test_unmatched_character_fallback() {
        let dict = build_dictionary(["国"]);
        let segmenter = GreedySegmenter::new(&dict);

        let tokens = segmenter.segment_tokens("中国");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "中");
        assert!(!tokens[0].matched);
        assert_eq!(tokens[1].text, "国");
        assert!(tokens[1].matched);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (1, 2));
    }

    #[test]
    fn test_punctuation_is_stripped() {
        let dict = build_dictionary(["台湾", "总统", "蔡英文"]);
        let segmenter = GreedySegmenter::new(&dict);

        assert_eq!(
            segmenter.segment("台湾总统，蔡英文。"),
            vec!["台湾", "总统", "蔡英文"]
        );
    }

    #[test]
    fn test_greedy_is_locally_longest() {
        // 研究生命 → greedy takes 研究生 and strands 命.
        let dict = build_dictionary(["研究", "研究生", "生命", "命"]);
        let segmenter = GreedySegmenter::new(&dict);
        assert_eq!(segmenter.segment("研究生命"), vec!["研究生", "命"]);
    }

    #[test]
    fn test_positions_and_coverage() {
        let dict = build_dictionary(["中国", "军方"]);
        let segmenter = GreedySegmenter::new(&dict);

        let tokens = segmenter.segment_tokens("中国军方此举");
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, "中国军方此举");
        for (index, token) in tokens.iter().enumerate() {
            assert_eq!(token.position, index);
        }
        assert_eq!(tokens.last().unwrap().end_offset, 6);
    }

    #[test]
    fn test_empty_input() {
        let dict = build_dictionary(["中国"]);
        let segmenter = GreedySegmenter::new(&dict);
        assert!(segmenter.segment("").is_empty());
        assert!(segmenter.segment("，。").is_empty());
    }

    #[test]
    fn test_tokenizer_trait() {
        let dict = build_dictionary(["中国"]);
        let segmenter = GreedySegmenter::new(&dict);
        let tokens: Vec<Token> = segmenter.tokenize("中国").unwrap().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(segmenter.name(), "greedy");
    }
}
