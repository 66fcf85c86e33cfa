//! Token types produced by the segmenters.
//!
//! A [`Token`] is one output segment together with its position in the token
//! stream and its code-point offsets in the normalized text.
//!
//! # Examples
//!
//! ```
//! use hanseg::analysis::token::Token;
//!
//! let token = Token::with_offsets("中国", 0, 0, 2);
//! assert_eq!(token.text, "中国");
//! assert_eq!(token.char_len(), 2);
//! assert!(token.matched);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single segment of the normalized input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// Code-point offset where this token starts in the normalized text
    pub start_offset: usize,

    /// Code-point offset where this token ends in the normalized text
    pub end_offset: usize,

    /// Whether the token is a dictionary entry. Unmatched characters emitted
    /// by greedy segmentation, and segments extended with uncovered text by
    /// path segmentation, are `false`.
    pub matched: bool,
}

impl Token {
    /// Create a new dictionary-matched token with offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            matched: true,
        }
    }

    /// Create a token for text that has no dictionary entry.
    pub fn unmatched<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            matched: false,
            ..Token::with_offsets(text, position, start_offset, end_offset)
        }
    }

    /// Span of the token in code points.
    pub fn char_len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from a segmenter.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("台湾", 1, 3, 5);
        assert_eq!(token.text, "台湾");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 3);
        assert_eq!(token.end_offset, 5);
        assert_eq!(token.char_len(), 2);
        assert!(token.matched);
    }

    #[test]
    fn test_unmatched_token() {
        let token = Token::unmatched("的", 0, 0, 1);
        assert!(!token.matched);
        assert_eq!(token.to_string(), "的");
    }

    #[test]
    fn test_token_serialization() {
        let token = Token::with_offsets("中国", 0, 0, 2);
        let json = serde_json::to_string(&token).unwrap();
        let parsed: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, token);
    }
}
