//! Error types for the hanseg library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`HansegError`] enum. Lookups on the dictionary never fail; absent keys are
//! reported as `None` or an empty set.
//!
//! Shortest-path segmentation has its own error type, [`PathfindingError`],
//! so callers can tell "no path through the dictionary graph" apart from
//! every other failure.
//!
//! # Examples
//!
//! ```
//! use hanseg::error::{HansegError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(HansegError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for hanseg operations.
#[derive(Error, Debug)]
pub enum HansegError {
    /// I/O errors (reading dictionary or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed dictionary source
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Analysis-related errors (normalization patterns, tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument or configuration value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No segmentation path exists through the match graph
    #[error(transparent)]
    Pathfinding(#[from] PathfindingError),
}

/// Raised when shortest-path segmentation cannot reach any target offset.
///
/// This happens for empty input, when the first character starts no
/// dictionary match, or when the final character is not covered by any match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no segmentation path over {text_len} characters: {reason}")]
pub struct PathfindingError {
    /// Length of the normalized input, in code points.
    pub text_len: usize,
    /// Human readable reason.
    pub reason: String,
}

impl PathfindingError {
    /// Create a new pathfinding error.
    pub fn new<S: Into<String>>(text_len: usize, reason: S) -> Self {
        PathfindingError {
            text_len,
            reason: reason.into(),
        }
    }
}

/// Result type alias for operations that may fail with HansegError.
pub type Result<T> = std::result::Result<T, HansegError>;

impl HansegError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        HansegError::Dictionary(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        HansegError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        HansegError::InvalidArgument(msg.into())
    }

    /// Whether this error came from shortest-path segmentation.
    pub fn is_pathfinding(&self) -> bool {
        matches!(self, HansegError::Pathfinding(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = HansegError::dictionary("bad line");
        assert_eq!(error.to_string(), "Dictionary error: bad line");

        let error = HansegError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = HansegError::invalid_argument("negative exponent");
        assert_eq!(error.to_string(), "Invalid argument: negative exponent");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = HansegError::from(io_error);

        match error {
            HansegError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_pathfinding_error_is_distinct() {
        let error: HansegError = PathfindingError::new(3, "offset 0 unreachable").into();
        assert!(error.is_pathfinding());
        assert_eq!(
            error.to_string(),
            "no segmentation path over 3 characters: offset 0 unreachable"
        );
        assert!(!HansegError::analysis("x").is_pathfinding());
    }
}
