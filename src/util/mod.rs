//! Utility modules for hanseg.

pub mod graph;

// Re-export commonly used types
pub use graph::{Graph, ShortestPath};
