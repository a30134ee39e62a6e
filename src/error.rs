//! Error types for diagram construction

use std::fmt;

/// Errors that can occur while building a diagram
///
/// Every operation on a constructed diagram is total; only construction
/// (and reseeding from explicit seeds) can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoronoiError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// An explicitly placed seed lies outside the grid
    SeedOutOfBounds { x: usize, y: usize },
}

impl fmt::Display for VoronoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoronoiError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            VoronoiError::SeedOutOfBounds { x, y } => {
                write!(f, "seed ({}, {}) lies outside the grid", x, y)
            }
        }
    }
}

impl std::error::Error for VoronoiError {}

/// Result type alias for diagram operations
pub type Result<T> = std::result::Result<T, VoronoiError>;
