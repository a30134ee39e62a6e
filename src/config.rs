//! Diagram Configuration and Builder
//!
//! This module provides configuration types for reproducible wavefront tessellation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoronoiError};

/// Resolution rule for claims of equal distance within one ring
///
/// Seeds are processed in ascending index order. When two seeds reach the same
/// cell in the same ring at the same squared distance, this decides the owner.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The seed processed last keeps the cell (higher seed index wins)
    #[default]
    LastWins,
    /// The seed processed first keeps the cell (lower seed index wins)
    FirstWins,
}

/// Configuration for a wavefront Voronoi diagram
///
/// The same configuration always produces the identical seed layout and the
/// identical tessellation.
///
/// # Example
///
/// ```rust
/// use rust_voronoi_wavefront::*;
///
/// let config = DiagramConfigBuilder::new()
///     .size(64, 48).unwrap()
///     .seed_count(10).unwrap()
///     .rng_seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.cell_count(), 64 * 48);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramConfig {
    /// Grid width in cells (pixels)
    pub width: usize,

    /// Grid height in cells (pixels)
    pub height: usize,

    /// Number of seeds placed on every (re)initialization
    pub seed_count: usize,

    /// Random seed for seed placement and colors
    pub rng_seed: u64,

    /// Owner selection for equidistant claims in the same ring
    pub tie_break: TieBreak,
}

impl DiagramConfig {
    /// Total number of grid cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check the invariants the builder enforces
    ///
    /// Configs built by hand (public fields) go through this before a diagram
    /// is constructed from them.
    pub fn validate(&self) -> Result<()> {
        validate_size(self.width, self.height)?;
        if self.seed_count > self.cell_count() {
            return Err(VoronoiError::InvalidConfig(format!(
                "seed count {} exceeds the {} cells of a {}x{} grid",
                self.seed_count,
                self.cell_count(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            seed_count: 100,
            rng_seed: rand::random(),
            tie_break: TieBreak::default(),
        }
    }
}

fn validate_size(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(VoronoiError::InvalidConfig(format!(
            "grid dimensions must be positive (got {}x{})",
            width, height
        )));
    }
    if width.checked_mul(height).is_none() {
        return Err(VoronoiError::InvalidConfig(format!(
            "cell count of a {}x{} grid overflows usize",
            width, height
        )));
    }
    Ok(())
}

/// Builder for creating DiagramConfig with validation
///
/// # Example
///
/// ```rust
/// use rust_voronoi_wavefront::*;
///
/// // Use defaults (400x400, 100 seeds, random rng seed)
/// let config = DiagramConfigBuilder::new().build().unwrap();
///
/// // Customize
/// let config = DiagramConfigBuilder::new()
///     .size(32, 32)
///     .unwrap()
///     .seed_count(5)
///     .unwrap()
///     .rng_seed(12345)
///     .tie_break(TieBreak::FirstWins)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DiagramConfigBuilder {
    width: usize,
    height: usize,
    seed_count: usize,
    rng_seed: Option<u64>,
    tie_break: TieBreak,
}

impl DiagramConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - size: 400x400
    /// - seed_count: 100
    /// - rng_seed: Random (generated from thread_rng)
    /// - tie_break: LastWins
    pub fn new() -> Self {
        Self {
            width: 400,
            height: 400,
            seed_count: 100,
            rng_seed: None,
            tie_break: TieBreak::default(),
        }
    }

    /// Set the grid dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either dimension is zero or the cell count overflows
    pub fn size(mut self, width: usize, height: usize) -> Result<Self> {
        validate_size(width, height)?;
        self.width = width;
        self.height = height;
        Ok(self)
    }

    /// Set the number of seeds
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the count exceeds the cells of the current size.
    /// Set the size first when shrinking the grid.
    pub fn seed_count(mut self, count: usize) -> Result<Self> {
        if count > self.width * self.height {
            return Err(VoronoiError::InvalidConfig(format!(
                "seed count {} exceeds the {} cells of a {}x{} grid",
                count,
                self.width * self.height,
                self.width,
                self.height
            )));
        }
        self.seed_count = count;
        Ok(self)
    }

    /// Set the random seed used for seed placement
    ///
    /// The same rng seed with the same other parameters produces an identical
    /// diagram every time.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Set the tie-break policy for equidistant claims
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Build the configuration
    ///
    /// If no rng seed was provided, generates one using thread_rng.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the seed count no longer fits the grid.
    pub fn build(self) -> Result<DiagramConfig> {
        let config = DiagramConfig {
            width: self.width,
            height: self.height,
            seed_count: self.seed_count,
            rng_seed: self.rng_seed.unwrap_or_else(|| rand::random()),
            tie_break: self.tie_break,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for DiagramConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
