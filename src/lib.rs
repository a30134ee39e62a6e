//! Wavefront Voronoi tessellation over a pixel grid
//!
//! Seeds are scattered over a fixed-size grid and every seed grows a
//! diamond-shaped front, one ring per step, claiming cells by squared
//! Euclidean distance. The result is an approximate Voronoi diagram that can
//! be animated as it grows and exported as an RGBA pixel buffer.
//!
//! # Quick Start
//!
//! ```rust
//! use rust_voronoi_wavefront::*;
//!
//! let config = DiagramConfigBuilder::new()
//!     .size(200, 150).unwrap()
//!     .seed_count(40).unwrap()
//!     .rng_seed(42)
//!     .build().unwrap();
//!
//! let mut diagram = VoronoiDiagram::new(config).unwrap();
//!
//! // One ring per frame...
//! diagram.step(false);
//! // ...or everything at once
//! diagram.step(true);
//!
//! let rgba = diagram.to_pixels();
//! assert_eq!(rgba.len(), 200 * 150 * 4);
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration, seeds and colors

// Modules
pub mod error;
pub mod config;
pub mod cell;
pub mod generation;
pub mod diagram;
pub mod pixels;
pub mod animation;

// Re-export core types for convenience
pub use error::{VoronoiError, Result};
pub use config::{DiagramConfig, DiagramConfigBuilder, TieBreak};
pub use cell::{Cell, Color, Seed};
pub use diagram::{StepOutcome, VoronoiDiagram};
pub use pixels::pack_rgb;
pub use animation::{AnimationOptions, Animator, Tessellator};
