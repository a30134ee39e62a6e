//! Grid Cell and Seed Structures
//!
//! A diagram is a row-major grid of [`Cell`]s, each either unassigned or owned
//! by one [`Seed`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::TieBreak;

/// 8-bit RGBA color
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black, used for unassigned cells and seed markers
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in RGBA byte order
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A fixed point on the grid that originates one region of the diagram
///
/// Seeds are generated once per initialization and never move or change color.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    /// Column, `0 <= x < width`
    pub x: usize,
    /// Row, `0 <= y < height`
    pub y: usize,
    /// Color painted on every cell this seed owns
    pub color: Color,
}

impl Seed {
    pub fn new(x: usize, y: usize, color: Color) -> Self {
        Self { x, y, color }
    }
}

/// One grid position
///
/// # Design Notes
///
/// The owning seed is stored by index into the diagram's seed list, so a cell
/// stays small (`Copy`) and the seed's color is copied alongside it to keep
/// pixel export a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Not reached by any wavefront yet
    #[default]
    Unassigned,
    /// Claimed by a seed
    Assigned {
        /// Index of the owning seed in the diagram's seed list
        owner: usize,
        /// Owner's color
        color: Color,
        /// Squared distance from the owner at which the cell was claimed
        distance: u64,
    },
}

impl Cell {
    #[inline]
    pub fn is_assigned(&self) -> bool {
        matches!(self, Cell::Assigned { .. })
    }

    /// Index of the owning seed, if any
    #[inline]
    pub fn owner(&self) -> Option<usize> {
        match self {
            Cell::Assigned { owner, .. } => Some(*owner),
            Cell::Unassigned => None,
        }
    }

    /// Stored claim distance, if any
    #[inline]
    pub fn distance(&self) -> Option<u64> {
        match self {
            Cell::Assigned { distance, .. } => Some(*distance),
            Cell::Unassigned => None,
        }
    }

    /// Color this cell renders as (ignoring seed markers)
    #[inline]
    pub fn color(&self) -> Color {
        match self {
            Cell::Assigned { color, .. } => *color,
            Cell::Unassigned => Color::TRANSPARENT,
        }
    }

    /// Whether a claim at `distance` may take this cell
    ///
    /// A strictly closer owner always keeps the cell. An owner at the same
    /// distance is displaced under `LastWins` and kept under `FirstWins`.
    #[inline]
    pub fn accepts(&self, distance: u64, tie_break: TieBreak) -> bool {
        match self {
            Cell::Unassigned => true,
            Cell::Assigned { distance: stored, .. } => match tie_break {
                TieBreak::LastWins => *stored >= distance,
                TieBreak::FirstWins => *stored > distance,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0, 255);

    #[test]
    fn test_unassigned_cell() {
        let cell = Cell::default();
        assert!(!cell.is_assigned());
        assert_eq!(cell.owner(), None);
        assert_eq!(cell.distance(), None);
        assert_eq!(cell.color(), Color::TRANSPARENT);
        assert!(cell.accepts(0, TieBreak::LastWins));
        assert!(cell.accepts(u64::MAX, TieBreak::FirstWins));
    }

    #[test]
    fn test_assigned_cell_accessors() {
        let cell = Cell::Assigned {
            owner: 3,
            color: RED,
            distance: 5,
        };
        assert!(cell.is_assigned());
        assert_eq!(cell.owner(), Some(3));
        assert_eq!(cell.distance(), Some(5));
        assert_eq!(cell.color(), RED);
    }

    #[test]
    fn test_accepts_last_wins() {
        let cell = Cell::Assigned {
            owner: 0,
            color: RED,
            distance: 5,
        };
        assert!(cell.accepts(4, TieBreak::LastWins));
        assert!(cell.accepts(5, TieBreak::LastWins)); // equal distance overwrites
        assert!(!cell.accepts(6, TieBreak::LastWins)); // strictly closer owner keeps it
    }

    #[test]
    fn test_accepts_first_wins() {
        let cell = Cell::Assigned {
            owner: 0,
            color: RED,
            distance: 5,
        };
        assert!(cell.accepts(4, TieBreak::FirstWins));
        assert!(!cell.accepts(5, TieBreak::FirstWins));
        assert!(!cell.accepts(6, TieBreak::FirstWins));
    }

    #[test]
    fn test_color_bytes() {
        assert_eq!(Color::new(1, 2, 3, 4).to_bytes(), [1, 2, 3, 4]);
        assert_eq!(Color::TRANSPARENT.to_bytes(), [0, 0, 0, 0]);
    }
}
