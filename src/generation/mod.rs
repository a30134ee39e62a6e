//! Building blocks of the wavefront tessellation
//!
//! Distance lookup, ring offsets and seed placement. The diagram module wires
//! them together into rings of claims.

mod distance;
mod ring;
mod seeds;

pub use distance::DistanceTable;
pub use ring::{ring_len, ring_offsets, Offset};
pub use seeds::generate_seeds;
