//! Pixel export
//!
//! Produces engine-agnostic frame data from a diagram's grid:
//! - RGBA8888 bytes, row-major, for texture uploads (`WritePixels`-style sinks)
//! - Packed `0x00RRGGBB` words for software framebuffers such as minifb

use crate::cell::{Cell, Color, Seed};

/// Bytes per exported pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Write the RGBA bytes of `cells` into `out`
///
/// `out` is resized to `cells.len() * 4`, reusing its allocation. Pixel
/// `(x, y)` starts at byte `(y * width + x) * 4`. Unassigned cells are
/// transparent black, and every seed position is overwritten with a
/// transparent black marker.
pub fn write_rgba(cells: &[Cell], width: usize, seeds: &[Seed], out: &mut Vec<u8>) {
    out.clear();
    out.reserve(cells.len() * BYTES_PER_PIXEL);
    for cell in cells {
        out.extend_from_slice(&cell.color().to_bytes());
    }

    for seed in seeds {
        let pos = (seed.y * width + seed.x) * BYTES_PER_PIXEL;
        if let Some(pixel) = out.get_mut(pos..pos + BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&Color::TRANSPARENT.to_bytes());
        }
    }
}

/// Pack RGBA bytes into `0x00RRGGBB` words, dropping alpha
///
/// A trailing partial pixel is ignored.
pub fn pack_rgb(rgba: &[u8]) -> Vec<u32> {
    rgba.chunks_exact(BYTES_PER_PIXEL)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}
