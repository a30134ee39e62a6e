//! Wavefront ring offsets
//!
//! # Algorithm
//!
//! The ring for radius `r` walks one octant from `(0, r)` towards the diagonal,
//! one step at a time (`dx += 1`, `dy -= 1`), and reflects every point into
//! all eight octants by sign flips and an axis swap. The result is every offset
//! with `|dx| + |dy| = r`: a diamond, not a circle. Distances of the claims are
//! still squared Euclidean, so cells can be reached by a farther seed before a
//! nearer one's diamond arrives.
//!
//! Points on an axis or on the diagonal produce repeated vectors. They are kept
//! so every ring has exactly `8 * (r / 2 + 1)` entries.

/// Integer offset relative to a seed
pub type Offset = (isize, isize);

/// Number of vectors in the ring of radius `r`
#[inline]
pub fn ring_len(radius: usize) -> usize {
    8 * (radius / 2 + 1)
}

/// Generate the ring of offsets for `radius`
///
/// The order is fixed: octant points from `(0, r)` inward, each followed by
/// its seven reflections.
///
/// # Example
///
/// ```rust
/// use rust_voronoi_wavefront::generation::ring_offsets;
///
/// let ring = ring_offsets(3);
/// assert_eq!(ring.len(), 16);
/// assert!(ring.iter().all(|(dx, dy)| dx.abs() + dy.abs() == 3));
/// ```
pub fn ring_offsets(radius: usize) -> Vec<Offset> {
    let mut offsets = Vec::with_capacity(ring_len(radius));

    let mut dx = 0isize;
    let mut dy = radius as isize;

    while dy >= dx {
        offsets.extend_from_slice(&[
            (dx, dy),
            (dx, -dy),
            (-dx, dy),
            (-dx, -dy),
            (dy, dx),
            (dy, -dx),
            (-dy, dx),
            (-dy, -dx),
        ]);

        dx += 1;
        dy -= 1;
    }

    offsets
}
