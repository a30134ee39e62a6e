//! Random seed placement
//!
//! Seeds are drawn uniformly over the grid with a uniformly random color per
//! channel. Coordinates are drawn with replacement, so two seeds may share a
//! cell; the later one owns it.

use rand::Rng;

use crate::cell::{Color, Seed};

/// Draw `count` seeds inside a `width x height` grid
///
/// The generator is supplied by the caller so layouts are reproducible.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use rust_voronoi_wavefront::generation::generate_seeds;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let seeds = generate_seeds(&mut rng, 100, 50, 10);
/// assert_eq!(seeds.len(), 10);
/// assert!(seeds.iter().all(|s| s.x < 100 && s.y < 50));
/// ```
pub fn generate_seeds<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
    count: usize,
) -> Vec<Seed> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            let color = Color::new(rng.gen(), rng.gen(), rng.gen(), rng.gen());
            Seed::new(x, y, color)
        })
        .collect()
}
