//! VoronoiDiagram engine
//!
//! Owns the grid, the seeds, the distance table and the wavefront state, and
//! advances the tessellation one ring at a time.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::cell::{Cell, Seed};
use crate::config::{DiagramConfig, DiagramConfigBuilder, TieBreak};
use crate::error::{Result, VoronoiError};
use crate::generation::{generate_seeds, ring_offsets, DistanceTable};
use crate::pixels;

/// Summary of one `step` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Number of rings processed (0 when already complete)
    pub rings: usize,
    /// Number of cell writes applied across those rings
    pub cells_claimed: usize,
}

/// An accepted claim waiting for resolution at the end of a ring
#[derive(Debug, Clone, Copy)]
struct Claim {
    owner: usize,
    distance: u64,
}

impl Claim {
    /// Whether `self`, proposed after `current` in the same ring, replaces it
    #[inline]
    fn beats(&self, current: &Claim, tie_break: TieBreak) -> bool {
        self.distance < current.distance
            || (self.distance == current.distance && tie_break == TieBreak::LastWins)
    }
}

/// An approximate Voronoi diagram grown by wavefront expansion
///
/// Every seed grows a diamond-shaped front, one ring per step. Each ring is
/// processed in two phases: all active seeds propose claims against the grid
/// as it stood when the ring started, then the accepted claims are resolved
/// per cell (smallest distance, then the configured [`TieBreak`]) and written.
///
/// # Example
///
/// ```
/// use rust_voronoi_wavefront::*;
///
/// let config = DiagramConfigBuilder::new()
///     .size(32, 32).unwrap()
///     .seed_count(6).unwrap()
///     .rng_seed(42)
///     .build()
///     .unwrap();
///
/// let mut diagram = VoronoiDiagram::new(config).unwrap();
/// diagram.step(true);
///
/// assert!(diagram.is_complete());
/// assert_eq!(diagram.assigned_count(), 32 * 32);
/// assert_eq!(diagram.to_pixels().len(), 32 * 32 * 4);
/// ```
#[derive(Debug, Clone)]
pub struct VoronoiDiagram {
    /// Configuration the diagram was built from (rng_seed tracks reseeds)
    config: DiagramConfig,

    /// Source of seed positions and colors, advanced by every reseed
    rng: ChaCha8Rng,

    /// Current seed set (indexed by seed id)
    seeds: Vec<Seed>,

    /// Squared distances for every offset magnitude
    distances: DistanceTable,

    /// Row-major cell grid
    grid: Vec<Cell>,

    /// Radius of the last processed ring
    radius: usize,

    /// Indices of seeds that had at least one accepted proposal in the last
    /// ring, ascending
    active: Vec<usize>,
}

impl VoronoiDiagram {
    /// Build a diagram and place `config.seed_count` random seeds
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate, most
    /// notably when there are more seeds than cells.
    pub fn new(config: DiagramConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.rng_seed);
        let seeds = generate_seeds(&mut rng, config.width, config.height, config.seed_count);

        Ok(Self::assemble(config, rng, seeds))
    }

    /// Build a diagram with a random rng seed
    ///
    /// # Example
    ///
    /// ```
    /// use rust_voronoi_wavefront::*;
    ///
    /// assert!(VoronoiDiagram::with_size(4, 4, 16).is_ok());
    /// assert!(matches!(
    ///     VoronoiDiagram::with_size(4, 4, 17),
    ///     Err(VoronoiError::InvalidConfig(_))
    /// ));
    /// ```
    pub fn with_size(width: usize, height: usize, seed_count: usize) -> Result<Self> {
        let config = DiagramConfigBuilder::new()
            .size(width, height)?
            .seed_count(seed_count)?
            .build()?;
        Self::new(config)
    }

    /// Build a diagram from explicitly placed seeds
    ///
    /// `config.seed_count` is replaced by `seeds.len()`. Later reseeds draw
    /// that many random seeds from `config.rng_seed`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the config does not validate for this seed
    /// count, or `SeedOutOfBounds` for the first seed outside the grid.
    pub fn from_seeds(config: DiagramConfig, seeds: Vec<Seed>) -> Result<Self> {
        let config = DiagramConfig {
            seed_count: seeds.len(),
            ..config
        };
        config.validate()?;

        if let Some(seed) = seeds
            .iter()
            .find(|s| s.x >= config.width || s.y >= config.height)
        {
            return Err(VoronoiError::SeedOutOfBounds {
                x: seed.x,
                y: seed.y,
            });
        }

        let rng = ChaCha8Rng::seed_from_u64(config.rng_seed);
        Ok(Self::assemble(config, rng, seeds))
    }

    fn assemble(config: DiagramConfig, rng: ChaCha8Rng, seeds: Vec<Seed>) -> Self {
        let mut diagram = Self {
            config,
            rng,
            seeds: Vec::new(),
            distances: DistanceTable::new(config.width, config.height),
            grid: Vec::new(),
            radius: 0,
            active: Vec::new(),
        };
        diagram.initialize(seeds);
        diagram
    }

    /// Discard all state and start over with freshly drawn seeds
    ///
    /// Each call draws a new layout from the diagram's generator, so repeated
    /// reseeds differ while the whole sequence stays reproducible.
    pub fn reseed(&mut self) {
        let seeds = generate_seeds(
            &mut self.rng,
            self.config.width,
            self.config.height,
            self.config.seed_count,
        );
        self.initialize(seeds);
    }

    /// Restart the generator from `rng_seed`, then reseed
    pub fn reseed_with(&mut self, rng_seed: u64) {
        self.config.rng_seed = rng_seed;
        self.rng = ChaCha8Rng::seed_from_u64(rng_seed);
        self.reseed();
    }

    fn initialize(&mut self, seeds: Vec<Seed>) {
        let (width, height) = (self.config.width, self.config.height);
        let tie_break = self.config.tie_break;

        self.distances = DistanceTable::new(width, height);
        self.grid = vec![Cell::Unassigned; width * height];

        for (id, seed) in seeds.iter().enumerate() {
            let index = seed.y * width + seed.x;
            if self.grid[index].accepts(0, tie_break) {
                self.grid[index] = Cell::Assigned {
                    owner: id,
                    color: seed.color,
                    distance: 0,
                };
            }
        }

        self.radius = 0;
        self.active = (0..seeds.len()).collect();
        self.seeds = seeds;

        debug!(
            width,
            height,
            seeds = self.seeds.len(),
            rng_seed = self.config.rng_seed,
            "diagram initialized"
        );
    }

    /// Advance the tessellation
    ///
    /// Processes one ring, or every remaining ring when `run_to_completion`
    /// is true. Once no seed is active this is a no-op and the radius stays
    /// where it is.
    pub fn step(&mut self, run_to_completion: bool) -> StepOutcome {
        let mut outcome = StepOutcome::default();

        while !self.active.is_empty() {
            outcome.cells_claimed += self.advance_ring();
            outcome.rings += 1;

            if !run_to_completion {
                break;
            }
        }

        if outcome.rings > 0 && self.active.is_empty() {
            debug!(radius = self.radius, "tessellation complete");
        }

        outcome
    }

    /// Process the next ring; returns the number of cells written
    fn advance_ring(&mut self) -> usize {
        self.radius += 1;
        let offsets = ring_offsets(self.radius);
        let tie_break = self.config.tie_break;

        // Phase 1: propose against the grid as of the start of this ring
        let mut pending: HashMap<usize, Claim> = HashMap::new();
        let mut still_active = Vec::with_capacity(self.active.len());
        let mut accepted = 0usize;

        for &owner in &self.active {
            let seed = &self.seeds[owner];
            let mut claimed = false;

            for &(dx, dy) in &offsets {
                let Some(index) = self.target_index(seed, dx, dy) else {
                    continue;
                };
                let distance = self.distances.get(dx, dy);
                if !self.grid[index].accepts(distance, tie_break) {
                    continue;
                }

                claimed = true;
                accepted += 1;

                let claim = Claim { owner, distance };
                pending
                    .entry(index)
                    .and_modify(|current| {
                        if claim.beats(current, tie_break) {
                            *current = claim;
                        }
                    })
                    .or_insert(claim);
            }

            if claimed {
                still_active.push(owner);
            }
        }

        // Phase 2: apply the resolved winners
        let written = pending.len();
        for (index, claim) in pending {
            self.grid[index] = Cell::Assigned {
                owner: claim.owner,
                color: self.seeds[claim.owner].color,
                distance: claim.distance,
            };
        }

        trace!(
            radius = self.radius,
            active = self.active.len(),
            still_active = still_active.len(),
            accepted,
            written,
            "ring processed"
        );

        self.active = still_active;
        written
    }

    /// Grid index of `seed + (dx, dy)`, or `None` outside the grid
    #[inline]
    fn target_index(&self, seed: &Seed, dx: isize, dy: isize) -> Option<usize> {
        let x = seed.x.checked_add_signed(dx)?;
        let y = seed.y.checked_add_signed(dy)?;
        if x >= self.config.width || y >= self.config.height {
            return None;
        }
        Some(y * self.config.width + x)
    }

    /// Export the diagram as RGBA8888 bytes, row-major
    ///
    /// Unassigned cells and seed positions are transparent black.
    pub fn to_pixels(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_pixels(&mut out);
        out
    }

    /// Export into a caller-owned buffer, reusing its allocation
    pub fn write_pixels(&self, out: &mut Vec<u8>) {
        pixels::write_rgba(&self.grid, self.config.width, &self.seeds, out);
    }

    /// Get the configuration (with the rng seed of the latest `reseed_with`)
    #[inline]
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.config.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.config.height
    }

    /// Radius of the last processed ring (0 right after initialization)
    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Current seed set
    #[inline]
    pub fn seeds(&self) -> &[Seed] {
        &self.seeds
    }

    /// Number of seeds that may still grow
    #[inline]
    pub fn active_seed_count(&self) -> usize {
        self.active.len()
    }

    /// True once no seed can claim anything more
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.active.is_empty()
    }

    /// Get the cell at `(x, y)`
    ///
    /// Returns `None` outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.config.width || y >= self.config.height {
            return None;
        }
        self.grid.get(y * self.config.width + x)
    }

    /// All cells, row-major
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.grid
    }

    /// Number of cells owned by some seed
    pub fn assigned_count(&self) -> usize {
        self.grid.iter().filter(|c| c.is_assigned()).count()
    }
}
