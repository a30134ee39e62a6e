//! Frame-driven presentation adapter
//!
//! Window toolkits call into a tessellation once per frame: update (maybe
//! step), draw (export pixels), and react to "pause" and "reseed" input.
//! [`Animator`] is that glue, configured by [`AnimationOptions`].

use std::time::Duration;

use tracing::debug;

use crate::diagram::VoronoiDiagram;

/// A tessellation that can be driven frame by frame
pub trait Tessellator {
    /// Grid size as `(width, height)`
    fn dimensions(&self) -> (usize, usize);

    /// Discard progress and start over with new seeds
    fn reseed(&mut self);

    /// Advance one ring, or all remaining rings when `run_to_completion` is set
    fn step(&mut self, run_to_completion: bool);

    /// RGBA8888 row-major frame of exactly `width * height * 4` bytes
    fn to_pixels(&self) -> Vec<u8>;
}

impl Tessellator for VoronoiDiagram {
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn reseed(&mut self) {
        VoronoiDiagram::reseed(self);
    }

    fn step(&mut self, run_to_completion: bool) {
        VoronoiDiagram::step(self, run_to_completion);
    }

    fn to_pixels(&self) -> Vec<u8> {
        VoronoiDiagram::to_pixels(self)
    }
}

/// Pacing and granularity of an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationOptions {
    /// Pause inserted before every drawn frame (zero disables pacing)
    pub frame_delay: Duration,

    /// Run each update to completion instead of showing ring-by-ring growth
    pub hide_iterations: bool,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            frame_delay: Duration::ZERO,
            hide_iterations: true,
        }
    }
}

/// Drives a [`Tessellator`] from a frame loop
///
/// # Example
///
/// ```
/// use rust_voronoi_wavefront::*;
///
/// let diagram = VoronoiDiagram::with_size(16, 16, 3).unwrap();
/// let mut animator = Animator::new(diagram, AnimationOptions::default());
///
/// animator.update();
/// let frame = animator.draw();
/// assert_eq!(frame.len(), 16 * 16 * 4);
/// ```
#[derive(Debug)]
pub struct Animator<T> {
    tessellator: T,
    options: AnimationOptions,
    running: bool,
}

impl<T: Tessellator> Animator<T> {
    /// Wrap a tessellation; the animation starts running
    pub fn new(tessellator: T, options: AnimationOptions) -> Self {
        Self {
            tessellator,
            options,
            running: true,
        }
    }

    #[inline]
    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Pause or resume stepping
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        debug!(running = self.running, "animation toggled");
    }

    /// Start over with new seeds (keeps the running state)
    pub fn reseed(&mut self) {
        self.tessellator.reseed();
    }

    /// Per-frame logic: step while running
    pub fn update(&mut self) {
        if self.running {
            self.tessellator.step(self.options.hide_iterations);
        }
    }

    /// Per-frame rendering: wait out the frame delay, then export
    pub fn draw(&self) -> Vec<u8> {
        if !self.options.frame_delay.is_zero() {
            std::thread::sleep(self.options.frame_delay);
        }
        self.tessellator.to_pixels()
    }

    /// Logical screen size, always the grid size
    #[inline]
    pub fn layout(&self) -> (usize, usize) {
        self.tessellator.dimensions()
    }

    #[inline]
    pub fn tessellator(&self) -> &T {
        &self.tessellator
    }

    #[inline]
    pub fn tessellator_mut(&mut self) -> &mut T {
        &mut self.tessellator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Color, Seed};
    use crate::config::{DiagramConfig, TieBreak};
    use std::time::Instant;

    /// Records every call it receives
    #[derive(Debug, Default)]
    struct Recorder {
        steps: Vec<bool>,
        reseeds: usize,
    }

    impl Tessellator for Recorder {
        fn dimensions(&self) -> (usize, usize) {
            (2, 1)
        }

        fn reseed(&mut self) {
            self.reseeds += 1;
        }

        fn step(&mut self, run_to_completion: bool) {
            self.steps.push(run_to_completion);
        }

        fn to_pixels(&self) -> Vec<u8> {
            vec![self.steps.len() as u8; 8]
        }
    }

    #[test]
    fn test_default_options() {
        let options = AnimationOptions::default();
        assert_eq!(options.frame_delay, Duration::ZERO);
        assert!(options.hide_iterations);
    }

    #[test]
    fn test_update_respects_running_flag() {
        let mut animator = Animator::new(Recorder::default(), AnimationOptions::default());
        assert!(animator.is_running());

        animator.update();
        animator.toggle_running();
        animator.update();
        animator.update();
        animator.toggle_running();
        animator.update();

        assert_eq!(animator.tessellator().steps.len(), 2);
    }

    #[test]
    fn test_hide_iterations_selects_step_mode() {
        let mut hidden = Animator::new(Recorder::default(), AnimationOptions::default());
        hidden.update();
        assert_eq!(hidden.tessellator().steps, vec![true]);

        let options = AnimationOptions {
            hide_iterations: false,
            ..Default::default()
        };
        let mut shown = Animator::new(Recorder::default(), options);
        shown.update();
        assert_eq!(shown.tessellator().steps, vec![false]);
    }

    #[test]
    fn test_reseed_delegates_and_keeps_pause() {
        let mut animator = Animator::new(Recorder::default(), AnimationOptions::default());
        animator.toggle_running();
        animator.reseed();

        assert_eq!(animator.tessellator().reseeds, 1);
        assert!(!animator.is_running());
    }

    #[test]
    fn test_draw_and_layout() {
        let mut animator = Animator::new(Recorder::default(), AnimationOptions::default());
        animator.update();
        assert_eq!(animator.draw(), vec![1u8; 8]);
        assert_eq!(animator.layout(), (2, 1));
    }

    #[test]
    fn test_frame_delay_paces_draw() {
        let options = AnimationOptions {
            frame_delay: Duration::from_millis(20),
            hide_iterations: true,
        };
        let animator = Animator::new(Recorder::default(), options);

        let start = Instant::now();
        animator.draw();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_drives_diagram_ring_by_ring() {
        let config = DiagramConfig {
            width: 4,
            height: 4,
            seed_count: 1,
            rng_seed: 1,
            tie_break: TieBreak::LastWins,
        };
        let diagram = VoronoiDiagram::from_seeds(config, vec![Seed::new(0, 0, Color::new(9, 9, 9, 255))]).unwrap();
        let options = AnimationOptions {
            hide_iterations: false,
            ..Default::default()
        };
        let mut animator = Animator::new(diagram, options);

        animator.update();
        assert_eq!(animator.tessellator().radius(), 1);
        assert_eq!(animator.tessellator().assigned_count(), 3);

        for _ in 0..10 {
            animator.update();
        }
        assert!(animator.tessellator().is_complete());
        assert_eq!(animator.layout(), (4, 4));
        assert_eq!(animator.draw().len(), 64);
    }
}
