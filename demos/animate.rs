//! Animated Voronoi growth in a window
//!
//! Enter pauses/resumes, Space reseeds, Escape quits.
//! Set `RUST_LOG=rust_voronoi_wavefront=debug` to see engine events.

use std::error::Error;
use std::time::Duration;

use minifb::{Key, KeyRepeat, Scale, Window, WindowOptions};
use rust_voronoi_wavefront::{pack_rgb, AnimationOptions, Animator, DiagramConfigBuilder, VoronoiDiagram};
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 400;
const HEIGHT: usize = 400;
const SEEDS: usize = 100;
const FRAME_DELAY: Duration = Duration::from_millis(0);

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = DiagramConfigBuilder::new()
        .size(WIDTH, HEIGHT)?
        .seed_count(SEEDS)?
        .build()?;
    println!("Diagram rng seed: {}", config.rng_seed);

    let diagram = VoronoiDiagram::new(config)?;
    let mut animator = Animator::new(
        diagram,
        AnimationOptions {
            frame_delay: FRAME_DELAY,
            hide_iterations: false,
        },
    );

    let (width, height) = animator.layout();
    let mut window = Window::new(
        "Voronoi",
        width,
        height,
        WindowOptions {
            scale: Scale::X2,
            ..WindowOptions::default()
        },
    )?;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::Enter, KeyRepeat::No) {
            animator.toggle_running();
        }
        if window.is_key_pressed(Key::Space, KeyRepeat::No) {
            animator.reseed();
        }

        animator.update();

        let frame = pack_rgb(&animator.draw());
        window.update_with_buffer(&frame, width, height)?;
    }

    Ok(())
}
