//! Confetti piece layout for the overlay.
//!
//! Each piece falls from above the viewport to below it and then restarts, which keeps the
//! screen continuously covered. Fall time comes from a gravity-plus-terminal-velocity model
//! expressed in px/frame at 60 fps.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ConfettiConfig;

const FRAMES_PER_SECOND: f64 = 60.0;
/// Pieces start this far above the top edge.
const SPAWN_MARGIN_PX: f64 = 24.0;

/// Measured size of the element the overlay covers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// One confetti piece, in pixels and seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub delay_secs: f64,
    pub fall_secs: f64,
    pub fall_distance: f64,
    pub drift: f64,
    pub spin_deg: f64,
}

/// Seconds to fall `distance` px starting at rest.
///
/// Accelerates by `gravity` px/frame² until `terminal` px/frame, then falls at constant speed.
pub fn fall_duration(distance: f64, gravity: f64, terminal: f64) -> f64 {
    let accel_frames = terminal / gravity;
    let accel_distance = terminal * terminal / (2.0 * gravity);
    let frames = if distance <= accel_distance {
        (2.0 * distance / gravity).sqrt()
    } else {
        accel_frames + (distance - accel_distance) / terminal
    };
    frames / FRAMES_PER_SECOND
}

/// Lays out `config.pieces` pieces across `viewport`.
///
/// Deterministic for a given seed and viewport. Empty when the viewport has no area yet.
pub fn layout(config: &ConfettiConfig, viewport: Viewport) -> Vec<ConfettiPiece> {
    if viewport.is_empty() || config.colors.is_empty() {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let fall_distance = viewport.height + 2.0 * SPAWN_MARGIN_PX;

    (0..config.pieces)
        .map(|_| {
            let terminal = rng.random_range(3.0..6.0);
            let fall_secs = fall_duration(fall_distance, config.gravity, terminal);
            let color = config.colors[rng.random_range(0..config.colors.len())].clone();
            let spin_turns: f64 = rng.random_range(1.0..3.0);
            let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

            ConfettiPiece {
                left: rng.random_range(0.0..viewport.width),
                width: rng.random_range(5.0..10.0),
                height: rng.random_range(10.0..20.0),
                color,
                delay_secs: rng.random_range(0.0..fall_secs),
                fall_secs,
                fall_distance,
                drift: rng.random_range(-40.0..40.0),
                spin_deg: direction * spin_turns * 360.0,
            }
        })
        .collect()
}
