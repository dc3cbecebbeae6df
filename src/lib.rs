//! Card Confetti - image confetti bursts for trading card reveals
//!
//! Core modules:
//! - `sim`: Particle physics and the confetti engine (loop, pool, spawn)
//! - `renderer`: 2D drawing surface abstraction (canvas on web, recording for tests)
//! - `platform`: Viewport and frame scheduling collaborators
//! - `assets`: Card ranks and their confetti images
//! - `celebrate`: Once-per-card reveal celebrations
//! - `settings`: Tunable physics and burst defaults

pub mod assets;
pub mod celebrate;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{Rank, RankAssets};
pub use celebrate::{CardCelebrations, CardRect};
pub use settings::{QualityPreset, Settings};
pub use sim::{Burst, ConfettiEngine, LoopState, Particle};

use glam::Vec2;

/// Confetti configuration constants
pub mod consts {
    /// Downward acceleration (px/step²)
    pub const GRAVITY: f32 = 0.5;
    /// Horizontal velocity multiplier applied each step
    pub const FRICTION: f32 = 0.99;
    /// Opacity lost per step
    pub const DECAY: f32 = 0.01;

    /// Initial upward launch speed range (px/step)
    pub const LAUNCH_SPEED_MIN: f32 = 10.0;
    pub const LAUNCH_SPEED_MAX: f32 = 25.0;
    /// Horizontal launch velocity is drawn from [-spread, spread)
    pub const HORIZONTAL_SPREAD: f32 = 10.0;
    /// Full width of the rotation speed range, centered on zero (rad/step)
    pub const ROTATION_SPEED_SPREAD: f32 = 0.1;

    /// Particles per card reveal burst
    pub const BURST_COUNT: u32 = 150;
    /// Rendered particle size (px, square)
    pub const PARTICLE_SIZE: f32 = 64.0;

    /// Overlay stacking: above page content, below modal dialogs
    pub const OVERLAY_Z_INDEX: i32 = 9998;
}

/// Convert a viewport-normalized point ([0, 1] on both axes) to surface pixels
#[inline]
pub fn normalized_to_pixels(origin: Vec2, surface_size: Vec2) -> Vec2 {
    origin * surface_size
}
