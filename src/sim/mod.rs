//! Confetti simulation module
//!
//! Platform-free: particles integrate in fixed per-frame steps and the
//! engine only talks to the host through the `platform` traits.
//! Randomness comes from a seeded RNG so runs are reproducible.

pub mod burst;
pub mod engine;
pub mod particle;

pub use burst::{Burst, Launch, LaunchProfile};
pub use engine::{AssetOf, ConfettiEngine, LoopState};
pub use particle::{Particle, Physics};
