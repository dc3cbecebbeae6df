//! Confetti settings
//!
//! Supplied by the host as JSON at startup. Missing fields use defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{LaunchProfile, Physics};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 200,
            QualityPreset::Medium => 1000,
            QualityPreset::High => 4000,
        }
    }
}

/// Confetti settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Live particle budget
    pub quality: QualityPreset,

    // === Physics ===
    /// Downward acceleration (px/step²)
    pub gravity: f32,
    /// Horizontal velocity multiplier per step
    pub friction: f32,
    /// Opacity lost per step
    pub decay: f32,

    // === Launch ===
    pub launch_speed_min: f32,
    pub launch_speed_max: f32,
    pub horizontal_spread: f32,
    pub rotation_speed_spread: f32,

    // === Bursts ===
    /// Particles per card reveal
    pub burst_count: u32,
    /// Rendered particle edge length (px)
    pub particle_size: f32,

    // === Overlay ===
    pub z_index: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            gravity: GRAVITY,
            friction: FRICTION,
            decay: DECAY,

            launch_speed_min: LAUNCH_SPEED_MIN,
            launch_speed_max: LAUNCH_SPEED_MAX,
            horizontal_spread: HORIZONTAL_SPREAD,
            rotation_speed_spread: ROTATION_SPEED_SPREAD,

            burst_count: BURST_COUNT,
            particle_size: PARTICLE_SIZE,

            z_index: OVERLAY_Z_INDEX,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse host-supplied JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse host-supplied JSON, falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Invalid confetti settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Per-particle physical coefficients.
    ///
    /// Non-finite values fall back to defaults. `decay` must be positive so
    /// every particle eventually fades and the loop can stop.
    pub fn physics(&self) -> Physics {
        let decay = if self.decay.is_finite() && self.decay > 0.0 {
            self.decay
        } else {
            DECAY
        };
        Physics {
            gravity: finite_or(self.gravity, GRAVITY),
            friction: finite_or(self.friction, FRICTION),
            decay,
        }
    }

    /// Randomized launch ranges, non-finite values replaced by defaults
    pub fn launch_profile(&self) -> LaunchProfile {
        LaunchProfile {
            speed_min: finite_or(self.launch_speed_min, LAUNCH_SPEED_MIN),
            speed_max: finite_or(self.launch_speed_max, LAUNCH_SPEED_MAX),
            horizontal_spread: finite_or(self.horizontal_spread, HORIZONTAL_SPREAD),
            rotation_speed_spread: finite_or(self.rotation_speed_spread, ROTATION_SPEED_SPREAD),
        }
    }

    /// Effective live particle cap
    pub fn max_particles(&self) -> usize {
        self.quality.max_particles()
    }
}

#[inline]
fn finite_or(value: f32, default: f32) -> f32 {
    if value.is_finite() { value } else { default }
}
