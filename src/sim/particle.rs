//! A single confetti piece
//!
//! Positions are surface-local pixels with y pointing down. One call to
//! [`Particle::update`] is one display frame.

use glam::Vec2;

use crate::consts::{DECAY, FRICTION, GRAVITY};
use crate::renderer::DrawSurface;

/// Physical coefficients shared by every particle of a burst
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    /// Added to vertical velocity each step (px/step²)
    pub gravity: f32,
    /// Horizontal velocity multiplier each step
    pub friction: f32,
    /// Opacity lost each step
    pub decay: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            decay: DECAY,
        }
    }
}

/// One confetti piece
///
/// `A` is the surface's image handle. `None` means the asset failed to
/// load: the particle still simulates but draws nothing.
#[derive(Debug, Clone)]
pub struct Particle<A> {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radians
    pub rotation: f32,
    /// Radians per step, fixed at creation
    pub rotation_speed: f32,
    /// 1.0 at spawn, decreases linearly. May go negative before removal.
    pub opacity: f32,
    pub asset: Option<A>,
    /// Rendered width/height (px)
    pub size: Vec2,
    pub physics: Physics,
}

impl<A> Particle<A> {
    pub fn new(
        pos: Vec2,
        vel: Vec2,
        rotation: f32,
        rotation_speed: f32,
        asset: Option<A>,
        size: Vec2,
        physics: Physics,
    ) -> Self {
        Self {
            pos,
            vel,
            rotation,
            rotation_speed,
            opacity: 1.0,
            asset,
            size,
            physics,
        }
    }

    /// Advance by one step. Order matters: friction, gravity, move, spin, fade.
    #[inline]
    pub fn update(&mut self) {
        self.vel.x *= self.physics.friction;
        self.vel.y += self.physics.gravity;
        self.pos += self.vel;
        self.rotation += self.rotation_speed;
        self.opacity -= self.physics.decay;
    }

    /// Still visible and not yet below the surface bottom (plus one particle height)
    #[inline]
    pub fn is_alive(&self, surface_height: f32) -> bool {
        self.opacity > 0.0 && self.pos.y < surface_height + self.size.y
    }

    /// Render the asset rotated about its center at the current opacity
    pub fn draw<S>(&self, surface: &mut S)
    where
        S: DrawSurface<Image = A>,
    {
        let Some(asset) = &self.asset else { return };

        surface.save();
        surface.translate(self.pos.x, self.pos.y);
        surface.rotate(self.rotation);
        surface.set_global_alpha(self.opacity.max(0.0));
        surface.draw_image_centered(asset, self.size);
        surface.restore();
    }
}
