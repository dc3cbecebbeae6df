//! Burst requests and randomized launch sampling

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::consts::*;

/// A request to spawn `count` particles from one origin
#[derive(Debug, Clone)]
pub struct Burst<A> {
    /// Origin normalized to the viewport, [0, 1] on both axes
    pub origin: Vec2,
    pub count: u32,
    /// `None` when the asset failed to load
    pub asset: Option<A>,
    pub particle_size: Vec2,
}

impl<A> Burst<A> {
    pub fn new(
        origin_x: f32,
        origin_y: f32,
        count: u32,
        asset: Option<A>,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            origin: Vec2::new(origin_x, origin_y),
            count,
            asset,
            particle_size: Vec2::new(width, height),
        }
    }

    /// Build from loosely typed host input: negative counts become empty bursts
    pub fn from_host(
        origin_x: f64,
        origin_y: f64,
        count: i64,
        asset: Option<A>,
        width: f64,
        height: f64,
    ) -> Self {
        let count = count.clamp(0, u32::MAX as i64) as u32;
        Self::new(
            origin_x as f32,
            origin_y as f32,
            count,
            asset,
            width as f32,
            height as f32,
        )
    }
}

/// Initial motion of one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub vel: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
}

/// Ranges launches are drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchProfile {
    /// Upward speed range (px/step), applied as negative vy
    pub speed_min: f32,
    pub speed_max: f32,
    /// vx is drawn from [-spread, spread]
    pub horizontal_spread: f32,
    /// Rotation speed is drawn from [-spread/2, spread/2]
    pub rotation_speed_spread: f32,
}

impl Default for LaunchProfile {
    fn default() -> Self {
        Self {
            speed_min: LAUNCH_SPEED_MIN,
            speed_max: LAUNCH_SPEED_MAX,
            horizontal_spread: HORIZONTAL_SPREAD,
            rotation_speed_spread: ROTATION_SPEED_SPREAD,
        }
    }
}

impl LaunchProfile {
    /// Draw one launch. Each component is independent.
    ///
    /// Values are a unit draw scaled into each range, so degenerate or
    /// overflowing ranges yield odd velocities instead of a panic.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Launch {
        let lo = self.speed_min.min(self.speed_max);
        let hi = self.speed_min.max(self.speed_max);
        let upward = lerp(lo, hi, rng.random());

        let spread = self.horizontal_spread.abs();
        let vx = lerp(-spread, spread, rng.random());

        let half_spin = self.rotation_speed_spread.abs() / 2.0;

        Launch {
            vel: Vec2::new(vx, -upward),
            rotation: lerp(0.0, TAU, rng.random()),
            rotation_speed: lerp(-half_spin, half_spin, rng.random()),
        }
    }
}

#[inline]
fn lerp(lo: f32, hi: f32, t: f32) -> f32 {
    lo + (hi - lo) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_samples_within_ranges() {
        let profile = LaunchProfile::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let launch = profile.sample(&mut rng);
            assert!((-25.0..=-10.0).contains(&launch.vel.y));
            assert!((-10.0..=10.0).contains(&launch.vel.x));
            assert!((0.0..TAU).contains(&launch.rotation));
            assert!((-0.05..=0.05).contains(&launch.rotation_speed));
        }
    }

    #[test]
    fn test_degenerate_ranges_do_not_panic() {
        let profile = LaunchProfile {
            speed_min: 12.0,
            speed_max: 12.0,
            horizontal_spread: 0.0,
            rotation_speed_spread: 0.0,
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let launch = profile.sample(&mut rng);
        assert_eq!(launch.vel, Vec2::new(0.0, -12.0));
        assert_eq!(launch.rotation_speed, 0.0);
    }

    #[test]
    fn test_host_count_clamped() {
        let burst: Burst<()> = Burst::from_host(0.5, 0.5, -3, None, 64.0, 64.0);
        assert_eq!(burst.count, 0);
    }

    #[test]
    fn test_overflowing_ranges_do_not_panic() {
        let profile = LaunchProfile {
            speed_min: -f32::MAX,
            speed_max: f32::MAX,
            horizontal_spread: f32::INFINITY,
            rotation_speed_spread: f32::NAN,
        };
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..100 {
            let launch = profile.sample(&mut rng);
            assert!((0.0..TAU).contains(&launch.rotation));
        }
    }
}
