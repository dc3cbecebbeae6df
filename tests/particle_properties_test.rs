//! Property tests for particle fading, loop termination and culling

use card_confetti::platform::{HeadlessViewport, ManualScheduler};
use card_confetti::sim::Physics;
use card_confetti::{Burst, ConfettiEngine, Particle, Settings};
use glam::Vec2;
use proptest::prelude::*;

proptest! {
    #[test]
    fn opacity_fades_linearly(
        decay in 0.001f32..0.05,
        steps in 0u32..400,
        vx in -10.0f32..10.0,
        vy in -25.0f32..-10.0,
    ) {
        let physics = Physics { decay, ..Physics::default() };
        let mut p: Particle<()> = Particle::new(
            Vec2::ZERO,
            Vec2::new(vx, vy),
            0.0,
            0.01,
            None,
            Vec2::splat(64.0),
            physics,
        );
        let mut last = p.opacity;
        for _ in 0..steps {
            p.update();
            prop_assert!(p.opacity < last);
            last = p.opacity;
        }
        let expected = 1.0 - steps as f32 * decay;
        prop_assert!((p.opacity - expected).abs() < 1e-3);
    }

    #[test]
    fn falling_particles_never_rise(vy in -25.0f32..-10.0) {
        let mut p: Particle<()> = Particle::new(
            Vec2::ZERO,
            Vec2::new(0.0, vy),
            0.0,
            0.0,
            None,
            Vec2::splat(64.0),
            Physics::default(),
        );
        while p.vel.y < 0.0 {
            p.update();
        }
        for _ in 0..100 {
            let y = p.pos.y;
            p.update();
            prop_assert!(p.pos.y >= y);
        }
    }

    #[test]
    fn every_burst_terminates(count in 0u32..300, seed in any::<u64>(), x in 0.0f32..=1.0, y in 0.0f32..=1.0) {
        let mut engine = ConfettiEngine::new(
            HeadlessViewport::new(800, 600),
            ManualScheduler::new(),
            Settings::default(),
            seed,
        );
        engine.spawn_burst(Burst::new(x, y, count, Some("regular".to_string()), 32.0, 32.0));
        let mut frames = 0;
        while let Some(token) = engine.pending_frame() {
            engine.on_frame(token);
            frames += 1;
            prop_assert!(frames <= 102);
        }
        prop_assert_eq!(engine.particle_count(), 0);
    }

    #[test]
    fn culling_keeps_exactly_the_live_particles(seed in any::<u64>(), frames in 1usize..120) {
        let mut engine = ConfettiEngine::new(
            HeadlessViewport::new(640, 480),
            ManualScheduler::new(),
            Settings::default(),
            seed,
        );
        engine.spawn_burst(Burst::new(0.5, 0.9, 60, Some("prime".to_string()), 48.0, 48.0));
        let height = engine.surface_size().y;

        for _ in 0..frames {
            let Some(token) = engine.pending_frame() else { break };
            let expected = engine.particles().iter().filter(|p| p.is_alive(height)).count();
            engine.on_frame(token);
            prop_assert_eq!(engine.particle_count(), expected);
        }
    }
}
