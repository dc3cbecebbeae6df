//! Frame loop behavior driven through the headless host

use card_confetti::platform::{HeadlessViewport, ManualScheduler};
use card_confetti::renderer::DrawCommand;
use card_confetti::{Burst, ConfettiEngine, LoopState, Settings};
use glam::Vec2;

type Engine = ConfettiEngine<HeadlessViewport, ManualScheduler>;

fn engine(width: u32, height: u32) -> Engine {
    ConfettiEngine::new(
        HeadlessViewport::new(width, height),
        ManualScheduler::new(),
        Settings::default(),
        2024,
    )
}

fn burst(x: f32, y: f32, count: u32) -> Burst<String> {
    Burst::new(x, y, count, Some("pugman".to_string()), 64.0, 64.0)
}

fn pump(engine: &mut Engine) -> u32 {
    let mut frames = 0;
    while let Some(token) = engine.pending_frame() {
        engine.on_frame(token);
        frames += 1;
        assert!(frames < 10_000, "loop never terminated");
    }
    frames
}

#[test]
fn test_center_burst_lands_at_surface_center() {
    let mut engine = engine(1001, 777);
    engine.spawn_burst(burst(0.5, 0.5, 12));
    assert_eq!(engine.particle_count(), 12);
    for p in engine.particles() {
        assert_eq!(p.pos, Vec2::new(500.5, 388.5));
    }
}

#[test]
fn test_burst_runs_to_idle() {
    let mut engine = engine(1000, 800);
    engine.spawn_burst(burst(0.5, 0.5, 150));
    assert!(engine.is_running());

    let frames = pump(&mut engine);
    assert!((60..=102).contains(&frames), "ran {} frames", frames);
    assert_eq!(engine.loop_state(), LoopState::Idle);
    assert_eq!(engine.particle_count(), 0);

    // The final frame leaves a cleared surface
    let surface = engine.surface().unwrap();
    assert_eq!(surface.commands(), &[DrawCommand::Clear]);
    assert_eq!(engine.scheduler().requests, frames);
}

#[test]
fn test_idle_engine_restarts_on_next_burst() {
    let mut engine = engine(1000, 800);
    engine.spawn_burst(burst(0.2, 0.9, 5));
    pump(&mut engine);
    assert_eq!(engine.loop_state(), LoopState::Idle);

    engine.spawn_burst(burst(0.8, 0.1, 5));
    assert!(engine.is_running());
    assert_eq!(engine.particle_count(), 5);
    assert!(pump(&mut engine) > 0);
}

#[test]
fn test_burst_during_loop_joins_running_pool() {
    let mut engine = engine(1000, 800);
    engine.spawn_burst(burst(0.5, 0.5, 50));
    for _ in 0..10 {
        let token = engine.pending_frame().unwrap();
        engine.on_frame(token);
    }
    let requests = engine.scheduler().requests;
    let live = engine.particle_count();

    engine.spawn_burst(burst(0.1, 0.1, 30));
    assert_eq!(engine.particle_count(), live + 30);
    assert_eq!(engine.scheduler().requests, requests);

    // Late particles outlive the first wave
    let token = engine.pending_frame().unwrap();
    engine.on_frame(token);
    let fresh = engine
        .particles()
        .iter()
        .filter(|p| p.opacity > 0.985)
        .count();
    assert_eq!(fresh, 30);
}

#[test]
fn test_missing_asset_simulates_without_drawing() {
    let mut engine = engine(1000, 800);
    engine.spawn_burst(Burst::new(0.5, 0.5, 20, None, 64.0, 64.0));
    let token = engine.pending_frame().unwrap();
    engine.on_frame(token);

    assert_eq!(engine.particle_count(), 20);
    assert_eq!(engine.surface().unwrap().images_drawn(), 0);
    assert!(pump(&mut engine) > 0);
    assert_eq!(engine.loop_state(), LoopState::Idle);
}

#[test]
fn test_shrinking_viewport_culls_fallen_particles_sooner() {
    let mut tall = engine(1000, 800);
    let mut short = engine(1000, 800);
    tall.spawn_burst(burst(0.5, 0.5, 40));
    short.spawn_burst(burst(0.5, 0.5, 40));

    short.viewport_mut().set_size(1000, 100);
    short.handle_resize();

    let tall_frames = pump(&mut tall);
    let short_frames = pump(&mut short);
    assert!(short_frames <= tall_frames);
}

#[test]
fn test_settings_change_physics() {
    let settings = Settings::from_json(r#"{ "decay": 0.05 }"#).unwrap();
    let mut engine: Engine = ConfettiEngine::new(
        HeadlessViewport::new(1000, 800),
        ManualScheduler::new(),
        settings,
        7,
    );
    engine.spawn_burst(burst(0.5, 0.5, 10));
    assert!(pump(&mut engine) <= 22);
}

#[test]
fn test_zero_decay_and_gravity_still_terminates() {
    let settings = Settings::from_json(r#"{ "decay": 0.0, "gravity": 0.0 }"#).unwrap();
    let mut engine: Engine = ConfettiEngine::new(
        HeadlessViewport::new(1000, 800),
        ManualScheduler::new(),
        settings,
        11,
    );
    engine.spawn_burst(burst(0.5, 0.5, 1));
    let frames = pump(&mut engine);
    assert!(frames <= 102, "ran {} frames", frames);
    assert_eq!(engine.loop_state(), LoopState::Idle);
    assert_eq!(engine.particle_count(), 0);
}

#[test]
fn test_overflowing_spread_spawns_default_launches() {
    let settings = Settings::from_json(r#"{ "horizontal_spread": 1e39 }"#).unwrap();
    let mut engine: Engine = ConfettiEngine::new(
        HeadlessViewport::new(1000, 800),
        ManualScheduler::new(),
        settings,
        13,
    );
    engine.spawn_burst(burst(0.5, 0.5, 50));
    assert_eq!(engine.particle_count(), 50);
    for p in engine.particles() {
        assert!((-10.0..=10.0).contains(&p.vel.x));
    }
    assert!(pump(&mut engine) <= 102);
}
