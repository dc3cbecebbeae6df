//! Confetti engine: overlay lifecycle, particle pool and the frame loop
//!
//! The loop is self-limiting. A burst schedules a frame if none is pending;
//! each frame schedules the next while particles remain and goes idle once
//! the pool drains. At most one frame token is outstanding at any time.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::burst::Burst;
use super::particle::Particle;
use crate::normalized_to_pixels;
use crate::platform::{FrameScheduler, FrameToken, OverlayStyle, Viewport};
use crate::renderer::{DrawSurface, SurfaceError};
use crate::settings::Settings;

/// Image handle type drawn by a viewport's overlay surface
pub type AssetOf<V> = <<V as Viewport>::Surface as DrawSurface>::Image;

/// Frame loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No frame pending
    Idle,
    /// Exactly one frame callback pending with this token
    Scheduled(FrameToken),
}

/// Owns the overlay surface, the live particle pool and the loop handle
pub struct ConfettiEngine<V: Viewport, F> {
    viewport: V,
    scheduler: F,
    /// Mounted lazily on first use
    surface: Option<V::Surface>,
    particles: Vec<Particle<AssetOf<V>>>,
    loop_state: LoopState,
    settings: Settings,
    rng: Pcg32,
}

impl<V, F> ConfettiEngine<V, F>
where
    V: Viewport,
    F: FrameScheduler,
    AssetOf<V>: Clone,
{
    /// Create an engine. Nothing is mounted until `init` or the first burst.
    pub fn new(viewport: V, scheduler: F, settings: Settings, seed: u64) -> Self {
        Self {
            viewport,
            scheduler,
            surface: None,
            particles: Vec::new(),
            loop_state: LoopState::Idle,
            settings,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Mount and size the overlay surface. Idempotent.
    pub fn init(&mut self) -> Result<(), SurfaceError> {
        if self.surface.is_some() {
            return Ok(());
        }

        let style = OverlayStyle {
            z_index: self.settings.z_index,
        };
        let mut surface = self.viewport.mount_overlay(&style)?;
        let (width, height) = self.viewport.size();
        surface.resize(width, height);
        self.surface = Some(surface);

        log::info!("Confetti overlay mounted ({}x{})", width, height);
        Ok(())
    }

    /// Match the surface to the viewport after a resize.
    ///
    /// Only the surface dimensions change; particles and the loop are untouched.
    pub fn handle_resize(&mut self) {
        let (width, height) = self.viewport.size();
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height);
            log::debug!("Confetti overlay resized to {}x{}", width, height);
        }
    }

    /// Spawn a burst of particles and make sure the loop is running.
    ///
    /// Never fails: if the overlay cannot be mounted the burst is dropped.
    /// The pool never exceeds the quality preset's particle cap, so a burst
    /// arriving at a nearly full pool only spawns what fits. Live particles
    /// are never evicted to make room.
    pub fn spawn_burst(&mut self, burst: Burst<AssetOf<V>>) {
        if let Err(e) = self.init() {
            log::warn!("Confetti overlay unavailable, dropping burst: {}", e);
            return;
        }
        let Some(surface) = self.surface.as_ref() else {
            return;
        };

        let origin = normalized_to_pixels(burst.origin, surface.size());

        let requested = burst.count as usize;
        let room = self
            .settings
            .max_particles()
            .saturating_sub(self.particles.len());
        let count = requested.min(room);
        if count < requested {
            log::warn!(
                "Confetti pool full, spawning {} of {} particles",
                count,
                requested
            );
        }

        let physics = self.settings.physics();
        let profile = self.settings.launch_profile();
        self.particles.reserve(count);
        for _ in 0..count {
            let launch = profile.sample(&mut self.rng);
            self.particles.push(Particle::new(
                origin,
                launch.vel,
                launch.rotation,
                launch.rotation_speed,
                burst.asset.clone(),
                burst.particle_size,
                physics,
            ));
        }

        log::debug!(
            "Burst of {} at ({:.0}, {:.0}), pool now {}",
            count,
            origin.x,
            origin.y,
            self.particles.len()
        );

        if self.loop_state == LoopState::Idle && !self.particles.is_empty() {
            self.schedule_next();
        }
    }

    /// Frame callback from the host.
    ///
    /// Runs one step if `token` is the outstanding one; anything else is stale.
    pub fn on_frame(&mut self, token: FrameToken) {
        match self.loop_state {
            LoopState::Scheduled(pending) if pending == token => {
                self.loop_state = LoopState::Idle;
                self.step();
            }
            _ => log::debug!("Ignoring stale confetti frame {:?}", token),
        }
    }

    /// Clear, cull, update and draw every live particle, then reschedule
    fn step(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        surface.clear();
        let height = surface.size().y;
        self.particles.retain(|p| p.is_alive(height));

        for particle in self.particles.iter_mut() {
            particle.update();
            particle.draw(surface);
        }

        if self.particles.is_empty() {
            log::debug!("Confetti pool drained, loop idle");
        } else {
            self.schedule_next();
        }
    }

    fn schedule_next(&mut self) {
        self.loop_state = match self.scheduler.schedule() {
            Some(token) => LoopState::Scheduled(token),
            None => {
                log::warn!("Frame scheduling refused, confetti loop stopped");
                LoopState::Idle
            }
        };
    }
}

impl<V: Viewport, F> ConfettiEngine<V, F> {
    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    /// Token the host is expected to deliver next, if any
    pub fn pending_frame(&self) -> Option<FrameToken> {
        match self.loop_state {
            LoopState::Scheduled(token) => Some(token),
            LoopState::Idle => None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.loop_state, LoopState::Scheduled(_))
    }

    pub fn is_initialized(&self) -> bool {
        self.surface.is_some()
    }

    pub fn particles(&self) -> &[Particle<AssetOf<V>>] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn surface(&self) -> Option<&V::Surface> {
        self.surface.as_ref()
    }

    /// Surface size in pixels, zero before mounting
    pub fn surface_size(&self) -> Vec2 {
        self.surface.as_ref().map(|s| s.size()).unwrap_or(Vec2::ZERO)
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
