//! Card reveal celebrations
//!
//! Each card gets one burst the first time it is revealed, launched from the
//! card's center with its rank's image.

use std::collections::HashSet;

use glam::Vec2;

use crate::assets::{Rank, RankAssets};
use crate::platform::{FrameScheduler, Viewport};
use crate::settings::Settings;
use crate::renderer::DrawSurface;
use crate::sim::{Burst, ConfettiEngine};

/// Card bounding box in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CardRect {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Tracks which cards already celebrated and which image each rank uses
pub struct CardCelebrations<A> {
    assets: RankAssets<A>,
    celebrated: HashSet<String>,
    burst_count: u32,
    particle_size: f32,
}

impl<A: Clone> CardCelebrations<A> {
    pub fn new(assets: RankAssets<A>, settings: &Settings) -> Self {
        Self {
            assets,
            celebrated: HashSet::new(),
            burst_count: settings.burst_count,
            particle_size: settings.particle_size,
        }
    }

    pub fn has_celebrated(&self, card_id: &str) -> bool {
        self.celebrated.contains(card_id)
    }

    /// Burst confetti for a revealed card unless it already had one.
    ///
    /// Returns true if a burst was spawned. A card whose rank has no image
    /// is skipped without being marked, so a later reveal can retry.
    pub fn celebrate<V, F>(
        &mut self,
        engine: &mut ConfettiEngine<V, F>,
        card_id: &str,
        rank: &str,
        rect: CardRect,
        viewport: Vec2,
    ) -> bool
    where
        V: Viewport,
        V::Surface: DrawSurface<Image = A>,
        F: FrameScheduler,
    {
        if self.celebrated.contains(card_id) {
            return false;
        }

        let Some(asset) = Rank::from_str(rank).and_then(|r| self.assets.get(r)) else {
            log::warn!(
                "Confetti image for rank \"{}\" is not available for card {}",
                rank,
                card_id
            );
            return false;
        };

        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            log::warn!("Viewport has no area, skipping confetti for card {}", card_id);
            return false;
        }

        let origin = rect.center() / viewport;
        engine.spawn_burst(Burst::new(
            origin.x,
            origin.y,
            self.burst_count,
            Some(asset.clone()),
            self.particle_size,
            self.particle_size,
        ));
        self.celebrated.insert(card_id.to_string());
        true
    }
}
