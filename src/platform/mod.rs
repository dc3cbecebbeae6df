//! Platform abstraction layer
//!
//! The engine consumes two host collaborators:
//! - [`Viewport`]: viewport size and mounting the overlay surface
//! - [`FrameScheduler`]: "call me before the next repaint"
//!
//! `headless` implements both in memory; `web` implements them on top of
//! the DOM and `requestAnimationFrame`.

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{HeadlessViewport, ManualScheduler};

use crate::renderer::{DrawSurface, SurfaceError};

/// Opaque handle for one scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

impl FrameToken {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Per-frame scheduling primitive
pub trait FrameScheduler {
    /// Arrange for the engine's `on_frame` to run once before the next
    /// repaint with the returned token. `None` means the host refused.
    fn schedule(&mut self) -> Option<FrameToken>;
}

/// How the overlay surface should be layered over the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    /// Stacking order: above content, below modal dialogs
    pub z_index: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            z_index: crate::consts::OVERLAY_Z_INDEX,
        }
    }
}

/// Viewport queries and overlay mounting
pub trait Viewport {
    type Surface: DrawSurface;

    /// Current viewport size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Create a transparent, non-interactive full-viewport surface and
    /// attach it to the page
    fn mount_overlay(&mut self, style: &OverlayStyle) -> Result<Self::Surface, SurfaceError>;
}
