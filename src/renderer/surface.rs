//! 2D drawing surface abstraction
//!
//! The confetti engine only needs a handful of immediate-mode canvas
//! operations. Anything that can clear itself, push/pop a transform and
//! blit an image can host confetti.

use glam::Vec2;
use thiserror::Error;

/// Errors raised while mounting or preparing an overlay surface
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The host has no window/document/body to attach to
    #[error("host environment unavailable: {0}")]
    HostUnavailable(&'static str),
    /// The 2D rendering context could not be obtained
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
    /// A DOM call was rejected by the host
    #[error("dom operation failed: {0}")]
    Dom(String),
}

/// Immediate-mode 2D surface the engine renders confetti onto
pub trait DrawSurface {
    /// Image handle type this surface can draw
    type Image;

    /// Current pixel dimensions (width, height)
    fn size(&self) -> Vec2;

    /// Resize the backing store. Raster contents may be lost.
    fn resize(&mut self, width: u32, height: u32);

    /// Clear the whole surface to transparent
    fn clear(&mut self);

    /// Push the current transform and alpha state
    fn save(&mut self);

    /// Pop the last saved transform and alpha state
    fn restore(&mut self);

    fn translate(&mut self, x: f32, y: f32);

    /// Rotate the current transform (radians, clockwise in screen space)
    fn rotate(&mut self, angle: f32);

    /// Set the alpha applied to subsequent draws (0.0 - 1.0)
    fn set_global_alpha(&mut self, alpha: f32);

    /// Draw `image` scaled to `size`, centered on the current origin
    fn draw_image_centered(&mut self, image: &Self::Image, size: Vec2);
}
