//! Rendering module
//!
//! Confetti is drawn with plain 2D canvas calls through [`DrawSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{DrawSurface, SurfaceError};
