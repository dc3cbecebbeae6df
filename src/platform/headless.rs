//! In-memory host for native runs and tests

use super::{FrameScheduler, FrameToken, OverlayStyle, Viewport};
use crate::renderer::{RecordingSurface, SurfaceError};

/// Viewport with a settable size that mounts [`RecordingSurface`]s
#[derive(Debug, Clone)]
pub struct HeadlessViewport {
    width: u32,
    height: u32,
    /// Number of overlays mounted so far
    pub mounts: u32,
    /// Refuse to mount (simulates a page without a body)
    pub refuse_mount: bool,
}

impl HeadlessViewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mounts: 0,
            refuse_mount: false,
        }
    }

    /// Change the viewport size. The host must then notify the engine.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

impl Viewport for HeadlessViewport {
    type Surface = RecordingSurface;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn mount_overlay(&mut self, _style: &OverlayStyle) -> Result<RecordingSurface, SurfaceError> {
        if self.refuse_mount {
            return Err(SurfaceError::HostUnavailable("headless mount refused"));
        }
        self.mounts += 1;
        Ok(RecordingSurface::new(self.width, self.height))
    }
}

/// Scheduler whose frames are delivered by hand
///
/// The engine keeps the outstanding token; callers pump frames with
/// `engine.pending_frame()` / `engine.on_frame(token)`.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    next_id: u64,
    /// Total `schedule` calls
    pub requests: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&mut self) -> Option<FrameToken> {
        self.next_id += 1;
        self.requests += 1;
        Some(FrameToken::new(self.next_id))
    }
}
