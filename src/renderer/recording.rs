//! In-memory surface that records draw commands
//!
//! Used by the headless binary and by tests to observe what a frame drew
//! without a browser.

use glam::Vec2;

use super::surface::DrawSurface;

/// A single recorded surface operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    GlobalAlpha(f32),
    /// Image label, drawn size
    Image { label: String, size: Vec2 },
}

/// Surface that keeps every command since the last `clear`
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    commands: Vec<DrawCommand>,
    /// Number of clears seen (one per rendered frame)
    pub frames: u32,
    /// Current save depth, must be zero between frames
    depth: u32,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Vec2::new(width as f32, height as f32),
            commands: Vec::new(),
            frames: 0,
            depth: 0,
        }
    }

    /// Commands recorded since the last clear (the clear itself included)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Images drawn in the current frame
    pub fn images_drawn(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Image { .. }))
            .count()
    }

    /// Alpha values set in the current frame, in order
    pub fn alphas(&self) -> Vec<f32> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::GlobalAlpha(a) => Some(*a),
                _ => None,
            })
            .collect()
    }

    /// True when every save has a matching restore
    pub fn is_balanced(&self) -> bool {
        self.depth == 0
    }
}

impl DrawSurface for RecordingSurface {
    /// Images are identified by label only
    type Image = String;

    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = Vec2::new(width as f32, height as f32);
        self.commands.clear();
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate(Vec2::new(x, y)));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }

    fn draw_image_centered(&mut self, image: &String, size: Vec2) {
        self.commands.push(DrawCommand::Image {
            label: image.clone(),
            size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut surface = RecordingSurface::new(100, 50);
        surface.clear();
        surface.save();
        surface.draw_image_centered(&"star".to_string(), Vec2::splat(8.0));
        surface.restore();
        assert_eq!(surface.images_drawn(), 1);
        assert!(surface.is_balanced());

        surface.clear();
        assert_eq!(surface.commands(), &[DrawCommand::Clear]);
        assert_eq!(surface.frames, 2);
    }

    #[test]
    fn test_resize_updates_size() {
        let mut surface = RecordingSurface::new(100, 50);
        surface.resize(640, 480);
        assert_eq!(surface.size(), Vec2::new(640.0, 480.0));
    }
}
