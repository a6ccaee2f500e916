pub mod commands;
pub mod error;
pub mod raster;

pub use commands::{DrawCommand, Paint, PaintStyle};
pub use error::{RenderError, Result};
pub use raster::PixmapSurface;

use crate::widgets::RectF;

/// Records the draw commands a widget issues during one paint pass.
///
/// The list is replayed later against a concrete surface, so widgets stay
/// independent of any rasterizer.
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<DrawCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new PaintContext with pre-allocated capacity to avoid per-frame allocations
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
        }
    }

    /// Clear all buffers for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn draw_round_rect(&mut self, rect: RectF, rx: f32, ry: f32, paint: Paint) {
        self.commands.push(DrawCommand::RoundRect {
            rect,
            rx,
            ry,
            paint,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Rasterize the recorded commands onto `surface`, in recording order.
    pub fn replay(&self, surface: &mut PixmapSurface) -> Result<()> {
        surface.draw(&self.commands)
    }
}
