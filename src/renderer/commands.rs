//! Draw command definitions.

use crate::widgets::{Color, RectF};

/// Whether a shape is filled or outlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// Solid-color paint applied to a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Paint color
    pub color: Color,
    /// Fill or outline
    pub style: PaintStyle,
    /// Outline width in logical pixels, centered on the shape edge.
    /// Ignored for fills.
    pub stroke_width: f32,
    /// Smooth shape edges
    pub anti_alias: bool,
}

impl Paint {
    /// Create an anti-aliased fill paint.
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            anti_alias: true,
        }
    }

    /// Create an anti-aliased stroke paint.
    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width: width,
            anti_alias: true,
        }
    }

    pub fn anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}

/// A single draw operation in widget-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw a rounded rectangle.
    RoundRect {
        /// Rectangle edges, exactly as the widget supplied them
        rect: RectF,
        /// Horizontal corner radius
        rx: f32,
        /// Vertical corner radius
        ry: f32,
        /// Fill or stroke paint
        paint: Paint,
    },
}

impl DrawCommand {
    /// Create a rounded rectangle with equal corner radii.
    pub fn round_rect(rect: RectF, radius: f32, paint: Paint) -> Self {
        Self::RoundRect {
            rect,
            rx: radius,
            ry: radius,
            paint,
        }
    }

    pub fn paint(&self) -> &Paint {
        match self {
            DrawCommand::RoundRect { paint, .. } => paint,
        }
    }
}
