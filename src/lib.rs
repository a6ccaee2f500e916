//! A widget that keeps itself square under any parent constraints and paints
//! a filled, stroked rounded square.
//!
//! The widget logic is framework-agnostic: measuring produces a size,
//! resizing produces a bounding box, and painting records [`DrawCommand`]s
//! into a [`PaintContext`]. [`Host`] drives those callbacks and
//! [`PixmapSurface`] rasterizes the recorded commands.
//!
//! [`DrawCommand`]: renderer::DrawCommand
//! [`PaintContext`]: renderer::PaintContext
//! [`PixmapSurface`]: renderer::PixmapSurface

pub mod host;
pub mod layout;
pub mod reactive;
pub mod renderer;
pub mod widgets;

pub use host::Host;

pub mod prelude {
    pub use crate::host::Host;
    pub use crate::layout::{Constraints, MeasureMode, MeasureSpec, MeasuredSize, Size};
    pub use crate::reactive::ChangeFlags;
    pub use crate::renderer::{
        DrawCommand, Paint, PaintContext, PaintStyle, PixmapSurface, RenderError,
    };
    pub use crate::widgets::{
        square, BoundingBox, Color, Padding, RectF, SquareStyle, SquareWidget, Widget,
    };
}
