//! A widget that always measures itself square and paints a filled,
//! stroked rounded square.

use crate::layout::{resolve_square, MeasureSpec, MeasuredSize};
use crate::reactive::{ChangeFlags, WidgetId};
use crate::renderer::{Paint, PaintContext};

use super::widget::{BoundingBox, Color, Padding, Widget};

pub const DEFAULT_SQUARE_COLOR: Color = Color::YELLOW;
pub const DEFAULT_SQUARE_STROKE_COLOR: Color = Color::DARK_GRAY;
pub const DESIRED_WIDTH: u32 = 120;
pub const DESIRED_HEIGHT: u32 = 120;
pub const SQUARE_STROKE_WIDTH: f32 = 15.0;
pub const SQUARE_BORDER_RADIUS: f32 = 25.0;

/// Construction-time settings for a [`SquareWidget`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareStyle {
    /// Preferred width when the host leaves room to choose
    pub desired_width: u32,
    /// Preferred height when the host leaves room to choose
    pub desired_height: u32,
    pub stroke_width: f32,
    pub corner_radius: f32,
    pub background_color: Color,
    pub stroke_color: Color,
    pub anti_alias: bool,
}

impl Default for SquareStyle {
    fn default() -> Self {
        Self {
            desired_width: DESIRED_WIDTH,
            desired_height: DESIRED_HEIGHT,
            stroke_width: SQUARE_STROKE_WIDTH,
            corner_radius: SQUARE_BORDER_RADIUS,
            background_color: DEFAULT_SQUARE_COLOR,
            stroke_color: DEFAULT_SQUARE_STROKE_COLOR,
            anti_alias: true,
        }
    }
}

impl SquareStyle {
    pub fn desired_size(mut self, width: u32, height: u32) -> Self {
        self.desired_width = width;
        self.desired_height = height;
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}

pub struct SquareWidget {
    widget_id: WidgetId,
    dirty_flags: ChangeFlags,
    style: SquareStyle,
    padding: Padding,
    background_color: Color,
    stroke_color: Color,
    background_paint: Paint,
    stroke_paint: Paint,
    bounding_box: BoundingBox,
}

impl SquareWidget {
    pub fn new() -> Self {
        Self::with_style(SquareStyle::default())
    }

    pub fn with_style(style: SquareStyle) -> Self {
        Self {
            widget_id: WidgetId::next(),
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            style,
            padding: Padding::default(),
            background_color: style.background_color,
            stroke_color: style.stroke_color,
            background_paint: Paint::fill(style.background_color).anti_alias(style.anti_alias),
            stroke_paint: Paint::stroke(style.stroke_color, style.stroke_width)
                .anti_alias(style.anti_alias),
            bounding_box: BoundingBox::default(),
        }
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn style(&self) -> &SquareStyle {
        &self.style
    }

    pub fn padding_box(&self) -> Padding {
        self.padding
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn background_paint(&self) -> &Paint {
        &self.background_paint
    }

    pub fn stroke_paint(&self) -> &Paint {
        &self.stroke_paint
    }

    /// Change the padding. The new insets apply from the next resize.
    pub fn set_padding(&mut self, padding: impl Into<Padding>) -> ChangeFlags {
        self.padding = padding.into();
        self.invalidate(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT)
    }

    /// Change the fill color and request a repaint.
    pub fn set_background_color(&mut self, color: Color) -> ChangeFlags {
        self.background_color = color;
        self.background_paint.color = color;
        self.invalidate(ChangeFlags::NEEDS_PAINT)
    }

    /// Change the border color and request a repaint.
    pub fn set_stroke_color(&mut self, color: Color) -> ChangeFlags {
        self.stroke_color = color;
        self.stroke_paint.color = color;
        self.invalidate(ChangeFlags::NEEDS_PAINT)
    }

    fn invalidate(&mut self, flags: ChangeFlags) -> ChangeFlags {
        self.dirty_flags |= flags;
        if flags.contains(ChangeFlags::NEEDS_LAYOUT) {
            self.widget_id.request_layout();
        } else {
            self.widget_id.request_paint();
        }
        flags
    }

    /// Square side for the given per-axis specs.
    pub fn resolve(&self, width: MeasureSpec, height: MeasureSpec) -> u32 {
        resolve_square(
            width,
            height,
            self.style.desired_width,
            self.style.desired_height,
        )
    }

    /// Recompute the bounding box for a newly assigned size.
    ///
    /// The box is stored as `(0, content_height, content_width, 0)`: its
    /// vertical edges are swapped relative to a top-left origin, and
    /// surfaces are expected to sort them before drawing.
    pub fn resized(&mut self, new_width: i32, new_height: i32) {
        let content_width = new_width
            .saturating_sub(self.padding.left)
            .saturating_sub(self.padding.right);
        let content_height = new_height
            .saturating_sub(self.padding.top)
            .saturating_sub(self.padding.bottom);
        self.bounding_box.set(0, content_height, content_width, 0);
    }

    /// Issue the fill, then the stroke, over the current bounding box.
    pub fn render(&self, ctx: &mut PaintContext) {
        let rect = self.bounding_box.to_rect_f();
        let radius = self.style.corner_radius;
        ctx.draw_round_rect(rect, radius, radius, self.background_paint);
        ctx.draw_round_rect(rect, radius, radius, self.stroke_paint);
    }
}

impl Default for SquareWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for SquareWidget {
    fn id(&self) -> WidgetId {
        self.widget_id
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> MeasuredSize {
        let side = self.resolve(width, height);
        log::debug!(
            "Square {:?} measured {} for width {:?}, height {:?}",
            self.widget_id,
            side,
            width,
            height
        );
        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);
        MeasuredSize::square(side)
    }

    fn on_resized(&mut self, new_size: MeasuredSize, old_size: MeasuredSize) {
        let to_i32 = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        self.resized(to_i32(new_size.width), to_i32(new_size.height));
        self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        log::debug!(
            "Square {:?} resized {}x{} -> {}x{}, bounds {:?}",
            self.widget_id,
            old_size.width,
            old_size.height,
            new_size.width,
            new_size.height,
            self.bounding_box
        );
    }

    fn paint(&self, ctx: &mut PaintContext) {
        self.render(ctx);
    }

    fn mark_dirty(&mut self, flags: ChangeFlags) {
        self.dirty_flags |= flags;
    }

    fn needs_layout(&self) -> bool {
        self.dirty_flags.contains(ChangeFlags::NEEDS_LAYOUT)
    }

    fn needs_paint(&self) -> bool {
        self.dirty_flags.contains(ChangeFlags::NEEDS_PAINT)
    }

    fn clear_dirty(&mut self) {
        self.dirty_flags = ChangeFlags::empty();
    }
}

/// Create a square widget with the default style.
pub fn square() -> SquareWidget {
    SquareWidget::new()
}
