use crate::layout::{Constraints, MeasureSpec, MeasuredSize, Size};
use crate::reactive::{ChangeFlags, WidgetId};
use crate::renderer::PaintContext;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Build a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as f32 / 255.0,
            g: ((argb >> 8) & 0xFF) as f32 / 255.0,
            b: (argb & 0xFF) as f32 / 255.0,
            a: ((argb >> 24) & 0xFF) as f32 / 255.0,
        }
    }

    /// Quantize to 8-bit `[r, g, b, a]`.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const YELLOW: Color = Color::from_argb(0xFFFF_FF00);
    pub const DARK_GRAY: Color = Color::from_argb(0xFF44_4444);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// Insets between a widget's allocated area and its content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    pub fn all(value: i32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Override the top padding value.
    pub fn top(mut self, v: i32) -> Self {
        self.top = v;
        self
    }

    /// Override the bottom padding value.
    pub fn bottom(mut self, v: i32) -> Self {
        self.bottom = v;
        self
    }

    /// Override the left padding value.
    pub fn left(mut self, v: i32) -> Self {
        self.left = v;
        self
    }

    /// Override the right padding value.
    pub fn right(mut self, v: i32) -> Self {
        self.right = v;
        self
    }
}

impl From<i32> for Padding {
    fn from(v: i32) -> Self {
        Padding::all(v)
    }
}

/// `[vertical, horizontal]` — CSS-style 2-value shorthand.
impl From<[i32; 2]> for Padding {
    fn from(v: [i32; 2]) -> Self {
        Padding::symmetric(v[1], v[0])
    }
}

/// `[top, right, bottom, left]` — CSS-style 4-value shorthand.
impl From<[i32; 4]> for Padding {
    fn from(v: [i32; 4]) -> Self {
        Padding {
            top: v[0],
            right: v[1],
            bottom: v[2],
            left: v[3],
        }
    }
}

/// Integer rectangle stored as its four edges, in content-local coordinates.
///
/// Edges are kept exactly as assigned; `top` may be greater than `bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Overwrite all four edges in place.
    pub fn set(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        *self = Self::new(left, top, right, bottom);
    }

    /// True when the edges are ordered (`left <= right` and `top <= bottom`).
    pub fn is_sorted(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    pub fn to_rect_f(&self) -> RectF {
        RectF::new(
            self.left as f32,
            self.top as f32,
            self.right as f32,
            self.bottom as f32,
        )
    }
}

/// Floating-point rectangle stored as its four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Signed width; negative when the horizontal edges are swapped.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Signed height; negative when the vertical edges are swapped.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Copy with each pair of edges put in ascending order.
    pub fn sorted(&self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.left < self.right && self.top < self.bottom)
    }
}

impl From<BoundingBox> for RectF {
    fn from(bounds: BoundingBox) -> Self {
        bounds.to_rect_f()
    }
}

/// A leaf widget driven by host callbacks: measure, resize, paint.
pub trait Widget {
    /// Identity used to scope invalidation requests to this widget.
    fn id(&self) -> WidgetId;

    /// Decide a size for the given per-axis specs.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> MeasuredSize;

    /// Called by the host after it assigned a new size to the widget.
    fn on_resized(&mut self, new_size: MeasuredSize, old_size: MeasuredSize) {
        let _ = (new_size, old_size);
    }

    /// Box-constraint entry point for containers that speak min/max.
    fn layout(&mut self, constraints: Constraints) -> Size {
        let measured = self.measure(constraints.width_spec(), constraints.height_spec());
        Size::from(measured)
    }

    fn paint(&self, ctx: &mut PaintContext);

    fn mark_dirty(&mut self, flags: ChangeFlags);
    fn needs_layout(&self) -> bool;
    fn needs_paint(&self) -> bool;
    fn clear_dirty(&mut self);
}

impl Widget for Box<dyn Widget> {
    fn id(&self) -> WidgetId {
        (**self).id()
    }
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> MeasuredSize {
        (**self).measure(width, height)
    }
    fn on_resized(&mut self, new_size: MeasuredSize, old_size: MeasuredSize) {
        (**self).on_resized(new_size, old_size)
    }
    fn layout(&mut self, constraints: Constraints) -> Size {
        (**self).layout(constraints)
    }
    fn paint(&self, ctx: &mut PaintContext) {
        (**self).paint(ctx)
    }
    fn mark_dirty(&mut self, flags: ChangeFlags) {
        (**self).mark_dirty(flags)
    }
    fn needs_layout(&self) -> bool {
        (**self).needs_layout()
    }
    fn needs_paint(&self) -> bool {
        (**self).needs_paint()
    }
    fn clear_dirty(&mut self) {
        (**self).clear_dirty()
    }
}
