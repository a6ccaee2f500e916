//! A minimal host that drives a widget through measure, resize and paint
//! callbacks, the way a platform view system would.

use crate::layout::{MeasureSpec, MeasuredSize};
use crate::reactive::{take_frame_request, ChangeFlags};
use crate::renderer::{DrawCommand, PaintContext, PixmapSurface, Result};
use crate::widgets::{Color, Widget};

pub struct Host<W: Widget> {
    root: W,
    size: MeasuredSize,
    last_specs: Option<(MeasureSpec, MeasureSpec)>,
    paint_ctx: PaintContext,
    background_color: Color,
    frames: u64,
}

impl<W: Widget> Host<W> {
    pub fn new(root: W) -> Self {
        Self {
            root,
            size: MeasuredSize::default(),
            last_specs: None,
            paint_ctx: PaintContext::with_capacity(8),
            background_color: Color::TRANSPARENT,
            frames: 0,
        }
    }

    /// Color the surface is cleared to before each rasterization.
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn root(&self) -> &W {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut W {
        &mut self.root
    }

    /// The size currently assigned to the root.
    pub fn size(&self) -> MeasuredSize {
        self.size
    }

    /// Number of frames painted so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Measure the root under the given specs and assign it the measured size.
    pub fn layout(&mut self, width: MeasureSpec, height: MeasureSpec) -> MeasuredSize {
        self.last_specs = Some((width, height));
        self.measure_root(width, height)
    }

    fn measure_root(&mut self, width: MeasureSpec, height: MeasureSpec) -> MeasuredSize {
        let needed_layout = self.root.needs_layout();
        let measured = self.root.measure(width, height);
        if needed_layout && measured == self.size {
            // Same size, but insets may have moved the content box.
            self.root.on_resized(self.size, self.size);
            self.root.mark_dirty(ChangeFlags::NEEDS_PAINT);
        } else {
            self.assign_size(measured);
        }
        measured
    }

    /// Assign a size to the root. The resize callback only fires when the
    /// size differs from the current one.
    pub fn assign_size(&mut self, size: MeasuredSize) {
        if size == self.size {
            return;
        }
        let old = self.size;
        self.size = size;
        log::info!(
            "Resizing root {}x{} -> {}x{}",
            old.width,
            old.height,
            size.width,
            size.height
        );
        self.root.on_resized(size, old);
        self.root.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    /// Run one frame: re-layout if the root asked for it, then repaint if
    /// anything is pending. Returns true when a new command list was recorded.
    pub fn frame(&mut self) -> bool {
        if self.root.needs_layout() {
            if let Some((width, height)) = self.last_specs {
                self.measure_root(width, height);
            }
        }

        let requested = take_frame_request(self.root.id());
        if !requested && !self.root.needs_paint() {
            return false;
        }

        self.paint_ctx.clear();
        self.root.paint(&mut self.paint_ctx);
        self.root.clear_dirty();
        self.frames += 1;
        log::debug!(
            "Frame {}: {} draw commands",
            self.frames,
            self.paint_ctx.len()
        );
        true
    }

    /// Commands recorded by the most recent frame.
    pub fn commands(&self) -> &[DrawCommand] {
        self.paint_ctx.commands()
    }

    /// Rasterize the most recent frame at the assigned size.
    pub fn render(&self) -> Result<PixmapSurface> {
        let mut surface = PixmapSurface::with_background(
            self.size.width,
            self.size.height,
            self.background_color,
        )?;
        self.paint_ctx.replay(&mut surface)?;
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::{has_pending_frames, pending_changes};
    use crate::widgets::{square, BoundingBox, Padding, RectF};

    #[test]
    fn test_layout_assigns_square_size() {
        let mut host = Host::new(square());
        let size = host.layout(MeasureSpec::exact(100), MeasureSpec::at_most(300));
        assert_eq!(size, MeasuredSize::square(100));
        assert_eq!(host.size(), size);
        assert_eq!(host.root().bounding_box(), BoundingBox::new(0, 100, 100, 0));
    }

    #[test]
    fn test_first_frame_paints_then_idles() {
        let mut host = Host::new(square());
        host.layout(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());

        assert!(host.frame());
        assert_eq!(host.commands().len(), 2);
        assert!(!host.frame());
        assert_eq!(host.frame_count(), 1);
    }

    #[test]
    fn test_color_change_triggers_frame() {
        let mut host = Host::new(square());
        host.layout(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());
        host.frame();

        host.root_mut().set_stroke_color(Color::BLACK);
        assert!(host.frame());
        assert_eq!(host.commands()[1].paint().color, Color::BLACK);
    }

    #[test]
    fn test_same_size_does_not_resize() {
        let mut host = Host::new(square());
        host.layout(MeasureSpec::exact(80), MeasureSpec::exact(80));
        host.frame();

        host.layout(MeasureSpec::exact(80), MeasureSpec::exact(200));
        assert!(!host.frame());
    }

    #[test]
    fn test_padding_change_relayouts_on_next_frame() {
        let mut host = Host::new(square());
        host.layout(MeasureSpec::exact(120), MeasureSpec::exact(120));
        host.frame();

        host.root_mut().set_padding(Padding::all(10));
        assert!(host.frame());
        assert_eq!(host.root().bounding_box(), BoundingBox::new(0, 100, 100, 0));
        assert!(!host.root().needs_layout());
    }

    #[test]
    fn test_padding_change_then_layout_with_same_specs() {
        let mut host = Host::new(square());
        host.layout(MeasureSpec::exact(120), MeasureSpec::exact(120));
        host.frame();

        host.root_mut().set_padding(Padding::all(10));
        host.layout(MeasureSpec::exact(120), MeasureSpec::exact(120));
        assert_eq!(host.root().bounding_box(), BoundingBox::new(0, 100, 100, 0));

        assert!(host.frame());
        let DrawCommand::RoundRect { rect, .. } = &host.commands()[0];
        assert_eq!(*rect, RectF::new(0.0, 100.0, 100.0, 0.0));
    }

    #[test]
    fn test_two_hosts_keep_separate_redraw_requests() {
        let mut first = Host::new(square());
        let mut second = Host::new(square());
        first.layout(MeasureSpec::exact(60), MeasureSpec::exact(60));
        second.layout(MeasureSpec::exact(90), MeasureSpec::exact(90));
        assert!(first.frame());
        assert!(second.frame());

        second.root_mut().set_background_color(Color::WHITE);
        assert!(!first.frame());
        assert_eq!(
            pending_changes(second.root().id()),
            ChangeFlags::NEEDS_PAINT
        );
        assert!(second.frame());
        assert_eq!(second.commands()[0].paint().color, Color::WHITE);

        first.root_mut().set_stroke_color(Color::BLACK);
        assert!(!second.frame());
        assert!(has_pending_frames());
        assert!(first.frame());
        assert_eq!(first.commands()[1].paint().color, Color::BLACK);
    }

    #[test]
    fn test_render_matches_assigned_size() {
        let mut host = Host::new(square()).background_color(Color::WHITE);
        host.layout(MeasureSpec::at_most(64), MeasureSpec::unconstrained());
        host.frame();

        let surface = host.render().unwrap();
        assert_eq!((surface.width(), surface.height()), (64, 64));
        assert_eq!(surface.pixel(32, 32), Some([255, 255, 0, 255]));
        assert_eq!(surface.pixel(0, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_render_before_layout_fails() {
        let host = Host::new(square());
        assert!(host.render().is_err());
    }
}
