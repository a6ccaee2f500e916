//! Software rasterization of draw commands into an RGBA pixmap.

use std::path::Path;

use image::RgbaImage;
use resvg::tiny_skia::{self, FillRule, Pixmap, Stroke, Transform};

use super::commands::{DrawCommand, Paint, PaintStyle};
use super::error::{RenderError, Result};
use crate::widgets::{Color, RectF};

/// Cubic Bézier handle length for approximating a quarter ellipse.
const KAPPA: f32 = 0.552_284_8;

/// A CPU-backed drawing surface.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Create a transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            log::error!("Refusing to allocate a {}x{} pixmap", width, height);
            RenderError::EmptySurface { width, height }
        })?;
        Ok(Self { pixmap })
    }

    /// Create a surface pre-filled with `background`.
    pub fn with_background(width: u32, height: u32, background: Color) -> Result<Self> {
        let mut surface = Self::new(width, height)?;
        surface.clear(background);
        Ok(surface)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_rgba8();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    /// Rasterize `commands` in order; later commands paint over earlier ones.
    pub fn draw(&mut self, commands: &[DrawCommand]) -> Result<()> {
        for command in commands {
            match command {
                DrawCommand::RoundRect {
                    rect,
                    rx,
                    ry,
                    paint,
                } => self.draw_round_rect(*rect, *rx, *ry, paint)?,
            }
        }
        Ok(())
    }

    /// Draw one rounded rectangle.
    ///
    /// Edges are sorted first, so a rectangle given with `top > bottom`
    /// covers the same pixels as its ordered counterpart. Radii are clamped
    /// to half of the corresponding side. Empty rectangles draw nothing.
    pub fn draw_round_rect(
        &mut self,
        rect: RectF,
        rx: f32,
        ry: f32,
        paint: &Paint,
    ) -> Result<()> {
        let rect = rect.sorted();
        if rect.is_empty() {
            log::debug!("Skipping empty rounded rect {:?}", rect);
            return Ok(());
        }

        let rx = rx.max(0.0).min(rect.width() / 2.0);
        let ry = ry.max(0.0).min(rect.height() / 2.0);
        let path = round_rect_path(rect, rx, ry).ok_or_else(|| {
            log::error!("Failed to build rounded rect path for {:?}", rect);
            RenderError::DegeneratePath(rect)
        })?;

        let mut sk_paint = tiny_skia::Paint::default();
        let [r, g, b, a] = paint.color.to_rgba8();
        sk_paint.set_color_rgba8(r, g, b, a);
        sk_paint.anti_alias = paint.anti_alias;

        match paint.style {
            PaintStyle::Fill => {
                self.pixmap.fill_path(
                    &path,
                    &sk_paint,
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            }
            PaintStyle::Stroke => {
                let stroke = Stroke {
                    width: paint.stroke_width,
                    ..Stroke::default()
                };
                self.pixmap
                    .stroke_path(&path, &sk_paint, &stroke, Transform::identity(), None);
            }
        }
        Ok(())
    }

    /// Read back one pixel as straight (non-premultiplied) `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        let (width, height) = (self.width(), self.height());
        let mut buf = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            buf.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RgbaImage::from_raw(width, height, buf).ok_or(RenderError::BufferSize { width, height })
    }

    /// Encode the surface as PNG, creating parent directories as needed.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| RenderError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        self.to_rgba_image()?.save(path)?;
        log::debug!(
            "Saved {}x{} surface to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }
}

/// Closed rounded-rectangle outline; `rect` must be sorted and the radii
/// already clamped.
fn round_rect_path(rect: RectF, rx: f32, ry: f32) -> Option<tiny_skia::Path> {
    let RectF {
        left: l,
        top: t,
        right: r,
        bottom: b,
    } = rect;
    let kx = rx * KAPPA;
    let ky = ry * KAPPA;

    let mut pb = tiny_skia::PathBuilder::new();
    pb.move_to(l + rx, t);
    pb.line_to(r - rx, t);
    pb.cubic_to(r - rx + kx, t, r, t + ry - ky, r, t + ry);
    pb.line_to(r, b - ry);
    pb.cubic_to(r, b - ry + ky, r - rx + kx, b, r - rx, b);
    pb.line_to(l + rx, b);
    pb.cubic_to(l + rx - kx, b, l, b - ry + ky, l, b - ry);
    pb.line_to(l, t + ry);
    pb.cubic_to(l, t + ry - ky, l + rx - kx, t, l + rx, t);
    pb.close();
    pb.finish()
}
