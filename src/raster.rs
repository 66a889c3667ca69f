/*!
Drawing surfaces.

The uv checker only ever asks for two things to be drawn: filled polygons and
stroked polylines. [`Rasterizer`] and [`Canvas`] describe that contract, and
[`SkiaRasterizer`] implements it with [`tiny_skia`], writing PNG images.
*/

use std::path::Path;

use glam::DVec2;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::{
    error::{Error, Result},
    style::{Color, Style},
};

/// A surface that can be drawn on. Points are in pixel space, with the origin
/// at the top left corner.
pub trait Canvas {
    fn fill_polygon(&mut self, points: &[DVec2], style: &Style);

    fn stroke_polyline(&mut self, points: &[DVec2], closed: bool, style: &Style);
}

/// Creates canvases and writes them to image files.
pub trait Rasterizer {
    type Canvas: Canvas;

    /// Create a square canvas, cleared to [`Color::TRANSPARENT_WHITE`].
    fn create_canvas(&self, size: u32) -> Result<Self::Canvas>;

    fn save(&self, canvas: &Self::Canvas, path: &Path) -> Result<()>;
}

/// Maps uv coordinates onto the pixels of a square image showing the unit
/// square whose lower left corner is `origin`. The `v` axis is flipped, so
/// that `v` points up in the image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub origin: DVec2,
    pub size: f64,
}

impl Viewport {
    pub fn new(origin: DVec2, size: u32) -> Self {
        Viewport {
            origin,
            size: size as f64,
        }
    }

    pub fn to_pixel(&self, uv: DVec2) -> DVec2 {
        let local = uv - self.origin;
        DVec2::new(local.x * self.size, (1.0 - local.y) * self.size)
    }

    pub fn to_pixels<I>(&self, uvs: I) -> Vec<DVec2>
    where
        I: IntoIterator<Item = DVec2>,
    {
        uvs.into_iter().map(|uv| self.to_pixel(uv)).collect()
    }
}

/// [`Rasterizer`] backed by [`tiny_skia`].
#[derive(Debug, Default, Copy, Clone)]
pub struct SkiaRasterizer;

/// A [`tiny_skia::Pixmap`] that can be drawn on.
pub struct SkiaCanvas {
    pixmap: Pixmap,
}

impl SkiaCanvas {
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// The straight alpha color of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color::rgba(
                c.red() as f32 / 255.0,
                c.green() as f32 / 255.0,
                c.blue() as f32 / 255.0,
                c.alpha() as f32 / 255.0,
            )
        })
    }
}

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba(
        color.r.clamp(0.0, 1.0),
        color.g.clamp(0.0, 1.0),
        color.b.clamp(0.0, 1.0),
        color.a.clamp(0.0, 1.0),
    )
    .unwrap_or(tiny_skia::Color::BLACK)
}

fn skia_paint(style: &Style) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(style.color));
    paint.anti_alias = style.anti_alias;
    paint
}

fn skia_path(points: &[DVec2], closed: bool) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut builder = PathBuilder::with_capacity(points.len() + 1, points.len() + 1);
    builder.move_to(first.x as f32, first.y as f32);
    for p in rest {
        builder.line_to(p.x as f32, p.y as f32);
    }
    if closed {
        builder.close();
    }
    // Fails for paths with fewer than two points, or non-finite coordinates.
    builder.finish()
}

impl Canvas for SkiaCanvas {
    fn fill_polygon(&mut self, points: &[DVec2], style: &Style) {
        if let Some(path) = skia_path(points, true) {
            self.pixmap.fill_path(
                &path,
                &skia_paint(style),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn stroke_polyline(&mut self, points: &[DVec2], closed: bool, style: &Style) {
        if let Some(path) = skia_path(points, closed) {
            let stroke = Stroke {
                width: style.width,
                ..Stroke::default()
            };
            self.pixmap.stroke_path(
                &path,
                &skia_paint(style),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }
}

impl Rasterizer for SkiaRasterizer {
    type Canvas = SkiaCanvas;

    fn create_canvas(&self, size: u32) -> Result<SkiaCanvas> {
        if size == 0 {
            return Err(Error::InvalidImageSize(size));
        }
        let mut pixmap = Pixmap::new(size, size).ok_or(Error::CanvasCreationFailed(size))?;
        pixmap.fill(skia_color(Color::TRANSPARENT_WHITE));
        Ok(SkiaCanvas { pixmap })
    }

    fn save(&self, canvas: &SkiaCanvas, path: &Path) -> Result<()> {
        canvas
            .pixmap
            .save_png(path)
            .map_err(|e| Error::ImageWriteFailed {
                path: path.to_path_buf(),
                message: format!("{}", e),
            })
    }
}

#[cfg(test)]
mod test {
    use glam::dvec2;

    use super::{Canvas, Rasterizer, SkiaRasterizer, Viewport};
    use crate::{
        macros::assert_uv_eq,
        style::{Color, Style},
    };

    #[test]
    fn t_viewport() {
        let view = Viewport::new(dvec2(0.0, 0.0), 100);
        assert_uv_eq!(view.to_pixel(dvec2(0.0, 0.0)), dvec2(0.0, 100.0));
        assert_uv_eq!(view.to_pixel(dvec2(0.25, 0.75)), dvec2(25.0, 25.0));
        // Tile 1012 starts at (1, 1).
        let view = Viewport::new(dvec2(1.0, 1.0), 100);
        assert_uv_eq!(view.to_pixel(dvec2(1.5, 1.0)), dvec2(50.0, 100.0));
        assert_uv_eq!(view.to_pixel(dvec2(2.0, 2.0)), dvec2(100.0, 0.0));
    }

    #[test]
    fn t_clear_and_fill() {
        let raster = SkiaRasterizer;
        let mut canvas = raster.create_canvas(16).unwrap();
        assert_eq!(canvas.pixel(8, 8).map(|c| c.a), Some(0.0));
        let square = [
            dvec2(4.0, 4.0),
            dvec2(12.0, 4.0),
            dvec2(12.0, 12.0),
            dvec2(4.0, 12.0),
        ];
        canvas.fill_polygon(&square, &Style::fill(Color::rgba(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(canvas.pixel(8, 8), Some(Color::rgba(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(canvas.pixel(1, 1).map(|c| c.a), Some(0.0));
        // Open polyline along the top row of the square.
        canvas.stroke_polyline(
            &[dvec2(0.0, 1.5), dvec2(16.0, 1.5)],
            false,
            &Style::stroke(Color::WHITE, 1.0).with_anti_alias(false),
        );
        assert_eq!(canvas.pixel(8, 1), Some(Color::WHITE));
        assert_eq!(canvas.pixel(8, 14).map(|c| c.a), Some(0.0));
    }

    #[test]
    fn t_degenerate_paths_are_ignored() {
        let raster = SkiaRasterizer;
        let mut canvas = raster.create_canvas(4).unwrap();
        canvas.fill_polygon(&[], &Style::fill(Color::BLACK));
        canvas.fill_polygon(&[dvec2(1.0, 1.0)], &Style::fill(Color::BLACK));
        canvas.stroke_polyline(&[dvec2(1.0, 1.0)], true, &Style::stroke(Color::BLACK, 2.0));
        assert!(canvas.pixmap().pixels().iter().all(|p| p.alpha() == 0));
        assert!(raster.create_canvas(0).is_err());
    }
}
