//! Raster canvas, opacity mask, and drawing primitives.
//!
//! All drawing uses hard-edged coverage: a pixel is painted when its center
//! falls inside the shape. There is no anti-aliasing and no floating-point
//! accumulation across pixels, so the output is byte-for-byte deterministic
//! for a given size and theme.

use image::{GrayImage, Rgba, RgbaImage};

// ============================================================================
// RectF
// ============================================================================

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// A square rectangle at the origin, covering a full canvas side.
    pub fn square(side: f32) -> Self {
        Self::new(0.0, 0.0, side, side)
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }
}

/// Point-in-shape test for a rectangle with circular corners.
///
/// The corner test clamps the point into the inner rectangle and measures the
/// distance back out, which handles all four corners with one expression.
fn rounded_rect_contains(rect: &RectF, radius: f32, px: f32, py: f32) -> bool {
    if !rect.contains(px, py) {
        return false;
    }
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0);
    if r <= 0.0 {
        return true;
    }
    let cx = px.clamp(rect.x + r, rect.right() - r);
    let cy = py.clamp(rect.y + r, rect.bottom() - r);
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= r * r
}

/// Squared distance from a point to a line segment.
fn dist_sq_to_segment(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let (abx, aby) = (bx - ax, by - ay);
    let (apx, apy) = (px - ax, py - ay);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0)
    };
    let (dx, dy) = (apx - t * abx, apy - t * aby);
    dx * dx + dy * dy
}

// ============================================================================
// Canvas
// ============================================================================

/// A square RGBA raster surface for one icon render.
///
/// Created fully transparent; drawing operations blend onto it with
/// source-over compositing.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    data: RgbaImage,
}

impl Canvas {
    /// Creates a fully transparent square canvas.
    pub fn new(size: u32) -> Self {
        Self {
            data: RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0])),
        }
    }

    /// The canvas side length in pixels.
    pub fn size(&self) -> u32 {
        self.data.width()
    }

    /// Borrows the underlying pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.data
    }

    /// Consumes the canvas and returns the pixel buffer.
    pub fn into_image(self) -> RgbaImage {
        self.data
    }

    /// Paints one full horizontal row with a solid color.
    pub fn fill_row(&mut self, y: u32, color: Rgba<u8>) {
        for x in 0..self.size() {
            self.blend_pixel(x, y, color);
        }
    }

    /// Fills a rounded rectangle.
    pub fn fill_rounded_rect(&mut self, rect: RectF, radius: f32, color: Rgba<u8>) {
        let (x0, y0, x1, y1) = self.clip_bbox(rect.x, rect.y, rect.right(), rect.bottom());
        for y in y0..y1 {
            for x in x0..x1 {
                if rounded_rect_contains(&rect, radius, x as f32 + 0.5, y as f32 + 0.5) {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Fills a circle.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
        let (x0, y0, x1, y1) = self.clip_bbox(cx - radius, cy - radius, cx + radius, cy + radius);
        let r_sq = radius * radius;
        for y in y0..y1 {
            for x in x0..x1 {
                let (dx, dy) = (x as f32 + 0.5 - cx, y as f32 + 0.5 - cy);
                if dx * dx + dy * dy <= r_sq {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Strokes an open polyline with round caps and round joints.
    ///
    /// Each segment is rendered as a capsule; the overlapping end caps form
    /// the curved joints between consecutive segments.
    pub fn stroke_polyline(&mut self, points: &[(f32, f32)], width: f32, color: Rgba<u8>) {
        let half = (width / 2.0).max(0.5);
        for seg in points.windows(2) {
            let (ax, ay) = seg[0];
            let (bx, by) = seg[1];
            let (x0, y0, x1, y1) = self.clip_bbox(
                ax.min(bx) - half,
                ay.min(by) - half,
                ax.max(bx) + half,
                ay.max(by) + half,
            );
            let half_sq = half * half;
            for y in y0..y1 {
                for x in x0..x1 {
                    let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
                    if dist_sq_to_segment(px, py, ax, ay, bx, by) <= half_sq {
                        self.blend_pixel(x, y, color);
                    }
                }
            }
        }
    }

    /// Composites a source canvas onto this one, using `mask` as the
    /// compositing alpha.
    ///
    /// Pixels where the mask is zero leave the destination untouched; where
    /// the mask is opaque the source is blended in at its own alpha. This is
    /// the general way to clip an arbitrary fill (such as a per-row gradient)
    /// to a silhouette the primitive fills cannot express directly.
    pub fn composite_masked(&mut self, src: &Canvas, mask: &Mask) {
        let size = self.size().min(src.size()).min(mask.size());
        for y in 0..size {
            for x in 0..size {
                let coverage = mask.value(x, y);
                if coverage == 0 {
                    continue;
                }
                let mut px = *src.data.get_pixel(x, y);
                px[3] = ((px[3] as u16 * coverage as u16) / 255) as u8;
                self.blend_pixel(x, y, px);
            }
        }
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        let dst = *self.data.get_pixel(x, y);
        self.data.put_pixel(x, y, alpha_blend(color, dst));
    }

    /// Clamps a float bounding box to integer pixel ranges inside the canvas.
    fn clip_bbox(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> (u32, u32, u32, u32) {
        let size = self.size();
        (
            (x0.floor().max(0.0)) as u32,
            (y0.floor().max(0.0)) as u32,
            (x1.ceil().max(0.0) as u32).min(size),
            (y1.ceil().max(0.0) as u32).min(size),
        )
    }
}

// ============================================================================
// Mask
// ============================================================================

/// A single-channel opacity surface used to clip fills to a silhouette.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    data: GrayImage,
}

impl Mask {
    /// Creates a fully transparent (zero-coverage) mask.
    pub fn new(size: u32) -> Self {
        Self {
            data: GrayImage::new(size, size),
        }
    }

    /// The mask side length in pixels.
    pub fn size(&self) -> u32 {
        self.data.width()
    }

    /// Opacity at a pixel, 0 (outside) to 255 (full coverage).
    pub fn value(&self, x: u32, y: u32) -> u8 {
        self.data.get_pixel(x, y)[0]
    }

    /// Marks a filled rounded rectangle at full opacity.
    pub fn fill_rounded_rect(&mut self, rect: RectF, radius: f32) {
        let size = self.size();
        for y in 0..size {
            for x in 0..size {
                if rounded_rect_contains(&rect, radius, x as f32 + 0.5, y as f32 + 0.5) {
                    self.data.put_pixel(x, y, image::Luma([255]));
                }
            }
        }
    }
}

// ============================================================================
// Blending
// ============================================================================

/// Alpha blends two RGBA pixels (source over destination).
fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    if src[3] == 255 {
        return src;
    }
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

// ============================================================================
// Tests
// ============================================================================
