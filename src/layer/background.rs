//! Gradient background clipped to a rounded-rectangle silhouette.

use image::Rgba;
use palette::{Mix, Srgb};

use super::GlyphLayer;
use crate::canvas::{Canvas, Mask, RectF};
use crate::theme::{BackgroundStyle, Rgb};

/// Paints the vertical gradient backdrop.
///
/// Primitive fills cannot carry a per-row gradient, so the layer paints the
/// gradient across the full square first, builds a rounded-rectangle
/// [`Mask`], and composites through it: pixels outside the silhouette stay
/// fully transparent, pixels inside keep the gradient color.
pub struct BackgroundLayer {
    pub style: BackgroundStyle,
}

impl BackgroundLayer {
    pub fn new(style: BackgroundStyle) -> Self {
        Self { style }
    }
}

impl GlyphLayer for BackgroundLayer {
    fn paint(&self, canvas: &mut Canvas) {
        let size = canvas.size();
        if size == 0 {
            return;
        }

        let mut gradient = Canvas::new(size);
        // Guard the denominator so a one-pixel canvas does not divide by zero.
        let denom = size.saturating_sub(1).max(1) as f32;
        for y in 0..size {
            let t = y as f32 / denom;
            gradient.fill_row(y, mix_rgb(self.style.gradient_top, self.style.gradient_bottom, t));
        }

        let mut mask = Mask::new(size);
        let radius = (size as f32 * self.style.corner_radius).floor();
        mask.fill_rounded_rect(RectF::square(size as f32), radius);

        canvas.composite_masked(&gradient, &mask);
    }
}

/// Linearly interpolates between two colors in sRGB space.
fn mix_rgb(start: Rgb, end: Rgb, t: f32) -> Rgba<u8> {
    let a = Srgb::new(
        start[0] as f32 / 255.0,
        start[1] as f32 / 255.0,
        start[2] as f32 / 255.0,
    );
    let b = Srgb::new(
        end[0] as f32 / 255.0,
        end[1] as f32 / 255.0,
        end[2] as f32 / 255.0,
    );
    let mixed = a.mix(b, t);
    Rgba([
        (mixed.red * 255.0).round() as u8,
        (mixed.green * 255.0).round() as u8,
        (mixed.blue * 255.0).round() as u8,
        255,
    ])
}
