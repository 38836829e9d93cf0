//! The circular badge glyph on the right of the icon.

use super::{solid, stroke_width, GlyphLayer, WHITE};
use crate::canvas::Canvas;
use crate::theme::BadgeStyle;

/// Paints a filled circle with two horizontal white bars inside it, one
/// above and one below the vertical center.
pub struct BadgeLayer {
    pub style: BadgeStyle,
}

impl BadgeLayer {
    pub fn new(style: BadgeStyle) -> Self {
        Self { style }
    }

    /// Circle center and radius at a given canvas size.
    pub fn circle(&self, size: u32) -> (f32, f32, f32) {
        let size = size as f32;
        (
            self.style.center_x * size,
            self.style.center_y * size,
            self.style.radius * size,
        )
    }
}

impl GlyphLayer for BadgeLayer {
    fn paint(&self, canvas: &mut Canvas) {
        let size = canvas.size();
        let (cx, cy, radius) = self.circle(size);
        canvas.fill_circle(cx, cy, radius, solid(self.style.color));

        let stroke = stroke_width(size, self.style.bar_stroke);
        let x0 = cx - radius + radius * self.style.bar_inset;
        let x1 = cx + radius - radius * self.style.bar_inset;
        for side in [-1.0f32, 1.0] {
            let y = cy + side * radius * self.style.bar_offset;
            canvas.stroke_polyline(&[(x0, y), (x1, y)], stroke, WHITE);
        }
    }
}
