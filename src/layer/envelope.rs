//! The envelope glyph on the left of the icon.

use super::{solid, stroke_width, GlyphLayer, WHITE};
use crate::canvas::{Canvas, RectF};
use crate::theme::EnvelopeStyle;

/// Paints a rounded-rectangle envelope body with a white V fold line running
/// from the left edge down to the body's center and back up to the right
/// edge.
pub struct EnvelopeLayer {
    pub style: EnvelopeStyle,
}

impl EnvelopeLayer {
    pub fn new(style: EnvelopeStyle) -> Self {
        Self { style }
    }

    /// The envelope body rectangle at a given canvas size.
    pub fn body_rect(&self, size: u32) -> RectF {
        let size = size as f32;
        RectF::new(
            self.style.x * size,
            self.style.y * size,
            self.style.width * size,
            self.style.height * size,
        )
    }
}

impl GlyphLayer for EnvelopeLayer {
    fn paint(&self, canvas: &mut Canvas) {
        let size = canvas.size();
        let rect = self.body_rect(size);
        canvas.fill_rounded_rect(
            rect,
            self.style.corner_radius * size as f32,
            solid(self.style.color),
        );

        let fold_y = rect.y + self.style.fold_inset * size as f32;
        let fold = [
            (rect.x, fold_y),
            (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0),
            (rect.right(), fold_y),
        ];
        canvas.stroke_polyline(&fold, stroke_width(size, self.style.fold_stroke), WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::EnvelopeStyle;

    const BODY: [u8; 4] = [234, 67, 53, 255];

    fn paint(size: u32) -> Canvas {
        let mut canvas = Canvas::new(size);
        EnvelopeLayer::new(EnvelopeStyle::default()).paint(&mut canvas);
        canvas
    }

    /// Bounding box of pixels carrying the body color, in pixel-center
    /// coordinates.
    fn body_bbox(canvas: &Canvas) -> (f32, f32, f32, f32) {
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (u32::MAX, u32::MAX, 0, 0);
        for (x, y, px) in canvas.image().enumerate_pixels() {
            if px.0 == BODY {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
        (
            min_x as f32 + 0.5,
            min_y as f32 + 0.5,
            max_x as f32 + 0.5,
            max_y as f32 + 0.5,
        )
    }

    #[test]
    fn body_lands_at_ratio_position() {
        let size = 128u32;
        let canvas = paint(size);
        let (min_x, min_y, max_x, max_y) = body_bbox(&canvas);

        let expected = EnvelopeLayer::new(EnvelopeStyle::default()).body_rect(size);
        assert!((min_x - expected.x).abs() <= 1.0, "left edge: {min_x}");
        assert!((min_y - expected.y).abs() <= 1.0, "top edge: {min_y}");
        assert!((max_x - expected.right()).abs() <= 1.0, "right edge: {max_x}");
        assert!((max_y - expected.bottom()).abs() <= 1.0, "bottom edge: {max_y}");
    }

    #[test]
    fn fold_line_is_white_at_the_vertex() {
        let size = 128u32;
        let canvas = paint(size);
        let rect = EnvelopeLayer::new(EnvelopeStyle::default()).body_rect(size);

        let vx = (rect.x + rect.width / 2.0) as u32;
        let vy = (rect.y + rect.height / 2.0) as u32;
        assert_eq!(canvas.image().get_pixel(vx, vy).0, [255, 255, 255, 255]);
    }

    #[test]
    fn body_survives_the_smallest_size() {
        let canvas = paint(16);
        assert!(canvas.image().pixels().any(|p| p.0 == BODY));
    }
}
