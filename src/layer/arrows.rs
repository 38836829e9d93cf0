//! The two directional arrows between the glyphs.

use super::{solid, stroke_width, GlyphLayer};
use crate::canvas::Canvas;
use crate::theme::ArrowStyle;

/// Paints two horizontal arrows along the canvas midline: the upper one
/// pointing right (envelope to badge) and the lower one pointing left.
///
/// Each arrowhead is an open polyline of two short diagonal strokes meeting
/// at the shaft tip, spanning one stroke width above and below it.
pub struct ArrowLayer {
    pub style: ArrowStyle,
}

impl ArrowLayer {
    pub fn new(style: ArrowStyle) -> Self {
        Self { style }
    }
}

impl GlyphLayer for ArrowLayer {
    fn paint(&self, canvas: &mut Canvas) {
        let size = canvas.size();
        let s = &self.style;
        let mid_y = size as f32 / 2.0;
        let gap = s.gap * size as f32;
        let stroke = stroke_width(size, s.stroke);
        let x0 = s.start_x * size as f32;
        let x1 = s.end_x * size as f32;
        let head = s.head_depth * size as f32;

        // Upper arrow, pointing right.
        let y = mid_y - gap;
        let color = solid(s.outbound_color);
        canvas.stroke_polyline(&[(x0, y), (x1, y)], stroke, color);
        canvas.stroke_polyline(
            &[(x1 - head, y - stroke), (x1, y), (x1 - head, y + stroke)],
            stroke,
            color,
        );

        // Lower arrow, pointing left.
        let y = mid_y + gap;
        let color = solid(s.inbound_color);
        canvas.stroke_polyline(&[(x1, y), (x0, y)], stroke, color);
        canvas.stroke_polyline(
            &[(x0 + head, y - stroke), (x0, y), (x0 + head, y + stroke)],
            stroke,
            color,
        );
    }
}
