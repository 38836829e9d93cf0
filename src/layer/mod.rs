//! Glyph layers composited onto the icon canvas.
//!
//! Each layer owns its style block from the theme and knows how to paint
//! itself onto a [`Canvas`] at any size. The [`LayerPipeline`] composites
//! the layers in a fixed draw order, later layers overlaying earlier ones:
//!
//! ```text
//! Background ──▶ Envelope ──▶ Badge ──▶ Arrows
//! ```

pub mod arrows;
pub mod background;
pub mod badge;
pub mod envelope;

pub use arrows::ArrowLayer;
pub use background::BackgroundLayer;
pub use badge::BadgeLayer;
pub use envelope::EnvelopeLayer;

use image::Rgba;

use crate::canvas::Canvas;
use crate::theme::{IconTheme, Rgb};

// ============================================================================
// GlyphLayer
// ============================================================================

/// A drawable layer of the icon.
///
/// Implementations derive all geometry from the canvas size and their own
/// ratio constants, so the same layer paints consistently at every
/// resolution.
pub trait GlyphLayer {
    /// Paints this layer onto the canvas, blending over existing content.
    fn paint(&self, canvas: &mut Canvas);
}

/// Converts a stroke ratio to a pixel width, truncated and floored at one
/// pixel so hairlines survive the smallest sizes.
pub(crate) fn stroke_width(size: u32, ratio: f32) -> f32 {
    ((size as f32 * ratio) as u32).max(1) as f32
}

/// Promotes an opaque theme color to an RGBA pixel.
pub(crate) fn solid(color: Rgb) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 255])
}

pub(crate) const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

// ============================================================================
// LayerPipeline
// ============================================================================

/// The fixed stack of glyph layers making up the mail-sync icon.
///
/// Layers are plain public fields, so a library consumer can paint a subset
/// onto their own canvas; [`render`](Self::render) composites all of them in
/// the stock order.
pub struct LayerPipeline {
    pub background: BackgroundLayer,
    pub envelope: EnvelopeLayer,
    pub badge: BadgeLayer,
    pub arrows: ArrowLayer,
}

impl LayerPipeline {
    /// Builds the pipeline from a theme, handing each layer its style block.
    pub fn from_theme(theme: &IconTheme) -> Self {
        Self {
            background: BackgroundLayer::new(theme.background),
            envelope: EnvelopeLayer::new(theme.envelope),
            badge: BadgeLayer::new(theme.badge),
            arrows: ArrowLayer::new(theme.arrows),
        }
    }

    /// Renders all layers onto a fresh canvas of the given size.
    pub fn render(&self, size: u32) -> Canvas {
        let mut canvas = Canvas::new(size);
        self.background.paint(&mut canvas);
        self.envelope.paint(&mut canvas);
        self.badge.paint(&mut canvas);
        self.arrows.paint(&mut canvas);
        canvas
    }
}

impl Default for LayerPipeline {
    fn default() -> Self {
        Self::from_theme(&IconTheme::default())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_width_floors_at_one_pixel() {
        // 0.04 * 16 = 0.64 truncates to zero, then floors to one.
        assert_eq!(stroke_width(16, 0.04), 1.0);
        assert_eq!(stroke_width(128, 0.04), 5.0);
        assert_eq!(stroke_width(128, 0.02), 2.0);
    }

    #[test]
    fn pipeline_renders_requested_size() {
        let pipeline = LayerPipeline::default();
        let canvas = pipeline.render(32);
        assert_eq!(canvas.size(), 32);
    }

    #[test]
    fn later_layers_overlay_earlier_ones() {
        let pipeline = LayerPipeline::default();
        let size = 128;
        let full = pipeline.render(size);

        // The badge center must show the badge, not the background gradient.
        let theme = IconTheme::default();
        let cx = (theme.badge.center_x * size as f32) as u32;
        let cy = (theme.badge.center_y * size as f32) as u32;
        assert_eq!(full.image().get_pixel(cx, cy).0, [245, 124, 0, 255]);
    }
}
