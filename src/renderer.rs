//! Top-level icon renderer.

use image::RgbaImage;

use crate::error::RenderError;
use crate::layer::LayerPipeline;
use crate::theme::IconTheme;

/// The icon sizes the driver produces, in ascending order.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Renders the mail-sync icon at arbitrary sizes.
///
/// Rendering is a pure function of the size and the theme: the same inputs
/// always produce byte-identical pixels.
///
/// # Example
///
/// ```
/// use mailsync_icons::IconRenderer;
///
/// let renderer = IconRenderer::new();
/// let img = renderer.render(48).unwrap();
/// assert_eq!((img.width(), img.height()), (48, 48));
/// ```
pub struct IconRenderer {
    theme: IconTheme,
    pipeline: LayerPipeline,
}

impl IconRenderer {
    /// Creates a renderer with the stock theme.
    pub fn new() -> Self {
        Self::with_theme(IconTheme::default())
    }

    /// Creates a renderer with a custom theme.
    pub fn with_theme(theme: IconTheme) -> Self {
        Self {
            pipeline: LayerPipeline::from_theme(&theme),
            theme,
        }
    }

    /// Returns the theme this renderer was built with.
    pub fn theme(&self) -> &IconTheme {
        &self.theme
    }

    /// Renders one fully composited icon.
    ///
    /// Rejects `size == 0` rather than silently producing an empty image.
    pub fn render(&self, size: u32) -> Result<RgbaImage, RenderError> {
        if size == 0 {
            return Err(RenderError::InvalidSize { size });
        }
        Ok(self.pipeline.render(size).into_image())
    }

    /// Renders every size in [`ICON_SIZES`], in order.
    pub fn render_all(&self) -> Result<Vec<(u32, RgbaImage)>, RenderError> {
        ICON_SIZES
            .iter()
            .map(|&size| Ok((size, self.render(size)?)))
            .collect()
    }
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_square_rgba_at_every_driver_size() {
        let renderer = IconRenderer::new();
        for (size, img) in renderer.render_all().unwrap() {
            assert_eq!(img.width(), size);
            assert_eq!(img.height(), size);
        }
    }

    #[test]
    fn zero_size_fails_fast() {
        let renderer = IconRenderer::new();
        let err = renderer.render(0).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSize { size: 0 }));
    }

    #[test]
    fn one_pixel_render_does_not_panic() {
        let img = IconRenderer::new().render(1).unwrap();
        assert_eq!((img.width(), img.height()), (1, 1));
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = IconRenderer::new();
        for size in ICON_SIZES {
            let first = renderer.render(size).unwrap();
            let second = renderer.render(size).unwrap();
            assert_eq!(first.as_raw(), second.as_raw(), "size {size}");
        }
    }

    #[test]
    fn composite_keeps_background_properties() {
        let renderer = IconRenderer::new();
        for size in ICON_SIZES {
            let img = renderer.render(size).unwrap();
            let last = size - 1;

            // Rounded corners stay transparent, the center stays opaque.
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(img.get_pixel(x, y)[3], 0, "corner at size {size}");
            }
            assert_eq!(img.get_pixel(size / 2, size / 2)[3], 255);

            // No glyph reaches the top row: it carries the gradient start.
            let top = img.get_pixel(size / 2, 0);
            assert_eq!([top[0], top[1], top[2]], [26, 26, 46], "top row at size {size}");
        }
    }

    #[test]
    fn themed_renderer_uses_its_theme() {
        let mut theme = IconTheme::default();
        theme.background.gradient_top = [255, 0, 0];
        theme.background.gradient_bottom = [255, 0, 0];

        let img = IconRenderer::with_theme(theme).render(32).unwrap();
        assert_eq!(img.get_pixel(16, 0).0, [255, 0, 0, 255]);
    }
}
