//! mailsync-icons: deterministic renderer for the mail-sync icon set.
//!
//! This crate draws a stylized "mail sync" glyph onto a square RGBA canvas:
//! a rounded-rectangle gradient background, an envelope glyph, a circular
//! badge with two bars, and two directional arrows between them. A thin
//! driver renders the fixed size set and writes one PNG per size.
//!
//! All layout is proportional: every coordinate, radius, and stroke width is
//! a fixed ratio of the canvas side (see [`IconTheme`]), so the output
//! resolutions are geometrically self-similar. Rendering is pure and
//! deterministic; the same size and theme always produce identical bytes.
//!
//! # Example
//!
//! ```
//! use mailsync_icons::{IconRenderer, ICON_SIZES};
//!
//! let renderer = IconRenderer::new();
//! for size in ICON_SIZES {
//!     let img = renderer.render(size).unwrap();
//!     assert_eq!((img.width(), img.height()), (size, size));
//! }
//! ```
//!
//! # Re-theming
//!
//! Colors and ratios live in a serializable [`IconTheme`]:
//!
//! ```
//! use mailsync_icons::{IconRenderer, IconTheme};
//!
//! let mut theme = IconTheme::default();
//! theme.badge.color = [0, 128, 255];
//! let renderer = IconRenderer::with_theme(theme);
//! let img = renderer.render(32).unwrap();
//! # assert_eq!(img.width(), 32);
//! ```

mod canvas;
mod error;
mod export;
mod layer;
mod renderer;
mod theme;

pub use canvas::{Canvas, Mask, RectF};
pub use error::RenderError;
pub use export::{export_icons, icon_file_name};
pub use layer::{ArrowLayer, BackgroundLayer, BadgeLayer, EnvelopeLayer, GlyphLayer, LayerPipeline};
pub use renderer::{IconRenderer, ICON_SIZES};
pub use theme::{ArrowStyle, BackgroundStyle, BadgeStyle, EnvelopeStyle, IconTheme, Rgb};
