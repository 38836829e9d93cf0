//! Serializable icon theme: colors and layout ratios.
//!
//! Every length in the theme is a ratio of the canvas side, so the four
//! output resolutions stay geometrically self-similar. The default theme is
//! the stock mail-sync look; alternative themes can be built in code or
//! loaded from JSON.
//!
//! # Example
//!
//! ```
//! use mailsync_icons::IconTheme;
//!
//! let theme = IconTheme::default();
//! let json = theme.to_json().unwrap();
//! let restored = IconTheme::from_json(&json).unwrap();
//! assert_eq!(restored, theme);
//! ```

use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB color.
pub type Rgb = [u8; 3];

// ============================================================================
// Per-layer styles
// ============================================================================

/// Gradient background clipped to a rounded-rectangle silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundStyle {
    /// Gradient color at the top row.
    pub gradient_top: Rgb,

    /// Gradient color at the bottom row.
    pub gradient_bottom: Rgb,

    /// Silhouette corner radius, as a ratio of the canvas side.
    pub corner_radius: f32,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            gradient_top: [26, 26, 46],
            gradient_bottom: [22, 33, 62],
            corner_radius: 0.22,
        }
    }
}

/// The envelope glyph on the left: a rounded rectangle with a V fold line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeStyle {
    pub color: Rgb,

    /// Top-left corner of the envelope body, as ratios of the canvas side.
    pub x: f32,
    pub y: f32,

    /// Body dimensions, as ratios of the canvas side.
    pub width: f32,
    pub height: f32,

    /// Body corner radius, as a ratio of the canvas side.
    pub corner_radius: f32,

    /// Fold line stroke width ratio (at least one pixel when rasterized).
    pub fold_stroke: f32,

    /// Vertical inset of the fold endpoints below the body's top edge,
    /// as a ratio of the canvas side.
    pub fold_inset: f32,
}

impl Default for EnvelopeStyle {
    fn default() -> Self {
        Self {
            color: [234, 67, 53],
            x: 0.10,
            y: 0.39,
            width: 0.32,
            height: 0.22,
            corner_radius: 0.03,
            fold_stroke: 0.02,
            fold_inset: 3.0 / 128.0,
        }
    }
}

/// The circular badge glyph on the right, with two horizontal bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeStyle {
    pub color: Rgb,

    /// Circle center, as ratios of the canvas side.
    pub center_x: f32,
    pub center_y: f32,

    /// Circle radius, as a ratio of the canvas side.
    pub radius: f32,

    /// Horizontal inset of each bar from the circle's extremes,
    /// as a fraction of the circle radius.
    pub bar_inset: f32,

    /// Vertical offset of each bar from the circle center,
    /// as a fraction of the circle radius.
    pub bar_offset: f32,

    /// Bar stroke width ratio (at least one pixel when rasterized).
    pub bar_stroke: f32,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            color: [245, 124, 0],
            center_x: 0.78,
            center_y: 0.50,
            radius: 0.18,
            bar_inset: 0.3,
            bar_offset: 0.4,
            bar_stroke: 0.035,
        }
    }
}

/// The two directional arrows between the glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowStyle {
    /// Upper arrow color (pointing right, envelope to badge).
    pub outbound_color: Rgb,

    /// Lower arrow color (pointing left, badge to envelope).
    pub inbound_color: Rgb,

    /// Shaft endpoints, as ratios of the canvas side.
    pub start_x: f32,
    pub end_x: f32,

    /// Vertical distance of each shaft from the canvas midline,
    /// as a ratio of the canvas side.
    pub gap: f32,

    /// Shaft stroke width ratio (at least one pixel when rasterized).
    pub stroke: f32,

    /// Horizontal depth of the arrowhead strokes, as a ratio of the
    /// canvas side.
    pub head_depth: f32,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            outbound_color: [76, 175, 80],
            inbound_color: [33, 150, 243],
            start_x: 0.38,
            end_x: 0.62,
            gap: 0.07,
            stroke: 0.04,
            head_depth: 0.04,
        }
    }
}

// ============================================================================
// IconTheme
// ============================================================================

/// Complete theme for the mail-sync icon: one style block per glyph layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IconTheme {
    pub background: BackgroundStyle,
    pub envelope: EnvelopeStyle,
    pub badge: BadgeStyle,
    pub arrows: ArrowStyle,
}

impl IconTheme {
    /// The stock mail-sync theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes the theme to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the theme to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a theme from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
