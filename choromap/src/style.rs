//! Visual style types.
//!
//! A [`RegionStyle`] records *which* of the two allowed styles a region is
//! currently showing (default classification or search highlight); exactly
//! one is active per region at any time, and the enum makes any other
//! combination unrepresentable. [`Style`] is the resolved set of visual
//! attributes a rendering surface consumes. Styles are recomputed on every
//! classify or search pass and never persisted.

use crate::classify::{self, ColorBucket};

/// An opaque RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form, for headless output and logs.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Border color for every region.
pub const BORDER_BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

/// Fill color for regions matching the current search.
pub const HIGHLIGHT_YELLOW: Color = Color::rgb(0xff, 0xff, 0x00);

/// Shared fill opacity for both default and highlight styles.
pub const FILL_OPACITY: f32 = 0.7;

/// Resolved visual attributes for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub border: Color,
    pub border_weight: u8,
    pub border_opacity: f32,
    pub fill: Color,
    pub fill_opacity: f32,
}

/// Which of the two allowed styles a region is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionStyle {
    /// Default classification style, filled with the bucket color.
    Default(ColorBucket),
    /// Search highlight style.
    Highlight,
}

impl RegionStyle {
    /// Default style for a region with the given metric.
    pub fn classified(metric: Option<f64>) -> Self {
        RegionStyle::Default(classify::classify_metric(metric))
    }

    pub fn is_highlight(&self) -> bool {
        matches!(self, RegionStyle::Highlight)
    }

    /// Resolve to concrete visual attributes.
    pub fn resolve(&self) -> Style {
        match self {
            RegionStyle::Default(bucket) => Style {
                border: BORDER_BLACK,
                border_weight: 1,
                border_opacity: 1.0,
                fill: bucket.color(),
                fill_opacity: FILL_OPACITY,
            },
            RegionStyle::Highlight => Style {
                border: BORDER_BLACK,
                border_weight: 1,
                border_opacity: 1.0,
                fill: HIGHLIGHT_YELLOW,
                fill_opacity: FILL_OPACITY,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_uses_bucket_color() {
        let style = RegionStyle::classified(Some(9.0)).resolve();
        assert_eq!(style.fill, ColorBucket::Dark.color());
        assert_eq!(style.border, BORDER_BLACK);
        assert_eq!(style.border_weight, 1);
        assert_eq!(style.fill_opacity, FILL_OPACITY);
    }

    #[test]
    fn test_absent_metric_resolves_to_neutral_fill() {
        let style = RegionStyle::classified(None).resolve();
        assert_eq!(style.fill, ColorBucket::None.color());
    }

    #[test]
    fn test_highlight_style_is_yellow_with_black_border() {
        let style = RegionStyle::Highlight.resolve();
        assert_eq!(style.fill, HIGHLIGHT_YELLOW);
        assert_eq!(style.border, BORDER_BLACK);
        assert_eq!(style.fill_opacity, FILL_OPACITY);
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(HIGHLIGHT_YELLOW.hex(), "#ffff00");
        assert_eq!(Color::rgb(0x08, 0x30, 0x6b).hex(), "#08306b");
    }
}
