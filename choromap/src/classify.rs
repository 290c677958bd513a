//! Metric classifier.
//!
//! Maps a region metric onto a fixed five-bucket-plus-zero linear scale,
//! checked in descending order with half-open boundaries. The scale and
//! its blue color ramp are constants of the system; there is no
//! configuration. Classification is deterministic and side-effect free.

use crate::style::Color;

/// Discrete color bucket for a region metric.
///
/// Ordered from no-data to the highest value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorBucket {
    /// Metric is zero, absent, negative or non-numeric.
    None,
    /// 0 < metric <= 1
    Lightest,
    /// 1 < metric <= 3
    Light,
    /// 3 < metric <= 6
    Medium,
    /// 6 < metric <= 9
    Dark,
    /// metric > 9
    Darkest,
}

impl ColorBucket {
    /// All buckets, ordered from no-data upward.
    pub const ALL: [ColorBucket; 6] = [
        ColorBucket::None,
        ColorBucket::Lightest,
        ColorBucket::Light,
        ColorBucket::Medium,
        ColorBucket::Dark,
        ColorBucket::Darkest,
    ];

    /// Display color for the bucket.
    pub fn color(&self) -> Color {
        match self {
            ColorBucket::None => Color::rgb(0xff, 0xff, 0xff),
            ColorBucket::Lightest => Color::rgb(0xde, 0xeb, 0xf7),
            ColorBucket::Light => Color::rgb(0x6b, 0xae, 0xd6),
            ColorBucket::Medium => Color::rgb(0x42, 0x92, 0xc6),
            ColorBucket::Dark => Color::rgb(0x21, 0x71, 0xb5),
            ColorBucket::Darkest => Color::rgb(0x08, 0x30, 0x6b),
        }
    }

    /// Short name for headless output.
    pub fn name(&self) -> &'static str {
        match self {
            ColorBucket::None => "none",
            ColorBucket::Lightest => "lightest",
            ColorBucket::Light => "light",
            ColorBucket::Medium => "medium",
            ColorBucket::Dark => "dark",
            ColorBucket::Darkest => "darkest",
        }
    }
}

/// Classify a metric into its color bucket.
///
/// Negative and NaN metrics fail closed to the no-data bucket rather
/// than erroring.
pub fn classify(metric: f64) -> ColorBucket {
    if metric > 9.0 {
        ColorBucket::Darkest
    } else if metric > 6.0 {
        ColorBucket::Dark
    } else if metric > 3.0 {
        ColorBucket::Medium
    } else if metric > 1.0 {
        ColorBucket::Light
    } else if metric > 0.0 {
        ColorBucket::Lightest
    } else {
        // Covers zero, negatives and NaN: every comparison above is
        // false for NaN, so it lands here without a special case.
        ColorBucket::None
    }
}

/// Classify an optional metric, treating absence as no data.
pub fn classify_metric(metric: Option<f64>) -> ColorBucket {
    metric.map_or(ColorBucket::None, classify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(classify(0.0), ColorBucket::None);
        assert_eq!(classify(0.5), ColorBucket::Lightest);
        assert_eq!(classify(1.0), ColorBucket::Lightest);
        assert_eq!(classify(2.0), ColorBucket::Light);
        assert_eq!(classify(3.0), ColorBucket::Light);
        assert_eq!(classify(4.0), ColorBucket::Medium);
        assert_eq!(classify(6.0), ColorBucket::Medium);
        assert_eq!(classify(7.0), ColorBucket::Dark);
        assert_eq!(classify(9.0), ColorBucket::Dark);
        assert_eq!(classify(10.0), ColorBucket::Darkest);
        assert_eq!(classify(12.0), ColorBucket::Darkest);
    }

    #[test]
    fn test_invalid_metrics_fail_closed() {
        assert_eq!(classify(-1.0), ColorBucket::None);
        assert_eq!(classify(f64::NAN), ColorBucket::None);
        assert_eq!(classify_metric(None), ColorBucket::None);
    }

    #[test]
    fn test_buckets_are_totally_ordered() {
        for pair in ColorBucket::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_bucket_colors_match_ramp() {
        assert_eq!(ColorBucket::None.color().hex(), "#ffffff");
        assert_eq!(ColorBucket::Lightest.color().hex(), "#deebf7");
        assert_eq!(ColorBucket::Light.color().hex(), "#6baed6");
        assert_eq!(ColorBucket::Medium.color().hex(), "#4292c6");
        assert_eq!(ColorBucket::Dark.color().hex(), "#2171b5");
        assert_eq!(ColorBucket::Darkest.color().hex(), "#08306b");
    }
}
