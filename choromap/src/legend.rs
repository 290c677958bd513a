//! Static legend for the bucket scale.
//!
//! The legend depends only on the fixed bucket thresholds, so it is
//! generated once and never recomputed. The top bucket is labeled with
//! the fixed display constant `9–12`; the scale's true upper bound is
//! unspecified by the data, so the label is cosmetic rather than derived.

use crate::classify::classify;
use crate::style::Color;

/// Legend heading.
pub const LEGEND_TITLE: &str = "HPT Supply Number of Partners";

/// Label for the zero bucket row.
pub const NO_DATA_LABEL: &str = "No Partners";

/// Display label for the open-ended top bucket.
const TOP_BUCKET_LABEL: &str = "9\u{2013}12";

/// Lower boundaries of the non-zero buckets, in ascending order.
const GRADES: [u32; 5] = [0, 1, 3, 6, 9];

/// One legend row: a color swatch and its value-range label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub label: String,
    pub color: Color,
}

/// Build the legend rows: the zero bucket first, then one row per value
/// range in ascending order.
pub fn legend_rows() -> Vec<LegendRow> {
    let mut rows = vec![LegendRow {
        label: NO_DATA_LABEL.to_string(),
        color: classify(0.0).color(),
    }];

    for (i, &grade) in GRADES.iter().enumerate().skip(1) {
        let label = match GRADES.get(i + 1) {
            Some(next) => format!("{grade}\u{2013}{next}"),
            None => TOP_BUCKET_LABEL.to_string(),
        };
        rows.push(LegendRow {
            // Sample just above the boundary to pick the bucket color
            // for the range starting at this grade.
            color: classify(f64::from(grade) + 1.0).color(),
            label,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ColorBucket;

    #[test]
    fn test_legend_row_count() {
        // One zero-bucket row plus four value ranges. The Lightest
        // bucket (0 < m <= 1) has no row of its own; the ranges start
        // at 1, matching the published scale.
        let rows = legend_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].label, NO_DATA_LABEL);
        assert_eq!(rows[0].color, ColorBucket::None.color());
    }

    #[test]
    fn test_range_labels() {
        let labels: Vec<_> = legend_rows().into_iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec!["No Partners", "1\u{2013}3", "3\u{2013}6", "6\u{2013}9", "9\u{2013}12"]
        );
    }

    #[test]
    fn test_row_colors_follow_the_ramp() {
        let colors: Vec<_> = legend_rows().into_iter().map(|r| r.color).collect();
        assert_eq!(
            colors,
            vec![
                ColorBucket::None.color(),
                ColorBucket::Light.color(),
                ColorBucket::Medium.color(),
                ColorBucket::Dark.color(),
                ColorBucket::Darkest.color(),
            ]
        );
    }
}
