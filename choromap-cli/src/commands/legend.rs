//! Print the legend rows.

use choromap::legend::{legend_rows, LEGEND_TITLE};

/// Render the legend as plain text, one row per bucket range.
pub fn run() -> String {
    let mut out = String::from(LEGEND_TITLE);
    for row in legend_rows() {
        out.push('\n');
        out.push_str(&format!("{}  {}", row.color.hex(), row.label));
    }
    out
}
