//! ASCII bar charts
//!
//! Two styles:
//! - Magnitude bars: one `*` per unit of `value * scale`, left aligned
//! - Signed bars: centred on a fixed column, `*` to the right of zero and
//!   `-` to the left
//!
//! Bar lengths are truncated toward zero. Bars are capped at [`MAX_BAR`]
//! columns so a huge value cannot blow up the allocation.

use std::fmt::Write;

/// Longest bar either chart will draw
pub const MAX_BAR: usize = 1000;

/// Default zero column of the signed chart
pub const DEFAULT_OFFSET: usize = 30;

/// Number of bar characters for a scaled value; zero for negative or non-finite
fn bar_len(scaled: f64) -> usize {
    if !scaled.is_finite() || scaled <= 0.0 {
        return 0;
    }
    (scaled.trunc() as usize).min(MAX_BAR)
}

/// Magnitude chart, one line per point: `K=<key> | ***** (value)`
///
/// `scale` multiplies each value before truncation, so small quantities such
/// as delta can be shown with `scale = 100.0`. The label shows the scaled
/// value.
pub fn magnitude_chart(title: &str, data: &[(i64, f64)], scale: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- {} ---", title);

    for &(key, value) in data {
        let scaled = value * scale;
        let _ = writeln!(
            out,
            "K={:>4} | {} ({:.2})",
            key,
            "*".repeat(bar_len(scaled)),
            scaled
        );
    }
    out
}

/// Signed chart, one line per point, zero at column `offset`
///
/// Positive values draw `trunc(value)` stars after `offset` spaces. Negative
/// values draw `-trunc(value)` dashes ending at the zero column; when the bar
/// is wider than `offset` it starts at the left edge.
pub fn signed_chart(title: &str, data: &[(i64, f64)], offset: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- {} ---", title);

    for &(key, value) in data {
        let _ = write!(out, "S={:>4} | ", key);
        let truncated = value.trunc();

        if truncated >= 0.0 || !value.is_finite() {
            let _ = write!(out, "{}{}", " ".repeat(offset), "*".repeat(bar_len(truncated)));
        } else {
            let len = bar_len(-truncated);
            let _ = write!(out, "{}{}", " ".repeat(offset.saturating_sub(len)), "-".repeat(len));
        }

        let _ = writeln!(out, " (${:.2})", value);
    }
    out
}
