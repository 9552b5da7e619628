//! Display formatting helpers

/// Format a raw volume as a dollar string with a magnitude suffix.
///
/// `1_500_000_000.0` renders as `$1.50B`, `2_300_000.0` as `$2.30M`, and
/// anything below a million falls to the K suffix (`750_000.0` → `$750.00K`).
pub fn format_volume(volume: f64) -> String {
    if volume >= 1e9 {
        format!("${:.2}B", volume / 1e9)
    } else if volume >= 1e6 {
        format!("${:.2}M", volume / 1e6)
    } else {
        format!("${:.2}K", volume / 1e3)
    }
}
