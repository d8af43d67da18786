//! Percentage helpers for progress bars and completion labels.

#[cfg(test)]
#[path = "percent_test.rs"]
mod percent_test;

/// `part / whole` as a percentage in 0..=100; an empty whole is 0%.
#[allow(clippy::cast_precision_loss)]
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
}

/// Percentage rounded for display, e.g. the `67` in `"67% completed"`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rounded(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 100.0).round() as u32
}

/// Inline style for a progress bar fill.
pub fn bar_width_style(value: f64) -> String {
    let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) };
    format!("width: {value:.1}%")
}
