use super::*;

#[test]
fn percent_of_parts() {
    assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
    assert!((percent(4, 4) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn percent_of_empty_whole_is_zero() {
    assert_eq!(percent(3, 0), 0.0);
}

#[test]
fn percent_is_clamped_to_hundred() {
    assert_eq!(percent(5, 4), 100.0);
}

#[test]
fn rounded_matches_display_rounding() {
    assert_eq!(rounded(54.032), 54);
    assert_eq!(rounded(66.666), 67);
    assert_eq!(rounded(12.5), 13);
    assert_eq!(rounded(-4.0), 0);
    assert_eq!(rounded(140.0), 100);
    assert_eq!(rounded(f64::NAN), 0);
}

#[test]
fn bar_width_style_clamps_and_formats() {
    assert_eq!(bar_width_style(50.0), "width: 50.0%");
    assert_eq!(bar_width_style(-10.0), "width: 0.0%");
    assert_eq!(bar_width_style(250.0), "width: 100.0%");
}
