use super::*;

#[test]
fn parse_stored_reads_both_themes() {
    assert_eq!(parse_stored("dark"), Some(Theme::Dark));
    assert_eq!(parse_stored(" light\n"), Some(Theme::Light));
}

#[test]
fn parse_stored_ignores_unknown_values() {
    assert_eq!(parse_stored(""), None);
    assert_eq!(parse_stored("true"), None);
    assert_eq!(parse_stored("Dark"), None);
}

#[test]
fn stored_form_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(parse_stored(theme.as_str()), Some(theme));
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_falls_back_to_light_outside_the_browser() {
    store(Theme::Dark);
    apply(Theme::Dark);
    assert_eq!(load(), Theme::Light);
}
