use super::*;

#[test]
fn ui_state_starts_light() {
    assert_eq!(UiState::default().theme, Theme::Light);
}

#[test]
fn theme_toggles_between_the_two_schemes() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn theme_strings_match_stylesheet_selectors() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn theme_toggle_describes_the_next_scheme() {
    assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
    assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
    assert_eq!(Theme::Dark.toggle_glyph(), "☀");
}

#[test]
fn ui_state_default_tab_is_playground() {
    let state = UiState::default();
    assert_eq!(state.active_tab, MainTab::Playground);
}

#[test]
fn main_tab_labels_match_tab_bar() {
    let labels: Vec<_> = MainTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Code", "Exercises", "Tutorials", "Progress"]);
}

#[test]
fn main_tab_slugs_are_distinct() {
    for (i, a) in MainTab::ALL.iter().enumerate() {
        for (j, b) in MainTab::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a.slug(), b.slug());
            } else {
                assert_ne!(a.slug(), b.slug());
            }
        }
    }
}
