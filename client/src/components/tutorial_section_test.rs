use super::*;

#[test]
fn step_card_class_combines_modifiers() {
    assert_eq!(step_card_class(false, false), "card step-card");
    assert_eq!(step_card_class(true, false), "card step-card step-card--current");
    assert_eq!(step_card_class(true, true), "card step-card step-card--current step-card--done");
}

#[test]
fn step_marker_shows_check_when_done() {
    assert_eq!(step_marker(3, false), "3");
    assert_eq!(step_marker(3, true), "✓");
}
