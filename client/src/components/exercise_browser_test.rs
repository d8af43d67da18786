use super::*;
use crate::components::exercise_card::action_label;

#[test]
fn summary_label_formats_counts() {
    assert_eq!(summary_label(2, 4), "2/4");
    assert_eq!(summary_label(0, 0), "0/0");
}

#[test]
fn action_label_follows_completion() {
    assert_eq!(action_label(true), "Review");
    assert_eq!(action_label(false), "Start");
}
