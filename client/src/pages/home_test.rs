use super::*;

#[test]
fn four_feature_cards_with_distinct_tones() {
    assert_eq!(FEATURES.len(), 4);
    let mut tones: Vec<_> = FEATURES.iter().map(|f| f.tone.class()).collect();
    tones.dedup();
    assert_eq!(tones.len(), 4);
}

#[test]
fn tab_panel_ids_follow_tab_slugs() {
    assert_eq!(panel_id(MainTab::Playground), "panel-playground");
    assert_eq!(trigger_id(MainTab::Progress), "tab-progress");
}

#[test]
fn tab_trigger_class_marks_only_active_tab() {
    assert_eq!(tab_trigger_class(MainTab::Exercises, MainTab::Exercises), "tabs__trigger tabs__trigger--active");
    assert_eq!(tab_trigger_class(MainTab::Exercises, MainTab::Playground), "tabs__trigger");
}

#[test]
fn footer_mentions_brand() {
    assert!(FOOTER_TEXT.contains("CodeMaster"));
}
