use super::*;

#[test]
fn parse_draft_accepts_stored_json() {
    let draft = parse_draft(r#"{"language":"python","code":"print(1)"}"#).unwrap();
    assert_eq!(draft.language, "python");
    assert_eq!(draft.code, "print(1)");
}

#[test]
fn parse_draft_rejects_garbage_and_blank_code() {
    assert!(parse_draft("not json").is_none());
    assert!(parse_draft(r#"{"language":"javascript"}"#).is_none());
    assert!(parse_draft(r#"{"language":"javascript","code":"   \n"}"#).is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn storage_is_a_noop_outside_the_browser() {
    save_draft(&PlaygroundDraft { language: "javascript".to_owned(), code: "1".to_owned() });
    assert!(load_draft().is_none());
    clear_draft();
}
