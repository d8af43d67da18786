use super::*;

#[test]
fn inline_code_becomes_code_elements() {
    let html = render_markdown_html("declare with `let` or `const`");
    assert!(html.contains("<code>let</code>"));
    assert!(html.contains("<code>const</code>"));
}

#[test]
fn plain_text_is_wrapped_in_paragraph() {
    assert_eq!(render_markdown_html("Hello"), "<p>Hello</p>\n");
}

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!html.contains("<script>"));
    assert!(html.contains("before"));
    assert!(html.contains("after"));
}

#[test]
fn text_is_escaped() {
    let html = render_markdown_html("width * height < 20 & more");
    assert!(html.contains("&lt;"));
    assert!(html.contains("&amp;"));
}
