//! Syntax highlighting for code previews.
//!
//! DESIGN
//! ======
//! A single lenient left-to-right scan splits source into classed spans that
//! the view renders as escaped text. Keywords match on whole identifiers only,
//! so `format` or `letter` stay plain. The scanner never fails: unterminated
//! strings run to the end of the line.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

/// Words rendered with the keyword class.
pub const KEYWORDS: [&str; 9] = ["function", "const", "let", "var", "if", "else", "for", "while", "return"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightKind {
    Plain,
    Keyword,
    Str,
    Number,
    Comment,
}

impl HighlightKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Plain => "syntax-plain",
            Self::Keyword => "syntax-keyword",
            Self::Str => "syntax-string",
            Self::Number => "syntax-number",
            Self::Comment => "syntax-comment",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightSpan {
    pub kind: HighlightKind,
    pub text: String,
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Split `source` into highlight spans. Concatenating the span texts yields
/// `source` unchanged.
pub fn highlight(source: &str) -> Vec<HighlightSpan> {
    let chars: Vec<char> = source.chars().collect();
    let mut spans: Vec<HighlightSpan> = Vec::new();
    let mut i = 0;

    let mut push = |kind: HighlightKind, text: String| {
        if let Some(last) = spans.last_mut() {
            if last.kind == HighlightKind::Plain && kind == HighlightKind::Plain {
                last.text.push_str(&text);
                return;
            }
        }
        spans.push(HighlightSpan { kind, text });
    };

    while i < chars.len() {
        let c = chars[i];
        let start = i;

        if c == '/' && chars.get(i + 1) == Some(&'/') {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            push(HighlightKind::Comment, chars[start..i].iter().collect());
        } else if matches!(c, '\'' | '"' | '`') {
            i += 1;
            while i < chars.len() && chars[i] != c && (c == '`' || chars[i] != '\n') {
                if chars[i] == '\\' && i + 1 < chars.len() {
                    i += 1;
                }
                i += 1;
            }
            if i < chars.len() && chars[i] == c {
                i += 1;
            }
            push(HighlightKind::Str, chars[start..i].iter().collect());
        } else if c.is_ascii_digit() {
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            push(HighlightKind::Number, chars[start..i].iter().collect());
        } else if is_ident_start(c) {
            while i < chars.len() && is_ident_continue(chars[i]) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let kind = if KEYWORDS.contains(&word.as_str()) { HighlightKind::Keyword } else { HighlightKind::Plain };
            push(kind, word);
        } else {
            i += 1;
            push(HighlightKind::Plain, c.to_string());
        }
    }

    spans
}
