//! Tokenizer for playground source.
//!
//! Produces a flat token list with 1-based line/column positions. Template
//! literals are split here into text and raw `${...}` source segments; the
//! parser re-lexes each embedded expression with its original position.

#[cfg(test)]
#[path = "lexer_test.rs"]
mod lexer_test;

use std::fmt;

use super::error::EvalError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    Let,
    Const,
    Var,
    Function,
    Return,
    If,
    Else,
    While,
    For,
    Break,
    Continue,
    True,
    False,
    Null,
    Undefined,
    Typeof,
}

impl Keyword {
    fn from_word(word: &str) -> Option<Self> {
        Some(match word {
            "let" => Self::Let,
            "const" => Self::Const,
            "var" => Self::Var,
            "function" => Self::Function,
            "return" => Self::Return,
            "if" => Self::If,
            "else" => Self::Else,
            "while" => Self::While,
            "for" => Self::For,
            "break" => Self::Break,
            "continue" => Self::Continue,
            "true" => Self::True,
            "false" => Self::False,
            "null" => Self::Null,
            "undefined" => Self::Undefined,
            "typeof" => Self::Typeof,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::Const => "const",
            Self::Var => "var",
            Self::Function => "function",
            Self::Return => "return",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Typeof => "typeof",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Punct {
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Dot,
    Colon,
    Question,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Assign,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    PlusPlus,
    MinusMinus,
    Eq,
    StrictEq,
    NotEq,
    StrictNotEq,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    Not,
    Arrow,
}

impl Punct {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Dot => ".",
            Self::Colon => ":",
            Self::Question => "?",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Assign => "=",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::StarAssign => "*=",
            Self::SlashAssign => "/=",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::Eq => "==",
            Self::StrictEq => "===",
            Self::NotEq => "!=",
            Self::StrictNotEq => "!==",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Not => "!",
            Self::Arrow => "=>",
        }
    }
}

/// Piece of a template literal as written in source.
#[derive(Clone, Debug, PartialEq)]
pub enum TemplatePart {
    Text(String),
    Expr { source: String, line: usize, column: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Str(String),
    Template(Vec<TemplatePart>),
    Ident(String),
    Keyword(Keyword),
    Punct(Punct),
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Template(_) => f.write_str("template literal"),
            Self::Ident(name) => f.write_str(name),
            Self::Keyword(kw) => f.write_str(kw.as_str()),
            Self::Punct(p) => f.write_str(p.as_str()),
            Self::Eof => f.write_str("end of input"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

/// Tokenize `source`, positions starting at line 1, column 1.
///
/// # Errors
///
/// Returns `EvalError::Syntax` for unterminated strings, comments, or
/// templates and for characters outside the supported language.
pub fn tokenize(source: &str) -> Result<Vec<Token>, EvalError> {
    tokenize_at(source, 1, 1)
}

/// Tokenize `source` as if it began at the given position.
pub(crate) fn tokenize_at(source: &str, line: usize, column: usize) -> Result<Vec<Token>, EvalError> {
    let mut lexer = Lexer { chars: source.chars().collect(), pos: 0, line, column };
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_trivia(&mut self) -> Result<(), EvalError> {
        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                (Some('/'), Some('*')) => {
                    let (line, column) = (self.line, self.column);
                    self.bump();
                    self.bump();
                    loop {
                        match (self.peek(), self.peek_at(1)) {
                            (Some('*'), Some('/')) => {
                                self.bump();
                                self.bump();
                                break;
                            }
                            (Some(_), _) => {
                                self.bump();
                            }
                            (None, _) => return Err(EvalError::syntax("Unterminated comment", line, column)),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, EvalError> {
        self.skip_trivia()?;
        let (line, column) = (self.line, self.column);
        let Some(c) = self.peek() else {
            return Ok(Token { kind: TokenKind::Eof, line, column });
        };

        let kind = if c.is_ascii_digit() || (c == '.' && self.peek_at(1).is_some_and(|d| d.is_ascii_digit())) {
            self.number(line, column)?
        } else if c == '_' || c == '$' || c.is_alphabetic() {
            self.word()
        } else if c == '"' || c == '\'' {
            self.string(c, line, column)?
        } else if c == '`' {
            self.template(line, column)?
        } else {
            TokenKind::Punct(self.punct(line, column)?)
        };
        Ok(Token { kind, line, column })
    }

    fn number(&mut self, line: usize, column: usize) -> Result<TokenKind, EvalError> {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                text.push(c);
                self.bump();
            } else if (c == 'e' || c == 'E') && !text.contains(['e', 'E']) {
                text.push(c);
                self.bump();
                if let Some(sign @ ('+' | '-')) = self.peek() {
                    text.push(sign);
                    self.bump();
                }
            } else {
                break;
            }
        }
        if self.peek().is_some_and(|c| c.is_alphabetic() || c == '_') {
            return Err(EvalError::syntax("Invalid or unexpected token", line, column));
        }
        text.parse::<f64>()
            .map(TokenKind::Number)
            .map_err(|_| EvalError::syntax(format!("Invalid number '{text}'"), line, column))
    }

    fn word(&mut self) -> TokenKind {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c == '_' || c == '$' || c.is_alphanumeric() {
                word.push(c);
                self.bump();
            } else {
                break;
            }
        }
        match Keyword::from_word(&word) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident(word),
        }
    }

    fn escape(&mut self, line: usize, column: usize) -> Result<char, EvalError> {
        match self.bump() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('0') => Ok('\0'),
            Some(other) => Ok(other),
            None => Err(EvalError::syntax("Invalid or unexpected token", line, column)),
        }
    }

    fn string(&mut self, quote: char, line: usize, column: usize) -> Result<TokenKind, EvalError> {
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(TokenKind::Str(value)),
                Some('\\') => value.push(self.escape(line, column)?),
                Some('\n') | None => return Err(EvalError::syntax("Invalid or unexpected token", line, column)),
                Some(c) => value.push(c),
            }
        }
    }

    fn template(&mut self, line: usize, column: usize) -> Result<TokenKind, EvalError> {
        self.bump();
        let mut parts = Vec::new();
        let mut text = String::new();
        loop {
            match self.peek() {
                None => return Err(EvalError::syntax("Unterminated template literal", line, column)),
                Some('`') => {
                    self.bump();
                    break;
                }
                Some('\\') => {
                    self.bump();
                    text.push(self.escape(line, column)?);
                }
                Some('$') if self.peek_at(1) == Some('{') => {
                    self.bump();
                    self.bump();
                    if !text.is_empty() {
                        parts.push(TemplatePart::Text(std::mem::take(&mut text)));
                    }
                    let (expr_line, expr_column) = (self.line, self.column);
                    let source = self.template_expr_source(line, column)?;
                    parts.push(TemplatePart::Expr { source, line: expr_line, column: expr_column });
                }
                Some(c) => {
                    self.bump();
                    text.push(c);
                }
            }
        }
        if !text.is_empty() {
            parts.push(TemplatePart::Text(text));
        }
        Ok(TokenKind::Template(parts))
    }

    /// Raw source of a `${...}` body up to its closing brace.
    ///
    /// Quoted strings and nested templates are copied whole so braces inside
    /// them do not end the body early. Nesting is tracked on an explicit stack.
    fn template_expr_source(&mut self, line: usize, column: usize) -> Result<String, EvalError> {
        enum Span {
            Expr { braces: usize },
            Template,
        }

        let unterminated = || EvalError::syntax("Unterminated template literal", line, column);
        let mut spans = vec![Span::Expr { braces: 0 }];
        let mut source = String::new();
        while let Some(span) = spans.last_mut() {
            let mut c = self.bump().ok_or_else(unterminated)?;
            match span {
                Span::Expr { braces: 0 } if c == '}' => {
                    spans.pop();
                    if spans.is_empty() {
                        break;
                    }
                }
                Span::Expr { braces } => match c {
                    '{' => *braces += 1,
                    '}' => *braces -= 1,
                    '`' => spans.push(Span::Template),
                    '\'' | '"' => {
                        source.push(c);
                        loop {
                            let inner = self.bump().ok_or_else(unterminated)?;
                            source.push(inner);
                            if inner == '\\' {
                                source.push(self.bump().ok_or_else(unterminated)?);
                            } else if inner == c {
                                break;
                            }
                        }
                        continue;
                    }
                    _ => {}
                },
                Span::Template => match c {
                    '\\' => {
                        source.push(c);
                        source.push(self.bump().ok_or_else(unterminated)?);
                        continue;
                    }
                    '`' => {
                        spans.pop();
                    }
                    '$' if self.peek() == Some('{') => {
                        source.push(c);
                        self.bump();
                        spans.push(Span::Expr { braces: 0 });
                        c = '{';
                    }
                    _ => {}
                },
            }
            source.push(c);
        }
        Ok(source)
    }

    fn punct(&mut self, line: usize, column: usize) -> Result<Punct, EvalError> {
        let c = self.bump().unwrap_or_default();
        let next = self.peek();
        let (punct, extra) = match (c, next) {
            ('(', _) => (Punct::LParen, 0),
            (')', _) => (Punct::RParen, 0),
            ('{', _) => (Punct::LBrace, 0),
            ('}', _) => (Punct::RBrace, 0),
            ('[', _) => (Punct::LBracket, 0),
            (']', _) => (Punct::RBracket, 0),
            (',', _) => (Punct::Comma, 0),
            (';', _) => (Punct::Semicolon, 0),
            ('.', _) => (Punct::Dot, 0),
            (':', _) => (Punct::Colon, 0),
            ('?', _) => (Punct::Question, 0),
            ('%', _) => (Punct::Percent, 0),
            ('+', Some('+')) => (Punct::PlusPlus, 1),
            ('+', Some('=')) => (Punct::PlusAssign, 1),
            ('+', _) => (Punct::Plus, 0),
            ('-', Some('-')) => (Punct::MinusMinus, 1),
            ('-', Some('=')) => (Punct::MinusAssign, 1),
            ('-', _) => (Punct::Minus, 0),
            ('*', Some('=')) => (Punct::StarAssign, 1),
            ('*', _) => (Punct::Star, 0),
            ('/', Some('=')) => (Punct::SlashAssign, 1),
            ('/', _) => (Punct::Slash, 0),
            ('=', Some('>')) => (Punct::Arrow, 1),
            ('=', Some('=')) if self.peek_at(1) == Some('=') => (Punct::StrictEq, 2),
            ('=', Some('=')) => (Punct::Eq, 1),
            ('=', _) => (Punct::Assign, 0),
            ('!', Some('=')) if self.peek_at(1) == Some('=') => (Punct::StrictNotEq, 2),
            ('!', Some('=')) => (Punct::NotEq, 1),
            ('!', _) => (Punct::Not, 0),
            ('<', Some('=')) => (Punct::Le, 1),
            ('<', _) => (Punct::Lt, 0),
            ('>', Some('=')) => (Punct::Ge, 1),
            ('>', _) => (Punct::Gt, 0),
            ('&', Some('&')) => (Punct::And, 1),
            ('|', Some('|')) => (Punct::Or, 1),
            _ => return Err(EvalError::syntax(format!("Unexpected character '{c}'"), line, column)),
        };
        for _ in 0..extra {
            self.bump();
        }
        Ok(punct)
    }
}
