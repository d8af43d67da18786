//! Recursive descent parser for playground source.
//!
//! Semicolons are optional: a statement ends at `;` or wherever the next
//! token cannot continue the current expression.
//!
//! Statements, assignment expressions, and prefix operators each count one
//! level of nesting. Past `MAX_NESTING_DEPTH` the parse fails with a syntax
//! error, which also bounds how deep the evaluator recurses on the tree.

#[cfg(test)]
#[path = "parser_test.rs"]
mod parser_test;

use std::rc::Rc;

use super::ast::{
    AssignOp, BinaryOp, DeclKind, Expr, FunctionBody, FunctionDef, LogicalOp, Stmt, TemplateSegment, UnaryOp,
};
use super::error::EvalError;
use super::lexer::{Keyword, Punct, TemplatePart, Token, TokenKind, tokenize, tokenize_at};

pub const MAX_NESTING_DEPTH: usize = 64;

/// Parse a whole program into its top-level statements.
///
/// # Errors
///
/// Returns `EvalError::Syntax` positioned at the first offending token.
pub fn parse_program(source: &str) -> Result<Vec<Stmt>, EvalError> {
    let mut parser = Parser::new(tokenize(source)?);
    let mut stmts = Vec::new();
    while !parser.at_eof() {
        stmts.push(parser.statement()?);
    }
    Ok(stmts)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self::with_depth(tokens, 0)
    }

    fn with_depth(tokens: Vec<Token>, depth: usize) -> Self {
        Self { tokens, pos: 0, depth }
    }

    /// Run `parse` one nesting level deeper.
    fn nested<T>(&mut self, parse: fn(&mut Self) -> Result<T, EvalError>) -> Result<T, EvalError> {
        if self.depth >= MAX_NESTING_DEPTH {
            let token = self.current();
            return Err(EvalError::syntax("Program is nested too deeply", token.line, token.column));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn current(&self) -> &Token {
        // The token list always ends with Eof and `advance` never passes it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_kind(&self, offset: usize) -> &TokenKind {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx].kind
    }

    fn at_eof(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn check(&self, punct: Punct) -> bool {
        self.current().kind == TokenKind::Punct(punct)
    }

    fn check_keyword(&self, kw: Keyword) -> bool {
        self.current().kind == TokenKind::Keyword(kw)
    }

    fn eat(&mut self, punct: Punct) -> bool {
        if self.check(punct) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, kw: Keyword) -> bool {
        if self.check_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn unexpected(&self) -> EvalError {
        let token = self.current();
        let message = if token.kind == TokenKind::Eof {
            "Unexpected end of input".to_owned()
        } else {
            format!("Unexpected token '{}'", token.kind)
        };
        EvalError::syntax(message, token.line, token.column)
    }

    fn expect(&mut self, punct: Punct) -> Result<(), EvalError> {
        if self.eat(punct) { Ok(()) } else { Err(self.unexpected()) }
    }

    fn ident(&mut self) -> Result<String, EvalError> {
        if let TokenKind::Ident(name) = &self.current().kind {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.unexpected())
        }
    }

    // =========================================================================
    // STATEMENTS
    // =========================================================================

    fn statement(&mut self) -> Result<Stmt, EvalError> {
        self.nested(Self::statement_inner)
    }

    fn statement_inner(&mut self) -> Result<Stmt, EvalError> {
        let stmt = match &self.current().kind {
            TokenKind::Keyword(Keyword::Let | Keyword::Const | Keyword::Var) => {
                let stmt = self.declaration()?;
                self.eat(Punct::Semicolon);
                stmt
            }
            TokenKind::Keyword(Keyword::Function) => {
                self.advance();
                let name = self.ident()?;
                Stmt::Function(Rc::new(self.function_rest(Some(name))?))
            }
            TokenKind::Keyword(Keyword::If) => self.if_statement()?,
            TokenKind::Keyword(Keyword::While) => {
                self.advance();
                self.expect(Punct::LParen)?;
                let cond = self.expression()?;
                self.expect(Punct::RParen)?;
                let body = Box::new(self.statement()?);
                Stmt::While { cond, body }
            }
            TokenKind::Keyword(Keyword::For) => self.for_statement()?,
            TokenKind::Keyword(Keyword::Return) => {
                self.advance();
                let value = if self.check(Punct::Semicolon) || self.check(Punct::RBrace) || self.at_eof() {
                    None
                } else {
                    Some(self.expression()?)
                };
                self.eat(Punct::Semicolon);
                Stmt::Return(value)
            }
            TokenKind::Keyword(Keyword::Break) => {
                self.advance();
                self.eat(Punct::Semicolon);
                Stmt::Break
            }
            TokenKind::Keyword(Keyword::Continue) => {
                self.advance();
                self.eat(Punct::Semicolon);
                Stmt::Continue
            }
            TokenKind::Punct(Punct::LBrace) => Stmt::Block(self.block()?),
            TokenKind::Punct(Punct::Semicolon) => {
                self.advance();
                Stmt::Empty
            }
            _ => {
                let expr = self.expression()?;
                self.eat(Punct::Semicolon);
                Stmt::Expr(expr)
            }
        };
        Ok(stmt)
    }

    fn decl_kind(&mut self) -> Option<DeclKind> {
        let kind = match self.current().kind {
            TokenKind::Keyword(Keyword::Let) => DeclKind::Let,
            TokenKind::Keyword(Keyword::Const) => DeclKind::Const,
            TokenKind::Keyword(Keyword::Var) => DeclKind::Var,
            _ => return None,
        };
        self.advance();
        Some(kind)
    }

    fn declaration(&mut self) -> Result<Stmt, EvalError> {
        let Some(kind) = self.decl_kind() else {
            return Err(self.unexpected());
        };
        let mut bindings = Vec::new();
        loop {
            let name_token = self.current().clone();
            let name = self.ident()?;
            let init = if self.eat(Punct::Assign) { Some(self.assignment()?) } else { None };
            if kind == DeclKind::Const && init.is_none() {
                return Err(EvalError::syntax(
                    "Missing initializer in const declaration",
                    name_token.line,
                    name_token.column,
                ));
            }
            bindings.push((name, init));
            if !self.eat(Punct::Comma) {
                break;
            }
        }
        Ok(Stmt::Decl { kind, bindings })
    }

    fn block(&mut self) -> Result<Vec<Stmt>, EvalError> {
        self.expect(Punct::LBrace)?;
        let mut stmts = Vec::new();
        while !self.check(Punct::RBrace) {
            if self.at_eof() {
                return Err(self.unexpected());
            }
            stmts.push(self.statement()?);
        }
        self.advance();
        Ok(stmts)
    }

    fn if_statement(&mut self) -> Result<Stmt, EvalError> {
        self.advance();
        self.expect(Punct::LParen)?;
        let cond = self.expression()?;
        self.expect(Punct::RParen)?;
        let then = Box::new(self.statement()?);
        let otherwise = if self.eat_keyword(Keyword::Else) { Some(Box::new(self.statement()?)) } else { None };
        Ok(Stmt::If { cond, then, otherwise })
    }

    fn for_statement(&mut self) -> Result<Stmt, EvalError> {
        self.advance();
        self.expect(Punct::LParen)?;

        // `for (const x of items)`
        let is_for_of = matches!(
            self.current().kind,
            TokenKind::Keyword(Keyword::Let | Keyword::Const | Keyword::Var)
        ) && matches!(self.peek_kind(1), TokenKind::Ident(_))
            && matches!(self.peek_kind(2), TokenKind::Ident(word) if word == "of");
        if is_for_of {
            let kind = self.decl_kind().unwrap_or(DeclKind::Let);
            let name = self.ident()?;
            self.advance();
            let iterable = self.expression()?;
            self.expect(Punct::RParen)?;
            let body = Box::new(self.statement()?);
            return Ok(Stmt::ForOf { kind, name, iterable, body });
        }

        let init = if self.check(Punct::Semicolon) {
            None
        } else if matches!(
            self.current().kind,
            TokenKind::Keyword(Keyword::Let | Keyword::Const | Keyword::Var)
        ) {
            Some(Box::new(self.declaration()?))
        } else {
            Some(Box::new(Stmt::Expr(self.expression()?)))
        };
        self.expect(Punct::Semicolon)?;
        let cond = if self.check(Punct::Semicolon) { None } else { Some(self.expression()?) };
        self.expect(Punct::Semicolon)?;
        let update = if self.check(Punct::RParen) { None } else { Some(self.expression()?) };
        self.expect(Punct::RParen)?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::For { init, cond, update, body })
    }

    fn function_rest(&mut self, name: Option<String>) -> Result<FunctionDef, EvalError> {
        self.expect(Punct::LParen)?;
        let params = self.param_list()?;
        let body = FunctionBody::Block(self.block()?);
        Ok(FunctionDef { name, params, body })
    }

    /// Parameter names up to and including the closing `)`.
    fn param_list(&mut self) -> Result<Vec<String>, EvalError> {
        let mut params = Vec::new();
        if self.eat(Punct::RParen) {
            return Ok(params);
        }
        loop {
            params.push(self.ident()?);
            if self.eat(Punct::RParen) {
                return Ok(params);
            }
            self.expect(Punct::Comma)?;
        }
    }

    // =========================================================================
    // EXPRESSIONS
    // =========================================================================

    fn expression(&mut self) -> Result<Expr, EvalError> {
        self.assignment()
    }

    fn arrow_ahead(&self) -> bool {
        match self.current().kind {
            TokenKind::Ident(_) => *self.peek_kind(1) == TokenKind::Punct(Punct::Arrow),
            TokenKind::Punct(Punct::LParen) => {
                let mut offset = 1;
                loop {
                    match self.peek_kind(offset) {
                        TokenKind::Punct(Punct::RParen) => {
                            return *self.peek_kind(offset + 1) == TokenKind::Punct(Punct::Arrow);
                        }
                        TokenKind::Ident(_) | TokenKind::Punct(Punct::Comma) => offset += 1,
                        _ => return false,
                    }
                }
            }
            _ => false,
        }
    }

    fn arrow_function(&mut self) -> Result<Expr, EvalError> {
        let params = if self.eat(Punct::LParen) { self.param_list()? } else { vec![self.ident()?] };
        self.expect(Punct::Arrow)?;
        let body = if self.check(Punct::LBrace) {
            FunctionBody::Block(self.block()?)
        } else {
            FunctionBody::Expr(Box::new(self.assignment()?))
        };
        Ok(Expr::Function(Rc::new(FunctionDef { name: None, params, body })))
    }

    fn assignment(&mut self) -> Result<Expr, EvalError> {
        self.nested(Self::assignment_inner)
    }

    fn assignment_inner(&mut self) -> Result<Expr, EvalError> {
        if self.arrow_ahead() {
            return self.arrow_function();
        }
        let start = self.current().clone();
        let target = self.conditional()?;
        let op = match self.current().kind {
            TokenKind::Punct(Punct::Assign) => AssignOp::Set,
            TokenKind::Punct(Punct::PlusAssign) => AssignOp::Compound(BinaryOp::Add),
            TokenKind::Punct(Punct::MinusAssign) => AssignOp::Compound(BinaryOp::Sub),
            TokenKind::Punct(Punct::StarAssign) => AssignOp::Compound(BinaryOp::Mul),
            TokenKind::Punct(Punct::SlashAssign) => AssignOp::Compound(BinaryOp::Div),
            _ => return Ok(target),
        };
        if !target.is_assignable() {
            return Err(EvalError::syntax("Invalid left-hand side in assignment", start.line, start.column));
        }
        self.advance();
        let value = self.assignment()?;
        Ok(Expr::Assign { op, target: Box::new(target), value: Box::new(value) })
    }

    fn conditional(&mut self) -> Result<Expr, EvalError> {
        let cond = self.logical_or()?;
        if !self.eat(Punct::Question) {
            return Ok(cond);
        }
        let then = self.assignment()?;
        self.expect(Punct::Colon)?;
        let otherwise = self.assignment()?;
        Ok(Expr::Conditional { cond: Box::new(cond), then: Box::new(then), otherwise: Box::new(otherwise) })
    }

    fn logical_or(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.logical_and()?;
        while self.eat(Punct::Or) {
            let right = self.logical_and()?;
            left = Expr::Logical { op: LogicalOp::Or, left: Box::new(left), right: Box::new(right) };
        }
        Ok(left)
    }

    fn logical_and(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.equality()?;
        while self.eat(Punct::And) {
            let right = self.equality()?;
            left = Expr::Logical { op: LogicalOp::And, left: Box::new(left), right: Box::new(right) };
        }
        Ok(left)
    }

    fn binary_level(
        &mut self,
        ops: &[(Punct, BinaryOp)],
        next: fn(&mut Self) -> Result<Expr, EvalError>,
    ) -> Result<Expr, EvalError> {
        let mut left = next(self)?;
        'outer: loop {
            for (punct, op) in ops {
                if self.eat(*punct) {
                    let right = next(self)?;
                    left = Expr::Binary { op: *op, left: Box::new(left), right: Box::new(right) };
                    continue 'outer;
                }
            }
            return Ok(left);
        }
    }

    fn equality(&mut self) -> Result<Expr, EvalError> {
        self.binary_level(
            &[
                (Punct::StrictEq, BinaryOp::StrictEq),
                (Punct::StrictNotEq, BinaryOp::StrictNotEq),
                (Punct::Eq, BinaryOp::Eq),
                (Punct::NotEq, BinaryOp::NotEq),
            ],
            Self::relational,
        )
    }

    fn relational(&mut self) -> Result<Expr, EvalError> {
        self.binary_level(
            &[
                (Punct::Lt, BinaryOp::Lt),
                (Punct::Le, BinaryOp::Le),
                (Punct::Gt, BinaryOp::Gt),
                (Punct::Ge, BinaryOp::Ge),
            ],
            Self::additive,
        )
    }

    fn additive(&mut self) -> Result<Expr, EvalError> {
        self.binary_level(&[(Punct::Plus, BinaryOp::Add), (Punct::Minus, BinaryOp::Sub)], Self::multiplicative)
    }

    fn multiplicative(&mut self) -> Result<Expr, EvalError> {
        self.binary_level(
            &[(Punct::Star, BinaryOp::Mul), (Punct::Slash, BinaryOp::Div), (Punct::Percent, BinaryOp::Rem)],
            Self::unary,
        )
    }

    fn unary(&mut self) -> Result<Expr, EvalError> {
        let op = match self.current().kind {
            TokenKind::Punct(Punct::Not) => UnaryOp::Not,
            TokenKind::Punct(Punct::Minus) => UnaryOp::Neg,
            TokenKind::Punct(Punct::Plus) => UnaryOp::Plus,
            TokenKind::Keyword(Keyword::Typeof) => UnaryOp::Typeof,
            TokenKind::Punct(p @ (Punct::PlusPlus | Punct::MinusMinus)) => {
                let start = self.advance();
                let target = self.nested(Self::unary)?;
                if !target.is_assignable() {
                    return Err(EvalError::syntax(
                        "Invalid left-hand side expression in prefix operation",
                        start.line,
                        start.column,
                    ));
                }
                return Ok(Expr::Update { increment: p == Punct::PlusPlus, prefix: true, target: Box::new(target) });
            }
            _ => return self.postfix(),
        };
        self.advance();
        let operand = self.nested(Self::unary)?;
        Ok(Expr::Unary { op, operand: Box::new(operand) })
    }

    fn postfix(&mut self) -> Result<Expr, EvalError> {
        let start = self.current().clone();
        let expr = self.call_member()?;
        let increment = match self.current().kind {
            TokenKind::Punct(Punct::PlusPlus) => true,
            TokenKind::Punct(Punct::MinusMinus) => false,
            _ => return Ok(expr),
        };
        if !expr.is_assignable() {
            return Err(EvalError::syntax(
                "Invalid left-hand side expression in postfix operation",
                start.line,
                start.column,
            ));
        }
        self.advance();
        Ok(Expr::Update { increment, prefix: false, target: Box::new(expr) })
    }

    fn call_member(&mut self) -> Result<Expr, EvalError> {
        let mut expr = self.primary()?;
        loop {
            if self.eat(Punct::Dot) {
                let property = match &self.current().kind {
                    TokenKind::Ident(name) => name.clone(),
                    TokenKind::Keyword(kw) => kw.as_str().to_owned(),
                    _ => return Err(self.unexpected()),
                };
                self.advance();
                expr = Expr::Member { object: Box::new(expr), property };
            } else if self.eat(Punct::LBracket) {
                let index = self.expression()?;
                self.expect(Punct::RBracket)?;
                expr = Expr::Index { object: Box::new(expr), index: Box::new(index) };
            } else if self.eat(Punct::LParen) {
                let args = self.arguments()?;
                expr = Expr::Call { callee: Box::new(expr), args };
            } else {
                return Ok(expr);
            }
        }
    }

    fn arguments(&mut self) -> Result<Vec<Expr>, EvalError> {
        let mut args = Vec::new();
        if self.eat(Punct::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.assignment()?);
            if self.eat(Punct::RParen) {
                return Ok(args);
            }
            self.expect(Punct::Comma)?;
        }
    }

    fn primary(&mut self) -> Result<Expr, EvalError> {
        let token = self.current().clone();
        let expr = match token.kind {
            TokenKind::Number(n) => Expr::Number(n),
            TokenKind::Str(s) => Expr::Str(s),
            TokenKind::Template(parts) => Expr::Template(template_segments(parts, self.depth)?),
            TokenKind::Ident(name) => Expr::Ident(name),
            TokenKind::Keyword(Keyword::True) => Expr::Bool(true),
            TokenKind::Keyword(Keyword::False) => Expr::Bool(false),
            TokenKind::Keyword(Keyword::Null) => Expr::Null,
            TokenKind::Keyword(Keyword::Undefined) => Expr::Undefined,
            TokenKind::Keyword(Keyword::Function) => {
                self.advance();
                let name = if let TokenKind::Ident(_) = self.current().kind { Some(self.ident()?) } else { None };
                return Ok(Expr::Function(Rc::new(self.function_rest(name)?)));
            }
            TokenKind::Punct(Punct::LParen) => {
                self.advance();
                let inner = self.expression()?;
                self.expect(Punct::RParen)?;
                return Ok(inner);
            }
            TokenKind::Punct(Punct::LBracket) => {
                self.advance();
                let mut items = Vec::new();
                while !self.eat(Punct::RBracket) {
                    items.push(self.assignment()?);
                    if !self.check(Punct::RBracket) {
                        self.expect(Punct::Comma)?;
                    }
                }
                return Ok(Expr::Array(items));
            }
            _ => return Err(self.unexpected()),
        };
        self.advance();
        Ok(expr)
    }
}

/// Parse `${...}` bodies, continuing the enclosing nesting depth.
fn template_segments(parts: Vec<TemplatePart>, depth: usize) -> Result<Vec<TemplateSegment>, EvalError> {
    parts
        .into_iter()
        .map(|part| match part {
            TemplatePart::Text(text) => Ok(TemplateSegment::Text(text)),
            TemplatePart::Expr { source, line, column } => {
                let mut parser = Parser::with_depth(tokenize_at(&source, line, column)?, depth);
                let expr = parser.expression()?;
                if !parser.at_eof() {
                    return Err(parser.unexpected());
                }
                Ok(TemplateSegment::Expr(expr))
            }
        })
        .collect()
}
