//! Tree-walking evaluator for parsed playground programs.
//!
//! DESIGN
//! ======
//! Statements yield a `Flow` so `return`/`break`/`continue` unwind without
//! using errors for control. The completion value of the program is the last
//! value produced by an expression statement, mirroring what `eval` reports.
//! Every statement and call consumes one step from a fixed budget, and call
//! depth is capped, so runaway programs end with an error instead of hanging
//! the page. Strings and arrays have size caps that raise a `RangeError`,
//! and console output stops growing past `MAX_CONSOLE_BYTES`.

#[cfg(test)]
#[path = "interpreter_test.rs"]
mod interpreter_test;

use std::rc::Rc;

use super::ast::{AssignOp, BinaryOp, DeclKind, Expr, FunctionBody, FunctionDef, LogicalOp, Stmt, TemplateSegment, UnaryOp};
use super::error::EvalError;
use super::value::{
    Closure, Env, MAX_STRING_LEN, Namespace, Native, Scope, Value, assign, declare, declare_var, join_array, lookup,
};

pub const DEFAULT_STEP_BUDGET: u64 = 1_000_000;
pub const MAX_CALL_DEPTH: usize = 64;
pub const MAX_ARRAY_LEN: usize = 1 << 20;
pub const MAX_CONSOLE_BYTES: usize = 4 * MAX_STRING_LEN;

const CONSOLE_TRUNCATED: &str = "... console output truncated";

enum Flow {
    /// Normal completion; `None` when the statement produced no value.
    Normal(Option<Value>),
    Return(Value),
    Break,
    Continue,
}

pub struct Interpreter {
    globals: Env,
    console: Vec<String>,
    console_bytes: usize,
    steps: u64,
    budget: u64,
    depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::with_budget(DEFAULT_STEP_BUDGET)
    }
}

impl Interpreter {
    pub fn with_budget(budget: u64) -> Self {
        Self { globals: Scope::root(), console: Vec::new(), console_bytes: 0, steps: 0, budget, depth: 0 }
    }

    /// Lines written through `console.*` so far.
    pub fn console(&self) -> &[String] {
        &self.console
    }

    pub fn into_console(self) -> Vec<String> {
        self.console
    }

    /// Run a program and return its completion value.
    ///
    /// # Errors
    ///
    /// Returns the first runtime error raised by the program.
    pub fn run(&mut self, program: &[Stmt]) -> Result<Value, EvalError> {
        let env = self.globals.clone();
        match self.exec_block(program, &env)? {
            Flow::Normal(value) => Ok(value.unwrap_or(Value::Undefined)),
            Flow::Return(_) => Err(EvalError::syntax("Illegal return statement", 1, 1)),
            Flow::Break | Flow::Continue => Err(EvalError::syntax("Illegal break or continue statement", 1, 1)),
        }
    }

    fn tick(&mut self) -> Result<(), EvalError> {
        self.steps += 1;
        if self.steps > self.budget {
            return Err(EvalError::BudgetExhausted(self.budget));
        }
        Ok(())
    }

    // =========================================================================
    // STATEMENTS
    // =========================================================================

    fn hoist_functions(&mut self, stmts: &[Stmt], env: &Env) -> Result<(), EvalError> {
        for stmt in stmts {
            if let Stmt::Function(def) = stmt {
                if let Some(name) = &def.name {
                    let closure = Value::Function(Rc::new(Closure { def: def.clone(), env: env.clone() }));
                    declare(env, name, closure, true, true)?;
                }
            }
        }
        Ok(())
    }

    fn exec_block(&mut self, stmts: &[Stmt], env: &Env) -> Result<Flow, EvalError> {
        self.hoist_functions(stmts, env)?;
        let mut completion = None;
        for stmt in stmts {
            match self.exec(stmt, env)? {
                Flow::Normal(Some(value)) => completion = Some(value),
                Flow::Normal(None) => {}
                other => return Ok(other),
            }
        }
        Ok(Flow::Normal(completion))
    }

    fn exec(&mut self, stmt: &Stmt, env: &Env) -> Result<Flow, EvalError> {
        self.tick()?;
        match stmt {
            Stmt::Decl { kind, bindings } => {
                for (name, init) in bindings {
                    let value = match init {
                        Some(expr) => self.eval(expr, env)?,
                        None => Value::Undefined,
                    };
                    self.declare_binding(*kind, name, value, env)?;
                }
                Ok(Flow::Normal(None))
            }
            Stmt::Function(_) | Stmt::Empty => Ok(Flow::Normal(None)),
            Stmt::Expr(expr) => Ok(Flow::Normal(Some(self.eval(expr, env)?))),
            Stmt::If { cond, then, otherwise } => {
                if self.eval(cond, env)?.truthy() {
                    self.exec_scoped(then, env)
                } else if let Some(otherwise) = otherwise {
                    self.exec_scoped(otherwise, env)
                } else {
                    Ok(Flow::Normal(None))
                }
            }
            Stmt::While { cond, body } => {
                let mut completion = None;
                while self.eval(cond, env)?.truthy() {
                    match self.exec_scoped(body, env)? {
                        Flow::Break => break,
                        Flow::Return(value) => return Ok(Flow::Return(value)),
                        Flow::Normal(Some(value)) => completion = Some(value),
                        Flow::Normal(None) | Flow::Continue => {}
                    }
                    self.tick()?;
                }
                Ok(Flow::Normal(completion))
            }
            Stmt::For { init, cond, update, body } => self.exec_for(init.as_deref(), cond.as_ref(), update.as_ref(), body, env),
            Stmt::ForOf { kind, name, iterable, body } => {
                let items = match self.eval(iterable, env)? {
                    Value::Array(items) => {
                        let snapshot = items.borrow().clone();
                        snapshot
                    }
                    Value::Str(s) => s.chars().map(|c| Value::string(c.to_string())).collect(),
                    other => return Err(EvalError::Type(format!("{} is not iterable", other.to_js_string()))),
                };
                let mut completion = None;
                for item in items {
                    let scope = Scope::child(env);
                    self.declare_binding(*kind, name, item, &scope)?;
                    match self.exec_scoped(body, &scope)? {
                        Flow::Break => break,
                        Flow::Return(value) => return Ok(Flow::Return(value)),
                        Flow::Normal(Some(value)) => completion = Some(value),
                        Flow::Normal(None) | Flow::Continue => {}
                    }
                }
                Ok(Flow::Normal(completion))
            }
            Stmt::Block(stmts) => self.exec_block(stmts, &Scope::child(env)),
            Stmt::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval(expr, env)?,
                    None => Value::Undefined,
                };
                Ok(Flow::Return(value))
            }
            Stmt::Break => Ok(Flow::Break),
            Stmt::Continue => Ok(Flow::Continue),
        }
    }

    /// Run a loop/branch body; bare statements get their own scope too.
    fn exec_scoped(&mut self, stmt: &Stmt, env: &Env) -> Result<Flow, EvalError> {
        match stmt {
            Stmt::Block(_) => self.exec(stmt, env),
            other => self.exec(other, &Scope::child(env)),
        }
    }

    fn exec_for(
        &mut self,
        init: Option<&Stmt>,
        cond: Option<&Expr>,
        update: Option<&Expr>,
        body: &Stmt,
        env: &Env,
    ) -> Result<Flow, EvalError> {
        let loop_env = Scope::child(env);
        if let Some(init) = init {
            self.exec(init, &loop_env)?;
        }
        let mut completion = None;
        loop {
            if let Some(cond) = cond {
                if !self.eval(cond, &loop_env)?.truthy() {
                    break;
                }
            }
            match self.exec_scoped(body, &loop_env)? {
                Flow::Break => break,
                Flow::Return(value) => return Ok(Flow::Return(value)),
                Flow::Normal(Some(value)) => completion = Some(value),
                Flow::Normal(None) | Flow::Continue => {}
            }
            if let Some(update) = update {
                self.eval(update, &loop_env)?;
            }
            self.tick()?;
        }
        Ok(Flow::Normal(completion))
    }

    fn declare_binding(&mut self, kind: DeclKind, name: &str, value: Value, env: &Env) -> Result<(), EvalError> {
        match kind {
            DeclKind::Let => declare(env, name, value, true, false),
            DeclKind::Const => declare(env, name, value, false, false),
            DeclKind::Var => declare_var(env, name, value),
        }
    }

    // =========================================================================
    // EXPRESSIONS
    // =========================================================================

    fn eval(&mut self, expr: &Expr, env: &Env) -> Result<Value, EvalError> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Str(s) => Ok(Value::string(s.as_str())),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Null => Ok(Value::Null),
            Expr::Undefined => Ok(Value::Undefined),
            Expr::Template(segments) => {
                let mut out = String::new();
                for segment in segments {
                    match segment {
                        TemplateSegment::Text(text) => out.push_str(text),
                        TemplateSegment::Expr(expr) => out.push_str(&self.eval(expr, env)?.to_js_string()),
                    }
                    if out.len() > MAX_STRING_LEN {
                        return Err(string_too_long());
                    }
                }
                Ok(Value::string(out))
            }
            Expr::Ident(name) => resolve(name, env),
            Expr::Array(items) => {
                let values = items.iter().map(|item| self.eval(item, env)).collect::<Result<Vec<_>, _>>()?;
                Ok(Value::array(values))
            }
            Expr::Unary { op, operand } => {
                if *op == UnaryOp::Typeof {
                    // `typeof missing` is "undefined", not a ReferenceError.
                    if let Expr::Ident(name) = operand.as_ref() {
                        return Ok(Value::string(resolve(name, env).map_or("undefined", |v| v.type_of())));
                    }
                }
                let value = self.eval(operand, env)?;
                Ok(match op {
                    UnaryOp::Not => Value::Bool(!value.truthy()),
                    UnaryOp::Neg => Value::Number(-value.to_number()),
                    UnaryOp::Plus => Value::Number(value.to_number()),
                    UnaryOp::Typeof => Value::string(value.type_of()),
                })
            }
            Expr::Binary { op, left, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                binary(*op, &left, &right)
            }
            Expr::Logical { op, left, right } => {
                let left = self.eval(left, env)?;
                match (op, left.truthy()) {
                    (LogicalOp::And, false) | (LogicalOp::Or, true) => Ok(left),
                    _ => self.eval(right, env),
                }
            }
            Expr::Assign { op, target, value } => {
                let value = match op {
                    AssignOp::Set => self.eval(value, env)?,
                    AssignOp::Compound(bin) => {
                        let current = self.eval(target, env)?;
                        let rhs = self.eval(value, env)?;
                        binary(*bin, &current, &rhs)?
                    }
                };
                self.store(target, value.clone(), env)?;
                Ok(value)
            }
            Expr::Update { increment, prefix, target } => {
                let old = self.eval(target, env)?.to_number();
                let new = if *increment { old + 1.0 } else { old - 1.0 };
                self.store(target, Value::Number(new), env)?;
                Ok(Value::Number(if *prefix { new } else { old }))
            }
            Expr::Conditional { cond, then, otherwise } => {
                if self.eval(cond, env)?.truthy() {
                    self.eval(then, env)
                } else {
                    self.eval(otherwise, env)
                }
            }
            Expr::Call { callee, args } => self.eval_call(callee, args, env),
            Expr::Member { object, property } => {
                let object = self.eval(object, env)?;
                get_property(&object, property)
            }
            Expr::Index { object, index } => {
                let object = self.eval(object, env)?;
                let index = self.eval(index, env)?;
                get_index(&object, &index)
            }
            Expr::Function(def) => Ok(Value::Function(Rc::new(Closure { def: def.clone(), env: env.clone() }))),
        }
    }

    fn store(&mut self, target: &Expr, value: Value, env: &Env) -> Result<(), EvalError> {
        match target {
            Expr::Ident(name) => assign(env, name, value),
            Expr::Index { object, index } => {
                let object = self.eval(object, env)?;
                let index = self.eval(index, env)?;
                match object {
                    Value::Array(items) => {
                        let idx = array_index(&index)
                            .ok_or_else(|| EvalError::Type("array index must be a non-negative integer".to_owned()))?;
                        if idx >= MAX_ARRAY_LEN {
                            return Err(array_too_long());
                        }
                        let mut items = items.borrow_mut();
                        if idx >= items.len() {
                            items.resize(idx + 1, Value::Undefined);
                        }
                        items[idx] = value;
                        Ok(())
                    }
                    Value::Undefined | Value::Null => Err(EvalError::Type(format!(
                        "Cannot set properties of {} (setting '{}')",
                        object.to_js_string(),
                        index.to_js_string()
                    ))),
                    _ => Err(EvalError::Type(format!("Cannot assign to index of {}", object.type_of()))),
                }
            }
            Expr::Member { object, property } => {
                let object = self.eval(object, env)?;
                Err(EvalError::Type(format!("Cannot assign to property '{property}' of {}", object.type_of())))
            }
            _ => Err(EvalError::syntax("Invalid left-hand side in assignment", 1, 1)),
        }
    }

    fn eval_call(&mut self, callee: &Expr, args: &[Expr], env: &Env) -> Result<Value, EvalError> {
        if let Expr::Member { object, property } = callee {
            let receiver = self.eval(object, env)?;
            let args = self.eval_args(args, env)?;
            return match &receiver {
                Value::Array(_) | Value::Str(_) => self.call_method(&receiver, property, args, callee),
                _ => {
                    let function = get_property(&receiver, property)?;
                    self.call_value(&function, args, callee)
                }
            };
        }
        let function = self.eval(callee, env)?;
        let args = self.eval_args(args, env)?;
        self.call_value(&function, args, callee)
    }

    fn eval_args(&mut self, args: &[Expr], env: &Env) -> Result<Vec<Value>, EvalError> {
        args.iter().map(|arg| self.eval(arg, env)).collect()
    }

    fn call_value(&mut self, function: &Value, args: Vec<Value>, callee: &Expr) -> Result<Value, EvalError> {
        match function {
            Value::Function(closure) => self.call_closure(closure, args),
            Value::Native(native) => self.call_native(native, &args),
            _ => Err(EvalError::Type(format!("{} is not a function", callee.describe()))),
        }
    }

    fn call_closure(&mut self, closure: &Rc<Closure>, args: Vec<Value>) -> Result<Value, EvalError> {
        self.tick()?;
        if self.depth >= MAX_CALL_DEPTH {
            return Err(EvalError::Range("Maximum call stack size exceeded".to_owned()));
        }
        let def: &FunctionDef = &closure.def;
        let scope = Scope::function(&closure.env);
        if let Some(name) = &def.name {
            declare(&scope, name, Value::Function(closure.clone()), true, true)?;
        }
        let mut args = args.into_iter();
        for param in &def.params {
            declare(&scope, param, args.next().unwrap_or(Value::Undefined), true, true)?;
        }

        self.depth += 1;
        let result = match &def.body {
            FunctionBody::Expr(expr) => self.eval(expr, &scope),
            FunctionBody::Block(stmts) => self.exec_block(stmts, &scope).map(|flow| match flow {
                Flow::Return(value) => value,
                Flow::Normal(_) | Flow::Break | Flow::Continue => Value::Undefined,
            }),
        };
        self.depth -= 1;
        result
    }

    fn call_native(&mut self, native: &Native, args: &[Value]) -> Result<Value, EvalError> {
        let number = |i: usize| args.get(i).map_or(f64::NAN, Value::to_number);
        let value = match (native.namespace, native.name.as_str()) {
            (Namespace::Console, "log" | "info" | "warn" | "error") => {
                let line = args.iter().map(Value::inspect).collect::<Vec<_>>().join(" ");
                self.write_console(line);
                Value::Undefined
            }
            (Namespace::Math, "floor") => Value::Number(number(0).floor()),
            (Namespace::Math, "ceil") => Value::Number(number(0).ceil()),
            (Namespace::Math, "round") => Value::Number(js_round(number(0))),
            (Namespace::Math, "abs") => Value::Number(number(0).abs()),
            (Namespace::Math, "sqrt") => Value::Number(number(0).sqrt()),
            (Namespace::Math, "pow") => Value::Number(number(0).powf(number(1))),
            (Namespace::Math, "max") => Value::Number(args.iter().map(Value::to_number).fold(f64::NEG_INFINITY, js_max)),
            (Namespace::Math, "min") => Value::Number(args.iter().map(Value::to_number).fold(f64::INFINITY, js_min)),
            (_, name) => return Err(EvalError::Type(format!("{name} is not a function"))),
        };
        Ok(value)
    }

    fn write_console(&mut self, line: String) {
        if self.console_bytes > MAX_CONSOLE_BYTES {
            return;
        }
        self.console_bytes += line.len();
        if self.console_bytes > MAX_CONSOLE_BYTES {
            self.console.push(CONSOLE_TRUNCATED.to_owned());
        } else {
            self.console.push(line);
        }
    }

    fn call_method(&mut self, receiver: &Value, method: &str, args: Vec<Value>, callee: &Expr) -> Result<Value, EvalError> {
        match receiver {
            Value::Array(items) => self.call_array_method(items, receiver, method, args, callee),
            Value::Str(s) => call_string_method(s, method, &args, callee),
            _ => Err(EvalError::Type(format!("{} is not a function", callee.describe()))),
        }
    }

    fn callback_arg(args: &[Value], callee: &Expr) -> Result<Value, EvalError> {
        match args.first() {
            Some(f @ (Value::Function(_) | Value::Native(_))) => Ok(f.clone()),
            Some(other) => Err(EvalError::Type(format!("{} is not a function", other.to_js_string()))),
            None => Err(EvalError::Type(format!("undefined is not a function ({})", callee.describe()))),
        }
    }

    fn call_array_method(
        &mut self,
        items: &Rc<std::cell::RefCell<Vec<Value>>>,
        receiver: &Value,
        method: &str,
        args: Vec<Value>,
        callee: &Expr,
    ) -> Result<Value, EvalError> {
        match method {
            "push" => {
                let mut items = items.borrow_mut();
                if items.len() + args.len() > MAX_ARRAY_LEN {
                    return Err(array_too_long());
                }
                items.extend(args);
                Ok(Value::Number(len_as_number(items.len())))
            }
            "pop" => Ok(items.borrow_mut().pop().unwrap_or(Value::Undefined)),
            "join" => {
                let sep = match args.first() {
                    None | Some(Value::Undefined) => ",".to_owned(),
                    Some(sep) => sep.to_js_string(),
                };
                checked_string(join_array(items, &sep))
            }
            "includes" => {
                let needle = args.first().cloned().unwrap_or(Value::Undefined);
                Ok(Value::Bool(items.borrow().iter().any(|item| item.same_value_zero(&needle))))
            }
            "indexOf" => {
                let needle = args.first().cloned().unwrap_or(Value::Undefined);
                let position = items.borrow().iter().position(|item| item.strict_equals(&needle));
                Ok(Value::Number(position.map_or(-1.0, len_as_number)))
            }
            "forEach" | "map" | "filter" => {
                let callback = Self::callback_arg(&args, callee)?;
                // Snapshot so callbacks may push without invalidating iteration.
                let snapshot = items.borrow().clone();
                let mut out = Vec::new();
                for (i, item) in snapshot.into_iter().enumerate() {
                    let call_args = vec![item.clone(), Value::Number(len_as_number(i)), receiver.clone()];
                    let result = self.call_value(&callback, call_args, callee)?;
                    match method {
                        "map" => out.push(result),
                        "filter" if result.truthy() => out.push(item),
                        _ => {}
                    }
                }
                Ok(if method == "forEach" { Value::Undefined } else { Value::array(out) })
            }
            "reduce" => {
                let callback = Self::callback_arg(&args, callee)?;
                let snapshot = items.borrow().clone();
                let mut iter = snapshot.into_iter().enumerate();
                let mut acc = match args.get(1) {
                    Some(initial) => initial.clone(),
                    None => match iter.next() {
                        Some((_, first)) => first,
                        None => return Err(EvalError::Type("Reduce of empty array with no initial value".to_owned())),
                    },
                };
                for (i, item) in iter {
                    let call_args = vec![acc, item, Value::Number(len_as_number(i)), receiver.clone()];
                    acc = self.call_value(&callback, call_args, callee)?;
                }
                Ok(acc)
            }
            _ => Err(EvalError::Type(format!("{} is not a function", callee.describe()))),
        }
    }
}

fn call_string_method(s: &str, method: &str, args: &[Value], callee: &Expr) -> Result<Value, EvalError> {
    let arg = |i: usize| args.get(i).map(Value::to_js_string);
    let value = match method {
        "toUpperCase" => checked_string(s.to_uppercase())?,
        "toLowerCase" => checked_string(s.to_lowercase())?,
        "trim" => Value::string(s.trim()),
        "includes" => Value::Bool(s.contains(arg(0).unwrap_or_else(|| "undefined".to_owned()).as_str())),
        "split" => match arg(0) {
            None => Value::array(vec![Value::string(s)]),
            Some(sep) if sep.is_empty() => Value::array(s.chars().map(|c| Value::string(c.to_string())).collect()),
            Some(sep) => Value::array(s.split(sep.as_str()).map(Value::string).collect()),
        },
        _ => return Err(EvalError::Type(format!("{} is not a function", callee.describe()))),
    };
    Ok(value)
}

fn resolve(name: &str, env: &Env) -> Result<Value, EvalError> {
    if let Some(value) = lookup(env, name) {
        return Ok(value);
    }
    match name {
        "console" => Ok(Value::Namespace(Namespace::Console)),
        "Math" => Ok(Value::Namespace(Namespace::Math)),
        "NaN" => Ok(Value::Number(f64::NAN)),
        "Infinity" => Ok(Value::Number(f64::INFINITY)),
        _ => Err(EvalError::Reference(name.to_owned())),
    }
}

fn get_property(object: &Value, property: &str) -> Result<Value, EvalError> {
    match (object, property) {
        (Value::Undefined | Value::Null, _) => Err(EvalError::Type(format!(
            "Cannot read properties of {} (reading '{property}')",
            object.to_js_string()
        ))),
        (Value::Array(items), "length") => Ok(Value::Number(len_as_number(items.borrow().len()))),
        (Value::Str(s), "length") => Ok(Value::Number(len_as_number(s.chars().count()))),
        (Value::Namespace(Namespace::Math), "PI") => Ok(Value::Number(std::f64::consts::PI)),
        (Value::Namespace(Namespace::Math), "E") => Ok(Value::Number(std::f64::consts::E)),
        (Value::Namespace(namespace), name) => Ok(Value::Native(Native { namespace: *namespace, name: name.to_owned() })),
        _ => Ok(Value::Undefined),
    }
}

fn get_index(object: &Value, index: &Value) -> Result<Value, EvalError> {
    match object {
        Value::Array(items) => Ok(match array_index(index) {
            Some(idx) => items.borrow().get(idx).cloned().unwrap_or(Value::Undefined),
            None => get_property(object, &index.to_js_string())?,
        }),
        Value::Str(s) => Ok(match array_index(index) {
            Some(idx) => s.chars().nth(idx).map_or(Value::Undefined, |c| Value::string(c.to_string())),
            None => get_property(object, &index.to_js_string())?,
        }),
        _ => get_property(object, &index.to_js_string()),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn array_index(index: &Value) -> Option<usize> {
    let n = index.to_number();
    if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) {
        Some(n as usize)
    } else {
        None
    }
}

#[allow(clippy::cast_precision_loss)]
fn len_as_number(len: usize) -> f64 {
    len as f64
}

fn string_too_long() -> EvalError {
    EvalError::Range("Invalid string length".to_owned())
}

fn array_too_long() -> EvalError {
    EvalError::Range("Invalid array length".to_owned())
}

fn checked_string(text: String) -> Result<Value, EvalError> {
    if text.len() > MAX_STRING_LEN { Err(string_too_long()) } else { Ok(Value::string(text)) }
}

/// `Math.round`: halves go toward +Infinity and the sign of zero survives.
fn js_round(x: f64) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    if rounded == 0.0 && x < 0.0 { -0.0 } else { rounded }
}

fn js_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

fn js_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

fn binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    let value = match op {
        BinaryOp::Add => {
            let stringish = |v: &Value| matches!(v, Value::Str(_) | Value::Array(_) | Value::Function(_) | Value::Native(_));
            if stringish(left) || stringish(right) {
                let mut text = left.to_js_string();
                text.push_str(&right.to_js_string());
                return checked_string(text);
            }
            Value::Number(left.to_number() + right.to_number())
        }
        BinaryOp::Sub => Value::Number(left.to_number() - right.to_number()),
        BinaryOp::Mul => Value::Number(left.to_number() * right.to_number()),
        BinaryOp::Div => Value::Number(left.to_number() / right.to_number()),
        BinaryOp::Rem => Value::Number(left.to_number() % right.to_number()),
        BinaryOp::Eq => Value::Bool(left.loose_equals(right)),
        BinaryOp::NotEq => Value::Bool(!left.loose_equals(right)),
        BinaryOp::StrictEq => Value::Bool(left.strict_equals(right)),
        BinaryOp::StrictNotEq => Value::Bool(!left.strict_equals(right)),
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => Value::Bool(compare(op, left, right)),
    };
    Ok(value)
}

fn compare(op: BinaryOp, left: &Value, right: &Value) -> bool {
    if let (Value::Str(a), Value::Str(b)) = (left, right) {
        return match op {
            BinaryOp::Lt => a < b,
            BinaryOp::Le => a <= b,
            BinaryOp::Gt => a > b,
            _ => a >= b,
        };
    }
    let (a, b) = (left.to_number(), right.to_number());
    match op {
        BinaryOp::Lt => a < b,
        BinaryOp::Le => a <= b,
        BinaryOp::Gt => a > b,
        _ => a >= b,
    }
}
