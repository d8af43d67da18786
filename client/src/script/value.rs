//! Runtime values and their JavaScript-style conversions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::rc::Rc;

use super::ast::FunctionDef;
use super::error::EvalError;

pub type Env = Rc<RefCell<Scope>>;

/// Longest string a program may build, in bytes.
pub const MAX_STRING_LEN: usize = 1 << 20;

/// Arrays nested deeper than this are elided when rendered as text.
const MAX_RENDER_DEPTH: usize = 32;

/// Arrays currently being rendered, for cycle detection.
type OpenArrays = Vec<*const RefCell<Vec<Value>>>;

/// Built-in objects reachable by global name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Namespace {
    Console,
    Math,
}

/// Free-standing native function obtained from a namespace member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Native {
    pub namespace: Namespace,
    pub name: String,
}

/// User-defined function plus the scope it closes over.
pub struct Closure {
    pub def: Rc<FunctionDef>,
    pub env: Env,
}

#[derive(Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    /// Shared text; cloning a value never copies the characters.
    Str(Rc<str>),
    Array(Rc<RefCell<Vec<Value>>>),
    Function(Rc<Closure>),
    Native(Native),
    Namespace(Namespace),
}

impl Value {
    pub fn array(items: Vec<Value>) -> Self {
        Self::Array(Rc::new(RefCell::new(items)))
    }

    pub fn string(text: impl Into<Rc<str>>) -> Self {
        Self::Str(text.into())
    }

    pub fn truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Str(s) => !s.is_empty(),
            Self::Array(_) | Self::Function(_) | Self::Native(_) | Self::Namespace(_) => true,
        }
    }

    pub fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null | Self::Array(_) | Self::Namespace(_) => "object",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Function(_) | Self::Native(_) => "function",
        }
    }

    pub fn to_number(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::Str(s) => parse_numeric(s),
            Self::Array(items) => {
                let items = items.borrow();
                match items.as_slice() {
                    [] => 0.0,
                    [only] => parse_numeric(&only.to_js_string()),
                    _ => f64::NAN,
                }
            }
            Self::Undefined | Self::Function(_) | Self::Native(_) | Self::Namespace(_) => f64::NAN,
        }
    }

    /// Conversion used by `String(value)`, template literals, and `+`.
    pub fn to_js_string(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_owned(),
            Self::Null => "null".to_owned(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::Str(s) => s.to_string(),
            Self::Array(items) => join_array(items, ","),
            Self::Function(closure) => {
                let name = closure.def.name.as_deref().unwrap_or("");
                format!("function {name}({}) {{ ... }}", closure.def.params.join(", "))
            }
            Self::Native(native) => format!("function {}() {{ [native code] }}", native.name),
            Self::Namespace(Namespace::Console) => "[object console]".to_owned(),
            Self::Namespace(Namespace::Math) => "[object Math]".to_owned(),
        }
    }

    /// Rendering used by `console.log`, which quotes nested strings.
    pub fn inspect(&self) -> String {
        match self {
            Self::Str(s) => s.to_string(),
            other => other.inspect_nested(),
        }
    }

    fn inspect_nested(&self) -> String {
        let mut out = String::new();
        self.inspect_into(&mut out, &mut Vec::new());
        out
    }

    fn inspect_into(&self, out: &mut String, open: &mut OpenArrays) {
        match self {
            Self::Str(s) => {
                let _ = write!(out, "'{s}'");
            }
            Self::Array(items) => {
                let ptr = Rc::as_ptr(items);
                if open.contains(&ptr) {
                    out.push_str("[Circular]");
                    return;
                }
                if open.len() >= MAX_RENDER_DEPTH {
                    out.push_str("[Array]");
                    return;
                }
                let items = items.borrow();
                if items.is_empty() {
                    out.push_str("[]");
                    return;
                }
                open.push(ptr);
                out.push_str("[ ");
                for (i, item) in items.iter().enumerate() {
                    if out.len() > MAX_STRING_LEN {
                        break;
                    }
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.inspect_into(out, open);
                }
                out.push_str(" ]");
                open.pop();
            }
            Self::Function(closure) => match closure.def.name.as_deref() {
                Some(name) => {
                    let _ = write!(out, "[Function: {name}]");
                }
                None => out.push_str("[Function (anonymous)]"),
            },
            Self::Native(native) => {
                let _ = write!(out, "[Function: {}]", native.name);
            }
            Self::Namespace(Namespace::Console) => out.push_str("Object [console]"),
            Self::Namespace(Namespace::Math) => out.push_str("Object [Math]"),
            other => out.push_str(&other.to_js_string()),
        }
    }

    /// `===` semantics; arrays and functions compare by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Native(a), Self::Native(b)) => a == b,
            (Self::Namespace(a), Self::Namespace(b)) => a == b,
            _ => false,
        }
    }

    /// `==` semantics for the supported value kinds.
    pub fn loose_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined | Self::Null, Self::Undefined | Self::Null) => true,
            (Self::Undefined | Self::Null, _) | (_, Self::Undefined | Self::Null) => false,
            (Self::Number(_), Self::Str(_) | Self::Bool(_))
            | (Self::Str(_) | Self::Bool(_), Self::Number(_))
            | (Self::Bool(_), Self::Str(_))
            | (Self::Str(_), Self::Bool(_)) => self.to_number() == other.to_number(),
            (Self::Array(_), Self::Str(_) | Self::Number(_) | Self::Bool(_)) => {
                Value::string(self.to_js_string()).loose_equals(other)
            }
            (Self::Str(_) | Self::Number(_) | Self::Bool(_), Self::Array(_)) => other.loose_equals(self),
            _ => self.strict_equals(other),
        }
    }

    /// SameValueZero, used by `includes`.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self.strict_equals(other),
        }
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inspect_nested())
    }
}

/// `Array.prototype.join`. Cycles and arrays past `MAX_RENDER_DEPTH`
/// contribute nothing, and writing stops once the text exceeds
/// `MAX_STRING_LEN`, so callers must check the length of the result.
pub fn join_array(items: &Rc<RefCell<Vec<Value>>>, sep: &str) -> String {
    let mut out = String::new();
    join_into(items, sep, &mut out, &mut Vec::new());
    out
}

fn join_into(items: &Rc<RefCell<Vec<Value>>>, sep: &str, out: &mut String, open: &mut OpenArrays) {
    let ptr = Rc::as_ptr(items);
    if open.len() >= MAX_RENDER_DEPTH || open.contains(&ptr) {
        return;
    }
    open.push(ptr);
    for (i, item) in items.borrow().iter().enumerate() {
        if out.len() > MAX_STRING_LEN {
            break;
        }
        if i > 0 {
            out.push_str(sep);
        }
        match item {
            Value::Undefined | Value::Null => {}
            Value::Array(inner) => join_into(inner, ",", out, open),
            other => out.push_str(&other.to_js_string()),
        }
    }
    open.pop();
}

fn parse_numeric(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust accepts spellings like "inf" and "nan" that JavaScript does not.
        t if t.chars().any(char::is_alphabetic) && !t.contains(['e', 'E']) => f64::NAN,
        t => t.parse().unwrap_or(f64::NAN),
    }
}

/// Format a number the way `Number.prototype.toString()` does for the
/// common cases: integers without a fraction, exponents past 1e21.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }
    format!("{n}")
}

// =============================================================================
// SCOPES
// =============================================================================

struct Binding {
    value: Value,
    mutable: bool,
}

/// Lexical scope: a frame of bindings plus an optional parent.
///
/// The global frame and each call frame are function scopes, the target of
/// `var` declarations. Blocks and loop bodies are plain children.
pub struct Scope {
    vars: HashMap<String, Binding>,
    parent: Option<Env>,
    function_scope: bool,
}

impl Scope {
    pub fn root() -> Env {
        Rc::new(RefCell::new(Self { vars: HashMap::new(), parent: None, function_scope: true }))
    }

    pub fn child(parent: &Env) -> Env {
        Rc::new(RefCell::new(Self { vars: HashMap::new(), parent: Some(parent.clone()), function_scope: false }))
    }

    /// Frame for a function call body.
    pub fn function(parent: &Env) -> Env {
        Rc::new(RefCell::new(Self { vars: HashMap::new(), parent: Some(parent.clone()), function_scope: true }))
    }
}

/// Declare `name` in `env`. `var` tolerates redeclaration; `let`/`const` do not.
pub fn declare(env: &Env, name: &str, value: Value, mutable: bool, redeclare_ok: bool) -> Result<(), EvalError> {
    let mut scope = env.borrow_mut();
    if !redeclare_ok && scope.vars.contains_key(name) {
        return Err(EvalError::Redeclared(name.to_owned()));
    }
    scope.vars.insert(name.to_owned(), Binding { value, mutable });
    Ok(())
}

/// Declare a `var` binding in the nearest enclosing function scope.
pub fn declare_var(env: &Env, name: &str, value: Value) -> Result<(), EvalError> {
    let mut target = env.clone();
    loop {
        let parent = {
            let scope = target.borrow();
            if scope.function_scope {
                None
            } else {
                scope.parent.clone()
            }
        };
        match parent {
            Some(parent) => target = parent,
            None => break,
        }
    }
    declare(&target, name, value, true, true)
}

pub fn lookup(env: &Env, name: &str) -> Option<Value> {
    let mut current = Some(env.clone());
    while let Some(scope) = current {
        let scope = scope.borrow();
        if let Some(binding) = scope.vars.get(name) {
            return Some(binding.value.clone());
        }
        current = scope.parent.clone();
    }
    None
}

pub fn assign(env: &Env, name: &str, value: Value) -> Result<(), EvalError> {
    let mut current = Some(env.clone());
    while let Some(scope) = current {
        let mut frame = scope.borrow_mut();
        if let Some(binding) = frame.vars.get_mut(name) {
            if !binding.mutable {
                return Err(EvalError::Type("Assignment to constant variable.".to_owned()));
            }
            binding.value = value;
            return Ok(());
        }
        current = frame.parent.clone();
    }
    Err(EvalError::Reference(name.to_owned()))
}
