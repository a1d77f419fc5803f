//! Runtime values. Numbers split into `Int`/`Float` (the lexer already
//! tells them apart at the token level); everything else mirrors the
//! original's single `Value` hierarchy (`Number`, `String`, `List`,
//! `Function`, `BuiltInFunction`).

use std::cell::RefCell;
use std::fmt::{self, Display};
use std::rc::Rc;

use crate::ast::Node;
use crate::context::Context;
use crate::environment::Scope;
use crate::error::RuntimeError;
use crate::position::Position;

/// A user-defined function: its own AST body plus the scope it closed
/// over. The scope is shared (`Rc<RefCell<_>>`), not snapshotted, so
/// mutations made by later calls are visible to earlier closures over the
/// same scope.
#[derive(Debug, Clone)]
pub struct FunctionValue {
    pub name: String,
    pub body: Rc<Node>,
    pub arg_names: Vec<String>,
    pub should_auto_return: bool,
    pub closure: Rc<RefCell<Scope>>,
    pub defining_context: Rc<Context>,
    pub pos_start: Position,
    pub pos_end: Position,
}

/// The fixed catalogue of built-ins (`spec.md` §6); dispatched by name in
/// `interpreter::builtins`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltIn {
    Print,
    PrintRet,
    Input,
    InputInt,
    Clear,
    IsNum,
    IsStr,
    IsList,
    IsFun,
    Append,
    Pop,
    Ccat,
    Len,
    Exec,
}

impl BuiltIn {
    pub fn name(&self) -> &'static str {
        match self {
            BuiltIn::Print => "print",
            BuiltIn::PrintRet => "print_ret",
            BuiltIn::Input => "input",
            BuiltIn::InputInt => "input_int",
            BuiltIn::Clear => "clear",
            BuiltIn::IsNum => "isnum",
            BuiltIn::IsStr => "isstr",
            BuiltIn::IsList => "islist",
            BuiltIn::IsFun => "isfun",
            BuiltIn::Append => "append",
            BuiltIn::Pop => "pop",
            BuiltIn::Ccat => "ccat",
            BuiltIn::Len => "len",
            BuiltIn::Exec => "exec",
        }
    }

    pub fn arg_names(&self) -> &'static [&'static str] {
        match self {
            BuiltIn::Print | BuiltIn::PrintRet => &["value"],
            BuiltIn::Input => &[],
            BuiltIn::InputInt => &[],
            BuiltIn::Clear => &[],
            BuiltIn::IsNum | BuiltIn::IsStr | BuiltIn::IsList | BuiltIn::IsFun => &["value"],
            BuiltIn::Append => &["list", "value"],
            BuiltIn::Pop => &["list", "index"],
            BuiltIn::Ccat => &["list_a", "list_b"],
            BuiltIn::Len => &["list"],
            BuiltIn::Exec => &["file_name"],
        }
    }
}

#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    List(Rc<RefCell<Vec<Value>>>),
    Function(Rc<FunctionValue>),
    BuiltIn(BuiltIn),
}

impl Value {
    pub fn null() -> Self {
        Value::Int(0)
    }

    pub fn bool(b: bool) -> Self {
        Value::Int(if b { 1 } else { 0 })
    }

    /// Truthiness: any nonzero number, any nonempty string, any function —
    /// and, notably, every list, including an empty one.
    pub fn is_true(&self) -> bool {
        match self {
            Value::Int(v) => *v != 0,
            Value::Float(v) => *v != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::List(_) => true,
            Value::Function(_) | Value::BuiltIn(_) => true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Function(_) | Value::BuiltIn(_) => "function",
        }
    }

    fn illegal_op(
        &self,
        other: &Value,
        pos_start: Position,
        pos_end: Position,
        context: Rc<Context>,
    ) -> RuntimeError {
        RuntimeError::new(
            pos_start,
            pos_end,
            format!(
                "Illegal operation between {} and {}",
                self.type_name(),
                other.type_name()
            ),
            context,
        )
    }

    pub fn added_to(
        &self,
        other: &Value,
        pos_start: Position,
        pos_end: Position,
        context: Rc<Context>,
    ) -> Result<Value, RuntimeError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(*b))),
            (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as f64 + b)),
            (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a + *b as f64)),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
            (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
            (Value::List(a), other) => {
                let mut new_list = a.borrow().clone();
                new_list.push(other.clone());
                Ok(Value::List(Rc::new(RefCell::new(new_list))))
            }
            _ => Err(self.illegal_op(other, pos_start, pos_end, context)),
        }
    }

    pub fn subbed_by(
        &self,
        other: &Value,
        pos_start: Position,
        pos_end: Position,
        context: Rc<Context>,
    ) -> Result<Value, RuntimeError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_sub(*b))),
            (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as f64 - b)),
            (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a - *b as f64)),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a - b)),
            (Value::List(a), Value::Int(idx)) => {
                let mut new_list = a.borrow().clone();
                let i = *idx;
                if i < 0 || i as usize >= new_list.len() {
                    return Err(RuntimeError::new(
                        pos_start,
                        pos_end,
                        "Element at this index could not be removed from list because index is out of bounds",
                        context,
                    ));
                }
                new_list.remove(i as usize);
                Ok(Value::List(Rc::new(RefCell::new(new_list))))
            }
            _ => Err(self.illegal_op(other, pos_start, pos_end, context)),
        }
    }

    pub fn multed_by(
        &self,
        other: &Value,
        pos_start: Position,
        pos_end: Position,
        context: Rc<Context>,
    ) -> Result<Value, RuntimeError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_mul(*b))),
            (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as f64 * b)),
            (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a * *b as f64)),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a * b)),
            (Value::String(s), Value::Int(n)) => Ok(Value::String(s.repeat((*n).max(0) as usize))),
            (Value::List(a), Value::List(b)) => {
                let mut new_list = a.borrow().clone();
                new_list.extend(b.borrow().iter().cloned());
                Ok(Value::List(Rc::new(RefCell::new(new_list))))
            }
            _ => Err(self.illegal_op(other, pos_start, pos_end, context)),
        }
    }

    pub fn dived_by(
        &self,
        other: &Value,
        pos_start: Position,
        pos_end: Position,
        context: Rc<Context>,
    ) -> Result<Value, RuntimeError> {
        match (self, other) {
            (Value::Int(_) | Value::Float(_), Value::Int(0)) => Err(RuntimeError::new(
                pos_start,
                pos_end,
                "Division by zero",
                context,
            )),
            (Value::Int(_) | Value::Float(_), Value::Float(b)) if *b == 0.0 => Err(
                RuntimeError::new(pos_start, pos_end, "Division by zero", context),
            ),
            (Value::Int(a), Value::Int(b)) => Ok(Value::Float(*a as f64 / *b as f64)),
            (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as f64 / b)),
            (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a / *b as f64)),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a / b)),
            (Value::List(a), Value::Int(idx)) => {
                let list = a.borrow();
                let i = *idx;
                if i < 0 || i as usize >= list.len() {
                    return Err(RuntimeError::new(
                        pos_start,
                        pos_end,
                        "Element at this index could not be retrieved from list because index is out of bounds",
                        context,
                    ));
                }
                Ok(list[i as usize].clone())
            }
            _ => Err(self.illegal_op(other, pos_start, pos_end, context)),
        }
    }

    pub fn moded_by(
        &self,
        other: &Value,
        pos_start: Position,
        pos_end: Position,
        context: Rc<Context>,
    ) -> Result<Value, RuntimeError> {
        match (self, other) {
            (Value::Int(_) | Value::Float(_), Value::Int(0)) => Err(RuntimeError::new(
                pos_start,
                pos_end,
                "Division by zero",
                context,
            )),
            (Value::Int(_) | Value::Float(_), Value::Float(b)) if *b == 0.0 => Err(
                RuntimeError::new(pos_start, pos_end, "Division by zero", context),
            ),
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a % b)),
            (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as f64 % b)),
            (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a % *b as f64)),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a % b)),
            _ => Err(self.illegal_op(other, pos_start, pos_end, context)),
        }
    }

    pub fn powed_by(
        &self,
        other: &Value,
        pos_start: Position,
        pos_end: Position,
        context: Rc<Context>,
    ) -> Result<Value, RuntimeError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) if *b >= 0 && *b <= u32::MAX as i64 => {
                Ok(Value::Int(a.wrapping_pow(*b as u32)))
            }
            (Value::Int(a), Value::Int(b)) => Ok(Value::Float((*a as f64).powf(*b as f64))),
            (Value::Int(a), Value::Float(b)) => Ok(Value::Float((*a as f64).powf(*b))),
            (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a.powf(*b as f64))),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a.powf(*b))),
            _ => Err(self.illegal_op(other, pos_start, pos_end, context)),
        }
    }

    fn numeric_cmp(&self, other: &Value) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            _ => None,
        }
    }

    fn values_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.numeric_cmp(other) == Some(std::cmp::Ordering::Equal)
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.values_equal(y))
            }
            _ => false,
        }
    }

    pub fn get_comparison_eq(&self, other: &Value) -> Value {
        Value::bool(self.values_equal(other))
    }

    pub fn get_comparison_ne(&self, other: &Value) -> Value {
        Value::bool(!self.values_equal(other))
    }

    pub fn get_comparison_lt(
        &self,
        other: &Value,
        pos_start: Position,
        pos_end: Position,
        context: Rc<Context>,
    ) -> Result<Value, RuntimeError> {
        self.numeric_cmp(other)
            .map(|o| Value::bool(o.is_lt()))
            .ok_or_else(|| self.illegal_op(other, pos_start, pos_end, context))
    }

    pub fn get_comparison_gt(
        &self,
        other: &Value,
        pos_start: Position,
        pos_end: Position,
        context: Rc<Context>,
    ) -> Result<Value, RuntimeError> {
        self.numeric_cmp(other)
            .map(|o| Value::bool(o.is_gt()))
            .ok_or_else(|| self.illegal_op(other, pos_start, pos_end, context))
    }

    pub fn get_comparison_lte(
        &self,
        other: &Value,
        pos_start: Position,
        pos_end: Position,
        context: Rc<Context>,
    ) -> Result<Value, RuntimeError> {
        self.numeric_cmp(other)
            .map(|o| Value::bool(o.is_le()))
            .ok_or_else(|| self.illegal_op(other, pos_start, pos_end, context))
    }

    pub fn get_comparison_gte(
        &self,
        other: &Value,
        pos_start: Position,
        pos_end: Position,
        context: Rc<Context>,
    ) -> Result<Value, RuntimeError> {
        self.numeric_cmp(other)
            .map(|o| Value::bool(o.is_ge()))
            .ok_or_else(|| self.illegal_op(other, pos_start, pos_end, context))
    }

    pub fn anded_by(&self, other: &Value) -> Value {
        Value::bool(self.is_true() && other.is_true())
    }

    pub fn ored_by(&self, other: &Value) -> Value {
        Value::bool(self.is_true() || other.is_true())
    }

    pub fn notted(&self) -> Value {
        Value::bool(!self.is_true())
    }

    /// The bracketed, quote-preserving rendering used for debug display
    /// (`isnum(1)` etc. never see this — only a human staring at a value).
    pub fn debug_render(&self) -> String {
        match self {
            Value::String(s) => format!("\"{s}\""),
            Value::List(l) => {
                let items: Vec<String> = l.borrow().iter().map(Value::debug_render).collect();
                format!("[{}]", items.join(", "))
            }
            other => other.to_string(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(l) => {
                let items: Vec<String> = l.borrow().iter().map(Value::to_string).collect();
                write!(f, "{}", items.join(", "))
            }
            Value::Function(func) => write!(f, "<function {}>", func.name),
            Value::BuiltIn(b) => write!(f, "<built-in function {}>", b.name()),
        }
    }
}
