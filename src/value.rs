use std::fmt;

use crate::reference::Var;

/// Operand of an operator: a host scalar or a symbolic variable.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Value {
    Int(i32),
    Long(i64),
    Bool(bool),
    Str(String),
    Var(Var),
}

impl Value {
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Value::Var(_))
    }

    pub fn as_var(&self) -> Option<Var> {
        match *self {
            Value::Var(v) => Some(v),
            _ => None,
        }
    }

    /// Numeric value of an `Int` or `Long`.
    pub fn as_long(&self) -> Option<i64> {
        match *self {
            Value::Int(i) => Some(i as i64),
            Value::Long(l) => Some(l),
            _ => None,
        }
    }

    /// Kind name, as used in panics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::Var(_) => "var",
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Var> for Value {
    fn from(var: Var) -> Self {
        Value::Var(var)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Long(l) => write!(f, "{}L", l),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Var(v) => write!(f, "{}", v),
        }
    }
}
