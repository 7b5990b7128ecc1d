//! The operator manager.
//!
//! [`Ops`] translates arithmetic, relational, boolean and membership
//! operators into either a host value (when every operand is a scalar) or a
//! fresh model variable tied to its operands by posted constraints.
//!
//! The operator families live in their own modules, each contributing an
//! `impl` block:
//!
//! - [`bounds`][crate::bounds]: domain bounds queries and constant folding,
//! - [`relational`][crate::relational]: `eq`, `ne`, `lt`, `leq`, `gt`, `geq`,
//! - [`aggregate`][crate::aggregate]: `sum`, `scaled_sum`, `max`, `min`,
//!   `exists`, `increasing` and arithmetic,
//! - [`membership`][crate::membership]: `is_in` and its typed variants,
//! - [`boolean`][crate::boolean]: `and`, `or`, `not`.
//!
//! Every operator takes the model explicitly. An `Ops` instance must only be
//! used with the model it was created for, since it owns that model's two
//! boolean constants.

use log::debug;

use crate::encoding::{StringDictionary, StringEncoding};
use crate::model::{Constraint, Model, Relation};
use crate::reference::Var;
use crate::value::Value;

/// Tunables of the operator layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpsConfig {
    /// Negate 0/1 variables through their negated handle instead of
    /// reifying `x == 0`.
    pub native_negation: bool,
    /// Declared range of results whose bounds are left to the solver
    /// (`div` and variable-by-variable `mult`).
    pub unbounded: (i64, i64),
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            native_negation: true,
            unbounded: (i32::MIN as i64, i32::MAX as i64),
        }
    }
}

#[derive(Debug)]
pub struct Ops<E = StringDictionary> {
    true_var: Var,
    false_var: Var,
    encoder: E,
    config: OpsConfig,
}

impl Ops<StringDictionary> {
    pub fn new<M: Model>(model: &mut M) -> Self {
        Self::with_config(model, OpsConfig::default())
    }

    pub fn with_config<M: Model>(model: &mut M, config: OpsConfig) -> Self {
        Self::with_encoder(model, StringDictionary::new(), config)
    }
}

impl<E: StringEncoding> Ops<E> {
    /// Creates the operator layer for `model`, allocating its two boolean
    /// constants.
    pub fn with_encoder<M: Model>(model: &mut M, encoder: E, config: OpsConfig) -> Self {
        let true_var = model.new_constant(1);
        let false_var = model.new_constant(0);
        debug!(
            "Ops(true = {}, false = {}, config = {:?})",
            true_var, false_var, config
        );
        Self {
            true_var,
            false_var,
            encoder,
            config,
        }
    }

    pub fn true_var(&self) -> Var {
        self.true_var
    }
    pub fn false_var(&self) -> Var {
        self.false_var
    }
    pub fn encoder(&self) -> &E {
        &self.encoder
    }
    pub fn config(&self) -> &OpsConfig {
        &self.config
    }

    /// One of the two boolean constants.
    pub fn constant(&self, value: bool) -> Var {
        if value {
            self.true_var
        } else {
            self.false_var
        }
    }

    /// Converts a value to a model variable.
    ///
    /// Booleans map to the shared constants; numbers and strings get a fresh
    /// fixed-domain variable.
    pub fn to_const<M: Model>(&self, model: &mut M, value: impl Into<Value>) -> Var {
        match value.into() {
            Value::Bool(b) => self.constant(b),
            Value::Var(v) => v,
            other => model.new_constant(self.code("to_const", &other)),
        }
    }

    /// Converts the result of a boolean-valued operator to a literal.
    pub fn literal(&self, value: Value) -> Var {
        match value {
            Value::Bool(b) => self.constant(b),
            Value::Var(v) => v,
            other => panic!("Expected a boolean or a variable, got {}", other.kind()),
        }
    }

    /// Integer code of a scalar, as seen by the model.
    pub(crate) fn code(&self, op: &str, value: &Value) -> i64 {
        match value {
            Value::Int(i) => *i as i64,
            Value::Long(l) => *l,
            Value::Bool(b) => *b as i64,
            Value::Str(s) => self.encoder.to_integer(s),
            Value::Var(v) => panic!("{}: expected a scalar operand, got {}", op, v),
        }
    }

    /// Allocates an indicator `b` and posts `holds` under `b` and `fails`
    /// under `~b`, so that `b` is true exactly when `holds` is.
    pub(crate) fn reify<M: Model>(&self, model: &mut M, holds: Constraint, fails: Constraint) -> Var {
        let b = model.new_bool_var("");
        debug!("reify: {} <=> {}", b, holds);
        model.add_if(holds, b);
        model.add_if(fails, -b);
        b
    }
}

/// Numeric value of an `Int` or `Long` operand.
pub(crate) fn number(op: &str, value: &Value) -> i64 {
    match value.as_long() {
        Some(n) => n,
        None => panic!("{}: expected a number, got {}", op, value.kind()),
    }
}

/// Narrows a widened intermediate back to `i64`.
///
/// Panics when the value is out of range, naming the operator.
pub(crate) fn narrow(op: &str, value: i128) -> i64 {
    match i64::try_from(value) {
        Ok(n) => n,
        Err(_) => panic!("{}: {} does not fit in a 64-bit integer", op, value),
    }
}

/// Host-side comparison of two scalars.
///
/// `Int` and `Long` compare numerically; booleans and strings compare with
/// their own kind only, and strings only for (in)equality.
pub(crate) fn compare_scalars(rel: Relation, left: &Value, right: &Value) -> bool {
    if let (Some(a), Some(b)) = (left.as_long(), right.as_long()) {
        return rel.holds(&a, &b);
    }
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => rel.holds(a, b),
        (Value::Str(a), Value::Str(b)) => {
            assert!(
                !rel.is_ordering(),
                "{}: strings only support equality",
                rel.name()
            );
            rel.holds(a.as_str(), b.as_str())
        }
        _ => panic!(
            "{}: unsupported operands {} and {}",
            rel.name(),
            left.kind(),
            right.kind()
        ),
    }
}

/// Checks whether all values are pairwise equal.
///
/// Numbers compare numerically, variables by handle.
pub fn all_equal(values: &[Value]) -> bool {
    values.windows(2).all(|w| match (w[0].as_long(), w[1].as_long()) {
        (Some(a), Some(b)) => a == b,
        _ => w[0] == w[1],
    })
}

/// Number of items in a group, as a host value.
pub fn count(values: &[Value]) -> Value {
    Value::Long(values.len() as i64)
}
