use log::debug;

use crate::bounds::fold;
use crate::encoding::StringEncoding;
use crate::model::{Constraint, Model, Relation};
use crate::ops::{compare_scalars, Ops};
use crate::reference::Var;
use crate::value::Value;

impl<E: StringEncoding> Ops<E> {
    pub fn eq<M: Model>(&self, model: &mut M, left: impl Into<Value>, right: impl Into<Value>) -> Value {
        self.compare(model, Relation::Eq, left.into(), right.into())
    }

    pub fn ne<M: Model>(&self, model: &mut M, left: impl Into<Value>, right: impl Into<Value>) -> Value {
        self.compare(model, Relation::Ne, left.into(), right.into())
    }

    pub fn lt<M: Model>(&self, model: &mut M, left: impl Into<Value>, right: impl Into<Value>) -> Value {
        self.compare(model, Relation::Lt, left.into(), right.into())
    }

    pub fn leq<M: Model>(&self, model: &mut M, left: impl Into<Value>, right: impl Into<Value>) -> Value {
        self.compare(model, Relation::Le, left.into(), right.into())
    }

    pub fn gt<M: Model>(&self, model: &mut M, left: impl Into<Value>, right: impl Into<Value>) -> Value {
        self.compare(model, Relation::Gt, left.into(), right.into())
    }

    pub fn geq<M: Model>(&self, model: &mut M, left: impl Into<Value>, right: impl Into<Value>) -> Value {
        self.compare(model, Relation::Ge, left.into(), right.into())
    }

    /// Applies a relation to two operands of any kind.
    ///
    /// Two scalars give a `Value::Bool` computed on the host. Otherwise the
    /// result is a `Value::Var` literal: one of the boolean constants when the
    /// operand bounds decide the relation, or a freshly reified indicator.
    ///
    /// Strings are compared through their integer codes and only support
    /// `eq`/`ne`. Booleans compared against a variable count as `0`/`1`.
    pub fn compare<M: Model>(&self, model: &mut M, rel: Relation, left: Value, right: Value) -> Value {
        debug!("{}(left = {}, right = {})", rel.name(), left, right);
        match (&left, &right) {
            (Value::Var(l), Value::Var(r)) => Value::Var(self.compare_vars(model, rel, *l, *r)),
            (Value::Var(l), _) => {
                let c = self.const_operand(rel, &right);
                Value::Var(self.compare_const(model, rel, *l, c))
            }
            (_, Value::Var(r)) => {
                let c = self.const_operand(rel, &left);
                Value::Var(self.compare_const(model, rel.flip(), *r, c))
            }
            _ => Value::Bool(compare_scalars(rel, &left, &right)),
        }
    }

    fn const_operand(&self, rel: Relation, value: &Value) -> i64 {
        if let Value::Str(_) = value {
            assert!(
                !rel.is_ordering(),
                "{}: strings only support equality",
                rel.name()
            );
        }
        self.code(rel.name(), value)
    }

    /// Literal for `var rel c`.
    pub(crate) fn compare_const<M: Model>(&self, model: &mut M, rel: Relation, var: Var, c: i64) -> Var {
        let bounds = model.bounds(var);
        if let Some(b) = fold(rel, bounds, (c, c)) {
            debug!("{}: {} {} {} folds to {} (bounds {:?})", rel.name(), var, rel, c, b, bounds);
            return self.constant(b);
        }
        self.reify(
            model,
            Constraint::compare(var, rel, c),
            Constraint::compare(var, rel.negate(), c),
        )
    }

    /// Literal for `left rel right`.
    pub(crate) fn compare_vars<M: Model>(&self, model: &mut M, rel: Relation, left: Var, right: Var) -> Var {
        if left == right {
            debug!("{}: same operand {}", rel.name(), left);
            return self.constant(rel.holds(&0, &0));
        }
        let lb = model.bounds(left);
        let rb = model.bounds(right);
        if let Some(b) = fold(rel, lb, rb) {
            debug!(
                "{}: {} {} {} folds to {} (bounds {:?} and {:?})",
                rel.name(),
                left,
                rel,
                right,
                b,
                lb,
                rb
            );
            return self.constant(b);
        }
        self.reify(
            model,
            Constraint::compare(left, rel, right),
            Constraint::compare(left, rel.negate(), right),
        )
    }
}
