use log::debug;

use crate::encoding::StringEncoding;
use crate::model::{Constraint, Model, Relation};
use crate::ops::Ops;
use crate::reference::Var;
use crate::value::Value;

impl<E: StringEncoding> Ops<E> {
    pub fn or<M: Model>(&self, model: &mut M, left: impl Into<Value>, right: impl Into<Value>) -> Value {
        let (left, right) = (left.into(), right.into());
        debug!("or(left = {}, right = {})", left, right);
        match (left, right) {
            (Value::Bool(a), Value::Bool(b)) => Value::Bool(a || b),
            (Value::Bool(a), Value::Var(v)) | (Value::Var(v), Value::Bool(a)) => {
                Value::Var(self.or_const(model, v, a))
            }
            (Value::Var(l), Value::Var(r)) => Value::Var(self.or_vars(model, l, r)),
            (l, r) => panic!("or: unsupported operands {} and {}", l.kind(), r.kind()),
        }
    }

    pub fn and<M: Model>(&self, model: &mut M, left: impl Into<Value>, right: impl Into<Value>) -> Value {
        let (left, right) = (left.into(), right.into());
        debug!("and(left = {}, right = {})", left, right);
        match (left, right) {
            (Value::Bool(a), Value::Bool(b)) => Value::Bool(a && b),
            (Value::Bool(a), Value::Var(v)) | (Value::Var(v), Value::Bool(a)) => {
                Value::Var(self.and_const(model, v, a))
            }
            (Value::Var(l), Value::Var(r)) => Value::Var(self.and_vars(model, l, r)),
            (l, r) => panic!("and: unsupported operands {} and {}", l.kind(), r.kind()),
        }
    }

    /// Negation.
    ///
    /// A 0/1 variable is negated through its negated handle when
    /// [`native_negation`][crate::ops::OpsConfig::native_negation] is set;
    /// any other variable `x` is negated as the reified `x == 0`.
    pub fn not<M: Model>(&self, model: &mut M, value: impl Into<Value>) -> Value {
        let value = value.into();
        debug!("not(value = {})", value);
        match value {
            Value::Bool(b) => Value::Bool(!b),
            Value::Var(v) => Value::Var(self.not_var(model, v)),
            other => panic!("not: unsupported operand {}", other.kind()),
        }
    }

    fn not_var<M: Model>(&self, model: &mut M, v: Var) -> Var {
        if self.is_true(model, v) {
            return self.false_var();
        }
        if self.is_false(model, v) {
            return self.true_var();
        }
        if self.config().native_negation && self.is_boolean(model, v) {
            return -v;
        }
        self.compare_const(model, Relation::Eq, v, 0)
    }

    fn or_const<M: Model>(&self, model: &M, v: Var, a: bool) -> Var {
        self.assert_boolean(model, "or", v);
        if a || self.is_true(model, v) {
            return self.true_var();
        }
        if self.is_false(model, v) {
            return self.false_var();
        }
        v
    }

    fn and_const<M: Model>(&self, model: &M, v: Var, a: bool) -> Var {
        self.assert_boolean(model, "and", v);
        if !a || self.is_false(model, v) {
            return self.false_var();
        }
        if self.is_true(model, v) {
            return self.true_var();
        }
        v
    }

    fn or_vars<M: Model>(&self, model: &mut M, l: Var, r: Var) -> Var {
        if self.is_true(model, l) || self.is_true(model, r) {
            return self.true_var();
        }
        if self.is_false(model, l) && self.is_false(model, r) {
            return self.false_var();
        }
        if self.is_false(model, l) || l == r {
            return r;
        }
        if self.is_false(model, r) {
            return l;
        }
        if l == -r {
            return self.true_var();
        }
        self.assert_boolean(model, "or", l);
        self.assert_boolean(model, "or", r);
        self.reify(
            model,
            Constraint::BoolOr(vec![l, r]),
            Constraint::BoolAnd(vec![-l, -r]),
        )
    }

    fn and_vars<M: Model>(&self, model: &mut M, l: Var, r: Var) -> Var {
        if self.is_false(model, l) || self.is_false(model, r) {
            return self.false_var();
        }
        if self.is_true(model, l) && self.is_true(model, r) {
            return self.true_var();
        }
        if self.is_true(model, l) || l == r {
            return r;
        }
        if self.is_true(model, r) {
            return l;
        }
        if l == -r {
            return self.false_var();
        }
        self.assert_boolean(model, "and", l);
        self.assert_boolean(model, "and", r);
        self.reify(
            model,
            Constraint::BoolAnd(vec![l, r]),
            Constraint::BoolOr(vec![-l, -r]),
        )
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::cp_model::CpModel;
    use crate::ops::OpsConfig;

    fn setup() -> (CpModel, Ops) {
        let mut model = CpModel::new();
        let ops = Ops::new(&mut model);
        (model, ops)
    }

    #[test]
    fn test_scalars() {
        let (mut model, ops) = setup();
        assert_eq!(ops.or(&mut model, false, true), Value::Bool(true));
        assert_eq!(ops.and(&mut model, false, true), Value::Bool(false));
        assert_eq!(ops.not(&mut model, false), Value::Bool(true));
    }

    #[test]
    fn test_or_short_circuit() {
        let (mut model, ops) = setup();
        let x = model.new_bool_var("x");
        let t = Value::Var(ops.true_var());
        let f = Value::Var(ops.false_var());

        assert_eq!(ops.or(&mut model, true, x), t);
        assert_eq!(ops.or(&mut model, x, false), Value::Var(x));
        assert_eq!(ops.or(&mut model, ops.false_var(), false), f);
        assert_eq!(ops.or(&mut model, x, ops.true_var()), t);
        assert_eq!(ops.or(&mut model, ops.false_var(), x), Value::Var(x));
        assert_eq!(ops.or(&mut model, x, x), Value::Var(x));
        assert_eq!(ops.or(&mut model, x, -x), t);
        assert_eq!(model.num_constraints(), 0);
    }

    #[test]
    fn test_and_short_circuit() {
        let (mut model, ops) = setup();
        let x = model.new_bool_var("x");
        let t = Value::Var(ops.true_var());
        let f = Value::Var(ops.false_var());

        assert_eq!(ops.and(&mut model, false, x), f);
        assert_eq!(ops.and(&mut model, x, true), Value::Var(x));
        assert_eq!(ops.and(&mut model, ops.true_var(), true), t);
        assert_eq!(ops.and(&mut model, x, ops.false_var()), f);
        assert_eq!(ops.and(&mut model, ops.true_var(), x), Value::Var(x));
        assert_eq!(ops.and(&mut model, x, -x), f);
        assert_eq!(model.num_constraints(), 0);
    }

    #[test]
    fn test_reified_pairs() {
        let (mut model, ops) = setup();
        let x = model.new_bool_var("x");
        let y = model.new_bool_var("y");

        let o = ops.or(&mut model, x, y).as_var().unwrap();
        assert_eq!(model.constraints()[0].constraint, Constraint::BoolOr(vec![x, y]));
        assert_eq!(model.constraints()[0].guard, Some(o));
        assert_eq!(model.constraints()[1].constraint, Constraint::BoolAnd(vec![-x, -y]));
        assert_eq!(model.constraints()[1].guard, Some(-o));

        let a = ops.and(&mut model, x, y).as_var().unwrap();
        assert_eq!(model.constraints()[2].constraint, Constraint::BoolAnd(vec![x, y]));
        assert_eq!(model.constraints()[2].guard, Some(a));
        assert_eq!(model.constraints()[3].constraint, Constraint::BoolOr(vec![-x, -y]));
        assert_eq!(model.constraints()[3].guard, Some(-a));
    }

    #[test]
    #[should_panic(expected = "or: operand")]
    fn test_or_rejects_non_boolean() {
        let (mut model, ops) = setup();
        let x = model.new_bool_var("x");
        let v = model.new_int_var(0, 5, "v");
        ops.or(&mut model, x, v);
    }

    #[test]
    #[should_panic(expected = "or: operand")]
    fn test_or_const_rejects_non_boolean() {
        let (mut model, ops) = setup();
        let v = model.new_int_var(0, 5, "v");
        ops.or(&mut model, false, v);
    }

    #[test]
    #[should_panic(expected = "and: operand")]
    fn test_and_const_rejects_non_boolean() {
        let (mut model, ops) = setup();
        let v = model.new_int_var(0, 5, "v");
        ops.and(&mut model, v, true);
    }

    #[test]
    fn test_not_native() {
        let (mut model, ops) = setup();
        let x = model.new_bool_var("x");
        assert_eq!(ops.not(&mut model, x), Value::Var(-x));
        assert_eq!(ops.not(&mut model, -x), Value::Var(x));
        assert_eq!(ops.not(&mut model, ops.true_var()), Value::Var(ops.false_var()));
        assert_eq!(model.num_constraints(), 0);
    }

    #[test]
    fn test_not_reified() {
        let mut model = CpModel::new();
        let config = OpsConfig {
            native_negation: false,
            ..OpsConfig::default()
        };
        let ops = Ops::with_config(&mut model, config);
        let x = model.new_bool_var("x");
        let n = ops.not(&mut model, x).as_var().unwrap();
        assert_eq!(
            model.constraints()[0].constraint,
            Constraint::compare(x, Relation::Eq, 0)
        );
        assert_eq!(model.constraints()[0].guard, Some(n));
    }

    #[test]
    fn test_not_integer_is_eq_zero() {
        let (mut model, ops) = setup();
        let v = model.new_int_var(0, 5, "v");
        ops.not(&mut model, v);
        assert_eq!(
            model.constraints()[0].constraint,
            Constraint::compare(v, Relation::Eq, 0)
        );
        let w = model.new_int_var(3, 5, "w");
        assert_eq!(ops.not(&mut model, w), Value::Var(ops.false_var()));
    }
}
