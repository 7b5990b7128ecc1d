use log::debug;

use crate::encoding::StringEncoding;
use crate::model::{Constraint, Model, Relation, Term};
use crate::ops::{narrow, number, Ops};
use crate::reference::Var;
use crate::value::Value;

impl<E: StringEncoding> Ops<E> {
    /// Posts `target == Σ c·v + offset` for a fresh `target`.
    ///
    /// The declared bounds of `target` are computed term by term in `i128`,
    /// taking the sign of each coefficient into account. Bounds (or an offset)
    /// outside the `i64` range panic, naming `op`.
    pub(crate) fn linear<M: Model>(
        &self,
        model: &mut M,
        op: &str,
        terms: Vec<(i64, Var)>,
        offset: i128,
    ) -> Var {
        let (mut lo, mut hi) = (offset, offset);
        for &(c, v) in &terms {
            let (min, max) = model.bounds(v);
            let (a, b) = (c as i128 * min as i128, c as i128 * max as i128);
            lo += a.min(b);
            hi += a.max(b);
        }
        let (lo, hi) = (narrow(op, lo), narrow(op, hi));
        let offset = narrow(op, offset);
        let target = model.new_int_var(lo, hi, "");
        debug!("linear: {} in [{}, {}]", target, lo, hi);
        model.add(Constraint::Linear {
            target,
            terms,
            offset,
        });
        target
    }

    /// Sum of the items.
    ///
    /// All-scalar input is summed on the host. Otherwise the scalars become
    /// the constant offset of a linear sum over the variables.
    pub fn sum<M, I>(&self, model: &mut M, items: I) -> Value
    where
        M: Model,
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut offset: i128 = 0;
        let mut terms = Vec::new();
        for item in items {
            match item.into() {
                Value::Var(v) => terms.push((1, v)),
                other => offset += number("sum", &other) as i128,
            }
        }
        debug!("sum(vars = {}, offset = {})", terms.len(), offset);
        if terms.is_empty() {
            return Value::Long(narrow("sum", offset));
        }
        Value::Var(self.linear(model, "sum", terms, offset))
    }

    /// `Σ coeffs[i] * vars[i]`.
    pub fn scaled_sum<M: Model>(&self, model: &mut M, vars: &[Var], coeffs: &[i64]) -> Var {
        assert_eq!(
            vars.len(),
            coeffs.len(),
            "scaled_sum: {} variables but {} coefficients",
            vars.len(),
            coeffs.len()
        );
        debug!("scaled_sum(vars = {:?}, coeffs = {:?})", vars, coeffs);
        let terms = coeffs.iter().copied().zip(vars.iter().copied()).collect();
        self.linear(model, "scaled_sum", terms, 0)
    }

    /// Constrains the sequence to be non-decreasing, one `<=` per adjacent pair.
    pub fn increasing<M: Model>(&self, model: &mut M, vars: &[Var]) {
        debug!("increasing(vars = {:?})", vars);
        for w in vars.windows(2) {
            model.add(Constraint::compare(w[0], Relation::Le, w[1]));
        }
    }

    /// Literal that is true iff at least one of `lits` is true.
    ///
    /// Known-true literals decide the result, known-false ones are dropped;
    /// with nothing left the result is the false constant.
    pub fn exists<M: Model>(&self, model: &mut M, lits: &[Var]) -> Var {
        debug!("exists(lits = {:?})", lits);
        let mut remaining = Vec::with_capacity(lits.len());
        for &l in lits {
            self.assert_boolean(model, "exists", l);
            if self.is_true(model, l) {
                debug!("exists: {} is true", l);
                return self.true_var();
            }
            if !self.is_false(model, l) {
                remaining.push(l);
            }
        }
        match remaining.len() {
            0 => self.false_var(),
            1 => remaining[0],
            _ => {
                let negated = remaining.iter().map(|&l| -l).collect();
                self.reify(model, Constraint::BoolOr(remaining), Constraint::BoolAnd(negated))
            }
        }
    }

    pub fn max<M, I>(&self, model: &mut M, items: I) -> Value
    where
        M: Model,
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.extremum(model, true, items.into_iter().map(Into::into).collect())
    }

    pub fn min<M, I>(&self, model: &mut M, items: I) -> Value
    where
        M: Model,
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.extremum(model, false, items.into_iter().map(Into::into).collect())
    }

    fn extremum<M: Model>(&self, model: &mut M, is_max: bool, items: Vec<Value>) -> Value {
        let op = if is_max { "max" } else { "min" };
        debug!("{}(items = {})", op, items.len());

        if items.iter().all(|v| !v.is_symbolic()) {
            let numbers = items.iter().map(|v| number(op, v));
            let result = if is_max { numbers.max() } else { numbers.min() };
            return match result {
                Some(n) => Value::Long(n),
                None => panic!("{}: empty list", op),
            };
        }

        let vars: Vec<Var> = items
            .iter()
            .map(|v| match v {
                Value::Var(var) => *var,
                other => model.new_constant(number(op, other)),
            })
            .collect();

        // The extremum of the operands always lies in the envelope of their ranges.
        let mut lo = i64::MAX;
        let mut hi = i64::MIN;
        for &v in &vars {
            let (min, max) = model.bounds(v);
            lo = lo.min(min);
            hi = hi.max(max);
        }
        let target = model.new_int_var(lo, hi, "");
        debug!("{}: {} in [{}, {}]", op, target, lo, hi);
        if is_max {
            model.add(Constraint::MaxEq { target, vars });
        } else {
            model.add(Constraint::MinEq { target, vars });
        }
        Value::Var(target)
    }

    /// Integer division, truncating toward zero.
    ///
    /// The result of a symbolic division is declared over the configured
    /// unbounded range; narrowing it is left to the solver.
    pub fn div<M: Model>(&self, model: &mut M, left: impl Into<Value>, right: impl Into<Value>) -> Value {
        let (left, right) = (left.into(), right.into());
        debug!("div(left = {}, right = {})", left, right);
        if right.is_symbolic() {
            panic!("div: unsupported operands {} and {}", left.kind(), right.kind());
        }
        let d = number("div", &right);
        assert_ne!(d, 0, "div: division by zero");
        match left {
            Value::Var(v) => {
                let (lo, hi) = self.config().unbounded;
                let target = model.new_int_var(lo, hi, "");
                model.add(Constraint::DivEq {
                    target,
                    numerator: v,
                    denominator: Term::Const(d),
                });
                Value::Var(target)
            }
            other => match number("div", &other).checked_div(d) {
                Some(q) => Value::Long(q),
                None => panic!("div: {} / {} does not fit in a 64-bit integer", other, d),
            },
        }
    }

    pub fn plus<M: Model>(&self, model: &mut M, left: impl Into<Value>, right: impl Into<Value>) -> Value {
        let (left, right) = (left.into(), right.into());
        debug!("plus(left = {}, right = {})", left, right);
        match (left, right) {
            (Value::Var(l), Value::Var(r)) => {
                Value::Var(self.linear(model, "plus", vec![(1, l), (1, r)], 0))
            }
            (Value::Var(v), c) | (c, Value::Var(v)) => {
                let offset = number("plus", &c) as i128;
                Value::Var(self.linear(model, "plus", vec![(1, v)], offset))
            }
            (l, r) => {
                let sum = number("plus", &l) as i128 + number("plus", &r) as i128;
                Value::Long(narrow("plus", sum))
            }
        }
    }

    pub fn minus<M: Model>(&self, model: &mut M, left: impl Into<Value>, right: impl Into<Value>) -> Value {
        let (left, right) = (left.into(), right.into());
        debug!("minus(left = {}, right = {})", left, right);
        match (left, right) {
            (Value::Var(l), Value::Var(r)) => {
                Value::Var(self.linear(model, "minus", vec![(1, l), (-1, r)], 0))
            }
            (Value::Var(v), c) => {
                let offset = -(number("minus", &c) as i128);
                Value::Var(self.linear(model, "minus", vec![(1, v)], offset))
            }
            (c, Value::Var(v)) => {
                let offset = number("minus", &c) as i128;
                Value::Var(self.linear(model, "minus", vec![(-1, v)], offset))
            }
            (l, r) => {
                let diff = number("minus", &l) as i128 - number("minus", &r) as i128;
                Value::Long(narrow("minus", diff))
            }
        }
    }

    pub fn mult<M: Model>(&self, model: &mut M, left: impl Into<Value>, right: impl Into<Value>) -> Value {
        let (left, right) = (left.into(), right.into());
        debug!("mult(left = {}, right = {})", left, right);
        match (left, right) {
            (Value::Var(l), Value::Var(r)) => {
                let (lo, hi) = self.config().unbounded;
                let target = model.new_int_var(lo, hi, "");
                model.add(Constraint::ProductEq {
                    target,
                    left: l,
                    right: r,
                });
                Value::Var(target)
            }
            (Value::Var(v), c) | (c, Value::Var(v)) => {
                Value::Var(self.linear(model, "mult", vec![(number("mult", &c), v)], 0))
            }
            (l, r) => {
                let product = number("mult", &l) as i128 * number("mult", &r) as i128;
                Value::Long(narrow("mult", product))
            }
        }
    }
}
