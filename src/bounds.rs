//! Domain bounds queries and constant folding.
//!
//! Folding decides a relation from operand bounds alone. It never touches the
//! model, and it only answers when the answer holds for *every* pair of values
//! in the two ranges.

use crate::model::{Model, Relation};
use crate::ops::Ops;
use crate::reference::Var;

/// Inclusive interval intersection test.
pub fn overlaps(a: (i64, i64), b: (i64, i64)) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}

/// Decides `l rel r` for all `l ∈ [left.0, left.1]`, `r ∈ [right.0, right.1]`.
///
/// Returns `None` when the ranges admit both outcomes.
pub fn fold(rel: Relation, left: (i64, i64), right: (i64, i64)) -> Option<bool> {
    let (lmin, lmax) = left;
    let (rmin, rmax) = right;
    match rel {
        Relation::Eq => {
            if lmin == lmax && rmin == rmax && lmin == rmin {
                Some(true)
            } else if !overlaps(left, right) {
                Some(false)
            } else {
                None
            }
        }
        Relation::Ne => fold(Relation::Eq, left, right).map(|b| !b),
        Relation::Lt => {
            if lmax < rmin {
                Some(true)
            } else if lmin >= rmax {
                Some(false)
            } else {
                None
            }
        }
        Relation::Le => {
            if lmax <= rmin {
                Some(true)
            } else if lmin > rmax {
                Some(false)
            } else {
                None
            }
        }
        Relation::Gt => fold(Relation::Lt, right, left),
        Relation::Ge => fold(Relation::Le, right, left),
    }
}

impl<E> Ops<E> {
    pub fn get_min<M: Model>(&self, model: &M, v: Var) -> i64 {
        model.bounds(v).0
    }

    pub fn get_max<M: Model>(&self, model: &M, v: Var) -> i64 {
        model.bounds(v).1
    }

    /// Checks whether the variable can only take one value.
    pub fn fixed<M: Model>(&self, model: &M, v: Var) -> bool {
        let (min, max) = model.bounds(v);
        min == max
    }

    /// Checks whether the bound ranges of two variables share a value.
    pub fn overlaps<M: Model>(&self, model: &M, v1: Var, v2: Var) -> bool {
        overlaps(model.bounds(v1), model.bounds(v2))
    }

    pub fn is_true<M: Model>(&self, model: &M, v: Var) -> bool {
        model.bounds(v) == (1, 1)
    }

    pub fn is_false<M: Model>(&self, model: &M, v: Var) -> bool {
        model.bounds(v) == (0, 0)
    }

    /// Checks whether the variable's domain lies inside `{0, 1}`.
    pub fn is_boolean<M: Model>(&self, model: &M, v: Var) -> bool {
        let (min, max) = model.bounds(v);
        0 <= min && max <= 1
    }

    pub(crate) fn assert_boolean<M: Model>(&self, model: &M, op: &str, v: Var) {
        assert!(
            self.is_boolean(model, v),
            "{}: operand {} is not a boolean (bounds {:?})",
            op,
            v,
            model.bounds(v)
        );
    }
}
