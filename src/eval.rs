//! Evaluation of constraints under a total assignment.

use crate::model::{Constraint, Term};
use crate::reference::Var;
use crate::types::VarId;

/// A value for every variable of a model, indexed by creation order.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Assignment {
    values: Vec<i64>,
}

impl Assignment {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, id: VarId) -> i64 {
        self.values[id.index()]
    }

    pub fn set(&mut self, id: VarId, value: i64) {
        self.values[id.index()] = value;
    }

    /// Value of a handle; a negated handle evaluates to `1 - value`.
    pub fn value(&self, var: Var) -> i64 {
        let v = self.get(var.id());
        if var.is_negated() {
            1 - v
        } else {
            v
        }
    }

    /// Truth value of a 0/1 handle.
    pub fn is_true(&self, var: Var) -> bool {
        self.value(var) == 1
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

impl Term {
    pub fn eval(&self, assignment: &Assignment) -> i64 {
        match *self {
            Term::Var(v) => assignment.value(v),
            Term::Const(c) => c,
        }
    }
}

impl Constraint {
    /// Checks whether the constraint holds under the assignment.
    pub fn holds(&self, a: &Assignment) -> bool {
        match self {
            Constraint::Compare { left, rel, right } => {
                rel.holds(&a.value(*left), &right.eval(a))
            }
            Constraint::Linear {
                target,
                terms,
                offset,
            } => {
                let rhs: i128 = terms
                    .iter()
                    .map(|&(c, v)| c as i128 * a.value(v) as i128)
                    .sum::<i128>()
                    + *offset as i128;
                a.value(*target) as i128 == rhs
            }
            Constraint::MaxEq { target, vars } => {
                vars.iter().map(|&v| a.value(v)).max() == Some(a.value(*target))
            }
            Constraint::MinEq { target, vars } => {
                vars.iter().map(|&v| a.value(v)).min() == Some(a.value(*target))
            }
            Constraint::ProductEq {
                target,
                left,
                right,
            } => a.value(*target) as i128 == a.value(*left) as i128 * a.value(*right) as i128,
            Constraint::DivEq {
                target,
                numerator,
                denominator,
            } => match denominator.eval(a) {
                0 => false,
                d => a.value(*numerator).checked_div(d) == Some(a.value(*target)),
            },
            Constraint::BoolOr(lits) => lits.iter().any(|&l| a.is_true(l)),
            Constraint::BoolAnd(lits) => lits.iter().all(|&l| a.is_true(l)),
            Constraint::InDomain { var, domain } => domain.contains(a.value(*var)),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::domain::Domain;
    use crate::model::Relation;

    fn var(id: u32) -> Var {
        Var::positive(VarId::new(id))
    }

    #[test]
    fn test_negated_value() {
        let a = Assignment::new(vec![1, 0, 5]);
        assert_eq!(a.value(var(1)), 1);
        assert_eq!(a.value(-var(1)), 0);
        assert_eq!(a.value(-var(2)), 1);
        assert!(a.is_true(-var(2)));
        assert_eq!(a.value(var(3)), 5);
    }

    #[test]
    fn test_compare() {
        let a = Assignment::new(vec![3, 4]);
        assert!(Constraint::compare(var(1), Relation::Lt, var(2)).holds(&a));
        assert!(!Constraint::compare(var(1), Relation::Ge, var(2)).holds(&a));
        assert!(Constraint::compare(var(2), Relation::Eq, 4).holds(&a));
    }

    #[test]
    fn test_linear() {
        // x3 == 2*x1 - x2 + 1
        let c = Constraint::Linear {
            target: var(3),
            terms: vec![(2, var(1)), (-1, var(2))],
            offset: 1,
        };
        assert!(c.holds(&Assignment::new(vec![3, 4, 3])));
        assert!(!c.holds(&Assignment::new(vec![3, 4, 2])));
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        let c = Constraint::DivEq {
            target: var(2),
            numerator: var(1),
            denominator: Term::Const(2),
        };
        assert!(c.holds(&Assignment::new(vec![7, 3])));
        assert!(c.holds(&Assignment::new(vec![-7, -3])));
        assert!(!c.holds(&Assignment::new(vec![-7, -4])));

        let by_zero = Constraint::DivEq {
            target: var(2),
            numerator: var(1),
            denominator: Term::Const(0),
        };
        assert!(!by_zero.holds(&Assignment::new(vec![7, 0])));
    }

    #[test]
    fn test_bool_and_domain() {
        let a = Assignment::new(vec![1, 0, 4]);
        assert!(Constraint::BoolOr(vec![var(1), var(2)]).holds(&a));
        assert!(!Constraint::BoolAnd(vec![var(1), var(2)]).holds(&a));
        assert!(Constraint::BoolAnd(vec![var(1), -var(2)]).holds(&a));
        assert!(!Constraint::BoolOr(vec![]).holds(&a));
        assert!(Constraint::BoolAnd(vec![]).holds(&a));

        let d = Domain::from_values([2, 4, 6]);
        assert!(Constraint::InDomain { var: var(3), domain: d.clone() }.holds(&a));
        assert!(!Constraint::InDomain {
            var: var(3),
            domain: d.complement()
        }
        .holds(&a));
    }
}
