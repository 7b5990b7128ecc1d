use log::debug;

use crate::domain::Domain;
use crate::encoding::StringEncoding;
use crate::model::{Constraint, Model, Relation};
use crate::ops::{compare_scalars, Ops};
use crate::reference::Var;
use crate::value::Value;

impl<E: StringEncoding> Ops<E> {
    /// Membership of `left` in `set`.
    ///
    /// - all scalars: host containment test, giving a `Value::Bool`;
    /// - empty set: the false constant;
    /// - one element: same as [`eq`][Ops::eq];
    /// - a variable against scalars: reified domain containment;
    /// - otherwise: the disjunction of the pointwise equalities.
    pub fn is_in<M, I>(&self, model: &mut M, left: impl Into<Value>, set: I) -> Value
    where
        M: Model,
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let left = left.into();
        let set: Vec<Value> = set.into_iter().map(Into::into).collect();
        debug!("in(left = {}, set.len = {})", left, set.len());
        if !left.is_symbolic() && set.iter().all(|v| !v.is_symbolic()) {
            return Value::Bool(set.iter().any(|v| compare_scalars(Relation::Eq, &left, v)));
        }
        Value::Var(self.in_symbolic(model, left, set))
    }

    pub fn in_integers<M: Model>(&self, model: &mut M, var: Var, set: &[i64]) -> Var {
        let set = set.iter().map(|&x| Value::Long(x)).collect();
        self.in_symbolic(model, Value::Var(var), set)
    }

    pub fn in_strings<M: Model>(&self, model: &mut M, var: Var, set: &[&str]) -> Var {
        let set = set.iter().map(|&s| Value::from(s)).collect();
        self.in_symbolic(model, Value::Var(var), set)
    }

    pub fn in_vars<M: Model>(&self, model: &mut M, var: Var, set: &[Var]) -> Var {
        let set = set.iter().map(|&v| Value::Var(v)).collect();
        self.in_symbolic(model, Value::Var(var), set)
    }

    fn in_symbolic<M: Model>(&self, model: &mut M, left: Value, mut set: Vec<Value>) -> Var {
        if set.is_empty() {
            debug!("in: empty set");
            return self.false_var();
        }
        if set.len() == 1 {
            let right = set.remove(0);
            let eq = self.compare(model, Relation::Eq, left, right);
            return self.literal(eq);
        }
        if let Value::Var(var) = left {
            if set.iter().all(|v| !v.is_symbolic()) {
                let domain = Domain::from_values(set.iter().map(|v| self.code("in", v)));
                return self.in_domain(model, var, domain);
            }
        }
        let lits: Vec<Var> = set
            .into_iter()
            .map(|v| {
                let eq = self.compare(model, Relation::Eq, left.clone(), v);
                self.literal(eq)
            })
            .collect();
        self.exists(model, &lits)
    }

    /// Literal for `var ∈ domain`.
    ///
    /// Folds against the full domain of `var`, holes included.
    fn in_domain<M: Model>(&self, model: &mut M, var: Var, domain: Domain) -> Var {
        let current = model.domain(var);
        if !current.intersects(&domain) {
            debug!("in: {} in {} misses {}", var, current, domain);
            return self.false_var();
        }
        if current.is_subset(&domain) {
            debug!("in: {} in {} lies inside {}", var, current, domain);
            return self.true_var();
        }
        let complement = domain.complement();
        self.reify(
            model,
            Constraint::InDomain { var, domain },
            Constraint::InDomain {
                var,
                domain: complement,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::cp_model::CpModel;

    fn setup() -> (CpModel, Ops) {
        let mut model = CpModel::new();
        let ops = Ops::new(&mut model);
        (model, ops)
    }

    #[test]
    fn test_scalar_membership() {
        let (mut model, ops) = setup();
        assert_eq!(ops.is_in(&mut model, 3, [1, 2, 3]), Value::Bool(true));
        assert_eq!(ops.is_in(&mut model, 4i64, [1i64, 2]), Value::Bool(false));
        assert_eq!(ops.is_in(&mut model, "b", ["a", "b"]), Value::Bool(true));
        assert_eq!(ops.is_in(&mut model, 1, Vec::<Value>::new()), Value::Bool(false));
        assert_eq!(model.num_constraints(), 0);
    }

    #[test]
    fn test_empty_and_singleton() {
        let (mut model, ops) = setup();
        let v = model.new_int_var(0, 9, "v");
        assert_eq!(ops.in_integers(&mut model, v, &[]), ops.false_var());
        assert_eq!(model.num_constraints(), 0);

        let b = ops.in_integers(&mut model, v, &[4]);
        assert_eq!(model.num_constraints(), 2);
        assert_eq!(
            model.constraints()[0].constraint,
            Constraint::compare(v, Relation::Eq, 4)
        );
        assert_eq!(model.constraints()[0].guard, Some(b));

        // Singleton outside the range folds like `eq`.
        assert_eq!(ops.in_integers(&mut model, v, &[42]), ops.false_var());
    }

    #[test]
    fn test_literal_set_reifies_domain() {
        let (mut model, ops) = setup();
        let v = model.new_int_var(0, 9, "v");
        let b = ops.in_integers(&mut model, v, &[5, 1, 3]);
        let domain = Domain::from_values([1, 3, 5]);
        assert_eq!(
            model.constraints()[0].constraint,
            Constraint::InDomain {
                var: v,
                domain: domain.clone()
            }
        );
        assert_eq!(model.constraints()[0].guard, Some(b));
        assert_eq!(
            model.constraints()[1].constraint,
            Constraint::InDomain {
                var: v,
                domain: domain.complement()
            }
        );
        assert_eq!(model.constraints()[1].guard, Some(-b));
    }

    #[test]
    fn test_literal_set_folding() {
        let (mut model, ops) = setup();
        let v = model.new_int_var(0, 9, "v");
        assert_eq!(ops.in_integers(&mut model, v, &[20, 30]), ops.false_var());
        let c = model.new_constant(3);
        assert_eq!(ops.in_integers(&mut model, c, &[1, 3]), ops.true_var());
        assert_eq!(ops.in_integers(&mut model, c, &[1, 4]), ops.false_var());
        assert_eq!(model.num_constraints(), 0);
    }

    #[test]
    fn test_literal_set_folding_sees_holes() {
        let (mut model, ops) = setup();
        let v = model.new_var_with_domain(Domain::from_values([1, 5]), "v");
        assert_eq!(ops.in_integers(&mut model, v, &[2, 3, 4]), ops.false_var());
        assert_eq!(ops.in_integers(&mut model, v, &[1, 3, 5]), ops.true_var());
        assert_eq!(model.num_constraints(), 0);

        let b = ops.in_integers(&mut model, v, &[1, 2]);
        assert_eq!(model.constraints()[0].guard, Some(b));
    }

    #[test]
    fn test_string_set() {
        let (mut model, ops) = setup();
        let v = model.new_int_var(0, 100, "v");
        ops.in_strings(&mut model, v, &["web", "db"]);
        let web = ops.encoder().to_integer("web");
        let db = ops.encoder().to_integer("db");
        assert_eq!(
            model.constraints()[0].constraint,
            Constraint::InDomain {
                var: v,
                domain: Domain::from_values([web, db])
            }
        );
    }

    #[test]
    fn test_var_set() {
        let (mut model, ops) = setup();
        let v = model.new_int_var(0, 9, "v");
        let a = model.new_int_var(0, 9, "a");
        let b = model.new_int_var(0, 9, "b");
        let far = model.new_int_var(50, 60, "far");

        let r = ops.in_vars(&mut model, v, &[a, far, b]);
        // Two equality pairs plus the disjunction pair; `far` folds away.
        assert_eq!(model.num_constraints(), 6);
        let ea = model.constraints()[0].guard.unwrap();
        let eb = model.constraints()[2].guard.unwrap();
        assert_eq!(model.constraints()[4].constraint, Constraint::BoolOr(vec![ea, eb]));
        assert_eq!(model.constraints()[4].guard, Some(r));
    }

    #[test]
    fn test_scalar_in_var_set() {
        let (mut model, ops) = setup();
        let a = model.new_int_var(0, 9, "a");
        let b = model.new_int_var(5, 9, "b");
        let r = ops.is_in(&mut model, 2, [Value::Var(a), Value::Var(b)]);
        // `2 == b` folds to false, leaving the single literal `2 == a`.
        assert_eq!(model.num_constraints(), 2);
        assert_eq!(r, Value::Var(model.constraints()[0].guard.unwrap()));
    }
}
