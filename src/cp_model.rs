use std::fmt;

use log::trace;

use crate::domain::Domain;
use crate::eval::Assignment;
use crate::model::{Constraint, Model};
use crate::reference::Var;
use crate::types::VarId;

#[derive(Debug, Clone)]
struct VarData {
    domain: Domain,
    name: String,
}

/// A posted constraint together with its optional guard literal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Posted {
    pub constraint: Constraint,
    pub guard: Option<Var>,
}

impl Posted {
    /// Checks the constraint, which is vacuously satisfied when the guard is false.
    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        match self.guard {
            Some(g) if !assignment.is_true(g) => true,
            _ => self.constraint.holds(assignment),
        }
    }

    /// All variable handles mentioned by the constraint and its guard.
    pub fn vars(&self) -> Vec<Var> {
        let mut vars = self.constraint.vars();
        vars.extend(self.guard);
        vars
    }
}

impl fmt::Display for Posted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.guard {
            Some(g) => write!(f, "{} => {}", g, self.constraint),
            None => write!(f, "{}", self.constraint),
        }
    }
}

/// In-memory constraint model.
///
/// Records variables and posted constraints. It performs no propagation:
/// domains stay exactly as created.
#[derive(Default, Clone)]
pub struct CpModel {
    vars: Vec<VarData>,
    constraints: Vec<Posted>,
}

impl CpModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn constraints(&self) -> &[Posted] {
        &self.constraints
    }

    /// Name given at creation, if any.
    pub fn name(&self, var: Var) -> Option<&str> {
        let name = self.data(var.id()).name.as_str();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Domain of the underlying variable, ignoring negation.
    pub fn var_domain(&self, id: VarId) -> &Domain {
        &self.data(id).domain
    }

    fn data(&self, id: VarId) -> &VarData {
        let index = id.index();
        assert!(
            index < self.vars.len(),
            "Variable {} does not belong to this model",
            id
        );
        &self.vars[index]
    }

    /// Checks that every variable lies in its domain and every posted
    /// constraint is satisfied.
    pub fn check(&self, assignment: &Assignment) -> bool {
        assert_eq!(
            assignment.len(),
            self.vars.len(),
            "Assignment size does not match the number of variables"
        );
        self.vars
            .iter()
            .zip(assignment.values())
            .all(|(data, &value)| data.domain.contains(value))
            && self.constraints.iter().all(|c| c.is_satisfied(assignment))
    }
}

impl Model for CpModel {
    fn new_int_var(&mut self, min: i64, max: i64, name: &str) -> Var {
        self.new_var_with_domain(Domain::new(min, max), name)
    }

    fn new_var_with_domain(&mut self, domain: Domain, name: &str) -> Var {
        assert!(!domain.is_empty(), "Cannot create variable '{}' with an empty domain", name);
        self.vars.push(VarData {
            domain,
            name: name.to_string(),
        });
        let var = Var::positive(VarId::from_index(self.vars.len() - 1));
        trace!("new var {} in {}", var, self.vars[var.index()].domain);
        var
    }

    fn bounds(&self, var: Var) -> (i64, i64) {
        let domain = &self.data(var.id()).domain;
        if var.is_negated() {
            (1 - domain.max(), 1 - domain.min())
        } else {
            (domain.min(), domain.max())
        }
    }

    fn domain(&self, var: Var) -> Domain {
        let domain = &self.data(var.id()).domain;
        if var.is_negated() {
            domain.negate_boolean()
        } else {
            domain.clone()
        }
    }

    fn post(&mut self, constraint: Constraint, guard: Option<Var>) {
        let posted = Posted { constraint, guard };
        for v in posted.vars() {
            self.data(v.id());
        }
        trace!("post {}", posted);
        self.constraints.push(posted);
    }
}

impl fmt::Debug for CpModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpModel")
            .field("vars", &self.vars.len())
            .field("constraints", &self.constraints.len())
            .finish()
    }
}

impl fmt::Display for CpModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, data) in self.vars.iter().enumerate() {
            let var = Var::positive(VarId::from_index(i));
            if data.name.is_empty() {
                writeln!(f, "{} in {}", var, data.domain)?;
            } else {
                writeln!(f, "{} ({}) in {}", var, data.name, data.domain)?;
            }
        }
        for c in &self.constraints {
            writeln!(f, "{}", c)?;
        }
        Ok(())
    }
}
