//! The solver model contract.
//!
//! The operator layer never owns variables or constraints. It allocates and
//! posts them through the [`Model`] trait, which captures exactly the
//! capabilities it needs:
//!
//! - bounded integer variables, constants and boolean variables,
//! - reading a variable's domain and bounds,
//! - posting a [`Constraint`], optionally guarded by a literal
//!   ("only enforce if").
//!
//! [`CpModel`][crate::cp_model::CpModel] is the in-memory implementation
//! shipped with the crate.

use std::fmt;

use crate::domain::Domain;
use crate::reference::Var;

/// Binary relation between two integer operands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Relation {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Relation {
    /// The relation that holds exactly when `self` does not.
    pub fn negate(self) -> Self {
        match self {
            Relation::Eq => Relation::Ne,
            Relation::Ne => Relation::Eq,
            Relation::Lt => Relation::Ge,
            Relation::Le => Relation::Gt,
            Relation::Gt => Relation::Le,
            Relation::Ge => Relation::Lt,
        }
    }

    /// The relation with swapped operands: `a R b` iff `b R.flip() a`.
    pub fn flip(self) -> Self {
        match self {
            Relation::Eq => Relation::Eq,
            Relation::Ne => Relation::Ne,
            Relation::Lt => Relation::Gt,
            Relation::Le => Relation::Ge,
            Relation::Gt => Relation::Lt,
            Relation::Ge => Relation::Le,
        }
    }

    /// Checks whether the relation orders its operands.
    pub fn is_ordering(self) -> bool {
        !matches!(self, Relation::Eq | Relation::Ne)
    }

    pub fn holds<T: Ord + ?Sized>(self, left: &T, right: &T) -> bool {
        match self {
            Relation::Eq => left == right,
            Relation::Ne => left != right,
            Relation::Lt => left < right,
            Relation::Le => left <= right,
            Relation::Gt => left > right,
            Relation::Ge => left >= right,
        }
    }

    /// Operator name, as used in logs and panics.
    pub fn name(self) -> &'static str {
        match self {
            Relation::Eq => "eq",
            Relation::Ne => "ne",
            Relation::Lt => "lt",
            Relation::Le => "leq",
            Relation::Gt => "gt",
            Relation::Ge => "geq",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Relation::Eq => "==",
            Relation::Ne => "!=",
            Relation::Lt => "<",
            Relation::Le => "<=",
            Relation::Gt => ">",
            Relation::Ge => ">=",
        };
        write!(f, "{}", s)
    }
}

/// Right-hand side of a comparison: a variable or a constant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Term {
    Var(Var),
    Const(i64),
}

impl From<Var> for Term {
    fn from(var: Var) -> Self {
        Term::Var(var)
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Const(value)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{}", v),
            Term::Const(c) => write!(f, "{}", c),
        }
    }
}

/// A constraint that can be posted to a [`Model`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Constraint {
    /// `left rel right`.
    Compare { left: Var, rel: Relation, right: Term },
    /// `target == Σ coeff·var + offset`.
    Linear {
        target: Var,
        terms: Vec<(i64, Var)>,
        offset: i64,
    },
    /// `target == max(vars)`.
    MaxEq { target: Var, vars: Vec<Var> },
    /// `target == min(vars)`.
    MinEq { target: Var, vars: Vec<Var> },
    /// `target == left * right`.
    ProductEq { target: Var, left: Var, right: Var },
    /// `target == numerator / denominator`, truncating toward zero.
    DivEq {
        target: Var,
        numerator: Var,
        denominator: Term,
    },
    /// At least one literal is true.
    BoolOr(Vec<Var>),
    /// All literals are true.
    BoolAnd(Vec<Var>),
    /// `var ∈ domain`.
    InDomain { var: Var, domain: Domain },
}

impl Constraint {
    pub fn compare(left: Var, rel: Relation, right: impl Into<Term>) -> Self {
        Constraint::Compare {
            left,
            rel,
            right: right.into(),
        }
    }

    /// All variable handles mentioned by the constraint.
    pub fn vars(&self) -> Vec<Var> {
        match self {
            Constraint::Compare { left, right, .. } => match right {
                Term::Var(r) => vec![*left, *r],
                Term::Const(_) => vec![*left],
            },
            Constraint::Linear { target, terms, .. } => std::iter::once(*target)
                .chain(terms.iter().map(|&(_, v)| v))
                .collect(),
            Constraint::MaxEq { target, vars } | Constraint::MinEq { target, vars } => {
                std::iter::once(*target).chain(vars.iter().copied()).collect()
            }
            Constraint::ProductEq {
                target,
                left,
                right,
            } => vec![*target, *left, *right],
            Constraint::DivEq {
                target,
                numerator,
                denominator,
            } => match denominator {
                Term::Var(d) => vec![*target, *numerator, *d],
                Term::Const(_) => vec![*target, *numerator],
            },
            Constraint::BoolOr(lits) | Constraint::BoolAnd(lits) => lits.clone(),
            Constraint::InDomain { var, .. } => vec![*var],
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Var]) -> fmt::Result {
    for (i, v) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", v)?;
    }
    Ok(())
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Compare { left, rel, right } => write!(f, "{} {} {}", left, rel, right),
            Constraint::Linear {
                target,
                terms,
                offset,
            } => {
                write!(f, "{} == ", target)?;
                for (i, (c, v)) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    if *c == 1 {
                        write!(f, "{}", v)?;
                    } else {
                        write!(f, "{}*{}", c, v)?;
                    }
                }
                if terms.is_empty() || *offset != 0 {
                    if !terms.is_empty() {
                        write!(f, " + ")?;
                    }
                    write!(f, "{}", offset)?;
                }
                Ok(())
            }
            Constraint::MaxEq { target, vars } => {
                write!(f, "{} == max(", target)?;
                write_list(f, vars)?;
                write!(f, ")")
            }
            Constraint::MinEq { target, vars } => {
                write!(f, "{} == min(", target)?;
                write_list(f, vars)?;
                write!(f, ")")
            }
            Constraint::ProductEq {
                target,
                left,
                right,
            } => write!(f, "{} == {} * {}", target, left, right),
            Constraint::DivEq {
                target,
                numerator,
                denominator,
            } => write!(f, "{} == {} / {}", target, numerator, denominator),
            Constraint::BoolOr(lits) => {
                write!(f, "or(")?;
                write_list(f, lits)?;
                write!(f, ")")
            }
            Constraint::BoolAnd(lits) => {
                write!(f, "and(")?;
                write_list(f, lits)?;
                write!(f, ")")
            }
            Constraint::InDomain { var, domain } => write!(f, "{} in {}", var, domain),
        }
    }
}

/// Capabilities of a constraint-programming model.
pub trait Model {
    /// Creates a variable with domain `[min, max]`.
    fn new_int_var(&mut self, min: i64, max: i64, name: &str) -> Var;

    /// Creates a variable with an arbitrary non-empty domain.
    fn new_var_with_domain(&mut self, domain: Domain, name: &str) -> Var;

    /// Current `(min, max)` bounds of the variable (or negated handle).
    fn bounds(&self, var: Var) -> (i64, i64);

    /// Current domain of the variable (or negated handle).
    fn domain(&self, var: Var) -> Domain;

    /// Posts a constraint, enforced only when `guard` is true (if given).
    fn post(&mut self, constraint: Constraint, guard: Option<Var>);

    /// Creates a fixed-domain constant.
    fn new_constant(&mut self, value: i64) -> Var {
        self.new_int_var(value, value, "")
    }

    /// Creates a 0/1 variable.
    fn new_bool_var(&mut self, name: &str) -> Var {
        self.new_int_var(0, 1, name)
    }

    /// Posts an unconditional constraint.
    fn add(&mut self, constraint: Constraint) {
        self.post(constraint, None)
    }

    /// Posts a constraint that only binds when `guard` is true.
    fn add_if(&mut self, constraint: Constraint, guard: Var) {
        self.post(constraint, Some(guard))
    }
}
