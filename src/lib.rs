//! # cp-ops: operator algebra for constraint models
//!
//! **`cp-ops`** translates arithmetic, relational, boolean and membership operators,
//! written over host scalars and solver-owned variables alike, into constraint-programming models.
//!
//! ## What does it do?
//!
//! A declarative model compiler emits expressions like `x == 3 || y in ("web", "db")`.
//! Each operator call either:
//!
//! - computes a host value, when every operand is a concrete scalar, or
//! - returns a model variable whose value, in any solution, is exactly the value of the expression.
//!
//! Boolean-valued results are *literals*: 0/1 variables tracking the truth of a predicate.
//! A predicate that cannot be decided up front is **reified**: a fresh indicator `b` is allocated,
//! the predicate is posted under `b` and its negation under `~b`.
//!
//! ## Key Features
//!
//! - **Constant folding**: relations decided by operand bounds alone return one of two shared
//!   boolean constants and post nothing.
//! - **Sound bounds**: sums, scaled sums, `min`/`max` and scalar products declare result bounds
//!   computed from their operands before the defining constraint is posted.
//! - **Native negation**: [`Var`][crate::reference::Var] handles negate for free (`-x`).
//! - **Explicit model**: every operator takes the [`Model`][crate::model::Model] as a parameter.
//!
//! ## Basic Usage
//!
//! ```rust
//! use cp_ops::cp_model::CpModel;
//! use cp_ops::model::Model;
//! use cp_ops::ops::Ops;
//! use cp_ops::value::Value;
//!
//! // 1. Create the model and the operator layer
//! let mut model = CpModel::new();
//! let ops = Ops::new(&mut model);
//!
//! // 2. Create variables
//! let x = model.new_int_var(0, 5, "x");
//! let y = model.new_int_var(10, 20, "y");
//!
//! // 3. Scalars are evaluated on the host
//! assert_eq!(ops.eq(&mut model, 5, 5), Value::Bool(true));
//!
//! // 4. Disjoint ranges are decided without touching the model
//! assert_eq!(ops.eq(&mut model, x, y), Value::Var(ops.false_var()));
//! assert_eq!(model.num_constraints(), 0);
//!
//! // 5. Anything else is reified
//! let b = ops.leq(&mut model, x, 3);
//! assert!(b.as_var().is_some());
//! assert_eq!(model.num_constraints(), 2);
//! ```
//!
//! ## Core Components
//!
//! - **[`ops`]**: the [`Ops`][crate::ops::Ops] manager, owning the boolean constants.
//! - **[`model`]**: the solver model contract and constraint vocabulary.
//! - **[`cp_model`]**: an in-memory model, with exhaustive enumeration in [`sat`] for small models.

pub mod aggregate;
pub mod boolean;
pub mod bounds;
pub mod cp_model;
pub mod domain;
pub mod encoding;
pub mod eval;
pub mod membership;
pub mod model;
pub mod ops;
pub mod reference;
pub mod relational;
pub mod sat;
pub mod types;
pub mod value;
