use std::ops::ControlFlow;

use log::debug;
use num_bigint::BigUint;

use crate::cp_model::{CpModel, Posted};
use crate::eval::Assignment;
use crate::types::VarId;

impl CpModel {
    /// Product of all domain sizes.
    pub fn search_space(&self) -> BigUint {
        (0..self.num_vars())
            .map(|i| BigUint::from(self.var_domain(VarId::from_index(i)).size()))
            .product()
    }

    /// Returns one satisfying assignment, if any exists.
    ///
    /// The enumeration is exhaustive, so this is only practical for models
    /// whose domains are small.
    pub fn one_solution(&self) -> Option<Assignment> {
        let mut found = None;
        self.enumerate(&mut |a| {
            found = Some(a.clone());
            ControlFlow::Break(())
        });
        found
    }

    /// Returns all satisfying assignments, in lexicographic order of the
    /// variables' creation order.
    pub fn solutions(&self) -> Vec<Assignment> {
        let mut all = Vec::new();
        self.enumerate(&mut |a| {
            all.push(a.clone());
            ControlFlow::Continue(())
        });
        all
    }

    pub fn solution_count(&self) -> BigUint {
        let mut count = BigUint::ZERO;
        self.enumerate(&mut |_| {
            count += 1u32;
            ControlFlow::Continue(())
        });
        count
    }

    /// Depth-first walk over the variables in creation order.
    ///
    /// Each constraint is checked as soon as the last variable it mentions is
    /// assigned, so partial assignments violating it are pruned.
    fn enumerate(&self, visit: &mut dyn FnMut(&Assignment) -> ControlFlow<()>) {
        let n = self.num_vars();
        debug!(
            "enumerate(vars = {}, constraints = {}, space = {})",
            n,
            self.num_constraints(),
            self.search_space()
        );

        let mut watches: Vec<Vec<&Posted>> = vec![Vec::new(); n];
        let mut always: Vec<&Posted> = Vec::new();
        for posted in self.constraints() {
            match posted.vars().iter().map(|v| v.index()).max() {
                Some(last) => watches[last].push(posted),
                None => always.push(posted),
            }
        }

        let mut assignment = Assignment::new(vec![0; n]);
        if always.iter().all(|c| c.is_satisfied(&assignment)) {
            let _ = self.extend(0, &mut assignment, &watches, visit);
        }
    }

    fn extend(
        &self,
        depth: usize,
        assignment: &mut Assignment,
        watches: &[Vec<&Posted>],
        visit: &mut dyn FnMut(&Assignment) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        if depth == watches.len() {
            return visit(assignment);
        }

        let id = VarId::from_index(depth);
        for value in self.var_domain(id).values() {
            assignment.set(id, value);
            if watches[depth].iter().all(|c| c.is_satisfied(assignment)) {
                self.extend(depth + 1, assignment, watches, visit)?;
            }
        }
        ControlFlow::Continue(())
    }
}
