use std::fmt::{Display, Formatter};
use std::ops::Neg;

use crate::types::VarId;

/// Handle to a model variable.
///
/// A positive handle is the variable itself. A negated handle (`-x`) is the
/// boolean complement `1 - x`, available without allocating anything in the
/// model. Negation is only meaningful for variables with a domain inside `{0, 1}`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(i32);

impl Var {
    pub fn positive(id: VarId) -> Self {
        Self(id.id() as i32)
    }

    pub const fn is_negated(&self) -> bool {
        self.0 < 0
    }

    pub const fn negate(self) -> Self {
        Self(-self.0)
    }

    /// Return the identifier of the underlying variable.
    pub fn id(self) -> VarId {
        VarId::new(self.0.unsigned_abs())
    }

    /// Return the 0-based creation index of the underlying variable.
    pub fn index(self) -> usize {
        self.id().index()
    }
}

impl Neg for Var {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Display for Var {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{}",
            if self.is_negated() { "~" } else { "" },
            self.0.unsigned_abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negation() {
        let x = Var::positive(VarId::new(3));
        assert!(!x.is_negated());
        assert!((-x).is_negated());
        assert_eq!(-(-x), x);
        assert_eq!((-x).id(), x.id());
        assert_eq!((-x).index(), 2);
    }

    #[test]
    fn test_display() {
        let x = Var::positive(VarId::new(7));
        assert_eq!(x.to_string(), "x7");
        assert_eq!((-x).to_string(), "~x7");
    }
}
