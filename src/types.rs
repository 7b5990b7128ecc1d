///! Type-safe identifiers for model variables.
///!
///! Variable identifiers are 1-indexed, mirroring the convention of the
///! model storage, where index 0 is reserved.
use std::fmt;

/// A variable identifier (1-indexed).
///
/// Identifiers are assigned by the model in creation order and never change.
///
/// # Invariants
///
/// - Variable IDs must be >= 1 (0 is reserved)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VarId(u32);

impl VarId {
    /// Creates a new variable identifier.
    ///
    /// # Panics
    ///
    /// Panics if `id == 0`. Variables must be 1-indexed.
    pub fn new(id: u32) -> Self {
        assert_ne!(id, 0, "Variable IDs must be >= 1");
        VarId(id)
    }

    /// Returns the raw variable ID as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }

    /// Returns the 0-based position of the variable in creation order.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Creates an identifier from a 0-based creation index.
    pub fn from_index(index: usize) -> Self {
        VarId::new(index as u32 + 1)
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<VarId> for u32 {
    fn from(var: VarId) -> Self {
        var.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_id_creation() {
        let v1 = VarId::new(1);
        let v2 = VarId::new(2);
        assert_eq!(v1.id(), 1);
        assert_eq!(v2.id(), 2);
        assert!(v1 < v2);
    }

    #[test]
    #[should_panic(expected = "Variable IDs must be >= 1")]
    fn test_var_id_zero_panics() {
        VarId::new(0);
    }

    #[test]
    fn test_var_id_index() {
        let v = VarId::from_index(0);
        assert_eq!(v.id(), 1);
        assert_eq!(v.index(), 0);
        assert_eq!(VarId::from_index(41).id(), 42);
        assert_eq!(v.to_string(), "x1");
    }
}
