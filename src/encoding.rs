//! Encoding of string literals as integers.
//!
//! Symbolic variables range over integers, so string-valued columns are
//! modelled through an injective string-to-integer mapping.

use std::cell::RefCell;
use std::collections::HashMap;

/// Total, deterministic, injective mapping from strings to integer codes.
pub trait StringEncoding {
    fn to_integer(&self, s: &str) -> i64;
}

/// Interning dictionary: each distinct string gets the next free code,
/// starting at 0.
#[derive(Debug, Default)]
pub struct StringDictionary {
    codes: RefCell<HashMap<String, i64>>,
    strings: RefCell<Vec<String>>,
}

impl StringDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.strings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.borrow().is_empty()
    }

    /// Reverse lookup, for reading solutions back.
    pub fn to_str(&self, code: i64) -> Option<String> {
        let index = usize::try_from(code).ok()?;
        self.strings.borrow().get(index).cloned()
    }
}

impl StringEncoding for StringDictionary {
    fn to_integer(&self, s: &str) -> i64 {
        if let Some(&code) = self.codes.borrow().get(s) {
            return code;
        }
        let mut strings = self.strings.borrow_mut();
        let code = strings.len() as i64;
        strings.push(s.to_string());
        self.codes.borrow_mut().insert(s.to_string(), code);
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interning() {
        let dict = StringDictionary::new();
        assert!(dict.is_empty());
        let a = dict.to_integer("alpha");
        let b = dict.to_integer("beta");
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(dict.to_integer("alpha"), a);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_reverse_lookup() {
        let dict = StringDictionary::new();
        let code = dict.to_integer("node-3");
        assert_eq!(dict.to_str(code).as_deref(), Some("node-3"));
        assert_eq!(dict.to_str(42), None);
        assert_eq!(dict.to_str(-1), None);
    }
}
