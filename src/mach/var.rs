use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Bindings survive across runs; only CLEAR empties them.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, i32>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, var_name: &str) -> Result<i32> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(UndefinedVariable)),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: i32) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_store_overwrites() {
        let mut v = Var::new();
        let x: Rc<str> = "X".into();
        v.store(&x, 1);
        v.store(&x, -7);
        assert_eq!(v.fetch("X"), Ok(-7));
    }

    #[test]
    fn test_unbound_and_clear() {
        let mut v = Var::new();
        assert_eq!(v.fetch("Y").unwrap_err().code(), ErrorCode::UndefinedVariable);
        v.store(&"Y".into(), 3);
        assert!(!v.is_empty());
        v.clear();
        assert!(v.is_empty());
        assert!(v.fetch("Y").is_err());
    }
}
