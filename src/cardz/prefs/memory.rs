use super::Preferences;
use crate::error::{CardzError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory preferences for testing and embedding.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl Preferences for MemoryPreferences {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn put_string(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CardzError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_is_none() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.get_string("missing").unwrap(), None);
        assert!(prefs.is_empty());
    }

    #[test]
    fn put_overwrites() {
        let prefs = MemoryPreferences::new();
        prefs.put_string("k", "one").unwrap();
        prefs.put_string("k", "two").unwrap();
        assert_eq!(prefs.get_string("k").unwrap().as_deref(), Some("two"));
        assert_eq!(prefs.len(), 1);
    }

    #[test]
    fn simulated_write_error_leaves_value() {
        let prefs = MemoryPreferences::new();
        prefs.put_string("k", "kept").unwrap();
        prefs.set_simulate_write_error(true);
        assert!(prefs.put_string("k", "lost").is_err());
        assert_eq!(prefs.get_string("k").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn shared_reference_is_a_handle() {
        let prefs = MemoryPreferences::new();
        let handle = &prefs;
        handle.put_string("k", "v").unwrap();
        assert_eq!(prefs.get_string("k").unwrap().as_deref(), Some("v"));
    }
}
