//! # Preferences Layer
//!
//! The card store never touches files directly. It is bound to a [`Preferences`]
//! handle: one named region of string-valued keys, the same shape as a platform
//! key/value store.
//!
//! ## Implementations
//!
//! - [`fs::FilePreferences`]: Production backend, one JSON object per namespace
//!   - `<dir>/<namespace>.json`
//!   - Writes go to a temp file that is renamed over the old one
//!
//! - [`memory::MemoryPreferences`]: In-memory backend for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! Both take `&self` for writes. Cardz is single-threaded, so interior mutability
//! through `RefCell` is enough, and a handle can be lent to several stores (which
//! is how tests simulate a process restart).

use crate::error::Result;

pub mod fs;
pub mod memory;

/// A named key/value region holding string values.
pub trait Preferences {
    /// Returns `Ok(None)` when the key has never been written.
    fn get_string(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the value stored under `key`.
    fn put_string(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: Preferences + ?Sized> Preferences for &T {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        (**self).get_string(key)
    }

    fn put_string(&self, key: &str, value: &str) -> Result<()> {
        (**self).put_string(key, value)
    }
}
