//! Test doubles for the collaborator traits
//!
//! ## Usage
//!
//! ```rust,ignore
//! use truelogix_core::mock::{CountingSessionStore, RecordingNavigator};
//! use truelogix_core::{IntroSequencer, SessionStore, CLIENT_NAVIGATION_KEY};
//!
//! let store = CountingSessionStore::new();
//! store.set(CLIENT_NAVIGATION_KEY, "true");
//! let nav = RecordingNavigator::new("/");
//!
//! let decision = IntroSequencer::new(&store, &nav).mount();
//! assert!(!decision.is_reveal());
//! assert_eq!(store.removals(CLIENT_NAVIGATION_KEY), 1);
//! ```

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::session::MemorySessionStore;
use crate::traits::{Navigator, SessionStore};

/// Session store that counts removals per key
#[derive(Debug, Default)]
pub struct CountingSessionStore {
    inner: MemorySessionStore,
    removals: Mutex<HashMap<String, usize>>,
}

impl CountingSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `key` was removed
    pub fn removals(&self, key: &str) -> usize {
        self.removals.lock().get(key).copied().unwrap_or(0)
    }
}

impl SessionStore for CountingSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.inner.set(key, value);
    }

    fn remove(&self, key: &str) {
        *self.removals.lock().entry(key.to_string()).or_insert(0) += 1;
        self.inner.remove(key);
    }
}

/// Navigator that records every `replace` call
///
/// A replacement also updates the current path, as a real router would.
#[derive(Debug)]
pub struct RecordingNavigator {
    path: Mutex<String>,
    replaced: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Mutex::new(path.into()),
            replaced: Mutex::new(Vec::new()),
        }
    }

    /// Simulate the visitor arriving at `path`
    pub fn set_path(&self, path: impl Into<String>) {
        *self.path.lock() = path.into();
    }

    /// Paths passed to `replace`, oldest first
    pub fn replacements(&self) -> Vec<String> {
        self.replaced.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.lock().clone()
    }

    fn replace(&self, path: &str) {
        self.replaced.lock().push(path.to_string());
        *self.path.lock() = path.to_string();
    }
}
