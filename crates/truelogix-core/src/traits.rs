//! Collaborator traits for the landing page core
//!
//! These traits let the intro sequencer run against a real router and
//! session store in the UI, and against in-memory doubles in tests.

/// Session-scoped key/value store
///
/// Models browser session storage: values live for the lifetime of the
/// process (one visitor session) and are never written to disk.
pub trait SessionStore: Send + Sync {
    /// Get the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str);

    /// Remove `key` from the store
    fn remove(&self, key: &str);

    /// Whether `key` holds a non-empty value
    ///
    /// An absent key and an empty value both count as unset.
    fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_empty())
    }
}

/// Navigation capability supplied by the router
pub trait Navigator {
    /// The path currently being displayed
    fn current_path(&self) -> String;

    /// Navigate to `path` without adding a history entry
    fn replace(&self, path: &str);
}

/// A scheduled callback that can be cancelled before it fires
pub trait TimerHandle {
    /// Cancel the callback. Has no effect if it already ran.
    fn cancel(self);
}

impl<T> TimerHandle for tokio::task::JoinHandle<T> {
    fn cancel(self) {
        self.abort();
    }
}
