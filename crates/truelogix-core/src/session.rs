//! In-memory session store

use dashmap::DashMap;

use crate::traits::SessionStore;

/// Key set by in-app links just before they navigate.
///
/// The intro sequencer consumes it so the welcome reveal only plays on
/// hard loads, never on client-side navigation.
pub const CLIENT_NAVIGATION_KEY: &str = "client-navigation";

/// Process-wide session store backed by a concurrent map
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: DashMap<String, String>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemorySessionStore::new();
        assert!(store.get(CLIENT_NAVIGATION_KEY).is_none());

        store.set(CLIENT_NAVIGATION_KEY, "true");
        assert_eq!(store.get(CLIENT_NAVIGATION_KEY).as_deref(), Some("true"));
        assert_eq!(store.len(), 1);

        store.remove(CLIENT_NAVIGATION_KEY);
        assert!(store.get(CLIENT_NAVIGATION_KEY).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_value_is_unset() {
        let store = MemorySessionStore::new();
        store.set(CLIENT_NAVIGATION_KEY, "");
        assert!(!store.is_set(CLIENT_NAVIGATION_KEY));

        store.set(CLIENT_NAVIGATION_KEY, "true");
        assert!(store.is_set(CLIENT_NAVIGATION_KEY));
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let store = MemorySessionStore::new();
        store.remove("missing");
        assert!(store.is_empty());
    }
}
