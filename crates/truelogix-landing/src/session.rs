//! Process-wide visitor session
//!
//! One app launch is one visitor session: the session store and the path the
//! visitor first landed on live for the whole process.

use std::sync::OnceLock;

use truelogix_core::{MemorySessionStore, ENTRY_PATH};

static SESSION_STORE: OnceLock<MemorySessionStore> = OnceLock::new();

static INITIAL_PATH: OnceLock<String> = OnceLock::new();

/// The session store for this process
pub fn session_store() -> &'static MemorySessionStore {
    SESSION_STORE.get_or_init(MemorySessionStore::new)
}

/// Record the path of the initial (hard) load. Only the first call counts.
pub fn set_initial_path(path: impl Into<String>) {
    INITIAL_PATH.set(path.into()).ok();
}

/// Path of the initial load, defaulting to the entry path
pub fn initial_path() -> &'static str {
    INITIAL_PATH.get().map(String::as_str).unwrap_or(ENTRY_PATH)
}
