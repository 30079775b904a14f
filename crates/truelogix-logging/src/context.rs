//! Visitor context injection
//!
//! This module provides thread-local storage for the visitor session. The
//! session id and entry path reach the log output through the `visitor`
//! span returned by [`VisitorContextGuard::span`].

use std::cell::RefCell;

use uuid::Uuid;

/// Visitor session data stored in thread-local storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorContextData {
    /// Unique id for this visitor session (one app launch)
    pub session_id: Uuid,
    /// Path the visitor first landed on
    pub entry_path: String,
}

thread_local! {
    static VISITOR_CONTEXT: RefCell<Option<VisitorContextData>> = const { RefCell::new(None) };
}

/// RAII guard for visitor context
///
/// When this guard is created, it sets the visitor context for the current
/// thread. When it's dropped, it restores the previous context (if any).
///
/// # Example
///
/// ```ignore
/// use truelogix_logging::VisitorContextGuard;
///
/// let _guard = VisitorContextGuard::new("/services");
/// let _span = VisitorContextGuard::span().entered();
///
/// // Events in this scope carry the session id
/// tracing::info!("Mounted landing page");
/// ```
pub struct VisitorContextGuard {
    previous: Option<VisitorContextData>,
}

impl VisitorContextGuard {
    /// Start a new visitor session landing on `entry_path`
    pub fn new(entry_path: impl Into<String>) -> Self {
        Self::with_session_id(entry_path, Uuid::new_v4())
    }

    /// Start a visitor session with a specific id
    pub fn with_session_id(entry_path: impl Into<String>, session_id: Uuid) -> Self {
        let previous = VISITOR_CONTEXT.with(|ctx| ctx.borrow().clone());

        let new_ctx = VisitorContextData {
            session_id,
            entry_path: entry_path.into(),
        };

        VISITOR_CONTEXT.with(|ctx| *ctx.borrow_mut() = Some(new_ctx));

        Self { previous }
    }

    /// Get the current visitor context (if any)
    pub fn current() -> Option<VisitorContextData> {
        VISITOR_CONTEXT.with(|ctx| ctx.borrow().clone())
    }

    /// Get the current session id (if set)
    pub fn current_session_id() -> Option<Uuid> {
        Self::current().map(|ctx| ctx.session_id)
    }

    /// A span carrying the current visitor fields
    ///
    /// Enter it around long-running work so JSONL events include the session.
    pub fn span() -> tracing::Span {
        match Self::current() {
            Some(ctx) => tracing::info_span!(
                "visitor",
                session_id = %ctx.session_id,
                entry_path = %ctx.entry_path
            ),
            None => tracing::info_span!("visitor"),
        }
    }
}

impl Drop for VisitorContextGuard {
    fn drop(&mut self) {
        VISITOR_CONTEXT.with(|ctx| *ctx.borrow_mut() = self.previous.take());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_visitor_context_guard() {
        assert!(VisitorContextGuard::current().is_none());

        {
            let _guard = VisitorContextGuard::new("/");
            let ctx = VisitorContextGuard::current().unwrap();
            assert_eq!(ctx.entry_path, "/");
        }

        assert!(VisitorContextGuard::current().is_none());
    }

    #[test]
    fn test_nested_contexts() {
        let outer_id = Uuid::new_v4();
        let inner_id = Uuid::new_v4();

        {
            let _outer = VisitorContextGuard::with_session_id("/", outer_id);
            assert_eq!(VisitorContextGuard::current_session_id(), Some(outer_id));

            {
                let _inner = VisitorContextGuard::with_session_id("/about", inner_id);
                assert_eq!(VisitorContextGuard::current_session_id(), Some(inner_id));
            }

            assert_eq!(VisitorContextGuard::current_session_id(), Some(outer_id));
        }

        assert!(VisitorContextGuard::current_session_id().is_none());
    }

    /// In-memory writer for formatted log lines
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_visitor_span_fields_reach_jsonl() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_current_span(true)
            .with_writer(move || writer.clone())
            .finish();

        let session_id = Uuid::new_v4();
        tracing::subscriber::with_default(subscriber, || {
            let _guard = VisitorContextGuard::with_session_id("/about", session_id);
            VisitorContextGuard::span().in_scope(|| tracing::info!("Mounted landing page"));
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Mounted landing page"));
        assert!(output.contains(&session_id.to_string()));
        assert!(output.contains(r#""entry_path":"/about""#));
    }

    #[test]
    fn test_span_without_context_has_no_session() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_current_span(true)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            VisitorContextGuard::span().in_scope(|| tracing::info!("No visitor yet"));
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("No visitor yet"));
        assert!(!output.contains("session_id"));
    }
}
