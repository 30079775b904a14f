//! In-app routing over a path signal.

use dioxus::prelude::*;
use truelogix_core::Navigator;

/// A page of the landing site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Hero and lead capture, the entry path.
    Home,
    /// Service catalogue.
    Services,
    /// Company background.
    About,
    /// Any other path.
    NotFound(String),
}

impl Route {
    /// Routes shown in the header navigation.
    pub const NAV: [Route; 3] = [Route::Home, Route::Services, Route::About];

    /// Resolve a path, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Self {
        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match normalized {
            "/" => Route::Home,
            "/services" => Route::Services,
            "/about" => Route::About,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Services => "/services",
            Route::About => "/about",
            Route::NotFound(path) => path,
        }
    }

    /// Label used in navigation.
    pub fn label(&self) -> &str {
        match self {
            Route::Home => "Home",
            Route::Services => "Services",
            Route::About => "About",
            Route::NotFound(_) => "Not Found",
        }
    }
}

/// Router shared with every component through context.
///
/// `push` records a history entry; `replace` (from [`Navigator`]) does not.
#[derive(Clone, Copy, PartialEq)]
pub struct LandingRouter {
    path: Signal<String>,
    history: Signal<Vec<String>>,
}

impl LandingRouter {
    pub fn new(path: Signal<String>, history: Signal<Vec<String>>) -> Self {
        Self { path, history }
    }

    /// Current path, subscribing the caller to changes.
    pub fn path(&self) -> String {
        self.path.cloned()
    }

    /// Current route, subscribing the caller to changes.
    pub fn route(&self) -> Route {
        Route::from_path(&self.path.read())
    }

    /// Navigate to `path`, recording the current path in history.
    pub fn push(&self, path: &str) {
        let mut current = self.path;
        let mut history = self.history;
        let previous = (*current.peek()).clone();
        tracing::debug!(from = %previous, to = %path, "Navigating");
        history.write().push(previous);
        current.set(path.to_string());
    }

    /// Whether there is a history entry to return to.
    pub fn can_go_back(&self) -> bool {
        !self.history.read().is_empty()
    }

    /// Return to the previous path, if any.
    pub fn back(&self) {
        let mut history = self.history;
        let mut current = self.path;
        let previous = history.write().pop();
        if let Some(previous) = previous {
            tracing::debug!(to = %previous, "Navigating back");
            current.set(previous);
        }
    }
}

impl Navigator for LandingRouter {
    fn current_path(&self) -> String {
        (*self.path.peek()).clone()
    }

    fn replace(&self, path: &str) {
        let mut current = self.path;
        let previous = (*current.peek()).clone();
        tracing::debug!(from = %previous, to = %path, "Replacing route");
        current.set(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/services"), Route::Services);
        assert_eq!(Route::from_path("/about/"), Route::About);
        assert_eq!(
            Route::from_path("/pricing"),
            Route::NotFound("/pricing".to_string())
        );
    }

    #[test]
    fn test_route_paths_round_trip() {
        for route in Route::NAV {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
