//! Site header and in-app links.
//!
//! Every in-app navigation sets the client-navigation flag first, so the
//! re-mounted welcome intro knows not to play.

use dioxus::prelude::*;
use truelogix_core::{Navigator, SessionStore, CLIENT_NAVIGATION_KEY};

use super::logo::Logo;
use crate::session::session_store;
use crate::state::{LandingRouter, Route};
use crate::theme::ThemeToggle;

/// Navigate to `to` as a link click.
///
/// Clicking a link to the current page does nothing, so no flag is left
/// behind for a mount that will never happen.
pub fn follow_link<S: SessionStore + ?Sized>(store: &S, router: &LandingRouter, to: &str) {
    if router.current_path() == to {
        return;
    }
    store.set(CLIENT_NAVIGATION_KEY, "true");
    router.push(to);
}

/// Return to the previous page as a link click.
pub fn go_back<S: SessionStore + ?Sized>(store: &S, router: &LandingRouter) {
    if !router.can_go_back() {
        return;
    }
    store.set(CLIENT_NAVIGATION_KEY, "true");
    router.back();
}

/// Anchor that navigates inside the app.
#[component]
pub fn NavLink(to: String, children: Element) -> Element {
    let router = use_context::<LandingRouter>();
    let class = if router.path() == to {
        "nav-link nav-link-active"
    } else {
        "nav-link"
    };
    let target = to.clone();

    rsx! {
        a {
            class: "{class}",
            href: "{to}",
            onclick: move |evt| {
                evt.prevent_default();
                follow_link(session_store(), &router, &target);
            },
            {children}
        }
    }
}

#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header {
            class: "site-header",

            NavLink {
                to: Route::Home.path().to_string(),
                Logo {}
            }

            nav {
                class: "site-nav",
                for route in Route::NAV {
                    NavLink {
                        key: "{route.path()}",
                        to: route.path().to_string(),
                        "{route.label()}"
                    }
                }
            }

            ThemeToggle {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use dioxus::dioxus_core::VirtualDom;
    use truelogix_core::{IntroSequencer, MemorySessionStore, MountDecision, SuppressReason};

    use super::*;

    thread_local! {
        static MOUNTED: RefCell<Option<LandingRouter>> = const { RefCell::new(None) };
    }

    fn router_root() -> Element {
        let path = use_signal(|| "/".to_string());
        let history = use_signal(Vec::new);
        MOUNTED.with(|slot| *slot.borrow_mut() = Some(LandingRouter::new(path, history)));
        rsx! {}
    }

    /// Run `check` against a router at "/" owned by a live virtual dom
    fn with_router(check: impl FnOnce(LandingRouter)) {
        let mut dom = VirtualDom::new(router_root);
        dom.rebuild_in_place();
        let router = MOUNTED.with(|slot| slot.borrow_mut().take()).expect("router mounted");
        dom.in_runtime(|| check(router));
    }

    #[test]
    fn test_link_sets_flag_then_navigates() {
        with_router(|router| {
            let store = MemorySessionStore::new();

            follow_link(&store, &router, "/services");

            assert_eq!(store.get(CLIENT_NAVIGATION_KEY).as_deref(), Some("true"));
            assert_eq!(router.current_path(), "/services");
            assert!(router.can_go_back());
        });
    }

    #[test]
    fn test_link_to_current_page_sets_nothing() {
        with_router(|router| {
            let store = MemorySessionStore::new();

            follow_link(&store, &router, "/");

            assert!(store.is_empty());
            assert_eq!(router.current_path(), "/");
            assert!(!router.can_go_back());
        });
    }

    #[test]
    fn test_go_back_without_history_is_noop() {
        with_router(|router| {
            let store = MemorySessionStore::new();

            go_back(&store, &router);

            assert!(store.is_empty());
            assert_eq!(router.current_path(), "/");
        });
    }

    #[test]
    fn test_go_back_sets_flag() {
        with_router(|router| {
            let store = MemorySessionStore::new();
            follow_link(&store, &router, "/about");
            store.remove(CLIENT_NAVIGATION_KEY);

            go_back(&store, &router);

            assert!(store.is_set(CLIENT_NAVIGATION_KEY));
            assert_eq!(router.current_path(), "/");
            assert!(!router.can_go_back());
        });
    }

    #[test]
    fn test_link_back_to_entry_suppresses_intro() {
        with_router(|router| {
            let store = MemorySessionStore::new();
            follow_link(&store, &router, "/about");
            IntroSequencer::new(&store, &router).mount();

            follow_link(&store, &router, "/");
            let decision = IntroSequencer::new(&store, &router).mount();

            assert_eq!(decision, MountDecision::Suppressed(SuppressReason::ClientNavigation));
            assert!(!store.is_set(CLIENT_NAVIGATION_KEY));
            assert_eq!(router.current_path(), "/");
        });
    }
}
