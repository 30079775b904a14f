//! Root application component with path-based routing.

use dioxus::prelude::*;

use crate::session::initial_path;
use crate::state::{LandingRouter, Route};
use crate::theme::ThemedRoot;

use super::home::HomePage;
use super::nav::SiteHeader;
use super::pages::{AboutPage, NotFoundPage, ServicesPage};
use super::welcome::WelcomeScreen;

/// Root application component.
#[component]
pub fn App() -> Element {
    let path = use_signal(|| initial_path().to_string());
    let history = use_signal(Vec::<String>::new);
    let router = use_context_provider(|| LandingRouter::new(path, history));

    let current = router.path();
    let route = Route::from_path(&current);

    rsx! {
        ThemedRoot {
            // Keyed by path: every navigation re-mounts the intro.
            WelcomeScreen { key: "{current}", router }

            SiteHeader {}

            main {
                class: "site-main",
                {match route {
                    Route::Home => rsx! { HomePage {} },
                    Route::Services => rsx! { ServicesPage {} },
                    Route::About => rsx! { AboutPage {} },
                    Route::NotFound(path) => rsx! { NotFoundPage { path } },
                }}
            }

            footer {
                class: "site-footer",
                p { "© TrueLogiX. All rights reserved." }
            }
        }
    }
}
