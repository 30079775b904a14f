//! Secondary pages.

use dioxus::prelude::*;

use super::nav::{go_back, NavLink};
use crate::session::session_store;
use crate::state::LandingRouter;

const SERVICES: [(&str, &str, &str); 4] = [
    ("🔬", "Research & Analysis", "Market and technical research that grounds every decision in data."),
    ("💻", "Software Development", "Websites, web applications, and internal tools built to last."),
    ("⚙️", "Engineering", "Automation, integrations, and infrastructure that keep you running."),
    ("📈", "Growth", "Analytics, SEO, and campaigns that turn visitors into customers."),
];

#[component]
pub fn ServicesPage() -> Element {
    rsx! {
        section {
            class: "container page",
            h1 { class: "section-title", "Services" }
            div {
                class: "service-grid",
                for (icon, title, text) in SERVICES {
                    div {
                        key: "{title}",
                        class: "card service-card",
                        div { class: "service-icon", "{icon}" }
                        h3 { class: "card-title", "{title}" }
                        p { class: "card-description", "{text}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        section {
            class: "container page",
            h1 { class: "section-title", "About TrueLogiX" }
            p {
                class: "section-text",
                "TrueLogiX is a small team of engineers, designers, and analysts helping businesses turn ideas into working products."
            }
            NavLink {
                to: "/".to_string(),
                "Request a quote"
            }
        }
    }
}

#[component]
pub fn NotFoundPage(path: String) -> Element {
    let router = use_context::<LandingRouter>();
    let can_go_back = router.can_go_back();

    rsx! {
        section {
            class: "container page not-found",
            h1 { class: "section-title", "Page not found" }
            p { class: "section-text", "Nothing lives at {path}." }
            div {
                class: "hero-actions",
                if can_go_back {
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| go_back(session_store(), &router),
                        "Go back"
                    }
                }
                NavLink {
                    to: "/".to_string(),
                    "Home"
                }
            }
        }
    }
}
