//! Home page: hero and quote request.

use dioxus::prelude::*;

use super::lead_section::LeadSection;
use super::nav::NavLink;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        section {
            class: "hero",

            div {
                class: "container hero-content",

                h1 {
                    class: "hero-title",
                    "Technology that moves your business forward"
                }
                p {
                    class: "hero-subtitle",
                    "Research, software, engineering, and growth, delivered by one team."
                }

                div {
                    class: "hero-actions",
                    a {
                        class: "btn btn-primary btn-lg",
                        href: "#make-your-website",
                        "Get a Quote"
                    }
                    NavLink {
                        to: "/services".to_string(),
                        "Explore Services"
                    }
                }
            }
        }

        LeadSection {}
    }
}
