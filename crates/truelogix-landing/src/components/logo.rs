use dioxus::prelude::*;

/// Brand mark with wordmark.
#[component]
pub fn Logo() -> Element {
    rsx! {
        div {
            class: "logo",
            span { class: "logo-mark", "TX" }
            span { class: "logo-word", "TrueLogiX" }
        }
    }
}
