//! One-time welcome intro overlay.
//!
//! Plays only on a hard load of the entry path. In-app navigation consumes
//! the session flag and renders nothing; a hard load of any other path is
//! redirected to the entry path.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::dioxus_core::Task;
use dioxus::prelude::*;
use tokio::time::sleep;
use truelogix_core::{IntroSequencer, MountDecision, RevealTimeline, Stage, TimerHandle, TimerSet};

use super::logo::Logo;
use crate::session::session_store;
use crate::state::LandingRouter;

/// A reveal step running as a Dioxus task.
struct UiTimer(Task);

impl TimerHandle for UiTimer {
    fn cancel(self) {
        self.0.cancel();
    }
}

#[component]
pub fn WelcomeScreen(router: LandingRouter) -> Element {
    // Decide once, as the component is created, and schedule the whole
    // timeline up front from that same instant.
    let decision: MountDecision =
        use_hook(|| IntroSequencer::new(session_store(), &router).mount());
    let mut reveal = use_signal(|| decision.initial_state());
    let timers = use_hook(|| {
        let set = if decision.is_reveal() {
            TimerSet::schedule(&RevealTimeline::standard(), |offset, step| {
                UiTimer(spawn(async move {
                    sleep(offset).await;
                    tracing::debug!(step = ?step, offset_ms = offset.as_millis() as u64, "Intro step");
                    step.apply(&mut reveal.write());
                }))
            })
        } else {
            TimerSet::new()
        };
        Rc::new(RefCell::new(set))
    });

    use_drop(move || {
        timers.borrow_mut().cancel_all();
    });

    let state = reveal.read();
    if !state.active {
        return rsx! {};
    }

    let fade_class = if state.fading_out { "opacity-0" } else { "opacity-100" };
    let show_logo = state.is_shown(Stage::Logo);
    let show_headline = state.is_shown(Stage::Headline);
    let decorations: Vec<(Stage, &'static str)> = Stage::DECORATIONS
        .into_iter()
        .filter(|stage| state.is_shown(*stage))
        .filter_map(|stage| stage.glyph().map(|glyph| (stage, glyph)))
        .collect();

    rsx! {
        div {
            class: "welcome-overlay {fade_class}",

            div {
                class: "welcome-stack",

                div {
                    class: "welcome-orbit",

                    if show_logo {
                        div {
                            class: "animate-pop-in",
                            Logo {}
                        }
                    }

                    for (stage, glyph) in decorations {
                        div {
                            key: "{stage}",
                            class: "welcome-decoration welcome-decoration-{stage} animate-pop-in",
                            "{glyph}"
                        }
                    }
                }

                if show_headline {
                    div {
                        class: "welcome-text animate-fade-in-down",
                        h1 {
                            class: "welcome-title",
                            "Welcome to TrueLogiX"
                        }
                        p {
                            class: "welcome-subtitle",
                            "Your journey to innovation starts now."
                        }
                    }
                }
            }
        }
    }
}
