//! Welcome reveal sequencing
//!
//! The reveal is a fixed timeline of visibility changes played once per hard
//! load of the entry path:
//!
//! ```text
//! RUNNING(0) --200ms--> RUNNING(1) --400ms--> RUNNING(2) --200ms--> RUNNING(3)
//!   --200ms--> RUNNING(4) --200ms--> RUNNING(5) --400ms--> RUNNING(6)
//!   --1900ms--> FADING --1000ms--> DONE
//! ```
//!
//! [`IntroSequencer::mount`] makes the play/suppress decision from the
//! navigation context. [`RevealTimeline`] lists the steps, and [`TimerSet`]
//! owns the scheduled callbacks so teardown cancels all of them together.

mod sequencer;
mod state;
mod timeline;
mod timers;

pub use sequencer::{IntroSequencer, MountDecision, SuppressReason, ENTRY_PATH};
pub use state::{IntroPhase, RevealState, RevealStep, Stage, STAGE_COUNT};
pub use timeline::RevealTimeline;
pub use timers::{SharedReveal, TimerSet, TokioReveal};
