//! # TrueLogiX Core
//!
//! Framework-independent logic behind the TrueLogiX landing page.
//!
//! The landing UI is thin presentation over two pieces of behavior that live
//! here so they can be exercised without a renderer:
//!
//! - [`intro`]: the once-per-session welcome reveal, which decides at mount
//!   whether to play and then drives a fixed timeline of visibility changes
//! - [`lead`]: the project-quote form and its field validation
//!
//! ## Key Traits
//!
//! - [`SessionStore`]: session-scoped key/value flags (the `client-navigation` flag)
//! - [`Navigator`]: current path and history-replacing redirects
//! - [`TimerHandle`]: a cancellable scheduled callback
//!
//! Test doubles for the collaborator traits live in [`mock`].

pub mod error;
pub mod intro;
pub mod lead;
pub mod mock;
pub mod session;
pub mod traits;

pub use error::*;
pub use intro::{
    IntroPhase, IntroSequencer, MountDecision, RevealState, RevealStep, RevealTimeline, Stage,
    SuppressReason, TimerSet, TokioReveal, ENTRY_PATH,
};
pub use lead::{LeadField, LeadForm, LeadSubmission};
pub use session::{MemorySessionStore, CLIENT_NAVIGATION_KEY};
pub use traits::*;
