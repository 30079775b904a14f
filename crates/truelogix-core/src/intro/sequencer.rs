//! Mount-time play/suppress decision

use tracing::{debug, info};

use super::state::RevealState;
use crate::session::CLIENT_NAVIGATION_KEY;
use crate::traits::{Navigator, SessionStore};

/// The only path on which the welcome reveal may play
pub const ENTRY_PATH: &str = "/";

/// Why the reveal did not play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuppressReason {
    /// The page was reached through an in-app link; the flag was consumed
    ClientNavigation,
    /// A hard load landed off the entry path and was redirected to it
    Redirected {
        /// Path the visitor originally landed on
        from: String,
    },
}

/// Outcome of mounting the intro
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountDecision {
    /// Play the reveal timeline
    Reveal,
    /// Render nothing for this mount
    Suppressed(SuppressReason),
}

impl MountDecision {
    /// Whether the reveal timeline should be scheduled
    pub fn is_reveal(&self) -> bool {
        matches!(self, MountDecision::Reveal)
    }

    /// Reveal state immediately after mount
    pub fn initial_state(&self) -> RevealState {
        match self {
            MountDecision::Reveal => RevealState::running(),
            MountDecision::Suppressed(_) => RevealState::default(),
        }
    }
}

/// Decides, once per mount, whether the welcome reveal plays
///
/// The client-navigation flag is checked before the path, so a mount with
/// the flag set on a deep link consumes the flag and does not redirect.
pub struct IntroSequencer<'a, S: ?Sized, N: ?Sized> {
    store: &'a S,
    navigator: &'a N,
}

impl<'a, S, N> IntroSequencer<'a, S, N>
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    /// Create a sequencer over the given collaborators
    pub fn new(store: &'a S, navigator: &'a N) -> Self {
        Self { store, navigator }
    }

    /// Run the mount-time checks and perform their side effects
    ///
    /// At most one of the side effects happens: the flag is removed, or a
    /// single redirect to the entry path is requested.
    pub fn mount(&self) -> MountDecision {
        if self.store.is_set(CLIENT_NAVIGATION_KEY) {
            self.store.remove(CLIENT_NAVIGATION_KEY);
            debug!("Client navigation flag consumed, skipping intro");
            return MountDecision::Suppressed(SuppressReason::ClientNavigation);
        }

        let path = self.navigator.current_path();
        if path != ENTRY_PATH {
            info!(from = %path, to = ENTRY_PATH, "Hard load off the entry path, redirecting");
            self.navigator.replace(ENTRY_PATH);
            return MountDecision::Suppressed(SuppressReason::Redirected { from: path });
        }

        info!(path = %path, "Playing welcome intro");
        MountDecision::Reveal
    }
}
