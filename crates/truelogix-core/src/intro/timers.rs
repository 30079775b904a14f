//! Scheduled reveal callbacks and their cancellation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use super::sequencer::{IntroSequencer, MountDecision};
use super::state::{IntroPhase, RevealState, RevealStep};
use super::timeline::RevealTimeline;
use crate::traits::{Navigator, SessionStore, TimerHandle};

/// Every pending callback of one reveal run
///
/// All callbacks are scheduled together up front, one per timeline step at
/// its cumulative offset. Dropping the set cancels whatever has not fired.
pub struct TimerSet<H: TimerHandle> {
    handles: Vec<H>,
}

impl<H: TimerHandle> TimerSet<H> {
    /// An empty set, for mounts that do not play
    pub fn new() -> Self {
        Self { handles: Vec::new() }
    }

    /// Schedule every step of `timeline` through `spawn`
    ///
    /// `spawn` receives each step with its offset from mount and returns the
    /// handle of the delayed callback it created.
    pub fn schedule<F>(timeline: &RevealTimeline, mut spawn: F) -> Self
    where
        F: FnMut(Duration, RevealStep) -> H,
    {
        Self {
            handles: timeline
                .schedule()
                .map(|(offset, step)| spawn(offset, step))
                .collect(),
        }
    }

    /// Number of handles held
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether the set holds no handles
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Cancel every held callback and release the handles
    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.cancel();
        }
    }
}

impl<H: TimerHandle> Default for TimerSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: TimerHandle> Drop for TimerSet<H> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Reveal state shared with the timer tasks
pub type SharedReveal = Arc<Mutex<RevealState>>;

/// A mounted intro driven by tokio timers
///
/// Used where no UI runtime owns the tasks, such as headless runs and tests.
/// Must be mounted inside a tokio runtime of either flavor. A step that is
/// already running when the intro is torn down on another worker is
/// discarded: steps apply only while `live` is set, checked under the state
/// lock.
pub struct TokioReveal {
    decision: MountDecision,
    state: SharedReveal,
    live: Arc<AtomicBool>,
    timers: TimerSet<JoinHandle<()>>,
}

impl TokioReveal {
    /// Mount the intro and schedule its timeline if it plays
    pub fn mount<S, N>(store: &S, navigator: &N, timeline: &RevealTimeline) -> Self
    where
        S: SessionStore + ?Sized,
        N: Navigator + ?Sized,
    {
        let decision = IntroSequencer::new(store, navigator).mount();
        let state = Arc::new(Mutex::new(decision.initial_state()));
        let live = Arc::new(AtomicBool::new(true));

        let timers = if decision.is_reveal() {
            TimerSet::schedule(timeline, |offset, step| {
                let state = Arc::clone(&state);
                let live = Arc::clone(&live);
                tokio::spawn(async move {
                    tokio::time::sleep(offset).await;
                    let mut state = state.lock();
                    if !live.load(Ordering::Acquire) {
                        return;
                    }
                    tracing::debug!(step = ?step, offset_ms = offset.as_millis() as u64, "Intro step");
                    step.apply(&mut state);
                })
            })
        } else {
            TimerSet::new()
        };

        Self {
            decision,
            state,
            live,
            timers,
        }
    }

    /// The mount-time decision
    pub fn decision(&self) -> &MountDecision {
        &self.decision
    }

    /// Copy of the current reveal state
    pub fn snapshot(&self) -> RevealState {
        self.state.lock().clone()
    }

    /// Handle to the state the timer tasks mutate
    pub fn shared(&self) -> SharedReveal {
        Arc::clone(&self.state)
    }

    /// Current phase of the intro
    pub fn phase(&self) -> IntroPhase {
        IntroPhase::of(&self.decision, &self.state.lock())
    }

    /// Number of timer tasks that have not completed
    pub fn pending_timers(&self) -> usize {
        self.timers
            .handles
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Tear the intro down, cancelling every pending step
    ///
    /// The returned state is final: no step mutates it afterwards.
    pub fn unmount(mut self) -> RevealState {
        let state = self.halt();
        tracing::debug!("Intro unmounted");
        state
    }

    fn halt(&mut self) -> RevealState {
        let state = {
            let state = self.state.lock();
            self.live.store(false, Ordering::Release);
            state.clone()
        };
        self.timers.cancel_all();
        state
    }
}

impl Drop for TokioReveal {
    fn drop(&mut self) {
        self.halt();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Handle that records its cancellation
    struct FlagHandle {
        cancelled: Rc<RefCell<Vec<Duration>>>,
        offset: Duration,
    }

    impl TimerHandle for FlagHandle {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.offset);
        }
    }

    #[test]
    fn test_schedule_spawns_every_step_up_front() {
        let mut spawned = Vec::new();
        let cancelled = Rc::new(RefCell::new(Vec::new()));

        let set = TimerSet::schedule(&RevealTimeline::standard(), |offset, step| {
            spawned.push((offset, step));
            FlagHandle {
                cancelled: Rc::clone(&cancelled),
                offset,
            }
        });

        assert_eq!(set.len(), 8);
        assert_eq!(spawned.len(), 8);
        assert_eq!(spawned[0].0, Duration::from_millis(200));
        assert_eq!(spawned[7], (Duration::from_millis(4500), RevealStep::Finish));
        assert!(cancelled.borrow().is_empty());
    }

    #[test]
    fn test_drop_cancels_all() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        {
            let _set = TimerSet::schedule(&RevealTimeline::standard(), |offset, _| FlagHandle {
                cancelled: Rc::clone(&cancelled),
                offset,
            });
        }
        assert_eq!(cancelled.borrow().len(), 8);
    }

    #[test]
    fn test_cancel_all_is_idempotent() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut set = TimerSet::schedule(&RevealTimeline::standard(), |offset, _| FlagHandle {
            cancelled: Rc::clone(&cancelled),
            offset,
        });

        set.cancel_all();
        set.cancel_all();
        assert!(set.is_empty());
        drop(set);
        assert_eq!(cancelled.borrow().len(), 8);
    }
}
