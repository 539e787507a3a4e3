//! Session store - the owning context handed to the rendering layer.
//!
//! This replaces the original dashboard's framework-provided reactive
//! context with an explicit store: UI handlers dispatch verbs, panels
//! read the current snapshot and the returned effects. All dispatch is
//! synchronous; the last write wins.

use crate::effect::DrillEffects;
use crate::fault::Fault;
use crate::filters::DrillFilters;
use crate::log::DrillLog;
use crate::state::NavigationState;
use crate::target::DrillTarget;
use crate::verb::DrillVerb;

/// Owning store for one drill session.
#[derive(Debug, Clone)]
pub struct DrillSession {
    /// Live state snapshot.
    state: NavigationState,

    /// Verb log for replay (no-op dispatches are not recorded).
    log: DrillLog,

    /// Monotonic dispatch counter.
    tick: u64,

    /// Whether state changed since the last `mark_clean`.
    dirty: bool,
}

impl Default for DrillSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DrillSession {
    /// Create a session with id 0.
    pub fn new() -> Self {
        Self::with_session(0)
    }

    /// Create a session with an explicit id (carried into the log).
    pub fn with_session(session_id: u64) -> Self {
        Self {
            state: NavigationState::closed(),
            log: DrillLog::new(session_id),
            tick: 0,
            dirty: false,
        }
    }

    /// Current state (read model for breadcrumbs and modal visibility).
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Owned copy of the current state, for consumers that outlive the
    /// borrow.
    pub fn snapshot(&self) -> NavigationState {
        self.state.clone()
    }

    /// Verb log recorded so far.
    pub fn log(&self) -> &DrillLog {
        &self.log
    }

    /// Last dispatch tick.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Whether state changed since the last [`mark_clean`].
    ///
    /// [`mark_clean`]: DrillSession::mark_clean
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the session as clean (saved).
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Apply a verb to the live state, recording it when it had effects.
    pub fn dispatch(&mut self, verb: DrillVerb) -> Result<DrillEffects, Fault> {
        let (next, effects) = self.state.apply(&verb)?;
        self.tick += 1;
        tracing::debug!(
            ?verb,
            ?effects,
            depth = next.depth(),
            open = next.is_open(),
            "drill transition"
        );
        if !effects.is_noop() {
            self.log.record(self.tick, verb);
            self.dirty = true;
        }
        self.state = next;
        Ok(effects)
    }

    /// Start a new session at `target`.
    pub fn open(&mut self, target: DrillTarget) -> DrillEffects {
        self.dispatch_infallible(DrillVerb::Open(target))
    }

    /// Drill deeper in place.
    pub fn navigate_to(&mut self, target: DrillTarget) -> Result<DrillEffects, Fault> {
        self.dispatch(DrillVerb::NavigateTo(target))
    }

    /// Pop one level; popping the last closes the view.
    pub fn go_back(&mut self) -> DrillEffects {
        self.dispatch_infallible(DrillVerb::GoBack)
    }

    /// Close the detail view and reset.
    pub fn close(&mut self) -> DrillEffects {
        self.dispatch_infallible(DrillVerb::Close)
    }

    /// Collapse history to the session root.
    pub fn clear_history(&mut self) -> DrillEffects {
        self.dispatch_infallible(DrillVerb::ClearHistory)
    }

    /// Current filter facets.
    pub fn filters(&self) -> &DrillFilters {
        &self.state.filters
    }

    /// Replace the filter facets. Filters are carried, not consumed, by
    /// the state machine, so this is a plain field update.
    pub fn set_filters(&mut self, filters: DrillFilters) {
        self.state.filters = filters;
        self.dirty = true;
    }

    // Only NavigateTo can fault; the other verbs go through here.
    fn dispatch_infallible(&mut self, verb: DrillVerb) -> DrillEffects {
        match self.dispatch(verb) {
            Ok(effects) => effects,
            Err(_) => DrillEffects::NONE,
        }
    }
}
