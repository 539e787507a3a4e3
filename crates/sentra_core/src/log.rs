//! Drill log for deterministic session reconstruction.
//!
//! The log records applied verbs with ticks, enabling:
//! - Deterministic replay to reconstruct state
//! - Audit trail of user navigation
//! - Debugging and session reproduction

use crate::state::NavigationState;
use crate::verb::DrillVerb;
use serde::{Deserialize, Serialize};

/// A verb with the tick it was applied at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampedVerb {
    /// Dispatch tick (monotonic per session).
    pub tick: u64,

    /// The verb that was applied.
    pub verb: DrillVerb,
}

impl TimestampedVerb {
    pub fn new(tick: u64, verb: DrillVerb) -> Self {
        Self { tick, verb }
    }
}

/// Log of drill verbs for replay.
///
/// # Determinism
///
/// Replaying the same log from the initial state always produces the
/// same final [`NavigationState`]. Callers are expected to record only
/// verbs that produced effects ([`DrillSession`] does this), so a log
/// carries no dead weight.
///
/// [`DrillSession`]: crate::DrillSession
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillLog {
    /// Session identifier.
    pub session_id: u64,

    /// Recorded events, tick order.
    pub events: Vec<TimestampedVerb>,
}

impl DrillLog {
    /// Create a new empty log.
    pub fn new(session_id: u64) -> Self {
        Self {
            session_id,
            events: Vec::new(),
        }
    }

    /// Record a verb application.
    pub fn record(&mut self, tick: u64, verb: DrillVerb) {
        self.events.push(TimestampedVerb::new(tick, verb));
    }

    /// Replay all events from the initial state.
    ///
    /// Faulting verbs are skipped, matching live dispatch where a fault
    /// leaves the state unchanged.
    pub fn replay(&self) -> NavigationState {
        self.replay_to(u64::MAX)
    }

    /// Replay events up to and including `target_tick`.
    pub fn replay_to(&self, target_tick: u64) -> NavigationState {
        let mut state = NavigationState::closed();
        for event in &self.events {
            if event.tick > target_tick {
                break;
            }
            if let Ok((next, _)) = state.apply(&event.verb) {
                state = next;
            }
        }
        state
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop all events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{DrillTarget, EntityKind};
    use pretty_assertions::assert_eq;

    fn sample_log() -> DrillLog {
        let mut log = DrillLog::new(7);
        log.record(
            1,
            DrillVerb::Open(DrillTarget::new(EntityKind::Region, "DKI Jakarta")),
        );
        log.record(
            2,
            DrillVerb::NavigateTo(
                DrillTarget::new(EntityKind::City, "3171").with_label("Jakarta Pusat"),
            ),
        );
        log.record(3, DrillVerb::GoBack);
        log
    }

    #[test]
    fn replay_reconstructs_state() {
        let state = sample_log().replay();
        assert!(state.is_open());
        assert_eq!(state.depth(), 1);
        assert_eq!(
            state.current(),
            Some(&DrillTarget::new(EntityKind::Region, "DKI Jakarta"))
        );
    }

    #[test]
    fn replay_to_tick_stops_early() {
        let log = sample_log();

        let state = log.replay_to(2);
        assert_eq!(state.depth(), 2);
        assert_eq!(state.breadcrumbs.len(), 3);

        let state = log.replay_to(1);
        assert_eq!(state.depth(), 1);
    }

    #[test]
    fn replay_is_deterministic() {
        let log = sample_log();
        assert_eq!(log.replay(), log.replay());
    }

    #[test]
    fn replay_skips_faulting_verbs() {
        let mut log = DrillLog::new(1);
        log.record(
            1,
            DrillVerb::Open(DrillTarget::new(EntityKind::Metric, "reach")),
        );
        for i in 0..crate::MAX_DRILL_DEPTH + 4 {
            log.record(
                i as u64 + 2,
                DrillVerb::NavigateTo(DrillTarget::new(EntityKind::Post, format!("p{i}"))),
            );
        }

        let state = log.replay();
        assert_eq!(state.depth(), crate::MAX_DRILL_DEPTH);
        state.validate().unwrap();
    }

    #[test]
    fn empty_log_replays_to_initial() {
        let log = DrillLog::new(0);
        assert!(log.is_empty());
        assert_eq!(log.replay(), NavigationState::closed());
    }
}
