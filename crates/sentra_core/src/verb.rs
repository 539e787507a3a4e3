//! Drill verbs - the closed set of navigation operations.

use crate::target::DrillTarget;
use serde::{Deserialize, Serialize};

/// A navigation operation.
///
/// Verbs are data: they can be recorded, serialized, and replayed (see
/// [`DrillLog`](crate::DrillLog)). Applying one to a
/// [`NavigationState`](crate::NavigationState) yields a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verb", rename_all = "snake_case")]
pub enum DrillVerb {
    /// Start a new drill session at the target, replacing any existing
    /// history wholesale.
    Open(DrillTarget),

    /// Drill deeper in place, pushing onto history. While closed this
    /// behaves as `Open`.
    NavigateTo(DrillTarget),

    /// Pop one history entry; popping the last closes the session.
    GoBack,

    /// End the session and reset to the initial state.
    Close,

    /// Collapse history to its session root, reconciling the current
    /// target to it.
    ClearHistory,
}

impl DrillVerb {
    /// The target this verb carries, if any.
    pub fn target(&self) -> Option<&DrillTarget> {
        match self {
            DrillVerb::Open(target) | DrillVerb::NavigateTo(target) => Some(target),
            DrillVerb::GoBack | DrillVerb::Close | DrillVerb::ClearHistory => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::EntityKind;

    #[test]
    fn verb_target_accessor() {
        let target = DrillTarget::new(EntityKind::Topic, "pilkada");
        assert_eq!(DrillVerb::Open(target.clone()).target(), Some(&target));
        assert_eq!(DrillVerb::GoBack.target(), None);
    }

    #[test]
    fn verb_round_trips_through_json() {
        let verb = DrillVerb::NavigateTo(DrillTarget::new(EntityKind::City, "3171"));
        let json = serde_json::to_string(&verb).unwrap();
        let back: DrillVerb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, verb);
    }
}
