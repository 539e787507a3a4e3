//! The drill-down navigation state machine.
//!
//! A session is either Closed (overview only) or Open (a detail view with
//! a history stack). Applying a [`DrillVerb`] returns a new immutable
//! snapshot plus the effects produced; the input state is never mutated,
//! so the rendering layer can keep old snapshots while it re-renders.
//!
//! # Invariants
//!
//! - Open implies non-empty history; Closed implies empty history and no
//!   current target.
//! - `breadcrumbs.len() == history.len() + 1` (the fixed overview root
//!   plus one crumb per history entry, in lockstep).
//! - While Open, `current` is the top of the history stack.
//!
//! Every state reachable through [`NavigationState::apply`] satisfies
//! these; [`NavigationState::validate`] checks them explicitly.

use crate::breadcrumb::{Breadcrumb, CrumbLevel};
use crate::effect::DrillEffects;
use crate::fault::{Fault, StateError};
use crate::filters::DrillFilters;
use crate::target::DrillTarget;
use crate::verb::DrillVerb;
use crate::MAX_DRILL_DEPTH;
use serde::{Deserialize, Serialize};

/// One drill session's navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Whether a detail view is open.
    pub is_open: bool,

    /// Target being viewed; `None` while closed.
    pub current: Option<DrillTarget>,

    /// Drill path, oldest first. Index 0 is the session root.
    pub history: Vec<DrillTarget>,

    /// Breadcrumb trail: the overview root plus one crumb per history
    /// entry.
    pub breadcrumbs: Vec<Breadcrumb>,

    /// Carried filter facets. Stored, not consumed, by this core.
    pub filters: DrillFilters,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::closed()
    }
}

impl NavigationState {
    /// The initial Closed state: no history, root-only breadcrumbs.
    pub fn closed() -> Self {
        Self {
            is_open: false,
            current: None,
            history: Vec::new(),
            breadcrumbs: vec![Breadcrumb::root()],
            filters: DrillFilters::default(),
        }
    }

    /// Whether a detail view is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current drill depth (history stack size).
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Target being viewed, if any.
    pub fn current(&self) -> Option<&DrillTarget> {
        self.current.as_ref()
    }

    /// First target of the current session (the drill root), if any.
    pub fn session_root(&self) -> Option<&DrillTarget> {
        self.history.first()
    }

    /// Apply a verb, returning the next snapshot and its effects.
    ///
    /// Only `NavigateTo` can fault (depth overflow); on `Err` the caller
    /// keeps the old state. Sequence misuse (`GoBack`/`ClearHistory`
    /// while closed, redundant `Close`) is a no-op with
    /// [`DrillEffects::NONE`].
    pub fn apply(&self, verb: &DrillVerb) -> Result<(Self, DrillEffects), Fault> {
        match verb {
            DrillVerb::Open(target) => Ok(self.open(target.clone())),
            DrillVerb::NavigateTo(target) => self.navigate_to(target.clone()),
            DrillVerb::GoBack => Ok(self.go_back()),
            DrillVerb::Close => Ok(self.close()),
            DrillVerb::ClearHistory => Ok(self.clear_history()),
        }
    }

    /// Start a new session at `target`, replacing history wholesale.
    pub fn open(&self, target: DrillTarget) -> (Self, DrillEffects) {
        let next = Self {
            is_open: true,
            history: vec![target.clone()],
            breadcrumbs: vec![Breadcrumb::root(), Breadcrumb::for_target(&target)],
            current: Some(target),
            filters: self.filters.clone(),
        };
        (next, DrillEffects::OPENED | DrillEffects::TARGET_CHANGED)
    }

    /// Drill deeper in place. While closed this behaves as [`open`].
    ///
    /// Faults with [`Fault::StackOverflow`] at [`MAX_DRILL_DEPTH`],
    /// leaving the state unchanged.
    ///
    /// [`open`]: NavigationState::open
    pub fn navigate_to(&self, target: DrillTarget) -> Result<(Self, DrillEffects), Fault> {
        if !self.is_open {
            return Ok(self.open(target));
        }
        if self.history.len() >= MAX_DRILL_DEPTH {
            return Err(Fault::StackOverflow {
                max: MAX_DRILL_DEPTH,
            });
        }

        let mut next = self.clone();
        next.breadcrumbs.push(Breadcrumb::for_target(&target));
        next.history.push(target.clone());
        next.current = Some(target);
        Ok((
            next,
            DrillEffects::HISTORY_PUSHED | DrillEffects::TARGET_CHANGED,
        ))
    }

    /// Pop one history entry; popping the last closes the session.
    /// No-op while closed.
    pub fn go_back(&self) -> (Self, DrillEffects) {
        if !self.is_open {
            return (self.clone(), DrillEffects::NONE);
        }
        if self.history.len() > 1 {
            let mut next = self.clone();
            next.history.pop();
            next.breadcrumbs.pop();
            next.current = next.history.last().cloned();
            return (
                next,
                DrillEffects::HISTORY_POPPED | DrillEffects::TARGET_CHANGED,
            );
        }

        // Last entry: back out of the session entirely.
        let mut effects =
            DrillEffects::CLOSED | DrillEffects::HISTORY_POPPED | DrillEffects::TARGET_CHANGED;
        if !self.filters.is_empty() {
            effects |= DrillEffects::FILTERS_RESET;
        }
        (Self::closed(), effects)
    }

    /// End the session and reset to the initial state. Idempotent.
    pub fn close(&self) -> (Self, DrillEffects) {
        let mut effects = DrillEffects::NONE;
        if self.is_open {
            effects |= DrillEffects::CLOSED | DrillEffects::TARGET_CHANGED;
        }
        if !self.filters.is_empty() {
            effects |= DrillEffects::FILTERS_RESET;
        }
        if effects.is_noop() {
            return (self.clone(), DrillEffects::NONE);
        }
        (Self::closed(), effects)
    }

    /// Collapse history to the session root and reconcile `current` to
    /// it. Idempotent; no-op while closed. Filters are untouched.
    pub fn clear_history(&self) -> (Self, DrillEffects) {
        if self.history.len() <= 1 {
            return (self.clone(), DrillEffects::NONE);
        }

        let mut next = self.clone();
        next.history.truncate(1);
        next.breadcrumbs.truncate(2);
        let root = next.history[0].clone();
        let retargeted = self.current.as_ref() != Some(&root);
        next.current = Some(root);

        let mut effects = DrillEffects::HISTORY_CLEARED;
        if retargeted {
            effects |= DrillEffects::TARGET_CHANGED;
        }
        (next, effects)
    }

    /// Check the state-machine invariants.
    ///
    /// States produced by [`apply`](NavigationState::apply) always pass;
    /// a failure indicates a bug or a hand-built state.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.is_open {
            if self.history.is_empty() {
                return Err(StateError::OpenWithoutHistory);
            }
        } else if !self.history.is_empty() || self.current.is_some() {
            return Err(StateError::ClosedWithResidue);
        }

        if self.breadcrumbs.first() != Some(&Breadcrumb::root()) {
            return Err(StateError::MissingRoot);
        }
        if self.breadcrumbs.len() != self.history.len() + 1 {
            return Err(StateError::BreadcrumbMismatch {
                crumbs: self.breadcrumbs.len(),
                depth: self.history.len(),
            });
        }
        if self.is_open && self.current.as_ref() != self.history.last() {
            return Err(StateError::CurrentDesynced);
        }

        for (i, entry) in self.history.iter().enumerate() {
            let crumb = &self.breadcrumbs[i + 1];
            if crumb.level != CrumbLevel::Kind(entry.kind) || crumb.label != entry.label {
                return Err(StateError::CrumbDesynced { index: i + 1 });
            }
        }
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::target::EntityKind;
    use proptest::prelude::*;

    fn arb_kind() -> impl Strategy<Value = EntityKind> {
        prop_oneof![
            Just(EntityKind::Platform),
            Just(EntityKind::Region),
            Just(EntityKind::City),
            Just(EntityKind::Topic),
            Just(EntityKind::Metric),
            Just(EntityKind::Alert),
            Just(EntityKind::Post),
            Just(EntityKind::Author),
        ]
    }

    fn arb_target() -> impl Strategy<Value = DrillTarget> {
        (arb_kind(), "[a-z]{1,8}")
            .prop_map(|(kind, key)| DrillTarget::new(kind, key))
    }

    fn arb_verb() -> impl Strategy<Value = DrillVerb> {
        prop_oneof![
            arb_target().prop_map(DrillVerb::Open),
            arb_target().prop_map(DrillVerb::NavigateTo),
            Just(DrillVerb::GoBack),
            Just(DrillVerb::Close),
            Just(DrillVerb::ClearHistory),
        ]
    }

    /// Run a verb sequence from the initial state, keeping the old
    /// snapshot whenever a verb faults.
    fn run(verbs: &[DrillVerb]) -> NavigationState {
        let mut state = NavigationState::closed();
        for verb in verbs {
            if let Ok((next, _)) = state.apply(verb) {
                state = next;
            }
        }
        state
    }

    proptest! {
        #[test]
        fn invariants_hold_under_any_sequence(verbs in prop::collection::vec(arb_verb(), 0..64)) {
            let mut state = NavigationState::closed();
            for verb in &verbs {
                if let Ok((next, _)) = state.apply(verb) {
                    state = next;
                }
                prop_assert!(state.validate().is_ok());
                prop_assert_eq!(state.breadcrumbs.len(), state.history.len() + 1);
            }
        }

        #[test]
        fn repeated_go_back_is_confluent_to_closed(verbs in prop::collection::vec(arb_verb(), 0..48)) {
            let mut state = run(&verbs);
            let depth = state.depth();
            for _ in 0..depth {
                let (next, _) = state.go_back();
                state = next;
            }
            prop_assert!(!state.is_open());
            prop_assert_eq!(state.depth(), 0);
        }

        #[test]
        fn clear_history_idempotent(verbs in prop::collection::vec(arb_verb(), 0..48)) {
            let state = run(&verbs);
            let (once, _) = state.clear_history();
            let (twice, effects) = once.clear_history();
            prop_assert!(effects.is_noop());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn open_always_starts_depth_one(verbs in prop::collection::vec(arb_verb(), 0..48), target in arb_target()) {
            let state = run(&verbs);
            let (opened, _) = state.open(target.clone());
            prop_assert_eq!(opened.depth(), 1);
            prop_assert_eq!(opened.current(), Some(&target));
        }
    }
}
