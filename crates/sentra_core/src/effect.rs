//! Effect flags - the output protocol from verb application.
//!
//! Applying a verb returns a DrillEffects set indicating what changed.
//! The rendering layer branches on these flags (show/hide the detail
//! modal, refresh breadcrumbs) instead of diffing state snapshots.

use bitflags::bitflags;

bitflags! {
    /// Set of effects produced by applying a drill verb.
    ///
    /// Effects are additive: one verb can produce several. A defensive
    /// no-op (e.g. `GoBack` while closed) produces `NONE`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DrillEffects: u16 {
        /// No effects.
        const NONE = 0;

        /// Detail view opened (a new drill session started).
        const OPENED = 1 << 0;

        /// Detail view closed (session ended).
        const CLOSED = 1 << 1;

        /// The current target changed; the detail panel must re-resolve.
        const TARGET_CHANGED = 1 << 2;

        /// A target was pushed onto the history stack.
        const HISTORY_PUSHED = 1 << 3;

        /// A target was popped from the history stack.
        const HISTORY_POPPED = 1 << 4;

        /// History was collapsed to its session root.
        const HISTORY_CLEARED = 1 << 5;

        /// Session filters were reset to defaults.
        const FILTERS_RESET = 1 << 6;
    }
}

impl Default for DrillEffects {
    fn default() -> Self {
        DrillEffects::NONE
    }
}

impl DrillEffects {
    /// Check whether the verb changed nothing.
    pub fn is_noop(&self) -> bool {
        self.is_empty()
    }

    /// Check whether the open/closed flag flipped.
    pub fn session_changed(&self) -> bool {
        self.intersects(DrillEffects::OPENED | DrillEffects::CLOSED)
    }

    /// Check whether the history stack changed shape.
    pub fn history_changed(&self) -> bool {
        self.intersects(
            DrillEffects::HISTORY_PUSHED
                | DrillEffects::HISTORY_POPPED
                | DrillEffects::HISTORY_CLEARED,
        )
    }

    /// Check whether the detail panel must re-resolve its record.
    pub fn target_changed(&self) -> bool {
        self.contains(DrillEffects::TARGET_CHANGED)
    }
}
