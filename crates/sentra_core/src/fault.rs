//! Fault types for navigation errors.
//!
//! Faults are recoverable: they mean a verb could not be applied and the
//! state was left unchanged. Sequence misuse (going back while closed) is
//! a defensive no-op, never a fault - only depth overflow faults today.

use thiserror::Error;

/// Recoverable error during verb application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// Drill stack at maximum depth; the push was rejected.
    #[error("drill stack overflow: max depth {max} reached")]
    StackOverflow { max: usize },
}

/// Invariant violation found by [`NavigationState::validate`].
///
/// These indicate a bug in the state machine itself, not user input;
/// they should never occur for states produced by `apply`.
///
/// [`NavigationState::validate`]: crate::NavigationState::validate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// Open session with nothing on the history stack.
    #[error("open state with empty history")]
    OpenWithoutHistory,

    /// Closed session still carrying history or a current target.
    #[error("closed state still carries history or a current target")]
    ClosedWithResidue,

    /// Breadcrumb trail lost the fixed overview root.
    #[error("breadcrumb trail missing its overview root")]
    MissingRoot,

    /// Trail length out of lockstep with the history stack.
    #[error("breadcrumb count {crumbs} does not match history depth {depth}")]
    BreadcrumbMismatch { crumbs: usize, depth: usize },

    /// Current target is not the top of the history stack.
    #[error("current target does not match the top of history")]
    CurrentDesynced,

    /// A crumb does not mirror its history entry.
    #[error("breadcrumb {index} does not mirror history entry {index}")]
    CrumbDesynced { index: usize },
}
