//! Sentra Drill-Down Navigation Engine
//!
//! This crate owns the navigation state for the monitoring dashboard's
//! drill-down layer. A user clicks a summary element (a platform, region,
//! topic, metric, or alert) and descends into progressively more detailed
//! views, with back-navigation and a breadcrumb trail that always stays in
//! lockstep with the history stack.
//!
//! # Architecture
//!
//! Navigation is a small, synchronous state machine:
//!
//! - [`DrillVerb`] - the closed set of operations (open, navigate, back,
//!   close, clear history).
//! - [`NavigationState`] - an immutable session snapshot. Applying a verb
//!   returns a *new* snapshot plus a [`DrillEffects`] set; nothing is
//!   mutated in place, so consumers can hold old snapshots safely.
//! - [`DrillSession`] - the owning store handed to the rendering layer.
//!   It dispatches verbs, records them in a [`DrillLog`] for deterministic
//!   replay, and exposes the read model.
//!
//! Detail records live elsewhere (the `sentra_registry` crate); this crate
//! only carries `(kind, key)` references to them.

mod breadcrumb;
mod effect;
mod fault;
mod filters;
mod log;
mod session;
mod state;
mod target;
mod verb;

pub use breadcrumb::{Breadcrumb, CrumbLevel, ROOT_LABEL};
pub use effect::DrillEffects;
pub use fault::{Fault, StateError};
pub use filters::{DateRange, DrillFilters, Sentiment};
pub use log::{DrillLog, TimestampedVerb};
pub use session::DrillSession;
pub use state::NavigationState;
pub use target::{DrillTarget, EntityKind};
pub use verb::DrillVerb;

/// Maximum drill stack depth (prevents runaway navigation).
pub const MAX_DRILL_DEPTH: usize = 32;
