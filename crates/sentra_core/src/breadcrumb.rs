//! Breadcrumb trail entries.
//!
//! Every trail starts at the fixed "Overview" root; each history entry
//! contributes exactly one crumb after it. The state machine keeps the
//! trail in lockstep with the history stack.

use crate::target::{DrillTarget, EntityKind};
use serde::{Deserialize, Serialize};

/// Label of the fixed root crumb.
pub const ROOT_LABEL: &str = "Overview";

/// Level a breadcrumb sits at: the overview root, or one drilled kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrumbLevel {
    /// The fixed dashboard root.
    Overview,

    /// A drilled-into entity kind.
    Kind(EntityKind),
}

/// One entry of the breadcrumb trail. Labels are display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Trail level.
    pub level: CrumbLevel,

    /// Human-readable label.
    pub label: String,
}

impl Breadcrumb {
    /// The fixed root crumb every trail starts with.
    pub fn root() -> Self {
        Self {
            level: CrumbLevel::Overview,
            label: ROOT_LABEL.to_string(),
        }
    }

    /// Crumb mirroring a drill target.
    pub fn for_target(target: &DrillTarget) -> Self {
        Self {
            level: CrumbLevel::Kind(target.kind),
            label: target.label.clone(),
        }
    }
}
