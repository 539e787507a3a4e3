//! Drill targets - the points of interest a user can descend into.
//!
//! A target is identified by `(kind, key)`. The label is display-only;
//! navigation correctness never depends on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity a drill-down can descend into.
///
/// This is a closed set: calling with an unrecognized kind is
/// unrepresentable by construction. Serialized in lowercase to match the
/// dashboard's wire literals (`"platform"`, `"region"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum EntityKind {
    /// Social platform (twitter, instagram, ...).
    Platform = 0,

    /// Province-level region, keyed by display name (e.g. "DKI Jakarta").
    Region = 1,

    /// City within a region, keyed by area code (e.g. "3171").
    City = 2,

    /// Trending topic tag.
    Topic = 3,

    /// Headline dashboard metric.
    Metric = 4,

    /// Active monitoring alert.
    Alert = 5,

    /// Individual post (simulated; no backing detail record yet).
    Post = 6,

    /// Post author (simulated; no backing detail record yet).
    Author = 7,
}

impl EntityKind {
    /// Lowercase literal used in breadcrumb levels and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Platform => "platform",
            EntityKind::Region => "region",
            EntityKind::City => "city",
            EntityKind::Topic => "topic",
            EntityKind::Metric => "metric",
            EntityKind::Alert => "alert",
            EntityKind::Post => "post",
            EntityKind::Author => "author",
        }
    }

    /// All kinds in declaration order.
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Platform,
            EntityKind::Region,
            EntityKind::City,
            EntityKind::Topic,
            EntityKind::Metric,
            EntityKind::Alert,
            EntityKind::Post,
            EntityKind::Author,
        ]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point of interest the user is drilling into.
///
/// Immutable once created. `key` must match the registry's canonical
/// casing for the given kind; resolution may legitimately fail for
/// simulated entities with no seeded record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillTarget {
    /// Entity kind (selects the registry sub-map at resolution time).
    pub kind: EntityKind,

    /// Stable lookup key (platform name, region display name, area code,
    /// topic tag, metric id, alert id).
    pub key: String,

    /// Display label for the breadcrumb trail.
    pub label: String,
}

impl DrillTarget {
    /// Create a target. The key is used verbatim as the label; callers
    /// that need disambiguation supply one via [`DrillTarget::with_label`].
    pub fn new(kind: EntityKind, key: impl Into<String>) -> Self {
        let key = key.into();
        let label = key.clone();
        Self { kind, key, label }
    }

    /// Replace the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_defaults_to_key() {
        let target = DrillTarget::new(EntityKind::Platform, "twitter");
        assert_eq!(target.label, "twitter");
    }

    #[test]
    fn with_label_overrides() {
        let target = DrillTarget::new(EntityKind::City, "3171").with_label("Jakarta Pusat");
        assert_eq!(target.key, "3171");
        assert_eq!(target.label, "Jakarta Pusat");
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&EntityKind::Region).unwrap();
        assert_eq!(json, "\"region\"");
    }

    #[test]
    fn all_kinds_have_distinct_literals() {
        let mut seen = std::collections::HashSet::new();
        for kind in EntityKind::all() {
            assert!(seen.insert(kind.as_str()));
        }
    }
}
