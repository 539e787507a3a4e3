//! Keyed resolution of breakdown records.
//!
//! Five independent sub-maps, one per backed entity kind. The registry
//! MUST be validated at construction (duplicate and empty keys are load
//! errors); after that, `resolve` is a pure, infallible lookup.

use crate::error::RegistryError;
use crate::record::BreakdownRecord;
use sentra_core::EntityKind;
use std::collections::HashMap;

/// Immutable keyed store of breakdown records.
///
/// Keys are matched by exact, case-sensitive equality: region and
/// platform records use their mixed-case display names as keys
/// (e.g. "DKI Jakarta"), and callers must pass the canonical casing.
#[derive(Debug, Clone, Default)]
pub struct BreakdownRegistry {
    platforms: HashMap<String, BreakdownRecord>,
    regions: HashMap<String, BreakdownRecord>,
    topics: HashMap<String, BreakdownRecord>,
    metrics: HashMap<String, BreakdownRecord>,
    alerts: HashMap<String, BreakdownRecord>,
}

impl BreakdownRegistry {
    /// Build a registry from records, validating keys.
    pub fn from_records(
        records: impl IntoIterator<Item = BreakdownRecord>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for record in records {
            let kind = record.kind();
            let key = record.key().to_string();
            if key.is_empty() {
                return Err(RegistryError::EmptyKey { kind });
            }
            let map = registry.map_mut(kind);
            if map.contains_key(&key) {
                return Err(RegistryError::DuplicateKey { kind, key });
            }
            map.insert(key, record);
        }
        Ok(registry)
    }

    /// Resolve `(kind, key)` to its record.
    ///
    /// A miss returns `None` - an expected case (simulated entities have
    /// no seeded record), rendered as an empty-state panel. `City`,
    /// `Post`, and `Author` kinds have no backing sub-map and always
    /// miss.
    pub fn resolve(&self, kind: EntityKind, key: &str) -> Option<&BreakdownRecord> {
        self.map(kind)?.get(key)
    }

    /// Total number of records across all sub-maps.
    pub fn len(&self) -> usize {
        self.platforms.len()
            + self.regions.len()
            + self.topics.len()
            + self.metrics.len()
            + self.alerts.len()
    }

    /// Check if no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys backed for a kind, sorted for deterministic iteration.
    /// Unbacked kinds yield an empty list.
    pub fn keys(&self, kind: EntityKind) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .map(kind)
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    fn map(&self, kind: EntityKind) -> Option<&HashMap<String, BreakdownRecord>> {
        match kind {
            EntityKind::Platform => Some(&self.platforms),
            EntityKind::Region => Some(&self.regions),
            EntityKind::Topic => Some(&self.topics),
            EntityKind::Metric => Some(&self.metrics),
            EntityKind::Alert => Some(&self.alerts),
            EntityKind::City | EntityKind::Post | EntityKind::Author => None,
        }
    }

    fn map_mut(&mut self, kind: EntityKind) -> &mut HashMap<String, BreakdownRecord> {
        match kind {
            EntityKind::Platform => &mut self.platforms,
            EntityKind::Region => &mut self.regions,
            EntityKind::Topic => &mut self.topics,
            EntityKind::Metric => &mut self.metrics,
            EntityKind::Alert => &mut self.alerts,
            // Records can only be one of the five backed kinds
            // (BreakdownRecord::kind never returns the others).
            EntityKind::City | EntityKind::Post | EntityKind::Author => {
                unreachable!("no sub-map for {kind}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PlatformBreakdown, RegionBreakdown, SentimentSplit};
    use pretty_assertions::assert_eq;

    fn platform(name: &str, mentions: u64) -> BreakdownRecord {
        BreakdownRecord::Platform(PlatformBreakdown {
            platform: name.to_string(),
            mentions,
            engagement_rate: 4.2,
            sentiment: SentimentSplit::new(30.0, 50.0, 20.0),
            top_posts: vec![],
        })
    }

    fn region(name: &str) -> BreakdownRecord {
        BreakdownRecord::Region(RegionBreakdown {
            region: name.to_string(),
            mentions: 100_000,
            sentiment: SentimentSplit::new(30.0, 50.0, 20.0),
            top_cities: vec![],
        })
    }

    #[test]
    fn resolve_hit_and_miss() {
        let registry =
            BreakdownRegistry::from_records([platform("twitter", 1_850_000)]).unwrap();

        let record = registry.resolve(EntityKind::Platform, "twitter").unwrap();
        match record {
            BreakdownRecord::Platform(p) => assert_eq!(p.mentions, 1_850_000),
            other => panic!("wrong variant: {other:?}"),
        }
        assert!(registry.resolve(EntityKind::Platform, "snapchat").is_none());
    }

    #[test]
    fn resolution_is_case_sensitive() {
        let registry = BreakdownRegistry::from_records([region("DKI Jakarta")]).unwrap();
        assert!(registry.resolve(EntityKind::Region, "DKI Jakarta").is_some());
        assert!(registry.resolve(EntityKind::Region, "dki jakarta").is_none());
    }

    #[test]
    fn kinds_do_not_collide() {
        // Same key string under two kinds resolves independently.
        let registry =
            BreakdownRegistry::from_records([platform("jakarta", 10), region("jakarta")])
                .unwrap();
        assert!(registry.resolve(EntityKind::Platform, "jakarta").is_some());
        assert!(registry.resolve(EntityKind::Region, "jakarta").is_some());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn unbacked_kinds_always_miss() {
        let registry = BreakdownRegistry::from_records([region("DKI Jakarta")]).unwrap();
        assert!(registry.resolve(EntityKind::City, "3171").is_none());
        assert!(registry.resolve(EntityKind::Post, "p1").is_none());
        assert!(registry.resolve(EntityKind::Author, "user-88").is_none());
        assert!(registry.keys(EntityKind::City).is_empty());
    }

    #[test]
    fn duplicate_key_is_a_load_error() {
        let err = BreakdownRegistry::from_records([
            platform("twitter", 1),
            platform("twitter", 2),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateKey {
                kind: EntityKind::Platform,
                key: "twitter".to_string(),
            }
        );
    }

    #[test]
    fn empty_key_is_a_load_error() {
        let err = BreakdownRegistry::from_records([platform("", 1)]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::EmptyKey {
                kind: EntityKind::Platform
            }
        );
    }

    #[test]
    fn keys_are_sorted() {
        let registry = BreakdownRegistry::from_records([
            platform("youtube", 1),
            platform("instagram", 2),
            platform("tiktok", 3),
        ])
        .unwrap();
        assert_eq!(
            registry.keys(EntityKind::Platform),
            vec!["instagram", "tiktok", "youtube"]
        );
    }
}
