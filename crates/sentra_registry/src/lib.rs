//! Sentra Breakdown Data Registry
//!
//! Read-only keyed store backing the drill-down views: maps an
//! `(EntityKind, key)` pair to an immutable detail record. Records are
//! loaded once at startup and never mutated by the navigation layer.
//!
//! Resolution misses are an expected, common case (simulated entities
//! with no seeded record) and are represented as `None`, never an error.
//! Errors exist only at load time, where the registry validates its
//! input (no empty keys, no duplicate `(kind, key)` pairs).

mod error;
mod record;
mod registry;
pub mod seed;

pub use error::RegistryError;
pub use record::{
    AlertDetail, AlertSeverity, BreakdownRecord, CityBreakdown, MetricDrillDown,
    PlatformBreakdown, PostSnippet, RegionBreakdown, SentimentSplit, TopicBreakdown,
};
pub use registry::BreakdownRegistry;
