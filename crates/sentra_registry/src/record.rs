//! Breakdown record variants - immutable detail snapshots.
//!
//! One record per drillable entity, keyed by a stable string (platform
//! name, region display name, topic tag, metric id, alert id). Consumers
//! always branch exhaustively on the variant before touching its fields,
//! so the union is a closed tagged enum, not a trait hierarchy.

use sentra_core::EntityKind;
use serde::{Deserialize, Serialize};

/// Sentiment share of mentions, in percent. The three fields sum to
/// roughly 100 (seed data is rounded).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSplit {
    pub positive: f32,
    pub neutral: f32,
    pub negative: f32,
}

impl SentimentSplit {
    pub fn new(positive: f32, neutral: f32, negative: f32) -> Self {
        Self {
            positive,
            neutral,
            negative,
        }
    }
}

/// A highlighted post shown in platform detail views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSnippet {
    pub author: String,
    pub excerpt: String,
    pub engagement: u64,
}

/// Per-platform mention breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformBreakdown {
    /// Platform name, also the lookup key (lowercase).
    pub platform: String,
    pub mentions: u64,
    /// Engagements per mention, in percent.
    pub engagement_rate: f32,
    pub sentiment: SentimentSplit,
    pub top_posts: Vec<PostSnippet>,
}

/// City-level drill data inside a region breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityBreakdown {
    /// BPS area code (e.g. "3171" for Jakarta Pusat).
    pub code: String,
    pub name: String,
    pub mentions: u64,
}

/// Per-region mention breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionBreakdown {
    /// Region display name, also the lookup key (mixed case,
    /// e.g. "DKI Jakarta").
    pub region: String,
    pub mentions: u64,
    pub sentiment: SentimentSplit,
    pub top_cities: Vec<CityBreakdown>,
}

/// Trending topic breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicBreakdown {
    /// Topic tag, also the lookup key.
    pub tag: String,
    pub volume: u64,
    /// Volume change vs the previous window, in percent.
    pub trend_delta: f32,
    /// Platforms the topic trends on, by name.
    pub platforms: Vec<String>,
}

/// Headline metric drill-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDrillDown {
    /// Metric id, also the lookup key (e.g. "total-mentions").
    pub id: String,
    pub label: String,
    pub value: f64,
    pub previous: f64,
    pub unit: String,
    /// Recent values, oldest first, for the sparkline.
    pub series: Vec<f64>,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

/// Active alert detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDetail {
    /// Alert id, also the lookup key.
    pub id: String,
    pub severity: AlertSeverity,
    /// ISO-8601 timestamp.
    pub triggered_at: String,
    /// Source platform name.
    pub platform: String,
    /// Affected region, when the alert is geographic.
    pub region: Option<String>,
    pub message: String,
}

/// A detail record for one drillable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BreakdownRecord {
    Platform(PlatformBreakdown),
    Region(RegionBreakdown),
    Topic(TopicBreakdown),
    Metric(MetricDrillDown),
    Alert(AlertDetail),
}

impl BreakdownRecord {
    /// The entity kind this record backs.
    pub fn kind(&self) -> EntityKind {
        match self {
            BreakdownRecord::Platform(_) => EntityKind::Platform,
            BreakdownRecord::Region(_) => EntityKind::Region,
            BreakdownRecord::Topic(_) => EntityKind::Topic,
            BreakdownRecord::Metric(_) => EntityKind::Metric,
            BreakdownRecord::Alert(_) => EntityKind::Alert,
        }
    }

    /// The stable lookup key (case-sensitive).
    pub fn key(&self) -> &str {
        match self {
            BreakdownRecord::Platform(p) => &p.platform,
            BreakdownRecord::Region(r) => &r.region,
            BreakdownRecord::Topic(t) => &t.tag,
            BreakdownRecord::Metric(m) => &m.id,
            BreakdownRecord::Alert(a) => &a.id,
        }
    }
}
