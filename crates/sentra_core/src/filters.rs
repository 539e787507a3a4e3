//! Session filter facets.
//!
//! Filters ride along with the drill session; this core stores them but
//! never consumes them (the data layer applies them when fetching). They
//! persist across in-session navigation and reset when the session closes.

use serde::{Deserialize, Serialize};

/// Sentiment polarity facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Inclusive date range facet (ISO-8601 date strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl DateRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Optional facet -> value mapping carried by the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillFilters {
    pub platform: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub topic: Option<String>,
    pub date_range: Option<DateRange>,
    pub sentiment: Option<Sentiment>,
}

impl DrillFilters {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no facet is set.
    pub fn is_empty(&self) -> bool {
        self.platform.is_none()
            && self.region.is_none()
            && self.city.is_none()
            && self.topic.is_none()
            && self.date_range.is_none()
            && self.sentiment.is_none()
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_are_empty() {
        assert!(DrillFilters::default().is_empty());
    }

    #[test]
    fn builder_sets_facets() {
        let filters = DrillFilters::new()
            .with_region("DKI Jakarta")
            .with_sentiment(Sentiment::Negative)
            .with_date_range(DateRange::new("2024-01-01", "2024-01-31"));

        assert!(!filters.is_empty());
        assert_eq!(filters.region.as_deref(), Some("DKI Jakarta"));
        assert_eq!(filters.sentiment, Some(Sentiment::Negative));
        assert!(filters.platform.is_none());
    }
}
