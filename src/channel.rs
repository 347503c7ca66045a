//! # Channel Model
//! The summary a lookup resolves to. Immutable once constructed; a re-lookup
//! replaces the whole value, nothing is patched in place.

use serde::{Deserialize, Serialize};

/// Aggregate metrics and identity of one channel.
///
/// All counts are non-negative; growth is a signed percentage and the only
/// metric allowed below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSummary {
    /// Opaque channel identifier.
    pub id: String,
    pub name: String,
    pub subscribers: u64,
    pub views: u64,
    pub videos: u64,
    /// May be empty; the UI substitutes its own placeholder text.
    #[serde(default)]
    pub description: String,
    /// Month-over-month growth in percent.
    pub growth: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl ChannelSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subscribers: 0,
            views: 0,
            videos: 0,
            description: String::new(),
            growth: 0.0,
            thumbnail_url: None,
        }
    }

    pub fn with_metrics(mut self, subscribers: u64, views: u64, videos: u64) -> Self {
        self.subscribers = subscribers;
        self.views = views;
        self.videos = videos;
        self
    }

    pub fn with_growth(mut self, growth: f64) -> Self {
        self.growth = growth;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_all_fields() {
        let ch = ChannelSummary::new("UC123", "Tech Insights")
            .with_metrics(1_250_000, 25_000_000, 420)
            .with_growth(12.5)
            .with_description("Latest tech reviews and insights")
            .with_thumbnail("https://example.com/t.jpg");
        assert_eq!(ch.subscribers, 1_250_000);
        assert_eq!(ch.videos, 420);
        assert_eq!(ch.growth, 12.5);
        assert!(ch.thumbnail_url.is_some());
    }

    #[test]
    fn serializes_without_empty_thumbnail() {
        let v = serde_json::to_value(ChannelSummary::new("UC1", "A")).unwrap();
        assert!(v.get("thumbnail_url").is_none());
        assert_eq!(v["id"], "UC1");
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let ch: ChannelSummary = serde_json::from_value(serde_json::json!({
            "id": "UC1",
            "name": "A",
            "subscribers": 10,
            "views": 100,
            "videos": 2,
            "growth": -2.4
        }))
        .unwrap();
        assert_eq!(ch.description, "");
        assert_eq!(ch.growth, -2.4);
    }
}
