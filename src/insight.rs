//! # Insights
//! Recommendation records shown on the channel dashboard, plus the pure
//! lookup logic that maps their (type, impact) tags to a display category
//! label and a severity tier.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::InvalidArgument;

static LIBRARY: Lazy<Vec<Insight>> = Lazy::new(|| {
    let raw = include_str!("../insight_library.json");
    serde_json::from_str(raw).expect("valid insight library")
});

/// Seeded recommendations, served for every channel until real analytics land.
pub fn seeded_insights() -> &'static [Insight] {
    &LIBRARY
}

/// Domain a recommendation belongs to. Closed set; anything else falls back
/// to the generic "Insight" label at classification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Content,
    Audience,
    Growth,
    Engagement,
}

impl InsightType {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "content" => Some(Self::Content),
            "audience" => Some(Self::Audience),
            "growth" => Some(Self::Growth),
            "engagement" => Some(Self::Engagement),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Content => "Content Strategy",
            Self::Audience => "Audience Insight",
            Self::Growth => "Growth Opportunity",
            Self::Engagement => "Engagement Booster",
        }
    }
}

/// Impact tier of a recommendation. Closed set; unrecognized tags are a
/// caller error, there is no fallback rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn severity_rank(self) -> u8 {
        match self {
            Self::High => 2,
            Self::Medium => 1,
            Self::Low => 0,
        }
    }
}

/// A short recommendation, rendered as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub impact: Impact,
}

/// Display category and severity tier derived from an insight's tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub severity_rank: u8,
}

/// Map raw (type, impact) tags to their display classification.
///
/// An unrecognized type degrades to the generic "Insight" label; an
/// unrecognized impact has no defensible rank and is rejected instead.
pub fn classify(insight_type: &str, impact: &str) -> Result<Classification, InvalidArgument> {
    let impact = Impact::parse(impact)
        .ok_or_else(|| InvalidArgument::UnknownImpact(impact.to_string()))?;
    let label = InsightType::parse(insight_type)
        .map(InsightType::label)
        .unwrap_or("Insight");
    Ok(Classification {
        label: label.to_string(),
        severity_rank: impact.severity_rank(),
    })
}

impl Insight {
    /// Classification of a well-typed insight never fails: both tags come
    /// from the closed sets by construction.
    pub fn classification(&self) -> Classification {
        Classification {
            label: self.insight_type.label().to_string(),
            severity_rank: self.impact.severity_rank(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_type_and_impact() {
        let c = classify("content", "high").unwrap();
        assert_eq!(c.label, "Content Strategy");
        assert_eq!(c.severity_rank, 2);
    }

    #[test]
    fn every_type_has_its_own_label() {
        assert_eq!(classify("audience", "low").unwrap().label, "Audience Insight");
        assert_eq!(classify("growth", "low").unwrap().label, "Growth Opportunity");
        assert_eq!(
            classify("engagement", "low").unwrap().label,
            "Engagement Booster"
        );
    }

    #[test]
    fn unknown_type_falls_back_to_generic_label() {
        let c = classify("unknown-type", "low").unwrap();
        assert_eq!(c.label, "Insight");
        assert_eq!(c.severity_rank, 0);
    }

    #[test]
    fn unknown_impact_is_rejected() {
        let err = classify("content", "critical").unwrap_err();
        assert_eq!(
            err,
            crate::error::InvalidArgument::UnknownImpact("critical".to_string())
        );
    }

    #[test]
    fn impact_ranks_are_ordered() {
        assert_eq!(Impact::High.severity_rank(), 2);
        assert_eq!(Impact::Medium.severity_rank(), 1);
        assert_eq!(Impact::Low.severity_rank(), 0);
    }

    #[test]
    fn typed_insight_classifies_without_failure() {
        let i = Insight {
            title: "Post more shorts".into(),
            description: "Short-form uploads outperform the channel average.".into(),
            insight_type: InsightType::Growth,
            impact: Impact::Medium,
        };
        let c = i.classification();
        assert_eq!(c.label, "Growth Opportunity");
        assert_eq!(c.severity_rank, 1);
    }

    #[test]
    fn seeded_library_parses_and_covers_every_type() {
        let lib = seeded_insights();
        assert!(!lib.is_empty());
        for t in [
            InsightType::Content,
            InsightType::Audience,
            InsightType::Growth,
            InsightType::Engagement,
        ] {
            assert!(lib.iter().any(|i| i.insight_type == t), "missing {t:?}");
        }
    }

    #[test]
    fn tags_round_trip_through_serde() {
        let i: Insight = serde_json::from_value(serde_json::json!({
            "title": "t",
            "description": "d",
            "type": "engagement",
            "impact": "high"
        }))
        .unwrap();
        assert_eq!(i.insight_type, InsightType::Engagement);
        assert_eq!(i.impact, Impact::High);
    }
}
