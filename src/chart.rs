//! # Chart Series Reshaping
//! Pure, testable logic that maps flat per-category metric records into the
//! shapes the comparison charts consume. No I/O, suitable for unit tests and
//! reuse outside the HTTP layer.
//!
//! Raw rows arrive as loose JSON objects from seed data or request bodies;
//! they are selected into strongly-typed `SeriesRecord`s at the boundary
//! before any shaping happens. A missing or non-numeric field counts as 0.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Target chart representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// Names which raw fields feed the series: the category axis, the first
/// channel's values, and optionally the second channel's values. The labels
/// name the two slices of a dual-channel pie reduction; they fall back to the
/// field keys when not set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesKeys {
    pub category: String,
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_label: Option<String>,
}

impl SeriesKeys {
    pub fn single(category: impl Into<String>, primary: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            primary: primary.into(),
            secondary: None,
            primary_label: None,
            secondary_label: None,
        }
    }

    pub fn dual(
        category: impl Into<String>,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            primary: primary.into(),
            secondary: Some(secondary.into()),
            primary_label: None,
            secondary_label: None,
        }
    }

    /// Display names for the two series (pie slices, legend entries).
    pub fn labeled(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_label = Some(primary.into());
        self.secondary_label = Some(secondary.into());
        self
    }

    /// Boundary step: pick the named fields out of each raw row, in input
    /// order. Missing fields are 0; a missing category is the empty string.
    pub fn select(&self, rows: &[Map<String, Value>]) -> Vec<SeriesRecord> {
        rows.iter()
            .map(|row| SeriesRecord {
                category: row
                    .get(&self.category)
                    .map(display_label)
                    .unwrap_or_default(),
                primary: numeric_field(row, &self.primary),
                secondary: self.secondary.as_deref().map(|k| numeric_field(row, k)),
            })
            .collect()
    }

    fn primary_name(&self) -> &str {
        self.primary_label.as_deref().unwrap_or(&self.primary)
    }

    fn secondary_name(&self) -> &str {
        self.secondary_label
            .as_deref()
            .or(self.secondary.as_deref())
            .unwrap_or_default()
    }
}

/// One validated input record: a category plus one value per charted channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub category: String,
    pub primary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<f64>,
}

/// One point on a category axis (bar and line charts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPoint {
    pub category: String,
    pub primary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<f64>,
}

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub name: String,
    pub value: f64,
}

/// Output shape, discriminated per chart family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "points", rename_all = "lowercase")]
pub enum ChartSeries {
    Cartesian(Vec<CategoryPoint>),
    Pie(Vec<Slice>),
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        match self {
            ChartSeries::Cartesian(points) => points.len(),
            ChartSeries::Pie(slices) => slices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reshape raw rows into the series a chart of `kind` consumes.
///
/// Bar and line pass the rows through in order, selecting only the named
/// fields. Pie aggregates: with a secondary key configured the output is
/// exactly two slices (sum of the first channel's values, then the second's,
/// over all rows); without one it is one slice per row, order preserved.
pub fn to_chart_series(rows: &[Map<String, Value>], keys: &SeriesKeys, kind: ChartKind) -> ChartSeries {
    let records = keys.select(rows);
    match kind {
        ChartKind::Bar | ChartKind::Line => ChartSeries::Cartesian(
            records
                .into_iter()
                .map(|r| CategoryPoint {
                    category: r.category,
                    primary: r.primary,
                    secondary: r.secondary,
                })
                .collect(),
        ),
        ChartKind::Pie => {
            if keys.secondary.is_some() {
                let primary_total: f64 = records.iter().map(|r| r.primary).sum();
                let secondary_total: f64 = records.iter().filter_map(|r| r.secondary).sum();
                ChartSeries::Pie(vec![
                    Slice {
                        name: keys.primary_name().to_string(),
                        value: primary_total,
                    },
                    Slice {
                        name: keys.secondary_name().to_string(),
                        value: secondary_total,
                    },
                ])
            } else {
                ChartSeries::Pie(
                    records
                        .into_iter()
                        .map(|r| Slice {
                            name: r.category,
                            value: r.primary,
                        })
                        .collect(),
                )
            }
        }
    }
}

/// Numeric view of a raw field; anything absent or non-numeric counts as 0.
fn numeric_field(row: &Map<String, Value>, key: &str) -> f64 {
    row.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Category labels keep their raw string form; other scalars are stringified.
fn display_label(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
