use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Full chart input supplied by the host on every render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    /// Ordered periods, one per horizontal-axis tick.
    #[serde(default, alias = "values")]
    pub periods: Vec<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_title: Option<String>,
}

impl ChartInput {
    #[must_use]
    pub fn new(periods: Vec<Period>) -> Self {
        Self {
            periods,
            y_axis_title: None,
        }
    }

    #[must_use]
    pub fn with_y_axis_title(mut self, title: impl Into<String>) -> Self {
        self.y_axis_title = Some(title.into());
        self
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("chart input is not valid JSON: {err}")))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Number of points across every period.
    #[must_use]
    pub fn total_point_count(&self) -> usize {
        self.periods.iter().map(|period| period.points.len()).sum()
    }

    /// Number of values (bars) across every point of every period.
    #[must_use]
    pub fn total_value_count(&self) -> usize {
        self.periods
            .iter()
            .flat_map(|period| &period.points)
            .map(|point| point.values.len())
            .sum()
    }

    /// All values in traversal order with missing entries repaired to `0`.
    pub fn normalized_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.periods
            .iter()
            .flat_map(|period| &period.points)
            .flat_map(|point| point.normalized_values())
    }

    /// Returns `true` when a non-empty y-axis title is present.
    #[must_use]
    pub fn has_y_axis_title(&self) -> bool {
        self.y_axis_title
            .as_deref()
            .is_some_and(|title| !title.is_empty())
    }
}

/// One horizontal grouping of points.
///
/// Titles key the ordinal axis; duplicate titles collide on that axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Period {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Period {
    #[must_use]
    pub fn new(title: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            title: title.into(),
            points,
        }
    }

    /// Value feeding the trend line: second value of the first point, `0` when absent.
    #[must_use]
    pub fn trend_value(&self) -> f64 {
        self.points
            .first()
            .map_or(0.0, |point| point.normalized_value(1))
    }
}

/// One sub-grouping of adjacent bars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub values: Vec<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl Point {
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().map(Some).collect(),
            labels: None,
        }
    }

    /// Builds a point that may contain missing values.
    #[must_use]
    pub fn from_optional(values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self {
            values: values.into_iter().collect(),
            labels: None,
        }
    }

    #[must_use]
    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Value at `index`, `0` when missing, out of range or non-finite.
    #[must_use]
    pub fn normalized_value(&self, index: usize) -> f64 {
        self.values
            .get(index)
            .copied()
            .flatten()
            .map_or(0.0, normalize_value)
    }

    pub fn normalized_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .map(|value| value.map_or(0.0, normalize_value))
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(index))
            .map(String::as_str)
    }
}

fn normalize_value(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
