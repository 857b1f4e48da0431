//! Data structures for chart payloads served by the `/api` endpoints

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A chart payload as returned by `/api/file/*` and `/api/all/*`.
///
/// Fields the dashboard does not interpret (colours, `x`/`y`, `fill`, ...)
/// are preserved so the payload can be handed to Chart.js unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ChartPayload {
    /// Category labels of the x axis (revision numbers)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Value>,
    /// One dataset per plotted line
    pub datasets: Vec<Dataset>,
}

/// A single line of a chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    /// Legend and tooltip label
    pub label: String,
    /// Points in x order
    #[serde(default)]
    pub data: Vec<DataPoint>,
    /// Styling passed through to the chart library
    #[serde(flatten)]
    pub style: Map<String, Value>,
}

/// A point of a dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DataPoint {
    /// Raw value: megabytes for dataset 0, seconds for the others.
    /// Summary payloads only carry normalised `y` values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartPayload {
    /// Parse a payload from the body of an API response
    pub fn from_json(body: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Serialize back to JSON for the chart library
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Raw value of point `index` in dataset `dataset_index`
    pub fn value(&self, dataset_index: usize, index: usize) -> Option<f64> {
        self.datasets
            .get(dataset_index)
            .and_then(|d| d.data.get(index))
            .and_then(|p| p.v)
    }

    /// Number of points on the x axis
    pub fn len(&self) -> usize {
        self.datasets.iter().map(|d| d.data.len()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Text of an x-axis label: strings as-is, numbers and the rest as JSON
pub fn label_text(label: &Value) -> String {
    match label {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Unit of a dataset's raw values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Peak memory, shown rounded to whole megabytes
    Megabytes,
    /// Durations, shown rounded to hundredths of a second
    Seconds,
}

impl Unit {
    /// Dataset 0 is always memory; every other dataset is a duration.
    pub fn for_dataset(dataset_index: usize) -> Self {
        if dataset_index == 0 {
            Unit::Megabytes
        } else {
            Unit::Seconds
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Megabytes => "MB",
            Unit::Seconds => "s",
        }
    }

    /// Round `value` for display and append the unit, e.g. `42 MB` or `3.14 s`
    pub fn format(&self, value: f64) -> String {
        let rounded = match self {
            Unit::Megabytes => js_round(value),
            Unit::Seconds => js_round(value * 100.0) / 100.0,
        };
        format!("{} {}", rounded, self.suffix())
    }
}

/// Round half toward positive infinity, normalising negative zero.
fn js_round(value: f64) -> f64 {
    (value + 0.5).floor() + 0.0
}

/// Lifecycle of a lazily loaded chart
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChartLoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl ChartLoadState {
    /// Value stored in the `data-chart-state` attribute
    pub fn as_attr(&self) -> &'static str {
        match self {
            ChartLoadState::Idle => "idle",
            ChartLoadState::Loading => "loading",
            ChartLoadState::Loaded => "loaded",
            ChartLoadState::Failed(_) => "error",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ChartLoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
