//! Endpoints of the benchmark API and how charts map onto them

use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

/// File category a single-file chart belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Csb,
    Ini,
}

impl FileKind {
    /// Pick the category from a chart id: anything mentioning `.csb` is a CSB file
    pub fn from_chart_id(chart_id: &str) -> Self {
        if chart_id.contains(".csb") {
            FileKind::Csb
        } else {
            FileKind::Ini
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Csb => "csb",
            FileKind::Ini => "ini",
        }
    }
}

/// Metrics available as aggregate charts over a revision range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricType {
    CsbPlayTime,
    CsbMemory,
    IniCutTime,
    IniDrawTime,
    IniMemory,
}

/// Summary charts in display order
pub const SUMMARY_METRICS: [MetricType; 5] = [
    MetricType::CsbPlayTime,
    MetricType::CsbMemory,
    MetricType::IniCutTime,
    MetricType::IniDrawTime,
    MetricType::IniMemory,
];

impl MetricType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::CsbPlayTime => "csb_play_time",
            MetricType::CsbMemory => "csb_memory",
            MetricType::IniCutTime => "ini_cut_time",
            MetricType::IniDrawTime => "ini_draw_time",
            MetricType::IniMemory => "ini_memory",
        }
    }

    /// Heading shown above the summary chart
    pub fn heading(&self) -> &'static str {
        match self {
            MetricType::CsbPlayTime => "CSB Play Time",
            MetricType::CsbMemory => "CSB Memory",
            MetricType::IniCutTime => "Ini Cutting Time",
            MetricType::IniDrawTime => "Ini Draw Time",
            MetricType::IniMemory => "Ini Memory",
        }
    }

    /// Id of the canvas the summary chart is drawn on
    pub fn canvas_id(&self) -> String {
        format!("{}_graph", self.as_str())
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUMMARY_METRICS
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::UnknownMetric(s.to_string()))
    }
}

/// Inclusive revision range of a summary view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionRange {
    pub low: u32,
    pub high: u32,
}

impl RevisionRange {
    pub fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }
}

/// A GET request against the benchmark API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// History of one file: `/api/file/<kind>?id=...`
    File { kind: FileKind, id: String },
    /// One metric over all files: `/api/all/<metric>?r1=..&r2=..`
    Summary {
        metric: MetricType,
        range: RevisionRange,
    },
}

impl ApiRequest {
    /// Request for the chart placeholder carrying `chart_id`
    pub fn for_chart_id(chart_id: &str) -> Self {
        ApiRequest::File {
            kind: FileKind::from_chart_id(chart_id),
            id: chart_id.to_string(),
        }
    }

    pub fn summary(metric: MetricType, range: RevisionRange) -> Self {
        ApiRequest::Summary { metric, range }
    }

    /// Path and query, relative to the API host.
    ///
    /// The file id is sent with a leading `%`: the server matches it as a
    /// `LIKE` suffix of the stored config path.
    pub fn path(&self) -> String {
        match self {
            ApiRequest::File { kind, id } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("id", &format!("%{}", id))
                    .finish();
                format!("/api/file/{}?{}", kind.as_str(), query)
            }
            ApiRequest::Summary { metric, range } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("r1", &range.low.to_string())
                    .append_pair("r2", &range.high.to_string())
                    .finish();
                format!("/api/all/{}?{}", metric.as_str(), query)
            }
        }
    }

    /// Absolute or same-origin URL under `api_base`
    pub fn url(&self, api_base: &str) -> String {
        format!("{}{}", api_base.trim_end_matches('/'), self.path())
    }
}

/// One summary request per metric, all sharing `range`
pub fn summary_requests(range: RevisionRange) -> Vec<ApiRequest> {
    SUMMARY_METRICS
        .iter()
        .map(|m| ApiRequest::summary(*m, range))
        .collect()
}
