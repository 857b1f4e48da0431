//! Chart.js configuration for the two rendering modes

use crate::api::SUMMARY_METRICS;
use crate::config::DashboardConfig;
use crate::data::ChartPayload;
use serde::Serialize;

/// Colour scheme shared with the API server (Chart.js sample colours)
pub const PALETTE: &[&str] = &[
    "rgb(54, 162, 235)",  // blue
    "rgb(255, 159, 64)",  // orange
    "rgb(75, 192, 192)",  // green
    "rgb(255, 205, 86)",  // yellow
    "rgb(255, 99, 132)",  // red
    "rgb(153, 102, 255)", // purple
    "rgb(201, 203, 207)", // grey
];

/// How a chart is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// History of one file: custom tooltips, library-default legend
    SingleFile,
    /// One metric over a revision range: no legend, default tooltips
    Summary,
}

impl RenderMode {
    pub fn uses_custom_tooltip(&self) -> bool {
        matches!(self, RenderMode::SingleFile)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Animation {
    pub duration: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hover {
    pub animation_duration: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineElement {
    pub tension: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Elements {
    pub line: LineElement,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub ticks: Ticks,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    pub y_axes: Vec<Axis>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Legend {
    pub display: bool,
}

/// Built-in tooltips switched off in favour of the `custom` callback,
/// which the dashboard attaches after serialization.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Tooltips {
    pub enabled: bool,
    pub mode: &'static str,
    pub intersect: bool,
}

/// The `options` object of a Chart.js 2 line chart
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub animation: Animation,
    pub hover: Hover,
    pub responsive_animation_duration: u32,
    pub elements: Elements,
    pub scales: Scales,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltips: Option<Tooltips>,
}

impl ChartOptions {
    /// Instant rendering and a zero-based y axis in every mode
    pub fn for_mode(mode: RenderMode) -> Self {
        let (legend, tooltips) = match mode {
            RenderMode::SingleFile => (
                None,
                Some(Tooltips {
                    enabled: false,
                    mode: "index",
                    intersect: false,
                }),
            ),
            RenderMode::Summary => (Some(Legend { display: false }), None),
        };

        Self {
            animation: Animation { duration: 0 },
            hover: Hover {
                animation_duration: 0,
            },
            responsive_animation_duration: 0,
            elements: Elements {
                line: LineElement { tension: 0.0 },
            },
            scales: Scales {
                y_axes: vec![Axis {
                    ticks: Ticks {
                        begin_at_zero: true,
                    },
                }],
            },
            legend,
            tooltips,
        }
    }
}

/// Full argument of `new Chart(ctx, config)`
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: &'a ChartPayload,
    pub options: ChartOptions,
}

impl<'a> ChartConfig<'a> {
    pub fn new(data: &'a ChartPayload, mode: RenderMode) -> Self {
        Self {
            kind: "line",
            data,
            options: ChartOptions::for_mode(mode),
        }
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Markup placed in `#summary_charts`: a heading and a canvas per metric
pub fn summary_markup(config: &DashboardConfig) -> String {
    let (width, height) = config.summary_canvas;
    let mut html = String::from("<h1>Graphs</h1>");
    for metric in SUMMARY_METRICS {
        html.push_str(&format!(
            "<h2>{}</h2><canvas id=\"{}\" width=\"{}\" height=\"{}\"></canvas>",
            metric.heading(),
            metric.canvas_id(),
            width,
            height
        ));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_single_file_options() {
        let options = serde_json::to_value(ChartOptions::for_mode(RenderMode::SingleFile)).unwrap();

        assert_eq!(
            options,
            json!({
                "animation": {"duration": 0},
                "hover": {"animationDuration": 0},
                "responsiveAnimationDuration": 0,
                "elements": {"line": {"tension": 0.0}},
                "scales": {"yAxes": [{"ticks": {"beginAtZero": true}}]},
                "tooltips": {"enabled": false, "mode": "index", "intersect": false}
            })
        );
    }

    #[test]
    fn test_summary_options_hide_legend() {
        let options = serde_json::to_value(ChartOptions::for_mode(RenderMode::Summary)).unwrap();

        assert_eq!(options["legend"], json!({"display": false}));
        assert!(options.get("tooltips").is_none());
        assert_eq!(options["animation"]["duration"], json!(0));
        assert_eq!(options["scales"]["yAxes"][0]["ticks"]["beginAtZero"], json!(true));
    }

    #[test]
    fn test_config_wraps_payload() {
        let payload = ChartPayload::from_json(
            r#"{"labels":[1],"datasets":[{"label":"Memory","data":[{"v":3.0}]}]}"#,
        )
        .unwrap();
        let config: serde_json::Value =
            serde_json::from_str(&ChartConfig::new(&payload, RenderMode::Summary).to_json().unwrap())
                .unwrap();

        assert_eq!(config["type"], json!("line"));
        assert_eq!(config["data"]["datasets"][0]["label"], json!("Memory"));
        assert_eq!(config["data"]["labels"], json!([1]));
    }

    #[test]
    fn test_custom_tooltip_only_for_single_file() {
        assert!(RenderMode::SingleFile.uses_custom_tooltip());
        assert!(!RenderMode::Summary.uses_custom_tooltip());
    }

    #[test]
    fn test_summary_markup() {
        let html = summary_markup(&DashboardConfig::default());

        assert!(html.starts_with("<h1>Graphs</h1><h2>CSB Play Time</h2>"));
        assert!(html.contains(r#"<canvas id="ini_cut_time_graph" width="500" height="100"></canvas>"#));
        assert_eq!(html.matches("<canvas").count(), 5);
        assert!(html.ends_with(r#"<canvas id="ini_memory_graph" width="500" height="100"></canvas>"#));
    }
}
