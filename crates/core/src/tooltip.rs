//! Custom tooltip for single-file charts
//!
//! Chart.js reports a [`TooltipModel`] on every hover event. It is turned
//! into a [`TooltipView`], which says whether the shared overlay is hidden
//! or where it goes and what it shows. Nothing here touches the DOM.

use crate::chart::PALETTE;
use crate::data::{label_text, ChartPayload, Unit};
use serde::Deserialize;
use serde_json::Value;

/// Classes describing the caret side; exactly one is set while visible
pub const CARET_CLASSES: [&str; 3] = ["above", "below", "no-transform"];

/// Hover state reported by the chart library
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TooltipModel {
    #[serde(default)]
    pub opacity: f64,
    #[serde(default)]
    pub y_align: Option<String>,
    /// Raw x labels; revision numbers arrive as JSON numbers
    #[serde(default)]
    pub title: Vec<Value>,
    /// Only its presence matters; rows are rebuilt from the payload
    #[serde(default)]
    pub body: Option<Vec<Value>>,
    #[serde(default)]
    pub data_points: Vec<TooltipItem>,
    #[serde(default)]
    pub label_colors: Vec<LabelColors>,
    #[serde(default)]
    pub caret_x: f64,
    #[serde(default)]
    pub caret_y: f64,
    #[serde(default)]
    pub x_padding: f64,
    #[serde(default)]
    pub y_padding: f64,
}

/// A hovered point
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TooltipItem {
    pub dataset_index: usize,
    pub index: usize,
}

/// Colours of a dataset's legend swatch. Anything but a CSS string
/// (gradients, patterns) falls back to the palette.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabelColors {
    #[serde(default)]
    pub background_color: Value,
    #[serde(default)]
    pub border_color: Value,
}

/// One body line of the tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub text: String,
    pub background: String,
    pub border: String,
}

impl TooltipRow {
    pub fn to_html(&self) -> String {
        format!(
            "<tr><td><span class=\"chartjs-tooltip-key\" style=\"{}\"></span>{}</td></tr>",
            swatch_style(&self.background, &self.border),
            escape_html(&self.text)
        )
    }
}

/// What the overlay should look like after a hover event
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipView {
    Hidden,
    Visible {
        /// One of [`CARET_CLASSES`]
        caret_class: String,
        title: Vec<String>,
        /// `None` leaves the previous content in place
        rows: Option<Vec<TooltipRow>>,
        caret_x: f64,
        caret_y: f64,
        x_padding: f64,
        y_padding: f64,
    },
}

/// Final CSS placement of the overlay
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPlacement {
    pub left: String,
    pub top: String,
    pub padding: String,
}

impl TooltipView {
    pub fn from_model(model: &TooltipModel, payload: &ChartPayload) -> Self {
        if model.opacity == 0.0 {
            return TooltipView::Hidden;
        }

        let caret_class = match model.y_align.as_deref() {
            Some(align) if !align.is_empty() => align.to_string(),
            _ => "no-transform".to_string(),
        };

        let rows = model.body.as_ref().map(|_| {
            model
                .data_points
                .iter()
                .enumerate()
                .filter_map(|(i, item)| {
                    let text = body_text(payload, *item)?;
                    let colors = model.label_colors.get(i);
                    let fallback = PALETTE[item.dataset_index % PALETTE.len()];
                    Some(TooltipRow {
                        text,
                        background: css_color(colors.map(|c| &c.background_color), fallback),
                        border: css_color(colors.map(|c| &c.border_color), fallback),
                    })
                })
                .collect()
        });

        TooltipView::Visible {
            caret_class,
            title: model.title.iter().map(label_text).collect(),
            rows,
            caret_x: model.caret_x,
            caret_y: model.caret_y,
            x_padding: model.x_padding,
            y_padding: model.y_padding,
        }
    }

    /// Inner HTML of the overlay's table, if it needs rewriting
    pub fn table_html(&self) -> Option<String> {
        let TooltipView::Visible { title, rows, .. } = self else {
            return None;
        };
        let rows = rows.as_ref()?;

        let mut html = String::from("<thead>");
        for line in title {
            html.push_str(&format!("<tr><th>{}</th></tr>", escape_html(line)));
        }
        html.push_str("</thead><tbody>");
        for row in rows {
            html.push_str(&row.to_html());
        }
        html.push_str("</tbody>");
        Some(html)
    }

    /// Position relative to the canvas' client rect, scrolled by `page_y_offset`
    pub fn placement(&self, rect_left: f64, rect_top: f64, page_y_offset: f64) -> Option<TooltipPlacement> {
        match self {
            TooltipView::Hidden => None,
            TooltipView::Visible {
                caret_x,
                caret_y,
                x_padding,
                y_padding,
                ..
            } => Some(TooltipPlacement {
                left: format!("{}px", rect_left + caret_x),
                top: format!("{}px", rect_top + page_y_offset + caret_y),
                padding: format!("{}px {}px", y_padding, x_padding),
            }),
        }
    }
}

/// `"<label>: <value> <unit>"` for a hovered point
pub fn body_text(payload: &ChartPayload, item: TooltipItem) -> Option<String> {
    let dataset = payload.datasets.get(item.dataset_index)?;
    let unit = Unit::for_dataset(item.dataset_index);
    let value = match payload.value(item.dataset_index, item.index) {
        Some(v) => unit.format(v),
        None => format!("? {}", unit.suffix()),
    };
    Some(format!("{}: {}", dataset.label, value))
}

/// Inline style of the colour swatch leading each row
pub fn swatch_style(background: &str, border: &str) -> String {
    format!(
        "background:{}; border-color:{}; border-width: 2px",
        background, border
    )
}

fn css_color(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => fallback.to_string(),
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn payload() -> ChartPayload {
        ChartPayload::from_json(
            &json!({
                "labels": [800100],
                "datasets": [
                    {"label": "Memory", "data": [{"v": 42.0}]},
                    {"label": "Cut Time", "data": [{"v": 3.14159}]},
                    {"label": "Draw <fast>", "data": [{}]}
                ]
            })
            .to_string(),
        )
        .unwrap()
    }

    fn hover_model() -> TooltipModel {
        serde_json::from_value(json!({
            "opacity": 1,
            "yAlign": "below",
            "title": ["800100"],
            "body": [{"lines": ["Memory: 1"]}, {"lines": ["Cut Time: 1"]}],
            "dataPoints": [
                {"datasetIndex": 0, "index": 0},
                {"datasetIndex": 1, "index": 0}
            ],
            "labelColors": [
                {"backgroundColor": "rgb(54, 162, 235)", "borderColor": "rgb(54, 162, 235)"},
                {"backgroundColor": "rgb(255, 159, 64)", "borderColor": "rgb(255, 159, 64)"}
            ],
            "caretX": 120.5,
            "caretY": 40,
            "xPadding": 6,
            "yPadding": 4
        }))
        .unwrap()
    }

    #[test]
    fn test_body_text_units() {
        let payload = payload();
        let item = |d| TooltipItem {
            dataset_index: d,
            index: 0,
        };

        assert_eq!(body_text(&payload, item(0)).unwrap(), "Memory: 42 MB");
        assert_eq!(body_text(&payload, item(1)).unwrap(), "Cut Time: 3.14 s");
        assert_eq!(body_text(&payload, item(2)).unwrap(), "Draw <fast>: ? s");
        assert_eq!(body_text(&payload, item(3)), None);
    }

    #[test]
    fn test_zero_opacity_hides() {
        let model = TooltipModel {
            opacity: 0.0,
            ..hover_model()
        };
        let view = TooltipView::from_model(&model, &payload());

        assert_eq!(view, TooltipView::Hidden);
        assert_eq!(view.table_html(), None);
        assert_eq!(view.placement(10.0, 10.0, 0.0), None);
    }

    #[test]
    fn test_visible_rows_and_colors() {
        let view = TooltipView::from_model(&hover_model(), &payload());

        let TooltipView::Visible {
            caret_class, rows, ..
        } = &view
        else {
            panic!("expected a visible tooltip");
        };
        assert_eq!(caret_class, "below");
        let rows = rows.as_ref().unwrap();
        assert_eq!(
            rows[1],
            TooltipRow {
                text: "Cut Time: 3.14 s".to_string(),
                background: "rgb(255, 159, 64)".to_string(),
                border: "rgb(255, 159, 64)".to_string(),
            }
        );
    }

    #[test]
    fn test_table_html() {
        let html = TooltipView::from_model(&hover_model(), &payload())
            .table_html()
            .unwrap();

        assert_eq!(
            html,
            concat!(
                "<thead><tr><th>800100</th></tr></thead><tbody>",
                "<tr><td><span class=\"chartjs-tooltip-key\" style=\"background:rgb(54, 162, 235); ",
                "border-color:rgb(54, 162, 235); border-width: 2px\"></span>Memory: 42 MB</td></tr>",
                "<tr><td><span class=\"chartjs-tooltip-key\" style=\"background:rgb(255, 159, 64); ",
                "border-color:rgb(255, 159, 64); border-width: 2px\"></span>Cut Time: 3.14 s</td></tr>",
                "</tbody>"
            )
        );
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut model = hover_model();
        model.data_points = vec![TooltipItem {
            dataset_index: 2,
            index: 0,
        }];
        model.label_colors = vec![];
        let html = TooltipView::from_model(&model, &payload()).table_html().unwrap();

        assert!(html.contains("Draw &lt;fast&gt;: ? s"));
        // Palette fallback for dataset 2
        assert!(html.contains("background:rgb(75, 192, 192)"));
    }

    #[test]
    fn test_no_body_keeps_previous_content() {
        let model = TooltipModel {
            body: None,
            y_align: None,
            ..hover_model()
        };
        let view = TooltipView::from_model(&model, &payload());

        assert_eq!(view.table_html(), None);
        let TooltipView::Visible { caret_class, .. } = &view else {
            panic!("expected a visible tooltip");
        };
        assert_eq!(caret_class, "no-transform");
    }

    #[test]
    fn test_placement() {
        let view = TooltipView::from_model(&hover_model(), &payload());

        assert_eq!(
            view.placement(100.0, 50.0, 300.0).unwrap(),
            TooltipPlacement {
                left: "220.5px".to_string(),
                top: "390px".to_string(),
                padding: "4px 6px".to_string(),
            }
        );
    }

    #[test]
    fn test_numeric_title() {
        let model: TooltipModel = serde_json::from_value(json!({
            "opacity": 1,
            "title": [800100],
            "body": [{"lines": ["Memory: 1"]}],
            "dataPoints": [{"datasetIndex": 0, "index": 0}]
        }))
        .unwrap();
        let html = TooltipView::from_model(&model, &payload()).table_html().unwrap();

        assert!(html.starts_with("<thead><tr><th>800100</th></tr></thead>"));
    }

    #[test]
    fn test_hidden_model_with_numeric_title() {
        let model: TooltipModel =
            serde_json::from_value(json!({"opacity": 0, "title": [800100]})).unwrap();

        assert_eq!(TooltipView::from_model(&model, &payload()), TooltipView::Hidden);
    }

    #[test]
    fn test_partial_model_deserializes() {
        let model: TooltipModel = serde_json::from_value(json!({"opacity": 0})).unwrap();
        assert_eq!(model, TooltipModel::default());
    }
}
