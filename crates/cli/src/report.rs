//! Plain-text rendering of chart payloads

use cutsim_bench_core::format::{format_mem, format_time, relative_change};
use cutsim_bench_core::tooltip::body_text;
use cutsim_bench_core::{label_text, ChartPayload, MetricType, TooltipItem, Unit};

/// History of one file: a line per revision, then the overall change
pub fn file_report(chart_id: &str, payload: &ChartPayload) -> String {
    let mut out = format!("## {}\n\n", chart_id);

    if payload.is_empty() {
        out.push_str("No data.\n");
        return out;
    }

    for index in 0..payload.len() {
        let label = payload
            .labels
            .get(index)
            .map(label_text)
            .unwrap_or_else(|| format!("#{}", index));
        let values: Vec<String> = (0..payload.datasets.len())
            .filter_map(|dataset_index| {
                body_text(
                    payload,
                    TooltipItem {
                        dataset_index,
                        index,
                    },
                )
            })
            .collect();
        out.push_str(&format!("r{}  {}\n", label, values.join("  ")));
    }

    out.push_str("\nChange:\n");
    for (dataset_index, dataset) in payload.datasets.iter().enumerate() {
        let last = dataset.data.len().saturating_sub(1);
        let show: fn(f64) -> String = match Unit::for_dataset(dataset_index) {
            Unit::Megabytes => format_mem,
            Unit::Seconds => format_time,
        };
        let change = match (payload.value(dataset_index, 0), payload.value(dataset_index, last)) {
            (Some(first), Some(last)) => format!(
                "{} -> {} ({})",
                show(first),
                show(last),
                relative_change(first, last)
            ),
            _ => "?".to_string(),
        };
        out.push_str(&format!("  - {}: {}\n", dataset.label, change));
    }

    out
}

/// One metric over a revision range: files and their point counts
pub fn summary_report(metric: MetricType, payload: &ChartPayload) -> String {
    let mut out = format!("## {} ({})\n\n", metric.heading(), metric);

    if payload.datasets.is_empty() {
        out.push_str("No data.\n");
        return out;
    }

    for dataset in &payload.datasets {
        out.push_str(&format!(
            "  - {}: {} points\n",
            dataset.label,
            dataset.data.len()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn payload(body: serde_json::Value) -> ChartPayload {
        ChartPayload::from_json(&body.to_string()).unwrap()
    }

    #[test]
    fn test_file_report() {
        let payload = payload(json!({
            "labels": [800100, 800200],
            "datasets": [
                {"label": "Memory", "data": [{"v": 400.0}, {"v": 420.4}]},
                {"label": "Run Time", "data": [{"v": 2.0}, {"v": 2.25}]}
            ]
        }));

        assert_eq!(
            file_report("plate.csb", &payload),
            concat!(
                "## plate.csb\n\n",
                "r800100  Memory: 400 MB  Run Time: 2 s\n",
                "r800200  Memory: 420 MB  Run Time: 2.25 s\n",
                "\nChange:\n",
                "  - Memory: 400 MB -> 420 MB (+5.1%)\n",
                "  - Run Time: 2.00s -> 2.25s (+12.5%)\n",
            )
        );
    }

    #[test]
    fn test_file_report_without_data() {
        let payload = payload(json!({"datasets": []}));
        assert_eq!(file_report("x.ini", &payload), "## x.ini\n\nNo data.\n");
    }

    #[test]
    fn test_summary_report() {
        let payload = payload(json!({
            "labels": [1, 2],
            "datasets": [
                {"label": "a.ini", "data": [{"x": 1, "y": 1.0}, {"x": 2, "y": 1.2}]},
                {"label": "b.ini", "data": [{"x": 2, "y": 1.0}]}
            ]
        }));

        assert_eq!(
            summary_report(MetricType::IniCutTime, &payload),
            "## Ini Cutting Time (ini_cut_time)\n\n  - a.ini: 2 points\n  - b.ini: 1 points\n"
        );
    }
}
