//! Binary to generate a demo host page for the dashboard
//!
//! Run with: cargo run --bin generate_html
//!
//! Writes `dist/index.html`: a benchmark comparison table following the
//! markup the dashboard expects, Chart.js, and the WASM module.

use cutsim_bench_core::format::{change_style, format_mem, format_time, relative_change};
use std::fs;
use std::path::Path;

struct DemoFile {
    name: &'static str,
    time: (f64, f64),
    memory: (f64, f64),
}

const DEMO_FILES: &[DemoFile] = &[
    DemoFile {
        name: "plate_roughing.csb",
        time: (12.40, 11.05),
        memory: (412.0, 415.0),
    },
    DemoFile {
        name: "turbine_blade.csb",
        time: (48.12, 53.70),
        memory: (1210.0, 1188.0),
    },
];

const REVISIONS: (u32, u32) = (800_100, 800_200);

fn main() {
    let html = generate_index_html();

    let dist_path = Path::new("dist");
    fs::create_dir_all(dist_path).ok();

    let index_path = dist_path.join("index.html");
    fs::write(&index_path, &html).expect("Failed to write index.html");

    println!("✅ Generated: {}", index_path.display());
}

fn generate_index_html() -> String {
    let rows: String = DEMO_FILES.iter().map(demo_rows).collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="cutsim-bench-api" content="">
    <title>CutSim Benchmarks</title>
    <script src="static/Chart.min.js"></script>
    <style>
{styles}
    </style>
</head>
<body>
    <div id="summary_charts">
        <button onclick="loadSummaryCharts({r1},{r2})">Load Summary Charts</button>
    </div>
    <h1>r{r1} vs r{r2}</h1>
    <h2>CSB Benchmarks</h2>
    <table class="benchtable"><tbody>
{rows}    </tbody></table>
    <script type="module">
        import init from './cutsim_bench_dashboard.js';
        init();
    </script>
</body>
</html>"#,
        styles = get_styles(),
        r1 = REVISIONS.0,
        r2 = REVISIONS.1,
        rows = rows,
    )
}

fn demo_rows(file: &DemoFile) -> String {
    let (t0, t1) = file.time;
    let (m0, m1) = file.memory;
    format!(
        r#"        <tr data-field-start="true">
            <th data-js-name="{name}"><details class="toggle-table"><summary>{name}</summary></details></th>
            <td>time: <span style="{time_style}">{time_change}</span></td>
            <td>mem: <span style="{mem_style}">{mem_change}</span></td>
        </tr>
        <tr><th style="text-align:right">r{r1}</th><td>{t0}</td><td>{m0}</td></tr>
        <tr><th style="text-align:right">r{r2}</th><td>{t1}</td><td>{m1}</td></tr>
        <tr><td colspan="3" class="chart" data-chart-id="{name}"></td></tr>
"#,
        name = file.name,
        time_style = change_style(t0, t1),
        time_change = relative_change(t0, t1),
        mem_style = change_style(m0, m1),
        mem_change = relative_change(m0, m1),
        r1 = REVISIONS.0,
        r2 = REVISIONS.1,
        t0 = format_time(t0),
        t1 = format_time(t1),
        m0 = format_mem(m0),
        m1 = format_mem(m1),
    )
}

fn get_styles() -> &'static str {
    r#"        body { font-family: 'SF Mono', 'Fira Code', 'Consolas', monospace; font-size: 14px; }
        .benchtable td, .benchtable th { padding: 0.2rem 0.6rem; }
        .chartjs-tooltip-key { display: inline-block; width: 10px; height: 10px; margin-right: 10px; }"#
}
