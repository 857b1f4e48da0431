//! cutsim-bench dashboard
//!
//! A WebAssembly script for the server-rendered benchmark comparison page.
//! It draws Chart.js charts from the `/api` endpoints:
//!
//! - Expanding a row of the CSB/INI tables shows its detail rows and loads
//!   the file's history chart; collapsing hides them and drops the chart.
//! - `loadSummaryCharts(r1, r2)` (installed on `window`) fills
//!   `#summary_charts` with one aggregate chart per metric.

use cutsim_bench_core::config::API_BASE_META;
use cutsim_bench_core::{DashboardConfig, Result, RevisionRange};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DocumentReadyState, Event, Window};

mod chart;
mod dom;
mod loader;
mod sections;
mod styles;
mod tooltip;

use chart::ChartRenderer;
use dom::js_error;
use loader::DataLoader;
use tooltip::TooltipOverlay;

fn main() {
    tracing_wasm::set_as_global_default();

    if let Err(e) = start() {
        tracing::error!("dashboard failed to start: {}", e);
    }
}

fn start() -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    let config = read_config(&document);
    tracing::debug!(?config, "dashboard config");

    let renderer = ChartRenderer::new(TooltipOverlay::new(document.clone()));
    let loader = Rc::new(DataLoader::new(config, document.clone(), renderer));

    install_summary_hook(&window, Rc::clone(&loader))?;

    if document.ready_state() == DocumentReadyState::Loading {
        let doc = document.clone();
        let on_ready = Closure::once(move |_event: Event| {
            if let Err(e) = sections::init(&doc, loader) {
                tracing::error!("section setup failed: {}", e);
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .map_err(js_error)?;
        on_ready.forget();
    } else {
        sections::init(&document, loader)?;
    }

    Ok(())
}

/// Defaults, with the API base taken from `<meta name="cutsim-bench-api">`
fn read_config(document: &Document) -> DashboardConfig {
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    let api_base = document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"));
    DashboardConfig::default().with_api_base(api_base)
}

/// Expose `window.loadSummaryCharts(r1, r2)` for the page's button
fn install_summary_hook(window: &Window, loader: Rc<DataLoader>) -> Result<()> {
    let hook = Closure::<dyn Fn(JsValue, JsValue)>::new(move |r1: JsValue, r2: JsValue| {
        let (Some(low), Some(high)) = (revision(&r1), revision(&r2)) else {
            tracing::error!("loadSummaryCharts: invalid revision range {:?}..{:?}", r1, r2);
            return;
        };
        if let Err(e) = loader.load_summary_charts(RevisionRange::new(low, high)) {
            tracing::error!("summary charts failed: {}", e);
        }
    });

    js_sys::Reflect::set(window, &JsValue::from_str("loadSummaryCharts"), hook.as_ref())
        .map_err(js_error)?;
    hook.forget();
    Ok(())
}

/// Revision numbers arrive as JS numbers or numeric strings
fn revision(value: &JsValue) -> Option<u32> {
    if let Some(n) = value.as_f64() {
        return ((0.0..=u32::MAX as f64).contains(&n) && n.fract() == 0.0).then_some(n as u32);
    }
    value.as_string()?.trim().parse().ok()
}
