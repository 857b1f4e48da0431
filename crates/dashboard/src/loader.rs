//! Fetching chart payloads and placing the charts

use crate::chart::ChartRenderer;
use crate::dom::{js_error, mark_state};
use cutsim_bench_core::chart::summary_markup;
use cutsim_bench_core::{
    ApiRequest, ChartLoadState, ChartPayload, DashboardConfig, Error, MetricType, RenderMode,
    Result, RevisionRange, SUMMARY_METRICS,
};
use gloo_net::http::Request;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlCanvasElement};

const SUMMARY_CONTAINER_ID: &str = "summary_charts";
const CHART_ID_ATTR: &str = "data-chart-id";
pub const CHART_CONTAINER_CLASS: &str = "chartContainer";

/// Issues API requests and hands the payloads to the renderer
pub struct DataLoader {
    config: DashboardConfig,
    document: Document,
    renderer: ChartRenderer,
}

impl DataLoader {
    pub fn new(config: DashboardConfig, document: Document, renderer: ChartRenderer) -> Self {
        Self {
            config,
            document,
            renderer,
        }
    }

    /// GET a payload; non-2xx statuses and malformed bodies are errors
    pub async fn fetch(&self, request: &ApiRequest) -> Result<ChartPayload> {
        let url = request.url(&self.config.api_base);
        tracing::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Error::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        ChartPayload::from_json(&text)
    }

    /// Load the single-file chart of a `.chart` placeholder into a new canvas.
    ///
    /// `still_wanted` is asked once the payload arrives; a `false` answer
    /// drops the chart and leaves the placeholder's state alone (its section
    /// was collapsed, and possibly re-opened by a newer load, meanwhile).
    pub fn load_chart(self: &Rc<Self>, placeholder: Element, still_wanted: impl Fn() -> bool + 'static) {
        let Some(chart_id) = placeholder.get_attribute(CHART_ID_ATTR) else {
            let err = Error::MissingAttribute {
                attribute: CHART_ID_ATTR.to_string(),
            };
            tracing::error!("cannot load chart: {}", err);
            mark_state(&placeholder, &ChartLoadState::Failed(err.to_string()));
            return;
        };

        let request = ApiRequest::for_chart_id(&chart_id);
        mark_state(&placeholder, &ChartLoadState::Loading);

        let loader = Rc::clone(self);
        spawn_local(async move {
            let result = loader.fetch(&request).await;
            // Collapsing already reset the placeholder; a re-open owns it now
            if !still_wanted() {
                tracing::debug!(chart = %chart_id, "dropping stale chart load");
                return;
            }

            match result.and_then(|payload| loader.place_file_chart(&placeholder, payload)) {
                Ok(()) => mark_state(&placeholder, &ChartLoadState::Loaded),
                Err(e) => {
                    tracing::error!(chart = %chart_id, "chart load failed: {}", e);
                    mark_state(&placeholder, &ChartLoadState::Failed(e.to_string()));
                }
            }
        });
    }

    fn place_file_chart(&self, placeholder: &Element, payload: ChartPayload) -> Result<()> {
        let (width, height) = self.config.file_canvas;
        let canvas: HtmlCanvasElement = self
            .document
            .create_element("canvas")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|e: Element| js_error(e.into()))?;
        canvas.set_class_name(CHART_CONTAINER_CLASS);
        canvas.set_width(width);
        canvas.set_height(height);
        placeholder.append_child(&canvas).map_err(js_error)?;

        self.renderer.render(&canvas, payload, RenderMode::SingleFile)
    }

    /// Load one summary chart onto its existing `<metric>_graph` canvas
    pub fn load_summary_chart(self: &Rc<Self>, metric: MetricType, range: RevisionRange) {
        let loader = Rc::clone(self);
        spawn_local(async move {
            let request = ApiRequest::summary(metric, range);
            let result = loader.fetch(&request).await;

            let canvas = loader.document.get_element_by_id(&metric.canvas_id());
            let outcome = result.and_then(|payload| {
                let canvas: HtmlCanvasElement = canvas
                    .clone()
                    .ok_or_else(|| Error::MissingElement(metric.canvas_id()))?
                    .dyn_into()
                    .map_err(|e: Element| js_error(e.into()))?;
                loader.renderer.render(&canvas, payload, RenderMode::Summary)
            });

            let state = match outcome {
                Ok(()) => ChartLoadState::Loaded,
                Err(e) => {
                    tracing::error!(metric = %metric, "summary chart failed: {}", e);
                    ChartLoadState::Failed(e.to_string())
                }
            };
            if let Some(canvas) = canvas {
                mark_state(&canvas, &state);
            }
        });
    }

    /// Replace the summary container with one canvas per metric and load them all
    pub fn load_summary_charts(self: &Rc<Self>, range: RevisionRange) -> Result<()> {
        let container = self
            .document
            .get_element_by_id(SUMMARY_CONTAINER_ID)
            .ok_or_else(|| Error::MissingElement(SUMMARY_CONTAINER_ID.to_string()))?;
        container.set_inner_html(&summary_markup(&self.config));

        tracing::info!(r1 = range.low, r2 = range.high, "loading summary charts");
        for metric in SUMMARY_METRICS {
            self.load_summary_chart(metric, range);
        }
        Ok(())
    }
}
