//! Chart.js binding
//!
//! Chart.js 2.x is loaded by the host page and reached through the global
//! `Chart` constructor.

use crate::dom::js_error;
use crate::tooltip::TooltipOverlay;
use cutsim_bench_core::{ChartConfig, ChartPayload, Error, RenderMode, Result};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    /// A chart instance; it lives as long as its canvas is in the document
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(context: &JsValue, config: &JsValue) -> std::result::Result<Chart, JsValue>;
}

/// Builds charts on canvases, wiring the shared tooltip into single-file charts
#[derive(Clone)]
pub struct ChartRenderer {
    overlay: TooltipOverlay,
}

impl ChartRenderer {
    pub fn new(overlay: TooltipOverlay) -> Self {
        Self { overlay }
    }

    /// Draw `payload` on `canvas`
    pub fn render(&self, canvas: &HtmlCanvasElement, payload: ChartPayload, mode: RenderMode) -> Result<()> {
        let context = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| Error::Js("canvas has no 2d context".to_string()))?;

        let config = js_sys::JSON::parse(&ChartConfig::new(&payload, mode).to_json()?).map_err(js_error)?;

        if mode.uses_custom_tooltip() {
            let overlay = self.overlay.clone();
            let target = canvas.clone();
            let payload = Rc::new(payload);
            let custom = Closure::<dyn FnMut(JsValue)>::new(move |model: JsValue| {
                if let Err(e) = overlay.update(&target, &payload, &model) {
                    tracing::warn!("tooltip update failed: {}", e);
                }
            });

            let options = js_sys::Reflect::get(&config, &JsValue::from_str("options")).map_err(js_error)?;
            let tooltips = js_sys::Reflect::get(&options, &JsValue::from_str("tooltips")).map_err(js_error)?;
            js_sys::Reflect::set(&tooltips, &JsValue::from_str("custom"), &custom.into_js_value())
                .map_err(js_error)?;
        }

        Chart::new(&context, &config).map_err(js_error)?;
        tracing::debug!(mode = ?mode, "chart rendered");
        Ok(())
    }
}
