//! Small helpers over web-sys

use crate::styles::failed_outline;
use cutsim_bench_core::{ChartLoadState, Error, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

/// Convert a thrown JS value into the crate error
pub fn js_error(value: JsValue) -> Error {
    let message = value
        .as_string()
        .or_else(|| {
            js_sys::JSON::stringify(&value)
                .ok()
                .and_then(|s| s.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Js(message)
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::MissingElement("window".to_string()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| Error::MissingElement("document".to_string()))
}

/// Snapshot of the descendants of `root` with class `class`
pub fn elements_by_class(root: &Element, class: &str) -> Vec<Element> {
    let collection = root.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

pub fn first_by_class(root: &Element, class: &str) -> Option<Element> {
    root.get_elements_by_class_name(class).item(0)
}

/// Set the CSS `display` of an element; `""` restores the stylesheet value
pub fn set_display(element: &Element, display: &str) -> Result<()> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    if display.is_empty() {
        html.style().remove_property("display").map_err(js_error)?;
    } else {
        html.style()
            .set_property("display", display)
            .map_err(js_error)?;
    }
    Ok(())
}

/// Mirror a chart's load state onto its placeholder or canvas
pub fn mark_state(element: &Element, state: &ChartLoadState) {
    if let Err(e) = apply_state(element, state) {
        tracing::warn!(state = state.as_attr(), "could not mark chart state: {}", e);
    }
}

fn apply_state(element: &Element, state: &ChartLoadState) -> Result<()> {
    element
        .set_attribute("data-chart-state", state.as_attr())
        .map_err(js_error)?;
    let style = element.dyn_ref::<HtmlElement>().map(|html| html.style());
    match state.message() {
        Some(message) => {
            element.set_attribute("title", message).map_err(js_error)?;
            if let Some(style) = style {
                style
                    .set_property("outline", failed_outline())
                    .map_err(js_error)?;
            }
        }
        None => {
            element.remove_attribute("title").map_err(js_error)?;
            if let Some(style) = style {
                style.remove_property("outline").map_err(js_error)?;
            }
        }
    }
    Ok(())
}
