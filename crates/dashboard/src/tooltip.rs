//! The page-wide tooltip overlay shared by all single-file charts

use crate::dom::{js_error, window};
use crate::styles::tooltip_style;
use cutsim_bench_core::{ChartPayload, Result, TooltipModel, TooltipView, CARET_CLASSES};
use std::cell::OnceCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

const TOOLTIP_ID: &str = "chartjs-tooltip";

/// Handle on the floating tooltip element.
///
/// Clones share one element, which is created on the first hover event.
#[derive(Clone)]
pub struct TooltipOverlay {
    document: Document,
    element: Rc<OnceCell<HtmlElement>>,
}

impl TooltipOverlay {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            element: Rc::new(OnceCell::new()),
        }
    }

    fn element(&self) -> Result<&HtmlElement> {
        if let Some(el) = self.element.get() {
            return Ok(el);
        }

        let el: HtmlElement = self
            .document
            .create_element("div")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|e: Element| js_error(e.into()))?;
        el.set_id(TOOLTIP_ID);
        el.set_inner_html("<table></table>");
        el.style().set_css_text(tooltip_style());
        self.document
            .body()
            .ok_or_else(|| cutsim_bench_core::Error::MissingElement("body".to_string()))?
            .append_child(&el)
            .map_err(js_error)?;
        tracing::debug!("tooltip overlay created");

        Ok(self.element.get_or_init(|| el))
    }

    /// Apply one hover event reported for the chart drawn on `canvas`
    pub fn update(&self, canvas: &HtmlCanvasElement, payload: &ChartPayload, model: &JsValue) -> Result<()> {
        let json: String = js_sys::JSON::stringify(model)
            .map_err(js_error)?
            .into();
        let model: TooltipModel = serde_json::from_str(&json)?;
        let view = TooltipView::from_model(&model, payload);

        let el = self.element()?;
        let style = el.style();

        let TooltipView::Visible { caret_class, .. } = &view else {
            style.set_property("opacity", "0").map_err(js_error)?;
            return Ok(());
        };

        let classes = el.class_list();
        for class in CARET_CLASSES {
            classes.remove_1(class).map_err(js_error)?;
        }
        classes.add_1(caret_class).map_err(js_error)?;

        if let Some(html) = view.table_html() {
            if let Some(table) = el.query_selector("table").map_err(js_error)? {
                table.set_inner_html(&html);
            }
        }

        let rect = canvas.get_bounding_client_rect();
        let page_y_offset = window()?.page_y_offset().map_err(js_error)?;
        if let Some(placement) = view.placement(rect.left(), rect.top(), page_y_offset) {
            style.set_property("opacity", "1").map_err(js_error)?;
            style.set_property("left", &placement.left).map_err(js_error)?;
            style.set_property("top", &placement.top).map_err(js_error)?;
            style
                .set_property("padding", &placement.padding)
                .map_err(js_error)?;
        }

        Ok(())
    }
}
