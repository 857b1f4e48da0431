//! Collapsible benchmark table rows
//!
//! Each `.toggle-table` control sits in the header cell of a row marked
//! `data-field-start="true"`. The rows after it, up to the next field start,
//! are its details; they are collected once and owned by a [`Section`].

use crate::dom::{elements_by_class, first_by_class, js_error, mark_state, set_display};
use crate::loader::{DataLoader, CHART_CONTAINER_CLASS};
use cutsim_bench_core::grouping::build_section;
use cutsim_bench_core::{ChartLoadState, Error, FieldRow, Result, Section, SectionEffect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

const TOGGLE_SELECTOR: &str = ".toggle-table";
const CHART_CLASS: &str = "chart";

/// A detail row of a benchmark table
#[derive(Debug, Clone)]
pub struct Row(Element);

impl FieldRow for Row {
    fn is_field_start(&self) -> bool {
        self.0.get_attribute("data-field-start").as_deref() == Some("true")
    }

    fn has_chart(&self) -> bool {
        first_by_class(&self.0, CHART_CLASS).is_some()
    }
}

type SharedSection = Rc<RefCell<Section<Row>>>;

/// Collapse every section of the page and wire up its toggle.
/// Returns the number of sections found.
pub fn init(document: &Document, loader: Rc<DataLoader>) -> Result<usize> {
    let toggles = document
        .query_selector_all(TOGGLE_SELECTOR)
        .map_err(js_error)?;

    let mut count = 0;
    for i in 0..toggles.length() {
        let Some(toggle) = toggles.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        match attach(toggle, Rc::clone(&loader)) {
            Ok(()) => count += 1,
            Err(e) => tracing::warn!("skipping toggle: {}", e),
        }
    }

    tracing::info!("{} collapsible sections", count);
    Ok(count)
}

fn attach(toggle: Element, loader: Rc<DataLoader>) -> Result<()> {
    let header = toggle
        .parent_element()
        .ok_or_else(|| Error::MissingElement("toggle header cell".to_string()))?;
    let name = header.get_attribute("data-js-name").unwrap_or_default();
    let row = header
        .parent_element()
        .ok_or_else(|| Error::MissingElement(format!("row of section {}", name)))?;

    let following = std::iter::successors(row.next_element_sibling(), |el| el.next_element_sibling()).map(Row);
    let section = build_section(name, following);
    let initial = section.initial_effects();
    let section: SharedSection = Rc::new(RefCell::new(section));
    apply(&section, &initial, &loader);

    let control = toggle.clone();
    let shared = Rc::clone(&section);
    let on_toggle = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let open = control.has_attribute("open");
        let effects = shared.borrow_mut().set_open(open);
        apply(&shared, &effects, &loader);
    });
    toggle
        .add_event_listener_with_callback("toggle", on_toggle.as_ref().unchecked_ref())
        .map_err(js_error)?;
    // Listener stays for the lifetime of the page
    on_toggle.forget();

    Ok(())
}

fn apply(section: &SharedSection, effects: &[SectionEffect], loader: &Rc<DataLoader>) {
    for effect in effects {
        let Some(Row(detail)) = section.borrow().detail(effect.detail_index()).cloned() else {
            continue;
        };

        let outcome = match *effect {
            SectionEffect::Show(_) => set_display(&detail, ""),
            SectionEffect::Hide(_) => set_display(&detail, "none"),
            SectionEffect::LoadChart { generation, .. } => {
                if let Some(placeholder) = first_by_class(&detail, CHART_CLASS) {
                    let shared = Rc::clone(section);
                    loader.load_chart(placeholder, move || shared.borrow().accepts(generation));
                }
                Ok(())
            }
            SectionEffect::RemoveCharts(_) => {
                for canvas in elements_by_class(&detail, CHART_CONTAINER_CLASS) {
                    canvas.remove();
                }
                if let Some(placeholder) = first_by_class(&detail, CHART_CLASS) {
                    mark_state(&placeholder, &ChartLoadState::Idle);
                }
                Ok(())
            }
        };

        if let Err(e) = outcome {
            tracing::warn!(section = %section.borrow().name(), "{:?} failed: {}", effect, e);
        }
    }
}
