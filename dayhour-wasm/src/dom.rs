#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use dayhour_core::{
    ControlSource, FilterConfig, FilterController, FilterError, FilterState, StyleSink,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event, HtmlInputElement, HtmlSelectElement, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-dayhour-filter]";

/// Control đọc được giá trị: `<select>` hoặc `<input>`.
pub enum DomControl {
    Select(HtmlSelectElement),
    Input(HtmlInputElement),
}

impl DomControl {
    fn lookup(document: &Document, id: &str) -> Result<Self, JsValue> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| js_error(FilterError::MissingControl(id.to_string())))?;

        match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => Ok(DomControl::Select(select)),
            Err(element) => element
                .dyn_into::<HtmlInputElement>()
                .map(DomControl::Input)
                .map_err(|_| {
                    js_error(FilterError::Other(format!(
                        "#{id} không phải select hoặc input"
                    )))
                }),
        }
    }
}

impl ControlSource for DomControl {
    fn current_value(&self) -> String {
        match self {
            DomControl::Select(select) => select.value(),
            DomControl::Input(input) => input.value(),
        }
    }
}

/// Thẻ `<style>` duy nhất do bộ lọc sở hữu.
pub struct StyleElement(Element);

impl StyleSink for StyleElement {
    type Error = JsValue;

    fn replace_text(&mut self, css: &str) -> Result<(), Self::Error> {
        self.0.set_text_content(Some(css));
        Ok(())
    }
}

pub fn install(config: FilterConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

    let day = DomControl::lookup(&document, &config.day_control_id)?;
    let hour = DomControl::lookup(&document, &config.hour_control_id)?;
    let sheet = ensure_style_element(&document)?;

    let controller = Rc::new(RefCell::new(FilterController::new(day, hour, sheet, config)));

    // Trình duyệt có thể khôi phục giá trị select khi tải lại trang.
    recompute(&document, &controller)?;

    let listener = {
        let document = document.clone();
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Err(err) = recompute(&document, &controller) {
                console::error_1(&err);
            }
        })
    };
    document.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())?;
    listener.forget();

    Ok(())
}

fn recompute(
    document: &Document,
    controller: &RefCell<FilterController<DomControl, StyleElement>>,
) -> Result<(), JsValue> {
    let mut controller = controller.borrow_mut();
    let state = controller.handle_change()?;
    if controller.config().mirror_dataset {
        mirror_state(document, &state)?;
    }
    Ok(())
}

fn mirror_state(document: &Document, state: &FilterState) -> Result<(), JsValue> {
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("Document không có phần tử gốc"))?;
    root.set_attribute("data-selected-day", &state.day)?;
    root.set_attribute("data-selected-hour", &state.hour)?;
    root.set_attribute("data-selected-dayhour", &state.dayhour_key())?;
    Ok(())
}

fn ensure_style_element(document: &Document) -> Result<StyleElement, JsValue> {
    if let Some(existing) = document.query_selector(STYLE_TAG_SELECTOR)? {
        return Ok(StyleElement(existing));
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-dayhour-filter", "v1")?;
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(StyleElement(style_el))
}

fn js_error(err: FilterError) -> JsValue {
    JsValue::from_str(&format!("Filter error: {err}"))
}
