//! Small DOM lookups shared by the customizer and the page collaborators.

use reveal_engine::RevealError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Wrap a host exception in a [`RevealError`].
pub fn host_error(err: JsValue) -> RevealError {
    RevealError::Host(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Convert an error for the `wasm_bindgen` boundary.
pub fn to_js(err: RevealError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

pub fn window() -> Result<Window, RevealError> {
    web_sys::window().ok_or_else(|| RevealError::Host("no global window".into()))
}

pub fn document(window: &Window) -> Result<Document, RevealError> {
    window
        .document()
        .ok_or_else(|| RevealError::Host("window has no document".into()))
}

/// `<html>` as an `HtmlElement`, where the page-wide CSS variables live.
pub fn root_element(document: &Document) -> Result<HtmlElement, RevealError> {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| RevealError::MissingElement("html".into()))
}

/// Attach `handler` to `event` on `target` for the life of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), RevealError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(host_error)?;
    closure.forget();
    Ok(())
}

/// A JS function that calls `f`, kept alive for the life of the page.
pub fn callback(f: impl FnMut() + 'static) -> js_sys::Function {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    closure.forget();
    function
}

/// Element with `id`, cast to `T`. A missing element and one of the wrong
/// type are both reported as missing.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, RevealError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| RevealError::MissingElement(format!("#{}", id)))
}

/// First match for `selector` in the document, cast to `T`.
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Result<T, RevealError> {
    document
        .query_selector(selector)
        .map_err(host_error)?
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| RevealError::MissingElement(selector.to_string()))
}

/// Every element under `scope` matching `selector`, in document order.
pub fn query_all(scope: &Element, selector: &str) -> Result<Vec<Element>, RevealError> {
    let list = scope.query_selector_all(selector).map_err(host_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Whether the user asked for reduced motion. Unsupported means no.
pub fn prefers_reduced_motion(window: &Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(list)) => list.matches(),
        _ => false,
    }
}

pub fn user_agent(window: &Window) -> String {
    window.navigator().user_agent().unwrap_or_default()
}

/// `window.innerHeight`, or 0 when the host reports something odd.
pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Set a `data-*` attribute through the element's dataset.
pub fn set_data(element: &HtmlElement, key: &str, value: &str) {
    if let Err(err) = element.dataset().set(key, value) {
        log::warn!("dataset {}={}: {:?}", key, value, err);
    }
}

/// Set a CSS custom property on an element's inline style.
pub fn set_style(element: &HtmlElement, name: &str, value: &str) {
    if let Err(err) = element.style().set_property(name, value) {
        log::warn!("style {}: {:?}", name, err);
    }
}

pub fn add_class(element: &Element, class: &str) {
    if let Err(err) = element.class_list().add_1(class) {
        log::warn!("classList.add({}): {:?}", class, err);
    }
}
