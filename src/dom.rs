// Fallible DOM lookups. Every effect fails fast at construction if the
// elements it needs are missing from the page.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element '#{}' not found", id)))
}

/// Typed variant of `element_by_id` for canvases, images and the like.
pub fn typed_element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    element_by_id(document, id)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element '#{}' has the wrong type", id)))
}

/// All elements matching a selector, as a plain Vec.
pub fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                out.push(element);
            }
        }
    }
    Ok(out)
}
