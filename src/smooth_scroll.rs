// Smooth-scroll fallback: intercept same-page anchor clicks and glide to
// the target instead of jumping.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::dom;

pub struct SmoothScroll {
    handlers: Vec<(Element, Closure<dyn FnMut(MouseEvent)>)>,
    anchors: Vec<Element>,
}

impl SmoothScroll {
    pub fn new(document: &Document) -> Result<SmoothScroll, JsValue> {
        let anchors = dom::elements(document, "a[href^=\"#\"]")?;
        Ok(SmoothScroll {
            handlers: Vec::new(),
            anchors,
        })
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if !self.handlers.is_empty() {
            return Ok(());
        }

        for anchor in &self.anchors {
            let closure = {
                let anchor = anchor.clone();
                Closure::wrap(Box::new(move |event: MouseEvent| {
                    event.prevent_default();
                    let href = match anchor.get_attribute("href") {
                        Some(href) => href,
                        None => return,
                    };
                    let document = match dom::document() {
                        Ok(document) => document,
                        Err(_) => return,
                    };
                    if let Ok(Some(target)) = document.query_selector(&href) {
                        let mut options = ScrollIntoViewOptions::new();
                        options.behavior(ScrollBehavior::Smooth);
                        target.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                }) as Box<dyn FnMut(MouseEvent)>)
            };
            anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            self.handlers.push((anchor.clone(), closure));
        }

        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), JsValue> {
        for (anchor, closure) in self.handlers.drain(..) {
            anchor
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        }
        Ok(())
    }
}
