// Reveal-on-scroll: an IntersectionObserver adds the `revealed` class the
// first time an element scrolls into view, then stops watching it.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::reveal as cfg;
use crate::dom;

pub struct RevealObserver {
    targets: Vec<Element>,
    observer: Option<IntersectionObserver>,
    callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

impl RevealObserver {
    pub fn new(document: &Document, selector: &str) -> Result<RevealObserver, JsValue> {
        let targets = dom::elements(document, selector)?;
        Ok(RevealObserver {
            targets,
            observer: None,
            callback: None,
        })
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.observer.is_some() {
            return Ok(());
        }

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        if entry.is_intersecting() {
                            let target = entry.target();
                            let _ = target.class_list().add_1("revealed");
                            // One-shot per element.
                            observer.unobserve(&target);
                        }
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from_f64(cfg::THRESHOLD));
        options.root_margin(cfg::ROOT_MARGIN);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        for target in &self.targets {
            observer.observe(target);
        }

        self.observer = Some(observer);
        self.callback = Some(callback);

        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), JsValue> {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
        Ok(())
    }
}
