// Image lightbox: swap the modal image source, toggle visibility, and lock
// page scroll while it is up. Escape closes it from anywhere.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent};

use crate::dom;

pub struct Lightbox {
    modal: Element,
    image: HtmlImageElement,
    on_keydown: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

fn lock_scroll(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

fn unlock_scroll(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.style().remove_property("overflow");
    }
}

fn close_modal(modal: &Element) {
    let _ = modal.class_list().remove_1("active");
    if let Ok(document) = dom::document() {
        unlock_scroll(&document);
    }
}

impl Lightbox {
    pub fn new(document: &Document, modal_id: &str, image_id: &str) -> Result<Lightbox, JsValue> {
        let modal = dom::element_by_id(document, modal_id)?;
        let image: HtmlImageElement = dom::typed_element_by_id(document, image_id)?;
        Ok(Lightbox {
            modal,
            image,
            on_keydown: None,
        })
    }

    pub fn open(&self, src: &str) -> Result<(), JsValue> {
        self.image.set_src(src);
        self.modal.class_list().add_1("active")?;
        lock_scroll(&dom::document()?);
        Ok(())
    }

    pub fn close(&self) {
        close_modal(&self.modal);
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.on_keydown.is_some() {
            return Ok(());
        }

        let on_keydown = {
            let modal = self.modal.clone();
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    close_modal(&modal);
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };
        dom::document()?
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
        self.on_keydown = Some(on_keydown);

        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), JsValue> {
        if let Some(closure) = self.on_keydown.take() {
            dom::document()?.remove_event_listener_with_callback(
                "keydown",
                closure.as_ref().unchecked_ref(),
            )?;
        }
        Ok(())
    }
}
