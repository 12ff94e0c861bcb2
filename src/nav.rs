// Mobile nav toggle: the hamburger button flips the menu open, and picking
// any link closes it again.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::dom;

pub struct NavToggle {
    toggle: Element,
    links: Element,
    nav_links: Vec<Element>,
    on_toggle: Option<Closure<dyn FnMut()>>,
    on_link_click: Vec<(Element, Closure<dyn FnMut()>)>,
}

impl NavToggle {
    pub fn new(
        document: &Document,
        toggle_id: &str,
        links_id: &str,
        link_selector: &str,
    ) -> Result<NavToggle, JsValue> {
        let toggle = dom::element_by_id(document, toggle_id)?;
        let links = dom::element_by_id(document, links_id)?;
        let nav_links = dom::elements(document, link_selector)?;
        Ok(NavToggle {
            toggle,
            links,
            nav_links,
            on_toggle: None,
            on_link_click: Vec::new(),
        })
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.on_toggle.is_some() {
            return Ok(());
        }

        let on_toggle = {
            let toggle = self.toggle.clone();
            let links = self.links.clone();
            Closure::wrap(Box::new(move || {
                let _ = toggle.class_list().toggle("active");
                let _ = links.class_list().toggle("open");
            }) as Box<dyn FnMut()>)
        };
        self.toggle
            .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
        self.on_toggle = Some(on_toggle);

        // Close on link click.
        for link in &self.nav_links {
            let closure = {
                let toggle = self.toggle.clone();
                let links = self.links.clone();
                Closure::wrap(Box::new(move || {
                    let _ = toggle.class_list().remove_1("active");
                    let _ = links.class_list().remove_1("open");
                }) as Box<dyn FnMut()>)
            };
            link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            self.on_link_click.push((link.clone(), closure));
        }

        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), JsValue> {
        if let Some(closure) = self.on_toggle.take() {
            self.toggle
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        }
        for (link, closure) in self.on_link_click.drain(..) {
            link.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        }
        Ok(())
    }
}
