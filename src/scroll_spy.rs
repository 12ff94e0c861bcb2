// Scroll spy: highlights the nav link for the section currently in view and
// gives the navbar its backdrop once the page has scrolled a little.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, HtmlElement};

use crate::config::scroll as cfg;
use crate::dom;

/// The active section is the last one whose top, biased upward, has been
/// scrolled past. Sections must come in document order.
pub fn active_section<'a>(
    scroll_y: f64,
    sections: &'a [(String, f64)],
    bias: f64,
) -> Option<&'a str> {
    let mut current = None;
    for (id, top) in sections {
        if scroll_y >= top - bias {
            current = Some(id.as_str());
        }
    }
    current
}

pub struct ScrollSpy {
    navbar: Element,
    nav_links: Vec<Element>,
    sections: Vec<HtmlElement>,
    on_scroll: Option<Closure<dyn FnMut()>>,
}

fn apply(navbar: &Element, nav_links: &[Element], sections: &[HtmlElement], scroll_y: f64) {
    if scroll_y > cfg::NAVBAR_THRESHOLD {
        let _ = navbar.class_list().add_1("scrolled");
    } else {
        let _ = navbar.class_list().remove_1("scrolled");
    }

    // Tops are re-read every event; layout shifts as images load and
    // sections reveal.
    let tops: Vec<(String, f64)> = sections
        .iter()
        .map(|s| (s.id(), s.offset_top() as f64))
        .collect();
    let current = active_section(scroll_y, &tops, cfg::SPY_BIAS);

    for link in nav_links {
        let _ = link.class_list().remove_1("active");
        if let (Some(href), Some(id)) = (link.get_attribute("href"), current) {
            if href == format!("#{}", id) {
                let _ = link.class_list().add_1("active");
            }
        }
    }
}

impl ScrollSpy {
    pub fn new(
        document: &Document,
        navbar_id: &str,
        link_selector: &str,
        section_selector: &str,
    ) -> Result<ScrollSpy, JsValue> {
        let navbar = dom::element_by_id(document, navbar_id)?;
        let nav_links = dom::elements(document, link_selector)?;
        let sections = dom::elements(document, section_selector)?
            .into_iter()
            .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
            .collect();
        Ok(ScrollSpy {
            navbar,
            nav_links,
            sections,
            on_scroll: None,
        })
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.on_scroll.is_some() {
            return Ok(());
        }
        let window = dom::window()?;

        let on_scroll = {
            let navbar = self.navbar.clone();
            let nav_links = self.nav_links.clone();
            let sections = self.sections.clone();
            Closure::wrap(Box::new(move || {
                if let Ok(window) = dom::window() {
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    apply(&navbar, &nav_links, &sections, scroll_y);
                }
            }) as Box<dyn FnMut()>)
        };
        let mut options = AddEventListenerOptions::new();
        options.passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        )?;
        self.on_scroll = Some(on_scroll);

        // Highlight the right link before the first scroll event.
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        apply(&self.navbar, &self.nav_links, &self.sections, scroll_y);

        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), JsValue> {
        if let Some(closure) = self.on_scroll.take() {
            dom::window()?
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        }
        Ok(())
    }
}
