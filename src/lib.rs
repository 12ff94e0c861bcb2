pub mod background;
pub mod color;
pub mod config;
pub mod dom;
pub mod field;
pub mod lightbox;
pub mod nav;
pub mod particle;
pub mod pointer;
pub mod renderer;
pub mod reveal;
pub mod scroll_spy;
pub mod smooth_scroll;
pub mod typing;
mod utils;

use wasm_bindgen::prelude::*;

use crate::background::ParticleBackground;
use crate::lightbox::Lightbox;
use crate::nav::NavToggle;
use crate::reveal::RevealObserver;
use crate::scroll_spy::ScrollSpy;
use crate::smooth_scroll::SmoothScroll;
use crate::typing::TypingEffect;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Composition root for the page: one controller per effect, constructed
/// from the page's ids and classes, started and stopped together. The page
/// script holds the handle; dropping it without stop() leaves listeners in
/// place until the page unloads.
#[wasm_bindgen]
pub struct PortfolioApp {
    background: ParticleBackground,
    typing: TypingEffect,
    scroll_spy: ScrollSpy,
    nav: NavToggle,
    reveal: RevealObserver,
    smooth_scroll: SmoothScroll,
    lightbox: Lightbox,
}

#[wasm_bindgen]
impl PortfolioApp {
    /// Fails fast if any element the page promises is missing.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PortfolioApp, JsValue> {
        utils::set_panic_hook();
        let document = dom::document()?;

        Ok(PortfolioApp {
            background: ParticleBackground::new(&document, "particleCanvas")?,
            typing: TypingEffect::new(&document, "typingText")?,
            scroll_spy: ScrollSpy::new(
                &document,
                "navbar",
                ".nav-link",
                ".section, .hero-section",
            )?,
            nav: NavToggle::new(&document, "navToggle", "navLinks", ".nav-link")?,
            reveal: RevealObserver::new(&document, ".reveal-up, .reveal-left, .reveal-right")?,
            smooth_scroll: SmoothScroll::new(&document)?,
            lightbox: Lightbox::new(&document, "certModal", "certModalImg")?,
        })
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        self.background.start()?;
        self.typing.start()?;
        self.scroll_spy.start()?;
        self.nav.start()?;
        self.reveal.start()?;
        self.smooth_scroll.start()?;
        self.lightbox.start()?;
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), JsValue> {
        self.background.stop()?;
        self.typing.stop()?;
        self.scroll_spy.stop()?;
        self.nav.stop()?;
        self.reveal.stop()?;
        self.smooth_scroll.stop()?;
        self.lightbox.stop()?;
        Ok(())
    }

    /// Open the certificate lightbox on the given image source.
    pub fn open_lightbox(&self, src: &str) -> Result<(), JsValue> {
        self.lightbox.open(src)
    }

    pub fn close_lightbox(&self) {
        self.lightbox.close();
    }
}
