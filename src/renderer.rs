// Renderer struct that handles 2d-canvas calls: clearing the frame, drawing
// each particle as a filled circle, and the two line passes (particle pairs
// within the connection distance, particles within reach of the pointer).

use wasm_bindgen::{JsCast, JsValue};
use web_sys::CanvasRenderingContext2d;

extern crate nalgebra_glm as glm;

use crate::config::field as cfg;
use crate::field::{link_alpha, pointer_link_alpha, ParticleField};

pub struct Renderer {
    context: CanvasRenderingContext2d,
}

impl Renderer {
    // On creation grabs a reference to the 2d context from the canvas on the DOM
    pub fn new(canvas: &web_sys::HtmlCanvasElement) -> Result<Renderer, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("context is not CanvasRenderingContext2d"))?;

        Ok(Renderer { context })
    }

    pub fn clear_screen(&self, field: &ParticleField) {
        self.context
            .clear_rect(0.0, 0.0, field.width(), field.height());
    }

    pub fn render_particles(&self, field: &ParticleField) -> Result<(), JsValue> {
        for p in field.particles() {
            self.context.begin_path();
            self.context
                .arc(p.pos[0], p.pos[1], p.size, 0.0, std::f64::consts::PI * 2.0)?;
            self.context
                .set_fill_style(&JsValue::from_str(&p.color.to_rgba(p.alpha)));
            self.context.fill();
        }
        Ok(())
    }

    // Quadratic in particle count; the count cap keeps it affordable.
    pub fn render_links(&self, field: &ParticleField) {
        let particles = field.particles();
        self.context.set_line_width(cfg::LINK_WIDTH);
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let a = &particles[i];
                let b = &particles[j];
                let dist = glm::length(&glm::vec2(
                    a.pos[0] - b.pos[0],
                    a.pos[1] - b.pos[1],
                ));
                if dist < cfg::CONNECTION_DISTANCE {
                    let alpha = link_alpha(dist);
                    self.context.begin_path();
                    self.context.move_to(a.pos[0], a.pos[1]);
                    self.context.line_to(b.pos[0], b.pos[1]);
                    self.context.set_stroke_style(&JsValue::from_str(
                        &cfg::LINK_COLOR.to_rgba(alpha),
                    ));
                    self.context.stroke();
                }
            }
        }
    }

    pub fn render_pointer_links(&self, field: &ParticleField) {
        let pointer = field.pointer();
        if pointer.is_offscreen() {
            return;
        }
        self.context.set_line_width(cfg::POINTER_LINK_WIDTH);
        for p in field.particles() {
            let dist = glm::length(&glm::vec2(pointer.x - p.pos[0], pointer.y - p.pos[1]));
            if dist < cfg::POINTER_RADIUS {
                let alpha = pointer_link_alpha(dist);
                self.context.begin_path();
                self.context.move_to(p.pos[0], p.pos[1]);
                self.context.line_to(pointer.x, pointer.y);
                self.context.set_stroke_style(&JsValue::from_str(
                    &cfg::POINTER_LINK_COLOR.to_rgba(alpha),
                ));
                self.context.stroke();
            }
        }
    }

    /// One whole frame: clear, circles, pair links, pointer links.
    pub fn render(&self, field: &ParticleField) -> Result<(), JsValue> {
        self.clear_screen(field);
        self.render_particles(field)?;
        self.render_links(field);
        self.render_pointer_links(field);
        Ok(())
    }
}
