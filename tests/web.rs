//! Browser smoke test; run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use portfolio_fx::field::ParticleField;
use portfolio_fx::renderer::Renderer;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn renders_frames_onto_a_detached_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(320);
    canvas.set_height(240);

    let mut field = ParticleField::new();
    field.reset(320.0, 240.0);
    field.pointer_mut().set(160.0, 120.0);

    let renderer = Renderer::new(&canvas).unwrap();
    for _ in 0..10 {
        field.step();
        renderer.render(&field).unwrap();
    }

    for p in field.particles() {
        assert!(p.alpha >= 0.0 && p.alpha <= 1.0);
        assert!(p.pos[0] >= -10.0 && p.pos[0] <= 330.0);
        assert!(p.pos[1] >= -10.0 && p.pos[1] <= 250.0);
    }
}
