// Controller for the animated particle background: owns the canvas and the
// field, wires pointer/resize input, and drives the requestAnimationFrame
// loop. The frame closure holds an Rc to itself so it can reschedule;
// stop() cancels the pending frame and drops the cycle.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use crate::dom;
use crate::field::ParticleField;
use crate::renderer::Renderer;
use crate::utils::Timer;

type FrameCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct ParticleBackground {
    canvas: HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
    frame: FrameCell,
    raf_handle: Rc<RefCell<Option<i32>>>,
    on_resize: Option<Closure<dyn FnMut()>>,
    on_mouse_move: Option<Closure<dyn FnMut(MouseEvent)>>,
    on_mouse_out: Option<Closure<dyn FnMut()>>,
    on_touch_move: Option<Closure<dyn FnMut(TouchEvent)>>,
    on_touch_end: Option<Closure<dyn FnMut()>>,
}

/// Match the canvas backing store to the viewport and report the new size.
fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width, height)
}

impl ParticleBackground {
    pub fn new(document: &Document, canvas_id: &str) -> Result<ParticleBackground, JsValue> {
        let canvas: HtmlCanvasElement = dom::typed_element_by_id(document, canvas_id)?;
        Ok(ParticleBackground {
            canvas,
            field: Rc::new(RefCell::new(ParticleField::new())),
            frame: Rc::new(RefCell::new(None)),
            raf_handle: Rc::new(RefCell::new(None)),
            on_resize: None,
            on_mouse_move: None,
            on_mouse_out: None,
            on_touch_move: None,
            on_touch_end: None,
        })
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.frame.borrow().is_some() {
            return Ok(());
        }
        let window = dom::window()?;

        {
            let _timer = Timer::new("ParticleField::reset");
            let (width, height) = fit_canvas(&window, &self.canvas);
            self.field.borrow_mut().reset(width, height);
        }

        let renderer = Renderer::new(&self.canvas)?;

        // Resize discards and rebuilds the whole particle set.
        let on_resize = {
            let canvas = self.canvas.clone();
            let field = self.field.clone();
            Closure::wrap(Box::new(move || {
                if let Ok(window) = dom::window() {
                    let _timer = Timer::new("ParticleField::reset");
                    let (width, height) = fit_canvas(&window, &canvas);
                    field.borrow_mut().reset(width, height);
                }
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        self.on_resize = Some(on_resize);

        let on_mouse_move = {
            let field = self.field.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                field
                    .borrow_mut()
                    .pointer_mut()
                    .set(event.client_x() as f64, event.client_y() as f64);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        window.add_event_listener_with_callback(
            "mousemove",
            on_mouse_move.as_ref().unchecked_ref(),
        )?;
        self.on_mouse_move = Some(on_mouse_move);

        let on_mouse_out = {
            let field = self.field.clone();
            Closure::wrap(Box::new(move || {
                field.borrow_mut().pointer_mut().clear();
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("mouseout", on_mouse_out.as_ref().unchecked_ref())?;
        self.on_mouse_out = Some(on_mouse_out);

        let on_touch_move = {
            let field = self.field.clone();
            Closure::wrap(Box::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    field
                        .borrow_mut()
                        .pointer_mut()
                        .set(touch.client_x() as f64, touch.client_y() as f64);
                }
            }) as Box<dyn FnMut(TouchEvent)>)
        };
        window.add_event_listener_with_callback(
            "touchmove",
            on_touch_move.as_ref().unchecked_ref(),
        )?;
        self.on_touch_move = Some(on_touch_move);

        let on_touch_end = {
            let field = self.field.clone();
            Closure::wrap(Box::new(move || {
                field.borrow_mut().pointer_mut().clear();
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("touchend", on_touch_end.as_ref().unchecked_ref())?;
        self.on_touch_end = Some(on_touch_end);

        // Animation loop. The closure lives inside `frame` and borrows it
        // through `frame_cell` to reschedule itself each frame.
        let frame_cell = self.frame.clone();
        let field = self.field.clone();
        let raf_handle = self.raf_handle.clone();
        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            {
                let mut field = field.borrow_mut();
                field.step();
                // A failed draw degrades to a blank or partial frame.
                let _ = renderer.render(&field);
            }
            if let Ok(window) = dom::window() {
                if let Some(frame) = frame_cell.borrow().as_ref() {
                    if let Ok(handle) =
                        window.request_animation_frame(frame.as_ref().unchecked_ref())
                    {
                        *raf_handle.borrow_mut() = Some(handle);
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        let first = window.request_animation_frame(
            self.frame
                .borrow()
                .as_ref()
                .ok_or_else(|| JsValue::from_str("frame closure missing"))?
                .as_ref()
                .unchecked_ref(),
        )?;
        *self.raf_handle.borrow_mut() = Some(first);

        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), JsValue> {
        let window = dom::window()?;

        if let Some(handle) = self.raf_handle.borrow_mut().take() {
            window.cancel_animation_frame(handle)?;
        }

        if let Some(closure) = self.on_resize.take() {
            window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        }
        if let Some(closure) = self.on_mouse_move.take() {
            window.remove_event_listener_with_callback(
                "mousemove",
                closure.as_ref().unchecked_ref(),
            )?;
        }
        if let Some(closure) = self.on_mouse_out.take() {
            window.remove_event_listener_with_callback(
                "mouseout",
                closure.as_ref().unchecked_ref(),
            )?;
        }
        if let Some(closure) = self.on_touch_move.take() {
            window.remove_event_listener_with_callback(
                "touchmove",
                closure.as_ref().unchecked_ref(),
            )?;
        }
        if let Some(closure) = self.on_touch_end.take() {
            window.remove_event_listener_with_callback(
                "touchend",
                closure.as_ref().unchecked_ref(),
            )?;
        }

        // Dropping the frame closure breaks the Rc cycle.
        *self.frame.borrow_mut() = None;

        Ok(())
    }
}
