// Typewriter headline: a character append/delete state machine over a fixed
// title list, driven by re-scheduled timeouts. The state machine is plain
// data so the cycle is testable without a DOM.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::config::typing as cfg;
use crate::dom;

pub const TITLES: [&str; 5] = [
    "Machine Learning Engineer",
    "Deep Learning Researcher",
    "Computer Vision Specialist",
    "MLOps Practitioner",
    "AI Systems Architect",
];

pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

pub struct TypingState {
    titles: Vec<String>,
    title_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingState {
    pub fn new(titles: Vec<String>) -> TypingState {
        TypingState {
            titles,
            title_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    /// One tick: append or delete a character, returning the text to show
    /// and the delay before the next tick. A fully typed word holds on
    /// screen, an emptied one advances to the next title cyclically.
    pub fn step(&mut self) -> TypingStep {
        if self.titles.is_empty() {
            return TypingStep {
                text: String::new(),
                delay_ms: cfg::HOLD_MS,
            };
        }

        let current = &self.titles[self.title_index];
        let len = current.chars().count();

        let mut delay_ms = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            cfg::DELETE_MS
        } else {
            self.char_index = (self.char_index + 1).min(len);
            cfg::TYPE_MS
        };

        let text: String = current.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == len {
            delay_ms = cfg::HOLD_MS;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.title_index = (self.title_index + 1) % self.titles.len();
            delay_ms = cfg::NEXT_WORD_MS;
        }

        TypingStep { text, delay_ms }
    }
}

pub struct TypingEffect {
    element: Element,
    state: Rc<RefCell<TypingState>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    timeout: Rc<RefCell<Option<i32>>>,
}

impl TypingEffect {
    pub fn new(document: &Document, element_id: &str) -> Result<TypingEffect, JsValue> {
        let element = dom::element_by_id(document, element_id)?;
        let titles = TITLES.iter().map(|t| t.to_string()).collect();
        Ok(TypingEffect {
            element,
            state: Rc::new(RefCell::new(TypingState::new(titles))),
            tick: Rc::new(RefCell::new(None)),
            timeout: Rc::new(RefCell::new(None)),
        })
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.tick.borrow().is_some() {
            return Ok(());
        }

        let tick_cell = self.tick.clone();
        let state = self.state.clone();
        let element = self.element.clone();
        let timeout = self.timeout.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let step = state.borrow_mut().step();
            element.set_text_content(Some(&step.text));
            if let Ok(window) = dom::window() {
                if let Some(tick) = tick_cell.borrow().as_ref() {
                    if let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        step.delay_ms as i32,
                    ) {
                        *timeout.borrow_mut() = Some(handle);
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        let window = dom::window()?;
        let first = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.tick
                .borrow()
                .as_ref()
                .ok_or_else(|| JsValue::from_str("typing closure missing"))?
                .as_ref()
                .unchecked_ref(),
            cfg::TYPE_MS as i32,
        )?;
        *self.timeout.borrow_mut() = Some(first);

        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), JsValue> {
        if let Some(handle) = self.timeout.borrow_mut().take() {
            dom::window()?.clear_timeout_with_handle(handle);
        }
        *self.tick.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(titles: &[&str]) -> TypingState {
        TypingState::new(titles.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn types_one_character_per_tick() {
        let mut m = machine(&["abc"]);
        assert_eq!(m.step().text, "a");
        assert_eq!(m.step().text, "ab");
        let full = m.step();
        assert_eq!(full.text, "abc");
        assert_eq!(full.delay_ms, cfg::HOLD_MS);
    }

    #[test]
    fn deletes_after_holding() {
        let mut m = machine(&["ab"]);
        m.step();
        m.step(); // full word, hold
        let s = m.step();
        assert_eq!(s.text, "a");
        assert_eq!(s.delay_ms, cfg::DELETE_MS);
        let s = m.step();
        assert_eq!(s.text, "");
        assert_eq!(s.delay_ms, cfg::NEXT_WORD_MS);
    }

    #[test]
    fn cycles_through_all_titles_in_order() {
        let titles = ["one", "two", "three"];
        let mut m = machine(&titles);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let s = m.step();
            if titles.contains(&s.text.as_str()) && seen.last() != Some(&s.text) {
                seen.push(s.text);
            }
        }
        assert!(seen.len() >= 6);
        for (i, word) in seen.iter().enumerate() {
            assert_eq!(word, titles[i % titles.len()]);
        }
    }

    #[test]
    fn delays_match_phase() {
        let mut m = machine(&["hi"]);
        assert_eq!(m.step().delay_ms, cfg::TYPE_MS); // "h"
        assert_eq!(m.step().delay_ms, cfg::HOLD_MS); // "hi" complete
        assert_eq!(m.step().delay_ms, cfg::DELETE_MS); // "h"
        assert_eq!(m.step().delay_ms, cfg::NEXT_WORD_MS); // ""
        assert_eq!(m.step().delay_ms, cfg::TYPE_MS); // wrapped around
    }

    #[test]
    fn empty_title_list_is_inert() {
        let mut m = machine(&[]);
        let s = m.step();
        assert_eq!(s.text, "");
    }

    #[test]
    fn empty_title_advances_without_sticking() {
        let mut m = machine(&["", "ok"]);
        let s = m.step(); // empty word is instantly "complete"
        assert_eq!(s.text, "");
        assert_eq!(s.delay_ms, cfg::HOLD_MS);
        let s = m.step(); // and instantly emptied
        assert_eq!(s.delay_ms, cfg::NEXT_WORD_MS);
        assert_eq!(m.step().text, "o");
    }

    #[test]
    fn multibyte_titles_step_per_char() {
        let mut m = machine(&["héllo"]);
        assert_eq!(m.step().text, "h");
        assert_eq!(m.step().text, "hé");
    }
}
