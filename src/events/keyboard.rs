use crate::{dom, ui};
use kaleido_core::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, renderer: &Rc<RefCell<Renderer>>) {
    let key = ev.key();
    let handled = match key.as_str() {
        "[" => {
            renderer.borrow_mut().change_segments_by(-1);
            true
        }
        "]" => {
            renderer.borrow_mut().change_segments_by(1);
            true
        }
        "r" | "R" => {
            renderer.borrow_mut().randomize();
            true
        }
        "p" | "P" => {
            renderer.borrow_mut().cycle_pattern_mode();
            true
        }
        "c" | "C" => {
            renderer.borrow_mut().cycle_palette();
            true
        }
        " " => {
            renderer.borrow_mut().toggle_pause();
            true
        }
        _ => false,
    };
    if handled {
        ev.prevent_default();
        if let Some(document) = dom::window_document() {
            ui::update_status(&document, &renderer.borrow());
        }
    }
}

pub fn wire_global_keydown(renderer: Rc<RefCell<Renderer>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(
        move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &renderer);
        },
    ) as Box<dyn FnMut(web::KeyboardEvent)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
