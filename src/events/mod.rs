mod keyboard;
mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_pointer_handlers;

use crate::canvas::Canvas2dSurface;
use kaleido_core::{InputSampler, Renderer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// On window resize: re-sync the canvas backing store, then hand the new
/// CSS dimensions to the renderer (geometry + decorations) and the sampler
/// (delta normalization bounds).
pub fn wire_resize(
    surface: Rc<RefCell<Canvas2dSurface>>,
    renderer: Rc<RefCell<Renderer>>,
    sampler: Rc<RefCell<InputSampler>>,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let (width, height, dpr) = surface.borrow_mut().sync_backing_size();
        renderer.borrow_mut().resize(width, height, dpr);
        sampler.borrow_mut().set_bounds(width, height);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
