use kaleido_core::InputSampler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer wiring: move and down on the canvas, up on the window so a
/// release outside the canvas still clears the pressed flag. Handlers only
/// do simple field writes into the sampler; they may interleave with an
/// in-progress frame's read, which the sampler tolerates.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, sampler: Rc<RefCell<InputSampler>>) {
    {
        let canvas = canvas.clone();
        let sampler = sampler.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(
            move |ev: web::PointerEvent| {
                let rect = canvas.get_bounding_client_rect();
                let x = ev.client_x() as f32 - rect.left() as f32;
                let y = ev.client_y() as f32 - rect.top() as f32;
                sampler.borrow_mut().record_move(x, y);
            },
        ) as Box<dyn FnMut(web::PointerEvent)>);
        _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let sampler = sampler.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            sampler.borrow_mut().set_pressed(true);
        }) as Box<dyn FnMut()>);
        _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            sampler.borrow_mut().set_pressed(false);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}
