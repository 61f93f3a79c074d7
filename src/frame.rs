use crate::canvas::Canvas2dSurface;
use instant::Instant;
use kaleido_core::{advance_frame, FrameClock, InputSampler, Renderer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation tick needs. The renderer and sampler are shared
/// with the event wiring; the loop only borrows them for the duration of a
/// fully synchronous frame.
pub struct FrameContext {
    pub renderer: Rc<RefCell<Renderer>>,
    pub sampler: Rc<RefCell<InputSampler>>,
    pub surface: Rc<RefCell<Canvas2dSurface>>,
    pub clock: FrameClock,
    pub origin: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let dt = self.clock.tick(self.origin.elapsed().as_secs_f64());
        let mut renderer = self.renderer.borrow_mut();
        let mut sampler = self.sampler.borrow_mut();
        let mut surface = self.surface.borrow_mut();
        advance_frame(&mut renderer, &mut sampler, &mut *surface, dt);
    }
}

/// Drive `frame` from requestAnimationFrame. Rescheduling is unconditional;
/// pause only skips the visible effect, never the loop.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
