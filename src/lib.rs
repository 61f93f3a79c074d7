#![cfg(target_arch = "wasm32")]
//! Web front-end for the kaleido visualizer.
//!
//! Expects an `#kaleido-canvas` element plus optional control buttons
//! (`btn-inc`, `btn-dec`, `btn-random`, `btn-toggle`, `btn-pattern`) and
//! status spans (`segments-count`, `run-status`, `pattern-name`,
//! `palette-name`). All animation logic lives in `kaleido-core`; this crate
//! only binds it to the canvas, the DOM and requestAnimationFrame.

use anyhow::anyhow;
use instant::Instant;
use kaleido_core::{
    FrameClock, InputSampler, RenderConfig, Renderer, SeededSource, ViewportGeometry,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod dom;
mod events;
mod frame;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("kaleido-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Composition root: constructs the renderer, sampler and surface exactly
/// once and wires every collaborator by explicit reference.
fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no window/document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("kaleido-canvas")
        .ok_or_else(|| anyhow!("missing #kaleido-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;

    let mut surface = canvas::Canvas2dSurface::new(&canvas)?;
    let (width, height, dpr) = surface.sync_backing_size();
    let surface = Rc::new(RefCell::new(surface));

    let renderer = Rc::new(RefCell::new(Renderer::new(
        RenderConfig::default(),
        ViewportGeometry::new(width, height, dpr),
        Box::new(SeededSource::from_entropy()),
    )));
    let sampler = Rc::new(RefCell::new(InputSampler::new(width, height)));

    {
        let r = renderer.borrow();
        log::info!(
            "[renderer] segments={} mode={} palette={}",
            r.segment_count(),
            r.pattern_mode().name(),
            r.palette_name()
        );
    }

    ui::update_status(&document, &renderer.borrow());
    ui::wire_controls(&document, renderer.clone());
    events::wire_pointer_handlers(&canvas, sampler.clone());
    events::wire_global_keydown(renderer.clone());
    events::wire_resize(surface.clone(), renderer.clone(), sampler.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        renderer,
        sampler,
        surface,
        clock: FrameClock::new(),
        origin: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
