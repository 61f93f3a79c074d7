use crate::dom;
use kaleido_core::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Wire the control buttons. Every action refreshes the status readout so
/// the DOM always reflects the renderer's state.
pub fn wire_controls(document: &web::Document, renderer: Rc<RefCell<Renderer>>) {
    bind(document, "btn-inc", renderer.clone(), |r| {
        r.change_segments_by(1)
    });
    bind(document, "btn-dec", renderer.clone(), |r| {
        r.change_segments_by(-1)
    });
    bind(document, "btn-random", renderer.clone(), |r| r.randomize());
    bind(document, "btn-toggle", renderer.clone(), |r| {
        r.toggle_pause()
    });
    bind(document, "btn-pattern", renderer, |r| {
        r.cycle_pattern_mode()
    });
}

fn bind(
    document: &web::Document,
    element_id: &str,
    renderer: Rc<RefCell<Renderer>>,
    action: impl Fn(&mut Renderer) + 'static,
) {
    dom::add_click_listener(document, element_id, move || {
        action(&mut renderer.borrow_mut());
        if let Some(document) = dom::window_document() {
            update_status(&document, &renderer.borrow());
        }
    });
}

/// Push the current segment count, run state, pattern and palette names into
/// the status elements. Missing elements are skipped silently.
pub fn update_status(document: &web::Document, renderer: &Renderer) {
    dom::set_text(
        document,
        "segments-count",
        &renderer.segment_count().to_string(),
    );
    let running = !renderer.is_paused();
    dom::set_text(
        document,
        "run-status",
        if running { "Running" } else { "Paused" },
    );
    dom::set_text(
        document,
        "btn-toggle",
        if running { "Pause" } else { "Resume" },
    );
    dom::set_text(document, "pattern-name", renderer.pattern_mode().name());
    dom::set_text(document, "palette-name", renderer.palette_name());
}
