use crate::constants::{POINTER_DECAY, POINTER_NORM_MIN};

/// Bounded influence derived from recent pointer movement. `rotational`
/// feeds rotation speed, `offset` feeds phase speed; both are in [-1, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Influence {
    pub rotational: f32,
    pub offset: f32,
}

/// Tracks pointer position and per-frame displacement and exposes a decaying
/// influence signal. Event handlers write position; the driver samples (and
/// thereby decays) the deltas exactly once per frame.
#[derive(Clone, Debug)]
pub struct InputSampler {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    pressed: bool,
    bounds_w: f32,
    bounds_h: f32,
}

impl InputSampler {
    pub fn new(bounds_w: f32, bounds_h: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
            pressed: false,
            bounds_w,
            bounds_h,
        }
    }

    /// Record an absolute pointer position in surface-local coordinates.
    pub fn record_move(&mut self, x: f32, y: f32) {
        self.dx = x - self.x;
        self.dy = y - self.y;
        self.x = x;
        self.y = y;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Viewport bounds used to normalize deltas; updated on resize.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds_w = width;
        self.bounds_h = height;
    }

    /// Current influence, decaying the stored deltas so the signal settles
    /// toward zero within a second or two of pointer inactivity. Call once
    /// per frame; extra calls double-decay.
    pub fn sample_influence(&mut self) -> Influence {
        let rotational = (self.dx / self.bounds_w.max(POINTER_NORM_MIN)).clamp(-1.0, 1.0);
        let offset = (self.dy / self.bounds_h.max(POINTER_NORM_MIN)).clamp(-1.0, 1.0);
        self.dx *= POINTER_DECAY;
        self.dy *= POINTER_DECAY;
        Influence { rotational, offset }
    }
}
