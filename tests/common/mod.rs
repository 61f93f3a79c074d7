// Test doubles shared by the host-side suites.

#![allow(dead_code)]

use kaleido_core::{GradientStop, Hsla, RandomSource, Surface};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Random source that pops scripted values and falls back to 0.5 once the
/// script runs out. The shared handle lets a test queue values after the
/// renderer has already consumed its construction-time draws.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    queue: Rc<RefCell<VecDeque<f32>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, values: &[f32]) {
        self.queue.borrow_mut().extend(values.iter().copied());
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f32 {
        self.queue.borrow_mut().pop_front().unwrap_or(0.5)
    }
}

/// Surface that records operation tags so tests can assert on the drawing
/// pipeline without a real canvas.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, tag: &str) -> usize {
        self.ops.iter().filter(|op| op.as_str() == tag).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push("clear".into());
    }
    fn save(&mut self) {
        self.ops.push("save".into());
    }
    fn restore(&mut self) {
        self.ops.push("restore".into());
    }
    fn translate(&mut self, _x: f32, _y: f32) {
        self.ops.push("translate".into());
    }
    fn rotate(&mut self, _radians: f32) {
        self.ops.push("rotate".into());
    }
    fn scale(&mut self, sx: f32, sy: f32) {
        if sx < 0.0 && sy > 0.0 {
            self.ops.push("mirror".into());
        } else {
            self.ops.push("scale".into());
        }
    }
    fn begin_path(&mut self) {
        self.ops.push("begin_path".into());
    }
    fn move_to(&mut self, _x: f32, _y: f32) {
        self.ops.push("move_to".into());
    }
    fn line_to(&mut self, _x: f32, _y: f32) {
        self.ops.push("line_to".into());
    }
    fn arc(&mut self, _x: f32, _y: f32, _radius: f32, _start: f32, _end: f32) {
        self.ops.push("arc".into());
    }
    fn close_path(&mut self) {
        self.ops.push("close_path".into());
    }
    fn clip(&mut self) {
        self.ops.push("clip".into());
    }
    fn set_fill_color(&mut self, _color: Hsla) {
        self.ops.push("set_fill_color".into());
    }
    fn set_fill_radial_gradient(
        &mut self,
        _inner_radius: f32,
        _outer_radius: f32,
        _stops: &[GradientStop],
    ) {
        self.ops.push("set_fill_radial_gradient".into());
    }
    fn set_stroke_color(&mut self, _color: Hsla) {
        self.ops.push("set_stroke_color".into());
    }
    fn set_line_width(&mut self, _width: f32) {
        self.ops.push("set_line_width".into());
    }
    fn set_global_alpha(&mut self, _alpha: f32) {
        self.ops.push("set_global_alpha".into());
    }
    fn fill(&mut self) {
        self.ops.push("fill".into());
    }
    fn stroke(&mut self) {
        self.ops.push("stroke".into());
    }
}
