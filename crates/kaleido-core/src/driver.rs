use crate::constants::MAX_FRAME_DT;
use crate::input::InputSampler;
use crate::renderer::Renderer;
use crate::surface::Surface;

/// Per-tick clock. Elapsed time is always measured, never assumed constant,
/// and clamped so tab suspension or long stalls cannot produce a jarring
/// motion jump.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamped delta in seconds since the previous tick. The first tick
    /// yields zero.
    pub fn tick(&mut self, now_seconds: f64) -> f32 {
        let dt = match self.last {
            Some(last) => ((now_seconds - last) as f32).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last = Some(now_seconds);
        dt
    }
}

/// One tick of the sampler -> update -> draw pipeline. While paused the
/// whole body is skipped and the previously drawn frame stays visible; the
/// caller keeps rescheduling regardless.
pub fn advance_frame(
    renderer: &mut Renderer,
    sampler: &mut InputSampler,
    surface: &mut dyn Surface,
    dt: f32,
) {
    if renderer.is_paused() {
        return;
    }
    let influence = sampler.sample_influence();
    renderer.update(dt, influence);
    renderer.draw(surface);
}
