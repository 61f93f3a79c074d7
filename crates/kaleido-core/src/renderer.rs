use std::f32::consts::TAU;

use crate::config::{PatternMode, RenderConfig};
use crate::constants::{CURATED_PICK_WEIGHT, DECORATION_COUNT, MAX_SEGMENTS, MIN_SEGMENTS, MODE_SWITCH_CHANCE};
use crate::geometry::ViewportGeometry;
use crate::input::Influence;
use crate::noise::lerp;
use crate::palette::{self, Palette};
use crate::patterns::{self, WedgeContext};
use crate::random::RandomSource;
use crate::surface::Surface;

/// Rotation angle and pattern phase. Both are unbounded reals advanced only
/// by `update`; downstream code only ever feeds them to periodic functions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub rotation: f32,
    pub phase: f32,
}

/// One precomputed static mark for the bands+lines pattern. The set is
/// regenerated on structural change (geometry, segment count, palette),
/// never per frame, so the dots stay put instead of flickering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decoration {
    pub angle: f32,
    pub radius: f32,
    pub size: f32,
    pub color_index: usize,
}

/// Owns all visual state and draws exactly one frame per `draw` call.
/// Malformed input is normalized (clamped or ignored), never rejected.
pub struct Renderer {
    config: RenderConfig,
    palette: Palette,
    geometry: ViewportGeometry,
    motion: MotionState,
    decorations: Vec<Decoration>,
    rng: Box<dyn RandomSource>,
}

impl Renderer {
    /// Picks an initial palette (curated weighted over procedural) and seeds
    /// the static decorations from the given geometry.
    pub fn new(config: RenderConfig, geometry: ViewportGeometry, mut rng: Box<dyn RandomSource>) -> Self {
        let palette = pick_palette(rng.as_mut());
        let mut renderer = Self {
            config,
            palette,
            geometry,
            motion: MotionState::default(),
            decorations: Vec::new(),
            rng,
        };
        renderer.regen_decorations();
        renderer
    }

    pub fn segment_count(&self) -> u32 {
        self.config.segments
    }

    pub fn is_paused(&self) -> bool {
        self.config.paused
    }

    pub fn pattern_mode(&self) -> PatternMode {
        self.config.mode
    }

    pub fn palette_name(&self) -> &'static str {
        self.palette.name
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    pub fn motion(&self) -> MotionState {
        self.motion
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Recompute geometry for new physical dimensions. Decorations depend on
    /// the radius, so they are reseeded as well.
    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        self.geometry = ViewportGeometry::new(width, height, dpr);
        self.regen_decorations();
    }

    /// Clamp into the allowed segment range. Decorations are regenerated
    /// even when the clamp lands on the current value; the wedge angle is
    /// what they were seeded against.
    pub fn set_segment_count(&mut self, segments: u32) {
        self.config.segments = segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS);
        self.regen_decorations();
    }

    pub fn change_segments_by(&mut self, delta: i32) {
        let next = self.config.segments as i32 + delta;
        self.set_segment_count(next.max(0) as u32);
    }

    /// New palette (curated weighted over procedural), a visible phase jump,
    /// and occasionally a different pattern mode.
    pub fn randomize(&mut self) {
        self.palette = pick_palette(self.rng.as_mut());
        self.motion.phase = self.rng.range(0.0, TAU);
        if self.rng.chance(MODE_SWITCH_CHANCE) {
            let idx = self.rng.range_int(0, PatternMode::ALL.len() - 1);
            self.config.mode = PatternMode::ALL[idx];
        }
        log::debug!(
            "randomize: palette={} mode={}",
            self.palette.name,
            self.config.mode.name()
        );
        self.regen_decorations();
    }

    /// Does not touch motion state; the last drawn frame stays as-is.
    pub fn set_paused(&mut self, paused: bool) {
        self.config.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.config.paused = !self.config.paused;
    }

    pub fn set_pattern_mode(&mut self, mode: PatternMode) {
        self.config.mode = mode;
    }

    pub fn cycle_pattern_mode(&mut self) {
        self.config.mode = self.config.mode.next();
    }

    /// Replace the active palette wholesale. An empty palette is ignored so
    /// the never-empty invariant holds.
    pub fn set_palette(&mut self, palette: Palette) {
        if palette.is_empty() {
            return;
        }
        self.palette = palette;
        self.regen_decorations();
    }

    /// Advance to the next curated palette by name, wrapping.
    pub fn cycle_palette(&mut self) {
        self.set_palette(palette::cycle_curated(self.palette.name));
    }

    /// Advance rotation and phase. Influence components arrive already
    /// clamped to [-1, 1] by the sampler.
    pub fn update(&mut self, dt: f32, influence: Influence) {
        let speed = self.config.base_rotation_speed
            + influence.rotational * self.config.pointer_rotation_factor;
        self.motion.rotation += speed * dt;

        let offset = influence.offset * self.config.pointer_offset_factor;
        self.motion.phase += (crate::constants::PHASE_BASE_SPEED + offset.abs()) * dt;
    }

    /// Draw one frame: clear, translate to center, then rotate, mirror every
    /// odd wedge, clip to the sector and dispatch to the active generator.
    /// The wedge content is computed once per generator call and replicated
    /// by transform, not recomputed per wedge.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let segments = self.config.segments;
        let theta = TAU / segments as f32;
        let radius = self.geometry.radius;

        surface.clear();
        surface.save();
        surface.translate(self.geometry.center.x, self.geometry.center.y);

        for i in 0..segments {
            surface.save();
            surface.rotate(self.motion.rotation + i as f32 * theta);
            if i % 2 == 1 {
                // Mirror alternating wedges for kaleidoscopic symmetry
                surface.scale(-1.0, 1.0);
            }

            surface.begin_path();
            surface.move_to(0.0, 0.0);
            surface.arc(0.0, 0.0, radius, -theta / 2.0, theta / 2.0);
            surface.close_path();
            surface.clip();

            let ctx = WedgeContext {
                radius,
                theta,
                phase: self.motion.phase,
                layers: self.config.layers,
                palette: &self.palette,
                decorations: &self.decorations,
            };
            patterns::draw_wedge(surface, &ctx, self.config.mode, self.rng.as_mut());

            surface.restore();
        }

        surface.restore();
    }

    fn regen_decorations(&mut self) {
        let theta = TAU / self.config.segments as f32;
        let radius = self.geometry.radius;
        let palette_len = self.palette.len();
        let rng = self.rng.as_mut();
        self.decorations = (0..DECORATION_COUNT)
            .map(|i| Decoration {
                angle: lerp(-theta / 2.0, theta / 2.0, rng.unit()),
                radius: lerp(radius * 0.04, radius * 0.92, rng.unit()),
                size: 0.9 + rng.unit() * 2.2,
                color_index: i % palette_len,
            })
            .collect();
    }
}

fn pick_palette(rng: &mut dyn RandomSource) -> Palette {
    if rng.chance(CURATED_PICK_WEIGHT) {
        palette::random_curated(rng)
    } else {
        palette::random_procedural(rng)
    }
}
