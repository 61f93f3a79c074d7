//! The four interchangeable pattern generators. Each consumes the same
//! wedge context and produces only drawing side effects; the renderer
//! replicates one wedge's content across the circle by transform, so every
//! generator keeps its output symmetric about the wedge edges.

mod bands;
mod petals;
mod rings;
mod starburst;

use crate::config::PatternMode;
use crate::palette::Palette;
use crate::random::RandomSource;
use crate::renderer::Decoration;
use crate::surface::Surface;

/// Read-only inputs for drawing one wedge.
pub struct WedgeContext<'a> {
    /// Drawable wedge radius in CSS pixels.
    pub radius: f32,
    /// Angular width of the wedge.
    pub theta: f32,
    /// Pattern phase driving all time-based variation.
    pub phase: f32,
    /// Band layers for the bands+lines generator.
    pub layers: u32,
    pub palette: &'a Palette,
    /// Precomputed static marks; only bands+lines reads them.
    pub decorations: &'a [Decoration],
}

/// Dispatch to the active generator. The rng is only consumed where true
/// per-frame randomness is intended (starburst sparkles).
pub fn draw_wedge(
    surface: &mut dyn Surface,
    ctx: &WedgeContext,
    mode: PatternMode,
    rng: &mut dyn RandomSource,
) {
    match mode {
        PatternMode::Starburst => starburst::draw(surface, ctx, rng),
        PatternMode::BandsLines => bands::draw(surface, ctx),
        PatternMode::GeoRings => rings::draw(surface, ctx),
        PatternMode::Petals => petals::draw(surface, ctx),
    }
}
