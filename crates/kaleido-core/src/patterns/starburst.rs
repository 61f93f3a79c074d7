use std::f32::consts::TAU;

use super::WedgeContext;
use crate::constants::{SPARKLE_COUNT, STARBURST_RAYS};
use crate::noise::{lerp, soft_noise};
use crate::palette::Hsla;
use crate::random::RandomSource;
use crate::surface::Surface;

/// Soft background glow, noise-bent radial rays with oscillating width, and
/// freshly placed sparkle dots near the ray tips. The sparkles are drawn from
/// the rng on purpose; their flicker is part of the look.
pub(super) fn draw(surface: &mut dyn Surface, ctx: &WedgeContext, rng: &mut dyn RandomSource) {
    let WedgeContext {
        radius, theta, phase: t, ..
    } = *ctx;

    // Background glow
    surface.set_fill_radial_gradient(
        0.0,
        radius,
        &[(0.0, Hsla::white(0.04)), (1.0, Hsla::TRANSPARENT)],
    );
    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.arc(0.0, 0.0, radius, -theta / 2.0, theta / 2.0);
    surface.close_path();
    surface.fill();

    // Radial rays
    for i in 0..STARBURST_RAYS {
        let f = i as f32 / STARBURST_RAYS as f32;
        surface.set_stroke_color(ctx.palette.color(i));
        surface.set_line_width(lerp(0.6, 2.2, (t * 0.8 + i as f32).sin().abs()));
        let bend = soft_noise(f * 3.0, t, t) * (theta * 0.2);
        let a = lerp(-theta / 2.0, theta / 2.0, f) + bend;
        surface.begin_path();
        surface.move_to(a.cos() * (radius * 0.08), a.sin() * (radius * 0.08));
        surface.line_to(a.cos() * radius, a.sin() * radius);
        surface.stroke();
    }

    // Sparkles at ray tips
    for j in 0..SPARKLE_COUNT {
        let a = lerp(-theta / 2.0, theta / 2.0, rng.unit());
        let r = lerp(radius * 0.7, radius, rng.unit());
        let size = 0.6 + rng.unit() * 2.0;
        surface.set_fill_color(ctx.palette.color(j));
        surface.begin_path();
        surface.arc(a.cos() * r, a.sin() * r, size, 0.0, TAU);
        surface.fill();
    }
}
