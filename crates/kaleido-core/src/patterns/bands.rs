use std::f32::consts::TAU;

use super::WedgeContext;
use crate::constants::FLOW_LINE_COUNT;
use crate::noise::{lerp, soft_noise};
use crate::palette::Hsla;
use crate::surface::Surface;

/// Layered radial gradient bands fading outward, flowing noise-bent lines,
/// and the precomputed static dots on top.
pub(super) fn draw(surface: &mut dyn Surface, ctx: &WedgeContext) {
    let WedgeContext {
        radius, theta, phase: t, ..
    } = *ctx;

    // Radial bands
    let layers = ctx.layers.max(1);
    for l in 0..layers {
        let r0 = (l as f32 / layers as f32) * radius;
        let r1 = ((l + 1) as f32 / layers as f32) * radius;
        let color = ctx.palette.color(l as usize);
        surface.set_fill_radial_gradient(r0, r1, &[(0.0, color), (1.0, Hsla::TRANSPARENT)]);
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.arc(0.0, 0.0, r1, -theta / 2.0, theta / 2.0);
        surface.close_path();
        surface.fill();
    }

    // Flowing lines
    surface.set_line_width(1.2);
    for k in 0..FLOW_LINE_COUNT {
        let f = k as f32 / FLOW_LINE_COUNT as f32;
        surface.set_stroke_color(ctx.palette.color(k + 1));
        let r_start = lerp(radius * 0.05, radius * 0.9, f);
        let noisy = soft_noise(f * 5.0, r_start * 0.01, t);
        let bend = noisy * (theta * 0.35);
        surface.begin_path();
        let a0 = -theta / 2.0 + bend * 0.4;
        let a1 = theta / 2.0 - bend * 0.6;
        for s in 0..=20 {
            let u = s as f32 / 20.0;
            let ang = lerp(a0, a1, u);
            let rad = lerp(r_start, r_start + radius * 0.08 * noisy.abs(), u);
            surface.line_to(ang.cos() * rad, ang.sin() * rad);
        }
        surface.stroke();
    }

    // Static dots; stable across frames, regenerated only on structural change
    surface.set_global_alpha(0.85);
    for d in ctx.decorations {
        surface.set_fill_color(ctx.palette.color(d.color_index));
        surface.begin_path();
        surface.arc(d.angle.cos() * d.radius, d.angle.sin() * d.radius, d.size, 0.0, TAU);
        surface.fill();
    }
    surface.set_global_alpha(1.0);
}
