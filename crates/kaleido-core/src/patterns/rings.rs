use super::WedgeContext;
use crate::constants::GEO_RING_COUNT;
use crate::noise::{lerp, soft_noise};
use crate::surface::Surface;
use glam::Vec2;

/// Concentric noise-wobbled polygons with translucent fill, solid outline,
/// and radial spokes from the origin to alternating vertices.
pub(super) fn draw(surface: &mut dyn Surface, ctx: &WedgeContext) {
    let WedgeContext {
        radius, theta, phase: t, ..
    } = *ctx;

    for r in 1..=GEO_RING_COUNT {
        let rr = lerp(radius * 0.22, radius * 0.96, r as f32 / GEO_RING_COUNT as f32);
        let sides = 6 + r % 5; // 6..10 for bolder geometry
        let mut points = Vec::with_capacity(sides);
        for s in 0..sides {
            let f = s as f32 / sides as f32;
            let ang = lerp(-theta / 2.0, theta / 2.0, f)
                + soft_noise(f * 1.6, rr * 0.015, t) * (theta * 0.12);
            let wobble = 1.0 + soft_noise(f * 3.0, t * 0.5, t) * 0.08;
            points.push(Vec2::new(ang.cos() * rr * wobble, ang.sin() * rr * wobble));
        }

        surface.begin_path();
        for (idx, p) in points.iter().enumerate() {
            if idx == 0 {
                surface.move_to(p.x, p.y);
            } else {
                surface.line_to(p.x, p.y);
            }
        }
        surface.close_path();

        // Translucent fill under a solid outline
        surface.set_global_alpha(0.14);
        surface.set_fill_color(ctx.palette.color(r + 1));
        surface.fill();
        surface.set_global_alpha(1.0);

        surface.set_stroke_color(ctx.palette.color(r));
        surface.set_line_width(1.8);
        surface.stroke();

        // Radial spokes for structure
        surface.set_stroke_color(ctx.palette.color(r + 2));
        surface.set_line_width(1.1);
        for p in points.iter().step_by(2) {
            surface.begin_path();
            surface.move_to(0.0, 0.0);
            surface.line_to(p.x, p.y);
            surface.stroke();
        }
    }
}
