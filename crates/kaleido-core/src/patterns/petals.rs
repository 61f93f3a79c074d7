use super::WedgeContext;
use crate::constants::{PETAL_LAYERS, PETAL_STEPS};
use crate::noise::lerp;
use crate::palette::Hsla;
use crate::surface::Surface;

/// Layered sine-modulated radial curves, each lightly filled beneath, plus a
/// soft central bloom.
pub(super) fn draw(surface: &mut dyn Surface, ctx: &WedgeContext) {
    let WedgeContext {
        radius, theta, phase: t, ..
    } = *ctx;

    for l in 0..PETAL_LAYERS {
        let f = l as f32 / (PETAL_LAYERS - 1) as f32;
        let base_r = lerp(radius * 0.18, radius * 0.95, f);
        let freq = (3 + l % 3) as f32; // petal count per wedge
        let amp = base_r * 0.06; // gentle modulation

        surface.begin_path();
        for s in 0..=PETAL_STEPS {
            let u = s as f32 / PETAL_STEPS as f32;
            let ang = lerp(-theta / 2.0, theta / 2.0, u);
            let r = base_r + (ang * freq + t * 0.35 + l as f32 * 0.4).sin() * amp;
            let x = ang.cos() * r;
            let y = ang.sin() * r;
            if s == 0 {
                surface.move_to(x, y);
            } else {
                surface.line_to(x, y);
            }
        }
        surface.set_stroke_color(ctx.palette.color(l));
        surface.set_line_width(1.4);
        surface.stroke();

        // Subtle fill under the curve
        surface.set_global_alpha(0.10);
        surface.set_fill_color(ctx.palette.color(l + 1));
        surface.fill();
        surface.set_global_alpha(1.0);
    }

    // Center bloom
    surface.set_fill_radial_gradient(
        0.0,
        radius * 0.22,
        &[(0.0, Hsla::white(0.05)), (1.0, Hsla::TRANSPARENT)],
    );
    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.arc(0.0, 0.0, radius * 0.22, -theta / 2.0, theta / 2.0);
    surface.close_path();
    surface.fill();
}
