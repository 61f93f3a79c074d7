use anyhow::anyhow;
use kaleido_core::{GradientStop, Hsla, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` backed by a real 2D canvas context. Drawing happens in CSS
/// pixel coordinates; the backing store is kept at CSS size times the device
/// pixel ratio with a matching base transform.
pub struct Canvas2dSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    css_width: f32,
    css_height: f32,
    dpr: f32,
}

impl Canvas2dSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        let mut surface = Self {
            canvas: canvas.clone(),
            ctx,
            css_width: 0.0,
            css_height: 0.0,
            dpr: 1.0,
        };
        surface.sync_backing_size();
        Ok(surface)
    }

    /// Match the backing store to CSS size times devicePixelRatio and reset
    /// the base transform so drawing uses CSS pixels. Returns the new CSS
    /// dimensions and dpr for the renderer and sampler.
    pub fn sync_backing_size(&mut self) -> (f32, f32, f32) {
        let dpr = web::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .max(1.0);
        let rect = self.canvas.get_bounding_client_rect();
        let css_w = rect.width();
        let css_h = rect.height();
        self.canvas.set_width(((css_w * dpr) as u32).max(1));
        self.canvas.set_height(((css_h * dpr) as u32).max(1));
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

        self.css_width = css_w as f32;
        self.css_height = css_h as f32;
        self.dpr = dpr as f32;
        (self.css_width, self.css_height, self.dpr)
    }
}

/// `hsl()` notation with an alpha slash, understood by canvas fill/stroke
/// styles.
fn css_color(c: Hsla) -> String {
    format!(
        "hsl({:.1} {:.1}% {:.1}% / {:.3})",
        c.hue, c.saturation, c.lightness, c.alpha
    )
}

impl Surface for Canvas2dSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.css_width as f64, self.css_height as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        _ = self.ctx.translate(x as f64, y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        _ = self.ctx.scale(sx as f64, sy as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        _ = self
            .ctx
            .arc(x as f64, y as f64, radius as f64, start as f64, end as f64);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn clip(&mut self) {
        self.ctx.clip();
    }

    fn set_fill_color(&mut self, color: Hsla) {
        self.ctx.set_fill_style_str(&css_color(color));
    }

    fn set_fill_radial_gradient(
        &mut self,
        inner_radius: f32,
        outer_radius: f32,
        stops: &[GradientStop],
    ) {
        let gradient = match self.ctx.create_radial_gradient(
            0.0,
            0.0,
            inner_radius as f64,
            0.0,
            0.0,
            outer_radius as f64,
        ) {
            Ok(g) => g,
            Err(_) => return,
        };
        for (offset, color) in stops {
            _ = gradient.add_color_stop(*offset, &css_color(*color));
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
    }

    fn set_stroke_color(&mut self, color: Hsla) {
        self.ctx.set_stroke_style_str(&css_color(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
