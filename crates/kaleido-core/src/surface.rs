use crate::palette::Hsla;

/// One stop of a radial gradient: offset in [0, 1] plus color.
pub type GradientStop = (f32, Hsla);

/// Immediate-mode drawing surface, a thin mirror of the 2D-canvas subset the
/// pattern generators need. Canvas semantics apply throughout: the current
/// path persists across `fill`/`stroke`, `clip` lasts until the matching
/// `restore`, and transforms compose.
///
/// The web front-end backs this with a real `CanvasRenderingContext2d`;
/// tests substitute a recording implementation.
pub trait Surface {
    /// Clear the whole surface to transparent.
    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, sx: f32, sy: f32);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    /// Arc centered at (x, y) from `start` to `end` radians, counterclockwise
    /// flag never used by the patterns.
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32);
    fn close_path(&mut self);
    /// Restrict subsequent drawing to the current path.
    fn clip(&mut self);
    fn set_fill_color(&mut self, color: Hsla);
    /// Radial gradient centered on the origin as the fill style, fading
    /// between `stops` from `inner_radius` out to `outer_radius`.
    fn set_fill_radial_gradient(
        &mut self,
        inner_radius: f32,
        outer_radius: f32,
        stops: &[GradientStop],
    );
    fn set_stroke_color(&mut self, color: Hsla);
    fn set_line_width(&mut self, width: f32);
    fn set_global_alpha(&mut self, alpha: f32);
    fn fill(&mut self);
    fn stroke(&mut self);
}
