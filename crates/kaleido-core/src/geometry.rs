use crate::constants::RADIUS_SCALE;
use glam::Vec2;

/// Drawing-surface geometry in CSS pixels. Recomputed only when the physical
/// surface size changes; pattern generators treat it as read-only input for
/// the frame being drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportGeometry {
    pub center: Vec2,
    pub radius: f32,
    pub dpr: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportGeometry {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            center: Vec2::new(width / 2.0, height / 2.0),
            radius: width.hypot(height) * RADIUS_SCALE,
            dpr: dpr.max(1.0),
            width,
            height,
        }
    }
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_and_center_follow_viewport() {
        let g = ViewportGeometry::new(800.0, 600.0, 1.0);
        assert_eq!(g.center, Vec2::new(400.0, 300.0));
        assert!((g.radius - 1000.0 * RADIUS_SCALE).abs() < 1e-3);
    }

    #[test]
    fn dpr_floors_at_one() {
        assert_eq!(ViewportGeometry::new(100.0, 100.0, 0.5).dpr, 1.0);
        assert_eq!(ViewportGeometry::new(100.0, 100.0, 2.0).dpr, 2.0);
    }
}
