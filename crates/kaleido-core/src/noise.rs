/// Soft pseudo-noise from phase-shifted trig terms over two spatial inputs
/// and one temporal input. Deterministic per call, so patterns that sample it
/// look organic without flickering between frames.
#[inline]
pub fn soft_noise(x: f32, y: f32, t: f32) -> f32 {
    (x * 1.7 + t * 0.6).sin() * 0.6
        + (y * 1.3 - t * 0.4).cos() * 0.4
        + ((x + y) * 0.5 + t * 0.9).sin() * 0.3
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_noise_stays_within_weight_sum() {
        // Weights are 0.6 + 0.4 + 0.3
        for i in 0..100 {
            let v = soft_noise(i as f32 * 0.37, i as f32 * 0.91, i as f32 * 0.13);
            assert!(v.abs() <= 1.3 + f32::EPSILON);
        }
    }

    #[test]
    fn soft_noise_is_deterministic() {
        assert_eq!(soft_noise(1.0, 2.0, 3.0), soft_noise(1.0, 2.0, 3.0));
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }
}
