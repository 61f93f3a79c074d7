use crate::constants::*;

/// Closed set of pattern generators, in UI cycle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternMode {
    Starburst,
    BandsLines,
    GeoRings,
    Petals,
}

impl PatternMode {
    pub const ALL: [PatternMode; 4] = [
        PatternMode::Starburst,
        PatternMode::BandsLines,
        PatternMode::GeoRings,
        PatternMode::Petals,
    ];

    /// Parse a user-facing mode name. Unknown names yield `None` so callers
    /// can silently ignore them.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "starburst" => Some(PatternMode::Starburst),
            "bandsLines" => Some(PatternMode::BandsLines),
            "geoRings" => Some(PatternMode::GeoRings),
            "petals" => Some(PatternMode::Petals),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PatternMode::Starburst => "starburst",
            PatternMode::BandsLines => "bandsLines",
            PatternMode::GeoRings => "geoRings",
            PatternMode::Petals => "petals",
        }
    }

    /// Next mode in enumeration order, wrapping.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Renderer configuration. Mutated only through the renderer's setters,
/// never aliased externally.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub segments: u32,
    pub paused: bool,
    pub base_rotation_speed: f32,
    pub pointer_rotation_factor: f32,
    pub pointer_offset_factor: f32,
    pub layers: u32,
    pub mode: PatternMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            paused: false,
            base_rotation_speed: BASE_ROTATION_SPEED,
            pointer_rotation_factor: POINTER_ROTATION_FACTOR,
            pointer_offset_factor: POINTER_OFFSET_FACTOR,
            layers: PATTERN_LAYERS,
            mode: PatternMode::Starburst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_round_trip() {
        for mode in PatternMode::ALL {
            assert_eq!(PatternMode::from_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn next_cycles_through_all_modes() {
        let mut mode = PatternMode::Starburst;
        let mut seen = Vec::new();
        for _ in 0..PatternMode::ALL.len() {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(seen, PatternMode::ALL);
        assert_eq!(mode, PatternMode::Starburst);
    }
}
