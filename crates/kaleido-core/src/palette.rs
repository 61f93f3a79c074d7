use crate::random::RandomSource;

/// HSL color with alpha, matching the notation the curated palettes were
/// authored in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,        // degrees
    pub saturation: f32, // percent
    pub lightness: f32,  // percent
    pub alpha: f32,
}

impl Hsla {
    pub const TRANSPARENT: Hsla = Hsla {
        hue: 0.0,
        saturation: 0.0,
        lightness: 0.0,
        alpha: 0.0,
    };

    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha: 1.0,
        }
    }

    /// White at the given alpha; used for soft background glows.
    pub const fn white(alpha: f32) -> Self {
        Self {
            hue: 0.0,
            saturation: 0.0,
            lightness: 100.0,
            alpha,
        }
    }
}

/// A named ordered color sequence. Swapped as a whole unit, never mutated in
/// place, and never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: Vec<Hsla>,
}

impl Palette {
    /// Color at `index`, wrapping around the sequence.
    pub fn color(&self, index: usize) -> Hsla {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

pub const PROCEDURAL_NAME: &str = "Procedural";

pub const CURATED_PALETTES: &[(&str, [Hsla; 4])] = &[
    (
        "Neon Night",
        [
            Hsla::new(200.0, 85.0, 60.0),
            Hsla::new(260.0, 90.0, 66.0),
            Hsla::new(320.0, 80.0, 60.0),
            Hsla::new(180.0, 80.0, 55.0),
        ],
    ),
    (
        "Sunset Candy",
        [
            Hsla::new(12.0, 85.0, 60.0),
            Hsla::new(340.0, 72.0, 62.0),
            Hsla::new(280.0, 70.0, 62.0),
            Hsla::new(45.0, 90.0, 64.0),
        ],
    ),
    (
        "Aurora",
        [
            Hsla::new(160.0, 70.0, 55.0),
            Hsla::new(200.0, 70.0, 60.0),
            Hsla::new(90.0, 60.0, 58.0),
            Hsla::new(48.0, 80.0, 60.0),
        ],
    ),
    (
        "Oceanic",
        [
            Hsla::new(197.0, 92.0, 54.0),
            Hsla::new(210.0, 70.0, 60.0),
            Hsla::new(175.0, 65.0, 55.0),
            Hsla::new(230.0, 60.0, 66.0),
        ],
    ),
    (
        "Magma",
        [
            Hsla::new(10.0, 85.0, 55.0),
            Hsla::new(20.0, 80.0, 58.0),
            Hsla::new(340.0, 70.0, 60.0),
            Hsla::new(50.0, 90.0, 60.0),
        ],
    ),
    (
        "Nord",
        [
            Hsla::new(210.0, 34.0, 63.0),
            Hsla::new(222.0, 27.0, 74.0),
            Hsla::new(198.0, 33.0, 52.0),
            Hsla::new(193.0, 54.0, 33.0),
        ],
    ),
];

/// Curated palette at `index`, wrapping.
pub fn curated(index: usize) -> Palette {
    let (name, colors) = CURATED_PALETTES[index % CURATED_PALETTES.len()];
    Palette {
        name,
        colors: colors.to_vec(),
    }
}

pub fn random_curated(rng: &mut dyn RandomSource) -> Palette {
    curated(rng.range_int(0, CURATED_PALETTES.len() - 1))
}

/// Generate 3-5 colors with harmonious hues from a random base hue.
pub fn random_procedural(rng: &mut dyn RandomSource) -> Palette {
    let count = rng.range_int(3, 5);
    let base_hue = rng.range(0.0, 360.0);
    let colors = (0..count)
        .map(|i| {
            let hue = (base_hue + i as f32 * rng.range(18.0, 46.0)) % 360.0;
            let saturation = rng.range(55.0, 85.0);
            let lightness = rng.range(40.0, 70.0);
            Hsla::new(hue, saturation, lightness)
        })
        .collect();
    Palette {
        name: PROCEDURAL_NAME,
        colors,
    }
}

/// Next curated palette after the one named `current_name`, wrapping by
/// position. Unknown names (including `Procedural`) restart at the first
/// curated entry.
pub fn cycle_curated(current_name: &str) -> Palette {
    let next = CURATED_PALETTES
        .iter()
        .position(|(name, _)| *name == current_name)
        .map(|i| (i + 1) % CURATED_PALETTES.len())
        .unwrap_or(0);
    curated(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededSource;

    #[test]
    fn curated_palettes_are_well_formed() {
        for (name, colors) in CURATED_PALETTES {
            assert!(!name.is_empty());
            assert_eq!(colors.len(), 4);
        }
    }

    #[test]
    fn procedural_palette_within_authoring_ranges() {
        let mut rng = SeededSource::from_seed(99);
        for _ in 0..50 {
            let palette = random_procedural(&mut rng);
            assert_eq!(palette.name, PROCEDURAL_NAME);
            assert!((3..=5).contains(&palette.len()));
            for c in &palette.colors {
                assert!((0.0..360.0).contains(&c.hue));
                assert!((55.0..=85.0).contains(&c.saturation));
                assert!((40.0..=70.0).contains(&c.lightness));
            }
        }
    }

    #[test]
    fn cycle_wraps_and_recovers_from_unknown_names() {
        assert_eq!(cycle_curated("Neon Night").name, "Sunset Candy");
        assert_eq!(cycle_curated("Nord").name, "Neon Night");
        assert_eq!(cycle_curated(PROCEDURAL_NAME).name, "Neon Night");
    }
}
