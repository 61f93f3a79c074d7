/// Tuning constants for the kaleidoscope core.
///
/// These express intended behavior (bounds, speeds, decay rates) and keep
/// magic numbers out of the renderer and patterns.
// Segment bounds and default
pub const MIN_SEGMENTS: u32 = 6;
pub const MAX_SEGMENTS: u32 = 24;
pub const DEFAULT_SEGMENTS: u32 = 12;

// Motion tuning
pub const BASE_ROTATION_SPEED: f32 = 0.5; // radians per second baseline
pub const POINTER_ROTATION_FACTOR: f32 = 2.2; // scales pointer dx influence
pub const POINTER_OFFSET_FACTOR: f32 = 0.8; // scales pointer dy influence on phase
pub const PHASE_BASE_SPEED: f32 = 0.6; // phase advance per second with idle pointer
pub const MAX_FRAME_DT: f32 = 0.05; // clamp for large gaps (e.g. tab suspension)

// Pointer influence
pub const POINTER_DECAY: f32 = 0.92; // per-sample decay applied to stored deltas
pub const POINTER_NORM_MIN: f32 = 120.0; // floor on the normalizing dimension

// Geometry
pub const RADIUS_SCALE: f32 = 0.6; // radius = hypot(w, h) * this, slightly oversized

// Pattern structure
pub const PATTERN_LAYERS: u32 = 5; // layered bands per wedge
pub const DECORATION_COUNT: usize = 24; // precomputed static dots for bands+lines
pub const FLOW_LINE_COUNT: usize = 28; // flowing lines in bands+lines
pub const STARBURST_RAYS: usize = 36;
pub const SPARKLE_COUNT: usize = 24; // per-frame sparkles near ray tips
pub const GEO_RING_COUNT: usize = 7;
pub const PETAL_LAYERS: usize = 6;
pub const PETAL_STEPS: usize = 42; // samples along each petal curve

// Randomize behavior
pub const CURATED_PICK_WEIGHT: f32 = 0.7; // prefer curated palettes over procedural
pub const MODE_SWITCH_CHANCE: f32 = 0.4; // chance randomize() also switches pattern
