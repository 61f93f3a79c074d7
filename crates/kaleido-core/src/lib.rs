//! Pure animation core for the kaleido visualizer.
//!
//! Everything here is platform-free: the web front-end supplies a drawing
//! surface, pointer events and a frame callback, and this crate owns the
//! rest (configuration, palettes, geometry, motion, the four pattern
//! generators and the per-frame pipeline). Compiles and tests natively.

pub mod config;
pub mod constants;
pub mod driver;
pub mod geometry;
pub mod input;
pub mod noise;
pub mod palette;
pub mod patterns;
pub mod random;
pub mod renderer;
pub mod surface;

pub use config::{PatternMode, RenderConfig};
pub use driver::{advance_frame, FrameClock};
pub use geometry::ViewportGeometry;
pub use input::{Influence, InputSampler};
pub use palette::{Hsla, Palette};
pub use random::{RandomSource, SeededSource};
pub use renderer::{Decoration, MotionState, Renderer};
pub use surface::{GradientStop, Surface};
