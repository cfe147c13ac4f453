//! Inkstroke renders a procedural brush stroke that is revealed along a
//! smooth path as an external progress value moves from 0 to 1.
//!
//! # Pipeline overview
//!
//! 1. **Fit**: control points → [`SplinePath`] (Catmull-Rom with an arc-length
//!    table), built once per distinct point list.
//! 2. **Reveal**: `progress` → [`RevealState`] via the [`ProgressMapper`],
//!    either arc-length continuous or per control point.
//! 3. **Sweep**: revealed points → [`TubeGeometry`] (tapered, noise displaced),
//!    or one tube per [`Bristle`] in the multi-strand variant.
//! 4. **Decorate**: the [`ParticleManager`] spawns, retires and pulses
//!    particles off the same progress snapshot.
//!
//! [`StrokeRenderer`] drives all four once per frame and owns the single live
//! geometry buffer, disposing the previous one before installing the next.
//!
//! Degenerate input (fewer than two points, a revealed span with no length)
//! renders nothing; errors only come from configuration and loading.
#![forbid(unsafe_code)]

pub mod config;
pub mod curve;
pub mod driver;
pub mod foundation;
pub mod mesh;
pub mod noise;
pub mod particles;
pub mod reveal;
pub mod screen;
pub mod style;

pub use config::{BrushConfig, NoiseConfig, load_control_points, parse_control_points};
pub use curve::cache::SplineCache;
pub use curve::frames::{Frame, sweep_frames};
pub use curve::spline::{CurveType, SplineOptions, SplinePath};
pub use driver::frame::{FrameStats, GeometrySlot, StrokeFrame, StrokeGeometry, StrokeRenderer};
pub use foundation::core::{FrameInput, Point, Rgb8, Vec2, Vec3};
pub use foundation::error::{StrokeError, StrokeResult};
pub use mesh::bristles::{Bristle, BristleSet, BristleSettings, Strand};
pub use mesh::geometry::TubeGeometry;
pub use mesh::tube::{NoiseDisplacement, Taper, TubeBuilder, TubeShape};
pub use noise::rng::Rng64;
pub use noise::simplex::Noise2D;
pub use particles::lifecycle::{
    ActivationWindow, Particle, ParticleInstance, ParticleManager, ParticleSettings, ParticleUpdate,
};
pub use reveal::progress::{
    ProgressMapper, RevealMode, RevealState, RevealWindow, SegmentCursor, discrete_points,
};
pub use screen::brush::{ScreenBrush, ScreenBrushSettings};
pub use style::mask::AlphaMask;
pub use style::sections::{ColorSection, ColorSections};
pub use style::streak::{StreakMask, tip_alpha};
