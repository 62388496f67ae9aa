//! Nebula FX - page effects for a single-page portfolio
//!
//! Core modules:
//! - `sim`: Pure effect state (starfield particles, tech-tree connectors, visibility, stagger)
//! - `renderer`: 2D canvas painters behind the `Surface` trait
//! - `platform`: Browser glue (DOM, frame loops, observers, listeners) - wasm32 only
//! - `settings`: Tunable constants, overridable from LocalStorage

pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{FxError, Result};
pub use settings::Settings;

/// Effect configuration constants (defaults for `Settings`)
pub mod consts {
    /// Starfield particle count
    pub const STAR_COUNT: usize = 300;
    /// Star radius range [min, max)
    pub const STAR_RADIUS_MIN: f32 = 0.5;
    pub const STAR_RADIUS_MAX: f32 = 2.0;
    /// Max per-frame drift on each axis (velocity in [-max, max))
    pub const STAR_MAX_SPEED: f32 = 0.15;
    pub const STAR_COLOR: &str = "rgba(184,79,255,0.8)";

    /// Intersection ratio at which a section counts as visible
    pub const VISIBILITY_THRESHOLD: f64 = 0.2;

    /// Seconds between decorative shape animation starts
    pub const SHAPE_STAGGER_SECS: f64 = 0.5;
    /// Milliseconds between tech-tree node reveals
    pub const REVEAL_STAGGER_MS: f64 = 150.0;

    /// `data-name` of the tech-tree hub node
    pub const CENTER_NODE_NAME: &str = "Megamind";
    /// Connector progress added per frame (full length after 50 frames)
    pub const PROGRESS_STEP: f32 = 0.02;

    /// Curve bow: control point swings on a circle of this radius
    pub const BOW_AMPLITUDE: f32 = 50.0;
    pub const BOW_PERIOD_MS: f64 = 500.0;
    /// Glow marker vertical wobble
    pub const JITTER_AMPLITUDE: f32 = 3.0;
    pub const JITTER_PERIOD_MS: f64 = 200.0;
    pub const GLOW_RADIUS: f32 = 4.0;

    /// Node stacking order while hovered / at rest
    pub const HOVER_Z_INDEX: i32 = 3;
    pub const REST_Z_INDEX: i32 = 2;
}

/// Wrap a coordinate into [0, extent).
///
/// A non-positive extent (collapsed surface) pins the coordinate to 0.
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    if !(extent > 0.0) || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}
