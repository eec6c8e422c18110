//! Shared numeric constants for the rosette crate.

// ── Slider configuration ────────────────────────────────────────
//
// The host's two sliders are expected to honor these ranges; the engine
// clamps incoming values against them so the renderer never sees a modulo
// that would divide by zero.

/// Smallest accepted point count.
pub const MODULO_MIN: u32 = 2;

/// Largest accepted point count.
pub const MODULO_MAX: u32 = 300;

/// Slider step for the point count.
pub const MODULO_STEP: u32 = 2;

/// Smallest accepted multiplication factor.
pub const FACTOR_MIN: f64 = 1.0;

/// Largest accepted multiplication factor.
pub const FACTOR_MAX: f64 = 30.0;

/// Slider step for the multiplication factor.
pub const FACTOR_STEP: f64 = 0.5;

/// Initial point count before the host sends its first pair.
pub const DEFAULT_MODULO: u32 = 100;

/// Initial multiplication factor.
pub const DEFAULT_FACTOR: f64 = 2.0;

// ── Geometry ────────────────────────────────────────────────────

/// Divisor applied to the vertical center to size the circle with a margin.
pub const RADIUS_DIVISOR: f64 = 1.2;

// ── Rendering ───────────────────────────────────────────────────

/// Stroke color for the outer circle.
pub const CIRCLE_STROKE: &str = "#1F1A17";

/// Stroke width for the outer circle, in pixels.
pub const CIRCLE_STROKE_WIDTH: f64 = 1.5;

/// Stroke color for the chords.
pub const CHORD_STROKE: &str = "#1E90FF";

/// Stroke width for the chords, in pixels.
pub const CHORD_STROKE_WIDTH: f64 = 1.0;
