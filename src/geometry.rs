//! Circle geometry and chord endpoint math.
//!
//! Everything here is pure: fixed geometry in, points out. Angles are in
//! radians and screen Y grows downward (canvas convention), so the pattern is
//! mirrored vertically versus a math-convention plot — accepted as-is.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f64::consts::TAU;

use crate::consts::RADIUS_DIVISOR;
use crate::params::DrawParameters;

/// A point in canvas space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Circle placement on the canvas, computed once at mount time and held
/// fixed for the session (no resize handling).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    /// Horizontal circle center in canvas pixels.
    pub center_x: f64,
    /// Vertical circle center in canvas pixels.
    pub center_y: f64,
    /// Circle radius in canvas pixels.
    pub radius: f64,
}

impl CanvasGeometry {
    /// Place the circle for a canvas of the given measured dimensions:
    /// centered, with the radius leaving a small vertical margin.
    #[must_use]
    pub fn from_viewport(width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self { center_x, center_y, radius: center_y / RADIUS_DIVISOR }
    }

    /// Full drawing surface dimensions, reconstructed from the centered
    /// circle. This is the extent a redraw must clear.
    #[must_use]
    pub fn surface(&self) -> (f64, f64) {
        (self.center_x * 2.0, self.center_y * 2.0)
    }

    /// The point on the circle at `angle` radians from the positive X axis.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point {
        Point {
            x: self.center_x + self.radius * angle.cos(),
            y: self.center_y + self.radius * angle.sin(),
        }
    }
}

/// Start and end angles in radians for chord `i`.
///
/// The chord leaves point `i` and lands at point `(i * factor) mod modulo`;
/// `factor` is real-valued, so the landing point generally falls between two
/// integer positions.
#[must_use]
pub fn chord_angles(modulo: u32, factor: f64, i: u32) -> (f64, f64) {
    let step = TAU / f64::from(modulo);
    let start = f64::from(i) * step;
    let end = float_mod(f64::from(i) * factor, f64::from(modulo)) * step;
    (start, end)
}

/// All `modulo` chords of the diagram, as endpoint pairs on the circle.
#[must_use]
pub fn chords(
    geometry: CanvasGeometry,
    params: DrawParameters,
) -> impl Iterator<Item = (Point, Point)> {
    (0..params.modulo).map(move |i| {
        let (start, end) = chord_angles(params.modulo, params.factor, i);
        (geometry.point_at(start), geometry.point_at(end))
    })
}

/// Floating-point modulo normalized into `[0, m)`.
fn float_mod(value: f64, m: f64) -> f64 {
    let rem = value % m;
    if rem < 0.0 { rem + m } else { rem }
}
