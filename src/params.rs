//! Draw parameters: the (modulo, factor) pair that defines the diagram.
//!
//! The pair arrives from the host once per animation tick while a slider
//! transition is interpolating. The engine treats each pair as immutable for
//! the duration of a single render.

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_FACTOR, DEFAULT_MODULO, FACTOR_MAX, FACTOR_MIN, MODULO_MAX, MODULO_MIN,
};

/// The two user-adjustable inputs of the visualization.
///
/// `modulo` is the number of points spaced around the circle; `factor` is the
/// real-valued multiplier that picks each chord's far endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawParameters {
    /// Number of points around the circle.
    pub modulo: u32,
    /// Multiplication factor applied to each point index.
    pub factor: f64,
}

impl Default for DrawParameters {
    fn default() -> Self {
        Self { modulo: DEFAULT_MODULO, factor: DEFAULT_FACTOR }
    }
}

impl DrawParameters {
    #[must_use]
    pub fn new(modulo: u32, factor: f64) -> Self {
        Self { modulo, factor }
    }

    /// Clamp both values into the recognized slider ranges.
    ///
    /// This is the upstream guard the renderer relies on: after clamping,
    /// `modulo >= 2`, so the angle step `2π / modulo` never divides by zero.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            modulo: self.modulo.clamp(MODULO_MIN, MODULO_MAX),
            factor: self.factor.clamp(FACTOR_MIN, FACTOR_MAX),
        }
    }
}
