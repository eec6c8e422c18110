//! Rendering: draws the times-table diagram to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives fixed geometry and one parameter pair and produces pixels — it
//! does not mutate any engine state, so redrawing with identical inputs is
//! idempotent.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{CHORD_STROKE, CHORD_STROKE_WIDTH, CIRCLE_STROKE, CIRCLE_STROKE_WIDTH};
use crate::geometry::{self, CanvasGeometry};
use crate::params::DrawParameters;

/// Clear the surface and draw the full diagram: one outer circle plus
/// `params.modulo` chords.
///
/// `params` is assumed pre-clamped (`modulo >= 2`); this function does not
/// re-validate. `factor == 1` yields zero-length chords, which draw as
/// nothing but are still emitted.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    geometry: &CanvasGeometry,
    params: DrawParameters,
) -> Result<(), JsValue> {
    // Clearing comes first so redrawing identical inputs is pixel-identical.
    let (width, height) = geometry.surface();
    ctx.clear_rect(0.0, 0.0, width, height);

    // Outer circle.
    ctx.begin_path();
    ctx.arc(geometry.center_x, geometry.center_y, geometry.radius, 0.0, 2.0 * PI)?;
    ctx.set_stroke_style_str(CIRCLE_STROKE);
    ctx.set_line_width(CIRCLE_STROKE_WIDTH);
    ctx.stroke();

    // Chords, all in one path stroked once.
    ctx.begin_path();
    for (a, b) in geometry::chords(*geometry, params) {
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
    }
    ctx.set_stroke_style_str(CHORD_STROKE);
    ctx.set_line_width(CHORD_STROKE_WIDTH);
    ctx.stroke();

    Ok(())
}
