//! Times-table canvas visualization engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It draws a
//! "times-table" circular diagram — `modulo` points spaced around a circle,
//! point `i` joined by a chord to point `(i * factor) mod modulo` — onto a
//! host-supplied canvas element, and owns the redraw scheduling that keeps
//! rapid slider drags from queueing unbounded paint work. The host layer is
//! responsible for the sliders, the spring interpolation between slider
//! values, and mounting the `<canvas>` element; it feeds the engine one
//! `(modulo, factor)` pair per animation tick.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`sched`] | Coalescing two-slot redraw scheduler |
//! | [`geometry`] | Circle geometry and chord endpoint math |
//! | [`render`] | Canvas2D drawing |
//! | [`params`] | Draw parameters and slider range clamping |
//! | [`consts`] | Shared numeric constants (slider ranges, stroke styles) |

pub mod consts;
pub mod engine;
pub mod geometry;
pub mod params;
pub mod render;
pub mod sched;
