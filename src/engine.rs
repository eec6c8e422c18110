//! Engine: testable core state plus the browser-facing wrapper.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::geometry::CanvasGeometry;
use crate::params::DrawParameters;
use crate::render;
use crate::sched::{MacrotaskDefer, RedrawScheduler};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    params: DrawParameters,
    geometry: Option<CanvasGeometry>,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the drawing geometry from measured viewport dimensions.
    ///
    /// Only the first call has any effect: geometry is computed once at
    /// mount time and held for the session (no resize handling).
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if self.geometry.is_none() {
            self.geometry = Some(CanvasGeometry::from_viewport(width, height));
        }
    }

    /// Store a new parameter pair, clamped into the recognized slider ranges.
    pub fn set_params(&mut self, modulo: u32, factor: f64) {
        self.params = DrawParameters::new(modulo, factor).clamped();
    }

    /// The current parameter pair.
    #[must_use]
    pub fn params(&self) -> DrawParameters {
        self.params
    }

    /// The mounted geometry, if the viewport has been measured.
    #[must_use]
    pub fn geometry(&self) -> Option<CanvasGeometry> {
        self.geometry
    }
}

/// The full engine. Wraps [`EngineCore`], resolves the drawing context from
/// the host's canvas element, and coalesces redraws through the scheduler.
pub struct Engine {
    ctx: Option<CanvasRenderingContext2d>,
    core: EngineCore,
    scheduler: RedrawScheduler<MacrotaskDefer>,
}

impl Engine {
    /// Create an engine bound to the given canvas element.
    ///
    /// The element is measured exactly once, here; later size changes are
    /// ignored. If no 2D context can be resolved, the engine still accepts
    /// parameters but every render is a silent no-op.
    #[must_use]
    pub fn new(canvas: &HtmlCanvasElement) -> Self {
        let ctx = context_2d(canvas);
        if ctx.is_none() {
            log::warn!("2d context unavailable; rendering disabled");
        }
        let mut core = EngineCore::new();
        core.set_viewport(f64::from(canvas.width()), f64::from(canvas.height()));
        Self { ctx, core, scheduler: RedrawScheduler::new(MacrotaskDefer) }
    }

    /// Accept one interpolated slider pair and schedule a redraw.
    ///
    /// The host calls this once per animation tick while a slider transition
    /// is in flight. Redraws are coalesced: of the pairs submitted between
    /// two drain ticks, only the latest is ever drawn.
    pub fn set_params(&mut self, modulo: u32, factor: f64) {
        self.core.set_params(modulo, factor);
        self.request_render();
    }

    /// Enqueue a redraw of the current state.
    pub fn request_render(&self) {
        let (Some(ctx), Some(geometry)) = (self.ctx.clone(), self.core.geometry()) else {
            return;
        };
        let params = self.core.params();
        self.scheduler.run(Box::new(move || {
            if let Err(err) = render::draw(&ctx, &geometry, params) {
                log::warn!("draw failed: {err:?}");
            }
        }));
    }

    /// The current parameter pair.
    #[must_use]
    pub fn params(&self) -> DrawParameters {
        self.core.params()
    }
}

/// Resolve the 2D drawing context, or `None` if the browser refuses one.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    let Ok(Some(object)) = canvas.get_context("2d") else {
        return None;
    };
    match object.dyn_into::<CanvasRenderingContext2d>() {
        Ok(ctx) => Some(ctx),
        Err(_) => None,
    }
}
