// ============================================================
// Layer 3 — StepResult Domain Type
// ============================================================
// The outcome of ONE gradient-descent update from the start
// point of a question:
//
//   (x1, y1) = (x0, y0) − α · ∇f(x0, y0)
//
// A StepResult is never cached. Every reveal recomputes it,
// which costs four multiplications.

use serde::{Deserialize, Serialize};

/// Gradient at the start point and the point after one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    /// ∂f/∂x at (x0, y0)
    pub gx: f64,

    /// ∂f/∂y at (x0, y0)
    pub gy: f64,

    /// x1 = x0 − α·gx
    pub next_x: f64,

    /// y1 = y0 − α·gy
    pub next_y: f64,
}
