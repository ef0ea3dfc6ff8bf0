// ============================================================
// Layer 3 — QuestionDescriptor Domain Type
// ============================================================
// Describes one practice function:
//   - how to display f(x, y) and its partial derivatives
//   - how to evaluate the gradient numerically
//   - the learning rate α and the starting point (x0, y0)
//
// The display labels and the gradient function are written by
// hand. Nothing checks that they agree — keeping them consistent
// is the job of whoever edits the catalog.
//
// Reference: Rust Book §5 (Structs)
//            Rust Book §19 (Function Pointers)

/// Numeric gradient ∇f evaluated at (x, y), returned as (gx, gy).
///
/// A plain `fn` pointer rather than a boxed closure: descriptors
/// live in a `static` table and carry no captured state.
pub type GradientFn = fn(x: f64, y: f64) -> (f64, f64);

/// One entry of the question catalog.
#[derive(Debug, Clone, Copy)]
pub struct QuestionDescriptor {
    /// Display string for the surface, e.g. "f(x, y) = x^2 + y^2"
    pub function_label: &'static str,

    /// Symbolic ∂f/∂x, e.g. "2x"
    pub gradient_label_x: &'static str,

    /// Symbolic ∂f/∂y, e.g. "2y"
    pub gradient_label_y: &'static str,

    /// Numeric gradient, consistent with the two labels above
    pub gradient: GradientFn,

    /// Learning rate α (always positive)
    pub learning_rate: f64,

    /// Starting point x0
    pub start_x: f64,

    /// Starting point y0
    pub start_y: f64,
}

impl QuestionDescriptor {
    /// Evaluate the gradient at the starting point
    pub fn gradient_at_start(&self) -> (f64, f64) {
        (self.gradient)(self.start_x, self.start_y)
    }
}
