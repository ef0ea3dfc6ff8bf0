// ============================================================
// Layer 5 — Derivation
// ============================================================
// Everything a revealed card shows, pre-formatted:
//
//   ∇f(x0, y0) = [gx; gy]
//   (x₁, y₁)   = [x0; y0] − α · [gx; gy]
//   x₁ = x0 − α·gx = x1
//   y₁ = y0 − α·gy = y1
//   Answer: (x₁, y₁) = (x1, y1)
//
// Every number goes through format_number exactly once, here.
// Renderers only arrange these strings, so a value printed on
// the page always matches the StepResult it came from.

use serde::{Deserialize, Serialize};

use crate::domain::question::QuestionDescriptor;
use crate::domain::step::StepResult;
use crate::engine::format::format_number;

/// Formatted values of one worked step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Derivation {
    pub start_x: String,
    pub start_y: String,
    pub alpha:   String,
    pub gx:      String,
    pub gy:      String,
    pub next_x:  String,
    pub next_y:  String,
}

impl Derivation {
    pub fn new(q: &QuestionDescriptor, step: &StepResult) -> Self {
        Self {
            start_x: format_number(q.start_x),
            start_y: format_number(q.start_y),
            alpha:   format_number(q.learning_rate),
            gx:      format_number(step.gx),
            gy:      format_number(step.gy),
            next_x:  format_number(step.next_x),
            next_y:  format_number(step.next_y),
        }
    }

    /// "∇f(3, -4)"
    pub fn gradient_head(&self) -> String {
        format!("∇f({}, {})", self.start_x, self.start_y)
    }

    /// "x₁ = 3 − 0.1·6 = 2.4"
    pub fn x_line(&self) -> String {
        format!("x₁ = {} − {}·{} = {}", self.start_x, self.alpha, self.gx, self.next_x)
    }

    /// "y₁ = -4 − 0.1·-8 = -3.2"
    pub fn y_line(&self) -> String {
        format!("y₁ = {} − {}·{} = {}", self.start_y, self.alpha, self.gy, self.next_y)
    }

    /// "(2.4, -3.2)"
    pub fn answer(&self) -> String {
        format!("({}, {})", self.next_x, self.next_y)
    }
}
