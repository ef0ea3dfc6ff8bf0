// ============================================================
// Layer 5 — Gradient-Descent Step
// ============================================================
// One update from the start point:
//
//   gx, gy = ∇f(x0, y0)
//   x1     = x0 − α·gx
//   y1     = y0 − α·gy
//
// No error paths: every catalog gradient is total over the
// reals (no division, no restricted trig domains).

use crate::domain::question::QuestionDescriptor;
use crate::domain::step::StepResult;

/// Compute the single gradient-descent step for a question.
pub fn compute_step(q: &QuestionDescriptor) -> StepResult {
    let (gx, gy) = q.gradient_at_start();
    StepResult {
        gx,
        gy,
        next_x: q.start_x - q.learning_rate * gx,
        next_y: q.start_y - q.learning_rate * gy,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::QUESTIONS;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_update_rule_holds_for_every_question() {
        for q in QUESTIONS.iter() {
            let (gx, gy) = (q.gradient)(q.start_x, q.start_y);
            let step     = compute_step(q);
            assert!((step.gx - gx).abs() < TOL);
            assert!((step.gy - gy).abs() < TOL);
            assert!((step.next_x - (q.start_x - q.learning_rate * gx)).abs() < TOL);
            assert!((step.next_y - (q.start_y - q.learning_rate * gy)).abs() < TOL);
        }
    }

    #[test]
    fn test_round_bowl_step() {
        // f = x^2 + y^2, α = 0.1, start (3, -4)
        let step = compute_step(&QUESTIONS[0]);
        assert!((step.gx - 6.0).abs() < TOL);
        assert!((step.gy + 8.0).abs() < TOL);
        assert!((step.next_x - 2.4).abs() < TOL);
        assert!((step.next_y + 3.2).abs() < TOL);
    }

    #[test]
    fn test_shifted_bowl_step() {
        // f = (x-1)^2 + (y+2)^2, α = 0.2, start (-1, 3)
        let step = compute_step(&QUESTIONS[1]);
        assert!((step.gx + 4.0).abs() < TOL);
        assert!((step.gy - 10.0).abs() < TOL);
        assert!((step.next_x + 0.2).abs() < TOL);
        assert!((step.next_y - 1.0).abs() < TOL);
    }

    #[test]
    fn test_compute_step_is_idempotent() {
        for q in QUESTIONS.iter() {
            assert_eq!(compute_step(q), compute_step(q));
        }
    }
}
