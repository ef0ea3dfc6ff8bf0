// ============================================================
// Layer 4 — Question Catalog
// ============================================================
// The fixed list of practice functions, in display order.
//
// Each entry pairs hand-written labels with a gradient
// function. The gradient functions are named (not closures)
// so the table can be a `static` of plain fn pointers.
//
// Mix of surfaces:
//   - round and stretched bowls (convex)
//   - a saddle, x^2 − y^2
//   - a cross term, x^2 + xy + y^2
//   - a narrow valley, (x − 1)^2 + 10(y − 1)^2
//   - a trig surface, sin(x) + cos(y)
//   - a cubic, (1/3)x^3 + y^2

use crate::domain::question::QuestionDescriptor;

fn grad_bowl(x: f64, y: f64) -> (f64, f64) {
    (2.0 * x, 2.0 * y)
}

fn grad_shifted_bowl(x: f64, y: f64) -> (f64, f64) {
    (2.0 * (x - 1.0), 2.0 * (y + 2.0))
}

fn grad_stretched_bowl(x: f64, y: f64) -> (f64, f64) {
    (2.0 * x, 6.0 * y)
}

fn grad_half_bowl(x: f64, y: f64) -> (f64, f64) {
    (x, 4.0 * y)
}

fn grad_saddle(x: f64, y: f64) -> (f64, f64) {
    (2.0 * x, -2.0 * y)
}

fn grad_cross_term(x: f64, y: f64) -> (f64, f64) {
    (2.0 * x + y, x + 2.0 * y)
}

// Quadratic stand-in for the Rosenbrock valley near (1, 1)
fn grad_valley(x: f64, y: f64) -> (f64, f64) {
    (2.0 * (x - 1.0), 20.0 * (y - 1.0))
}

fn grad_trig(x: f64, y: f64) -> (f64, f64) {
    (x.cos(), -y.sin())
}

fn grad_cubic(x: f64, y: f64) -> (f64, f64) {
    (x * x, 2.0 * y)
}

/// The built-in catalog. Order matters: `reveal --question N`
/// refers to entry N-1.
pub static QUESTIONS: [QuestionDescriptor; 9] = [
    QuestionDescriptor {
        function_label:   "f(x, y) = x^2 + y^2",
        gradient_label_x: "2x",
        gradient_label_y: "2y",
        gradient:         grad_bowl,
        learning_rate:    0.1,
        start_x:          3.0,
        start_y:          -4.0,
    },
    QuestionDescriptor {
        function_label:   "f(x, y) = (x - 1)^2 + (y + 2)^2",
        gradient_label_x: "2(x − 1)",
        gradient_label_y: "2(y + 2)",
        gradient:         grad_shifted_bowl,
        learning_rate:    0.2,
        start_x:          -1.0,
        start_y:          3.0,
    },
    QuestionDescriptor {
        function_label:   "f(x, y) = x^2 + 3y^2",
        gradient_label_x: "2x",
        gradient_label_y: "6y",
        gradient:         grad_stretched_bowl,
        learning_rate:    0.05,
        start_x:          2.0,
        start_y:          1.0,
    },
    QuestionDescriptor {
        function_label:   "f(x, y) = 0.5x^2 + 2y^2",
        gradient_label_x: "x",
        gradient_label_y: "4y",
        gradient:         grad_half_bowl,
        learning_rate:    0.15,
        start_x:          -2.0,
        start_y:          -2.0,
    },
    QuestionDescriptor {
        function_label:   "f(x, y) = x^2 − y^2",
        gradient_label_x: "2x",
        gradient_label_y: "−2y",
        gradient:         grad_saddle,
        learning_rate:    0.1,
        start_x:          1.5,
        start_y:          -1.0,
    },
    QuestionDescriptor {
        function_label:   "f(x, y) = x^2 + xy + y^2",
        gradient_label_x: "2x + y",
        gradient_label_y: "x + 2y",
        gradient:         grad_cross_term,
        learning_rate:    0.1,
        start_x:          -2.0,
        start_y:          1.0,
    },
    QuestionDescriptor {
        function_label:   "f(x, y) = (x − 1)^2 + 10(y − 1)^2",
        gradient_label_x: "2(x − 1)",
        gradient_label_y: "20(y − 1)",
        gradient:         grad_valley,
        learning_rate:    0.04,
        start_x:          0.0,
        start_y:          2.0,
    },
    QuestionDescriptor {
        function_label:   "f(x, y) = sin(x) + cos(y)",
        gradient_label_x: "cos(x)",
        gradient_label_y: "−sin(y)",
        gradient:         grad_trig,
        learning_rate:    0.2,
        start_x:          1.0,
        start_y:          2.0,
    },
    QuestionDescriptor {
        function_label:   "f(x, y) = (1/3)x^3 + y^2",
        gradient_label_x: "x^2",
        gradient_label_y: "2y",
        gradient:         grad_cubic,
        learning_rate:    0.05,
        start_x:          -1.0,
        start_y:          -1.5,
    },
];

/// A non-empty, ordered view over a question table.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    questions: &'a [QuestionDescriptor],
}

impl<'a> Catalog<'a> {
    /// Wrap a question table.
    ///
    /// # Panics
    /// Panics if `questions` is empty — every selection assumes
    /// there is at least one question to draw.
    pub fn new(questions: &'a [QuestionDescriptor]) -> Self {
        assert!(!questions.is_empty(), "a catalog needs at least one question");
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Entry at a 0-based index, if any
    pub fn get(&self, index: usize) -> Option<&'a QuestionDescriptor> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &'a [QuestionDescriptor] {
        self.questions
    }
}

impl Catalog<'static> {
    /// The built-in nine-question catalog
    pub fn builtin() -> Self {
        Self::new(&QUESTIONS)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_nine_questions() {
        assert_eq!(Catalog::builtin().len(), 9);
    }

    #[test]
    fn test_all_learning_rates_positive() {
        for q in Catalog::builtin().questions() {
            assert!(q.learning_rate > 0.0, "{}", q.function_label);
        }
    }

    #[test]
    fn test_gradients_match_hand_computed_values() {
        // (start point) → expected gradient, one per catalog entry
        let expected = [
            (6.0, -8.0),
            (-4.0, 10.0),
            (4.0, 6.0),
            (-2.0, -8.0),
            (3.0, 2.0),
            (-3.0, 0.0),
            (-2.0, 20.0),
            (1.0_f64.cos(), -(2.0_f64.sin())),
            (1.0, -3.0),
        ];
        for (q, (gx, gy)) in QUESTIONS.iter().zip(expected) {
            let (ax, ay) = q.gradient_at_start();
            assert!((ax - gx).abs() < 1e-12, "{}", q.function_label);
            assert!((ay - gy).abs() < 1e-12, "{}", q.function_label);
        }
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let c = Catalog::builtin();
        assert!(c.get(0).is_some());
        assert!(c.get(9).is_none());
    }

    #[test]
    #[should_panic]
    fn test_empty_catalog_panics() {
        let _ = Catalog::new(&[]);
    }
}
