// ============================================================
// Layer 6 — Text Renderer
// ============================================================
// Lays each equation out on two rows so a column vector
// reads the way it would on paper:
//
//   (x₁, y₁) = [  3 ] − 0.1 · [  6 ]
//              [ -4 ]         [ -8 ]
//
// A line is a list of segments. Plain text occupies the top
// row and is padded with spaces underneath; a column puts one
// entry on each row, right-aligned to the wider of the two.
// Widths are counted in chars, not bytes, because the labels
// use symbols like ∇, −, and ₁.

use crate::domain::card::Card;
use crate::domain::traits::Renderer;
use crate::engine::format::format_number;
use crate::render::derive;

/// One piece of an equation line
#[derive(Debug, Clone)]
pub enum Segment {
    Text(String),
    Column(String, String),
}

fn text(s: impl Into<String>) -> Segment {
    Segment::Text(s.into())
}

fn column(a: impl Into<String>, b: impl Into<String>) -> Segment {
    Segment::Column(a.into(), b.into())
}

/// Lay out segments on one row, or two rows if any column is present.
/// Trailing spaces are trimmed from each row.
pub fn layout(segments: &[Segment]) -> String {
    let has_column = segments.iter().any(|s| matches!(s, Segment::Column(..)));

    let mut top    = String::new();
    let mut bottom = String::new();

    for seg in segments {
        match seg {
            Segment::Text(s) => {
                top.push_str(s);
                bottom.push_str(&" ".repeat(s.chars().count()));
            }
            Segment::Column(a, b) => {
                let w = a.chars().count().max(b.chars().count());
                top.push_str(&format!("[ {a:>w$} ]"));
                bottom.push_str(&format!("[ {b:>w$} ]"));
            }
        }
    }

    if has_column {
        format!("{}\n{}", top.trim_end(), bottom.trim_end())
    } else {
        top.trim_end().to_string()
    }
}

/// Renders cards as indented plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    /// The worked answer for a card, one line (or line pair) per step
    pub fn render_answer(&self, card: &Card) -> Vec<String> {
        let d = derive(card);
        vec![
            layout(&[text(format!("{} = ", d.gradient_head())), column(&d.gx, &d.gy)]),
            layout(&[
                text("(x₁, y₁) = "),
                column(&d.start_x, &d.start_y),
                text(format!(" − {} · ", d.alpha)),
                column(&d.gx, &d.gy),
            ]),
            format!("So, {}", d.x_line()),
            format!("and {}", d.y_line()),
            "─".repeat(24),
            format!("Answer: (x₁, y₁) = {}", d.answer()),
        ]
    }
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|l| if l.is_empty() { String::new() } else { format!("  {l}") })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Renderer for TextRenderer {
    fn render_card(&self, card: &Card) -> String {
        let q = &card.question;

        let mut lines = vec![
            q.function_label.to_string(),
            layout(&[
                text("∇f(x, y) = "),
                column(q.gradient_label_x, q.gradient_label_y),
            ]),
            format!("Learning rate: α = {}", format_number(q.learning_rate)),
            layout(&[
                text("Starting point: "),
                column(format_number(q.start_x), format_number(q.start_y)),
            ]),
        ];

        if card.is_revealed() {
            lines.push(String::new());
            lines.extend(self.render_answer(card));
        } else {
            lines.push("(answer hidden)".to_string());
        }

        let body = lines.join("\n");
        format!("Question {}\n{}\n", card.number, indent(&body))
    }

    fn render_sheet(&self, cards: &[Card]) -> String {
        let mut out = format!("Gradient Descent Practice — {} questions\n\n", cards.len());
        let body = cards
            .iter()
            .map(|c| self.render_card(c))
            .collect::<Vec<_>>()
            .join("\n");
        out.push_str(&body);
        out
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::QUESTIONS;

    #[test]
    fn test_layout_plain_text_is_one_row() {
        assert_eq!(layout(&[text("α = 0.1  ")]), "α = 0.1");
    }

    #[test]
    fn test_layout_column_is_right_aligned() {
        let out = layout(&[text("∇f(3, -4) = "), column("6", "-8")]);
        assert_eq!(out, "∇f(3, -4) = [  6 ]\n            [ -8 ]");
    }

    #[test]
    fn test_layout_two_columns_line_up() {
        let out  = layout(&[
            text("(x₁, y₁) = "),
            column("3", "-4"),
            text(" − 0.1 · "),
            column("6", "-8"),
        ]);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[0], "(x₁, y₁) = [  3 ] − 0.1 · [  6 ]");
        assert_eq!(rows[1], "           [ -4 ]         [ -8 ]");
    }

    #[test]
    fn test_hidden_card_has_no_answer() {
        let card = Card::new(1, QUESTIONS[0]);
        let out  = TextRenderer::new().render_card(&card);
        assert!(out.starts_with("Question 1\n"));
        assert!(out.contains("f(x, y) = x^2 + y^2"));
        assert!(out.contains("Learning rate: α = 0.1"));
        assert!(out.contains("(answer hidden)"));
        assert!(!out.contains("Answer:"));
    }

    #[test]
    fn test_revealed_card_shows_worked_step() {
        let mut card = Card::new(2, QUESTIONS[1]);
        card.reveal();
        let out = TextRenderer::new().render_card(&card);
        assert!(out.contains("So, x₁ = -1 − 0.2·-4 = -0.2"));
        assert!(out.contains("and y₁ = 3 − 0.2·10 = 1"));
        assert!(out.contains("Answer: (x₁, y₁) = (-0.2, 1)"));
        assert!(!out.contains("(answer hidden)"));
    }

    #[test]
    fn test_sheet_lists_every_card() {
        let cards: Vec<Card> = QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, q)| Card::new(i + 1, *q))
            .collect();
        let out = TextRenderer::new().render_sheet(&cards);
        assert!(out.starts_with("Gradient Descent Practice — 9 questions"));
        assert!(out.contains("Question 9\n"));
    }
}
