// ============================================================
// Layer 6 — Rendering
// ============================================================
// Turns cards into something a student can read.
//
//   text.rs  — terminal output; column vectors are drawn as
//              two stacked rows:   [  3 ]
//                                  [ -4 ]
//   html.rs  — a standalone page; each card carries its worked
//              answer hidden behind a one-way "Reveal" button
//
// Both implement the Renderer trait from Layer 3, and both get
// their numbers from engine::Derivation, never from raw f64.

/// Plain-text renderer for terminals
pub mod text;

/// Standalone HTML page renderer
pub mod html;

use crate::domain::card::Card;
use crate::engine::{derivation::Derivation, step::compute_step};

/// Recompute the step for a card and format it.
/// Called on every reveal; nothing is cached.
pub(crate) fn derive(card: &Card) -> Derivation {
    let step = compute_step(&card.question);
    Derivation::new(&card.question, &step)
}
