// ============================================================
// Layer 3 — Card Domain Type
// ============================================================
// A card is one numbered question on a practice sheet.
//
// The only state a card has is whether its answer has been
// revealed. The transition is one-way:
//
//   hidden ──reveal()──► revealed
//
// There is deliberately no hide(). The step engine never sees
// this flag; it only matters to whoever draws the card.

use crate::domain::question::QuestionDescriptor;

/// One question as it appears on a sheet.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// 1-based position on the sheet ("Question 1", "Question 2", ...)
    pub number: usize,

    /// The catalog entry shown on this card
    pub question: QuestionDescriptor,

    revealed: bool,
}

impl Card {
    /// Create a hidden card
    pub fn new(number: usize, question: QuestionDescriptor) -> Self {
        Self { number, question, revealed: false }
    }

    /// Reveal the answer. Calling it again is a no-op.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}
