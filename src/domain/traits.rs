// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer builds cards; how a card is drawn
// depends on where it is going (a terminal or a web page).
//
// Programming against Renderer instead of a concrete type
// lets the sheet use case stay the same for every output:
//   - TextRenderer → terminal, with stacked column vectors
//   - HtmlRenderer → standalone page with reveal buttons
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use crate::domain::card::Card;

// ─── Renderer ─────────────────────────────────────────────────────────────────
/// Any component that can turn cards into displayable output.
pub trait Renderer {
    /// Render a single card. Revealed cards include the worked step.
    fn render_card(&self, card: &Card) -> String;

    /// Render a whole sheet of cards, including any page header.
    fn render_sheet(&self, cards: &[Card]) -> String;
}
