// ============================================================
// Layer 2 — RevealUseCase
// ============================================================
// Shows the worked step for a single question:
//   - a specific catalog entry (1-based, as `list` prints them)
//   - or a random one when no number is given

use anyhow::{bail, Result};

use crate::application::sheet_use_case::{render_cards, OutputFormat};
use crate::data::{
    catalog::Catalog,
    selector::{rng_from_seed, select_one},
};
use crate::domain::card::Card;

pub struct RevealUseCase {
    catalog: Catalog<'static>,
}

impl RevealUseCase {
    pub fn new() -> Self {
        Self { catalog: Catalog::builtin() }
    }

    /// Pick the card to reveal. `question` is 1-based.
    pub fn card(&self, question: Option<usize>, seed: Option<u64>) -> Result<Card> {
        let (number, descriptor) = match question {
            Some(n) => match n.checked_sub(1).and_then(|i| self.catalog.get(i)) {
                Some(q) => (n, *q),
                None => bail!(
                    "question {} does not exist; the catalog has questions 1 to {}",
                    n,
                    self.catalog.len()
                ),
            },
            None => {
                let mut rng  = rng_from_seed(seed);
                let (idx, q) = select_one(&self.catalog, rng.as_mut());
                (idx + 1, q)
            }
        };

        tracing::debug!("Revealing question {}: {}", number, descriptor.function_label);

        // Card number is the catalog number, so `reveal -q N` shows the same card
        let mut card = Card::new(number, descriptor);
        card.reveal();
        Ok(card)
    }

    pub fn execute(
        &self,
        question: Option<usize>,
        seed:     Option<u64>,
        format:   OutputFormat,
    ) -> Result<String> {
        let card = self.card(question, seed)?;
        render_cards(&[card], format)
    }
}

impl Default for RevealUseCase {
    fn default() -> Self {
        Self::new()
    }
}
