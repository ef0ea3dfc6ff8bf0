// ============================================================
// Layer 2 — SheetUseCase
// ============================================================
// Builds a practice sheet in order:
//
//   Step 1: Validate the config
//   Step 2: Seed (or don't) the random generator   (Layer 4)
//   Step 3: Select `count` questions                (Layer 4)
//   Step 4: Number them as cards, reveal if asked   (Layer 3)
//   Step 5: Render as text, HTML, or JSON           (Layers 6/7)

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    catalog::Catalog,
    selector::{rng_from_seed, select_many},
};
use crate::domain::{card::Card, traits::Renderer};
use crate::infra::export::sheet_to_json;
use crate::render::{html::HtmlRenderer, text::TextRenderer};

// ─── Output Format ────────────────────────────────────────────────────────────
/// How a sheet is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

// ─── Sheet Configuration ──────────────────────────────────────────────────────
// Everything that decides what a sheet looks like.
// Serialisable so an instructor can keep a favourite setup in a
// JSON file and pass it with --config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Number of questions on the sheet
    pub count: usize,

    /// Fixed seed for a reproducible sheet; None = fresh every run
    pub seed: Option<u64>,

    pub format: OutputFormat,

    /// Print every answer up front (an answer key)
    pub reveal_all: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            count:      10,
            seed:       None,
            format:     OutputFormat::Text,
            reveal_all: false,
        }
    }
}

/// Largest sheet we will build
pub const MAX_COUNT: usize = 1000;

/// Render cards in the requested format.
pub fn render_cards(cards: &[Card], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(TextRenderer::new().render_sheet(cards)),
        OutputFormat::Html => Ok(HtmlRenderer::new().render_sheet(cards)),
        OutputFormat::Json => sheet_to_json(cards),
    }
}

// ─── SheetUseCase ─────────────────────────────────────────────────────────────
pub struct SheetUseCase {
    config:  SheetConfig,
    catalog: Catalog<'static>,
}

impl SheetUseCase {
    pub fn new(config: SheetConfig) -> Self {
        Self { config, catalog: Catalog::builtin() }
    }

    /// Steps 1–4: select and number the cards
    pub fn build_cards(&self) -> Result<Vec<Card>> {
        let cfg = &self.config;
        ensure!(cfg.count >= 1, "a sheet needs at least one question (got count = 0)");
        ensure!(
            cfg.count <= MAX_COUNT,
            "a sheet can have at most {} questions (got count = {})",
            MAX_COUNT,
            cfg.count
        );

        let mut rng   = rng_from_seed(cfg.seed);
        let questions = select_many(&self.catalog, cfg.count, rng.as_mut());

        let cards: Vec<Card> = questions
            .into_iter()
            .enumerate()
            .map(|(i, q)| {
                let mut card = Card::new(i + 1, q);
                if cfg.reveal_all {
                    card.reveal();
                }
                card
            })
            .collect();

        tracing::info!(
            "Built a sheet of {} questions (seed: {:?}, answers {})",
            cards.len(),
            cfg.seed,
            if cfg.reveal_all { "shown" } else { "hidden" },
        );

        Ok(cards)
    }

    /// Build the sheet and render it (Step 5)
    pub fn execute(&self) -> Result<String> {
        let cards = self.build_cards()?;
        render_cards(&cards, self.config.format)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize) -> SheetConfig {
        SheetConfig { count, seed: Some(5), ..SheetConfig::default() }
    }

    #[test]
    fn test_default_sheet_has_ten_cards() {
        let cards = SheetUseCase::new(SheetConfig::default()).build_cards().unwrap();
        assert_eq!(cards.len(), 10);
        let numbers: Vec<usize> = cards.iter().map(|c| c.number).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
        assert!(cards.iter().all(|c| !c.is_revealed()));
    }

    #[test]
    fn test_zero_count_is_rejected() {
        assert!(SheetUseCase::new(seeded(0)).build_cards().is_err());
    }

    #[test]
    fn test_huge_count_is_rejected() {
        assert!(SheetUseCase::new(seeded(usize::MAX)).build_cards().is_err());
        assert!(SheetUseCase::new(seeded(MAX_COUNT + 1)).build_cards().is_err());
        assert_eq!(SheetUseCase::new(seeded(MAX_COUNT)).build_cards().unwrap().len(), MAX_COUNT);
    }

    #[test]
    fn test_reveal_all_reveals_every_card() {
        let cfg   = SheetConfig { reveal_all: true, ..seeded(4) };
        let cards = SheetUseCase::new(cfg).build_cards().unwrap();
        assert!(cards.iter().all(|c| c.is_revealed()));
    }

    #[test]
    fn test_seeded_sheets_are_identical() {
        let a = SheetUseCase::new(seeded(10)).execute().unwrap();
        let b = SheetUseCase::new(seeded(10)).execute().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_html_format() {
        let cfg = SheetConfig { format: OutputFormat::Html, ..seeded(3) };
        let out = SheetUseCase::new(cfg).execute().unwrap();
        assert!(out.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_config_json_uses_defaults_for_missing_fields() {
        let cfg: SheetConfig = serde_json::from_str(r#"{ "count": 3, "format": "html" }"#).unwrap();
        assert_eq!(cfg.count, 3);
        assert_eq!(cfg.format, OutputFormat::Html);
        assert_eq!(cfg.seed, None);
        assert!(!cfg.reveal_all);
    }
}
