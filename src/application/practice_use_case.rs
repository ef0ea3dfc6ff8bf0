// ============================================================
// Layer 2 — PracticeUseCase
// ============================================================
// Interactive practice in a terminal, one card at a time:
//
//   1. Show the question (answer hidden)
//   2. Wait for the student: Enter reveals, "q" quits
//   3. Show the worked step, move to the next card
//
// Input and output are generic (BufRead / Write) so the loop
// can be driven from a test with in-memory buffers.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::application::sheet_use_case::{SheetConfig, SheetUseCase};
use crate::domain::traits::Renderer;
use crate::render::text::TextRenderer;

/// How far the student got
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeSummary {
    pub shown:    usize,
    pub revealed: usize,
}

pub struct PracticeUseCase {
    sheet: SheetUseCase,
}

impl PracticeUseCase {
    pub fn new(config: SheetConfig) -> Self {
        // Cards always start hidden in practice mode
        let config = SheetConfig { reveal_all: false, ..config };
        Self { sheet: SheetUseCase::new(config) }
    }

    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<PracticeSummary> {
        let renderer = TextRenderer::new();
        let cards    = self.sheet.build_cards()?;
        let total    = cards.len();

        let mut summary = PracticeSummary { shown: 0, revealed: 0 };

        for mut card in cards {
            write!(output, "\n{}", renderer.render_card(&card))?;
            write!(output, "[{}/{}] Press Enter to reveal (q to quit): ", card.number, total)?;
            output.flush()?;
            summary.shown += 1;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("Failed to read from input")?;

            // EOF or explicit quit ends the session
            if read == 0 || line.trim().eq_ignore_ascii_case("q") {
                writeln!(output)?;
                break;
            }

            card.reveal();
            summary.revealed += 1;
            for l in renderer.render_answer(&card) {
                for row in l.lines() {
                    writeln!(output, "  {row}")?;
                }
            }
        }

        tracing::info!(
            "Practice finished: {} of {} shown, {} revealed",
            summary.shown,
            total,
            summary.revealed,
        );

        Ok(summary)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn config(count: usize) -> SheetConfig {
        SheetConfig { count, seed: Some(21), ..SheetConfig::default() }
    }

    #[test]
    fn test_enter_reveals_every_card() {
        let mut out = Vec::new();
        let summary = PracticeUseCase::new(config(3))
            .run(Cursor::new("\n\n\n"), &mut out)
            .unwrap();
        assert_eq!(summary, PracticeSummary { shown: 3, revealed: 3 });

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Answer: (x₁, y₁) = ").count(), 3);
    }

    #[test]
    fn test_q_quits_early() {
        let mut out = Vec::new();
        let summary = PracticeUseCase::new(config(5))
            .run(Cursor::new("\nq\n"), &mut out)
            .unwrap();
        assert_eq!(summary, PracticeSummary { shown: 2, revealed: 1 });
    }

    #[test]
    fn test_end_of_input_stops() {
        let mut out = Vec::new();
        let summary = PracticeUseCase::new(config(4))
            .run(Cursor::new(""), &mut out)
            .unwrap();
        assert_eq!(summary, PracticeSummary { shown: 1, revealed: 0 });
    }

    #[test]
    fn test_reveal_all_is_ignored() {
        let cfg     = SheetConfig { reveal_all: true, ..config(1) };
        let mut out = Vec::new();
        PracticeUseCase::new(cfg).run(Cursor::new(""), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("(answer hidden)"));
    }
}
