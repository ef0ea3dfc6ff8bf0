// ============================================================
// Layer 7 — Sheet Export
// ============================================================
// JSON form of a sheet, for feeding another tool (an LMS
// import, a grader) instead of a human.
//
// Hidden cards export the question only. Revealed cards also
// carry the raw StepResult and the formatted derivation.

use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};

use crate::domain::card::Card;
use crate::domain::step::StepResult;
use crate::engine::{derivation::Derivation, step::compute_step};

#[derive(Debug, Serialize)]
pub struct ExportedAnswer {
    pub step:       StepResult,
    pub derivation: Derivation,
}

#[derive(Debug, Serialize)]
pub struct ExportedCard {
    pub number:        usize,
    pub function:      &'static str,
    pub gradient:      [&'static str; 2],
    pub learning_rate: f64,
    pub start:         [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer:        Option<ExportedAnswer>,
}

impl From<&Card> for ExportedCard {
    fn from(card: &Card) -> Self {
        let q = &card.question;
        let answer = card.is_revealed().then(|| {
            let step = compute_step(q);
            ExportedAnswer { step, derivation: Derivation::new(q, &step) }
        });
        Self {
            number:        card.number,
            function:      q.function_label,
            gradient:      [q.gradient_label_x, q.gradient_label_y],
            learning_rate: q.learning_rate,
            start:         [q.start_x, q.start_y],
            answer,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SheetExport {
    pub questions: Vec<ExportedCard>,
}

/// Serialise a sheet as pretty-printed JSON.
pub fn sheet_to_json(cards: &[Card]) -> Result<String> {
    let export = SheetExport {
        questions: cards.iter().map(ExportedCard::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

/// Write a rendered sheet to a file.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .with_context(|| format!("Cannot write sheet to '{}'", path.display()))?;
    tracing::info!("Wrote sheet to '{}'", path.display());
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::QUESTIONS;

    #[test]
    fn test_hidden_card_has_no_answer_field() {
        let json = sheet_to_json(&[Card::new(1, QUESTIONS[0])]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        let q = &v["questions"][0];
        assert_eq!(q["number"], 1);
        assert_eq!(q["function"], "f(x, y) = x^2 + y^2");
        assert_eq!(q["start"][1], -4.0);
        assert!(q.get("answer").is_none());
    }

    #[test]
    fn test_revealed_card_carries_step_and_derivation() {
        let mut card = Card::new(1, QUESTIONS[1]);
        card.reveal();
        let json = sheet_to_json(&[card]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        let answer = &v["questions"][0]["answer"];
        assert_eq!(answer["step"]["gx"], -4.0);
        assert_eq!(answer["derivation"]["next_x"], "-0.2");
        assert_eq!(answer["derivation"]["next_y"], "1");
    }

    #[test]
    fn test_write_output_creates_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.txt");
        write_output(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }
}
