// ============================================================
// Layer 4 — Question Selector
// ============================================================
// Picks questions from a catalog for a practice sheet.
//
//   select_one   — a single uniform pick (with replacement)
//   select_many  — a sheet of exactly k questions
//
// How select_many pads a short catalog:
//   One shuffled pass over the whole catalog is taken first.
//   While that is shorter than k, ANOTHER independently
//   shuffled pass is appended. The result is cut to k.
//
//   Example with 9 questions and k = 10:
//     pass 1: [4 1 8 0 3 7 2 6 5]
//     pass 2: [2 ...]            → only the first entry is kept
//
//   So a question can repeat, but none is ever left out while
//   another appears twice: each shows up at least ⌊k / N⌋ times.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: rand crate documentation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

use crate::data::catalog::Catalog;
use crate::domain::question::QuestionDescriptor;

/// A seeded generator for reproducible sheets, or the thread-local
/// generator when no seed is given.
pub fn rng_from_seed(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(s) => Box::new(StdRng::seed_from_u64(s)),
        None    => Box::new(rand::thread_rng()),
    }
}

/// Uniformly pick one question, returned with its 0-based catalog index.
pub fn select_one<R: Rng + ?Sized>(
    catalog: &Catalog<'_>,
    rng:     &mut R,
) -> (usize, QuestionDescriptor) {
    let idx = rng.gen_range(0..catalog.len());
    (idx, catalog.questions()[idx])
}

/// Pick exactly `k` questions using repeated shuffled passes.
pub fn select_many<R: Rng + ?Sized>(
    catalog: &Catalog<'_>,
    k:       usize,
    rng:     &mut R,
) -> Vec<QuestionDescriptor> {
    let mut selected: Vec<QuestionDescriptor> = Vec::new();
    let mut passes = 0usize;

    while selected.len() < k {
        let mut pass = catalog.questions().to_vec();
        pass.shuffle(rng);
        selected.extend(pass);
        passes += 1;
    }

    selected.truncate(k);

    tracing::debug!(
        "Selected {} questions from a catalog of {} ({} shuffled passes)",
        selected.len(),
        catalog.len(),
        passes,
    );

    selected
}
