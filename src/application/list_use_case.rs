// ============================================================
// Layer 2 — ListUseCase
// ============================================================
// One line per catalog entry, numbered the way `reveal
// --question N` expects them.

use crate::data::catalog::Catalog;
use crate::engine::format::format_number;

pub struct ListUseCase {
    catalog: Catalog<'static>,
}

impl ListUseCase {
    pub fn new() -> Self {
        Self { catalog: Catalog::builtin() }
    }

    pub fn lines(&self) -> Vec<String> {
        self.catalog
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| {
                format!(
                    "{:>2}. {}   α = {}   start = ({}, {})",
                    i + 1,
                    q.function_label,
                    format_number(q.learning_rate),
                    format_number(q.start_x),
                    format_number(q.start_y),
                )
            })
            .collect()
    }
}

impl Default for ListUseCase {
    fn default() -> Self {
        Self::new()
    }
}
