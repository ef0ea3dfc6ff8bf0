// ============================================================
// Layer 4 — Question Data
// ============================================================
// Everything about WHICH questions end up on a sheet:
//
//   QUESTIONS (static table, 9 entries)
//       │
//       ▼
//   Catalog           → non-empty view over a question table
//       │
//       ▼
//   select_one / select_many  → random picks for a sheet
//
// The table is fixed at compile time and never mutated.
// Randomness is always passed in, so tests can seed it.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

/// The built-in table of practice functions
pub mod catalog;

/// Random selection of questions for a sheet
pub mod selector;
