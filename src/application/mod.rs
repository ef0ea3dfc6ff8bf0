// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// user-facing goal each.
//
// Rules for this layer:
//   - No arithmetic (that's Layer 5)
//   - No printing to the terminal (that's Layer 1)
//   - No direct file access (that's Layer 7)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Build a sheet of N questions and render it
pub mod sheet_use_case;

// Show the worked step for one question
pub mod reveal_use_case;

// Interactive: one card at a time, Enter reveals
pub mod practice_use_case;

// Describe the built-in catalog
pub mod list_use_case;
