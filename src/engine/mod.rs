// ============================================================
// Layer 5 — Step Engine
// ============================================================
// The only real arithmetic in the system lives here:
//
//   compute_step   → gradient at the start point + one update
//   format_number  → 4 decimal places, trailing zeros trimmed
//   Derivation     → every string a reveal shows, already
//                    formatted, so renderers never touch f64
//
// All three are pure functions of a QuestionDescriptor.
//
// Reference: Rust Book §3 (Data Types — floating point)
//            Rust Book §8 (Strings)

/// One gradient-descent update
pub mod step;

/// Number formatting for display
pub mod format;

/// Formatted lines of a worked answer
pub mod derivation;
