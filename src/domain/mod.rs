// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define the core concepts
// of a practice sheet.
//
// Rules for this layer:
//   - NO printing, NO file I/O
//   - NO randomness (selection lives in Layer 4)
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they are shown.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A practice function: labels, gradient, learning rate, start point
pub mod question;

// The result of one gradient-descent update
pub mod step;

// A card on a sheet, with its one-way reveal flag
pub mod card;

// Core abstractions (traits) that other layers implement
pub mod traits;
