// ============================================================
// Layer 7 — Infrastructure Layer
// ============================================================
// Everything that touches the filesystem or a wire format:
//
//   config_store.rs — SheetConfig as a JSON file
//                     (--config to read, init-config to write)
//
//   export.rs       — the sheet as JSON (--format json) and
//                     writing any rendered sheet to --output
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Rust Book §12 (I/O and File Handling)

/// Load and save sheet configuration files
pub mod config_store;

/// JSON export and output files
pub mod export;
