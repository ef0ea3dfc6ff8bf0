// ============================================================
// Layer 7 — Config Store
// ============================================================
// Saves and loads a SheetConfig as pretty-printed JSON.
//
// Example file (every field is optional):
//   {
//     "count": 10,
//     "seed": 42,
//     "format": "html",
//     "reveal_all": false
//   }

use anyhow::{bail, Context, Result};
use std::{fs, path::PathBuf};

use crate::application::sheet_use_case::SheetConfig;

/// Reads and writes one config file.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write the config. Refuses to replace an existing file
    /// unless `overwrite` is set.
    pub fn save(&self, cfg: &SheetConfig, overwrite: bool) -> Result<()> {
        if self.path.exists() && !overwrite {
            bail!(
                "'{}' already exists (use --force to overwrite)",
                self.path.display()
            );
        }

        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, json + "\n")
            .with_context(|| format!("Cannot write config to '{}'", self.path.display()))?;

        tracing::debug!("Saved sheet config to '{}'", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<SheetConfig> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read config from '{}'", self.path.display()))?;

        let cfg = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", self.path.display()))?;

        tracing::debug!("Loaded sheet config from '{}'", self.path.display());
        Ok(cfg)
    }
}
