//! Path configuration for the pipeline.
//!
//! The archive layout is a fixed convention: issue files live under
//! `Issues/<period>/`, and the map front end reads `map/data.json`. Both
//! roots are explicit here so tests can point the pipeline at temporary
//! directories instead of a real archive checkout.

use citemap_core::{Period, default_periods};
use eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};

/// Where the pipeline reads from and writes to.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing one subdirectory per period.
    pub issues_root: PathBuf,
    /// Where the consolidated JSON document is written.
    pub output_path: PathBuf,
    /// Period buckets, in display order.
    pub periods: Vec<Period>,
}

impl Config {
    /// The conventional layout, rooted at an archive checkout.
    pub fn for_vault(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            issues_root: root.join("Issues"),
            output_path: root.join("map").join("data.json"),
            periods: default_periods(),
        }
    }
}

/// Walk upward from the current directory until a directory containing
/// `Issues/` is found.
///
/// Falls back to the current directory when nothing matches; every period
/// directory is then absent and the run completes with all-zero counts.
pub fn find_vault_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;

    let mut current = cwd.clone();
    loop {
        if current.join("Issues").is_dir() {
            return Ok(current);
        }
        if !current.pop() {
            return Ok(cwd);
        }
    }
}
