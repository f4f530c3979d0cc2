//! The scan -> aggregate -> emit pipeline.

use crate::config::Config;
use citemap_core::{DirSources, GeoRegistry, MapReport, Sources, Tally};
use eyre::{Result, WrapErr};
use std::path::PathBuf;
use tracing::debug;

/// Outcome of a pipeline run, for summary rendering.
#[derive(Debug)]
pub struct RunSummary {
    pub report: MapReport,
    pub output_path: PathBuf,
}

/// Tally every period, aggregate against the registry, and write the
/// consolidated document.
///
/// Sequential and single-pass; the input is a handful of periods with a
/// bounded number of files each. Nothing is written until the full
/// document has been serialized, so any earlier failure leaves a previous
/// output untouched.
pub fn run(config: &Config, registry: &GeoRegistry) -> Result<RunSummary> {
    let mut tallies: Vec<Tally> = Vec::with_capacity(config.periods.len());
    for period in &config.periods {
        let dir = config.issues_root.join(&period.dir_name);
        let tally = DirSources::new(&dir).tally()?;
        debug!(
            period = %period.label,
            dir = %dir.display(),
            identifiers = tally.len(),
            "tallied period"
        );
        tallies.push(tally);
    }

    let report = MapReport::compute(&config.periods, &tallies, registry);
    let json = report.to_json()?;

    if let Some(parent) = config.output_path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&config.output_path, &json)
        .wrap_err_with(|| format!("Failed to write {}", config.output_path.display()))?;
    debug!(
        path = %config.output_path.display(),
        journals = report.journals.len(),
        "wrote map document"
    );

    Ok(RunSummary {
        report,
        output_path: config.output_path.clone(),
    })
}
