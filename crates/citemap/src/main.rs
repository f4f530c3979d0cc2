//! citemap - wikilink citation frequencies, geocoded for the map front end.
//!
//! The tool takes no arguments: it locates the archive root from the
//! current directory, scans the conventional `Issues/<period>/` layout,
//! and rewrites `map/data.json` from scratch.

use citemap::config::{self, Config};
use citemap::{output, pipeline};
use citemap_core::GeoRegistry;
use eyre::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let root = config::find_vault_root()?;
    let config = Config::for_vault(&root);
    let registry = GeoRegistry::builtin();

    let summary = pipeline::run(&config, &registry)?;
    print!("{}", output::render_summary(&summary));

    Ok(())
}
