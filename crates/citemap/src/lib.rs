//! citemap - map wikilink citation frequencies from a Markdown issue archive
//!
//! citemap scans the archive's per-period issue directories for journal
//! wikilinks, joins the counts with the geocoded journal registry, and
//! writes the consolidated `map/data.json` consumed by the map front end.

pub mod config;
pub mod output;
pub mod pipeline;
