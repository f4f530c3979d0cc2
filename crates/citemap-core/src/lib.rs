//! citemap-core - Core library for wikilink frequency aggregation
//!
//! This crate provides the building blocks for:
//! - Extracting journal references (wikilinks) from Markdown issue files
//! - Tallying appearance counts per configured time period
//! - Joining tallies with the geocoded journal registry into the ordered
//!   record set behind the map front end
//!
//! # Extracting references
//!
//! References use the `[[...]]` wikilink syntax; a path prefix inside the
//! brackets is stripped during normalization:
//!
//! ```
//! use citemap_core::wikilink;
//!
//! let ids: Vec<&str> =
//!     wikilink::links("See [[Journals/ColoradoReview]] and [[Fugue]].").collect();
//! assert_eq!(ids, ["ColoradoReview", "Fugue"]);
//! ```
//!
//! # Tallying a period
//!
//! File collections are abstracted behind [`Sources`]; use
//! [`MemorySources`] when you don't want to hit the filesystem:
//!
//! ```
//! use citemap_core::{MemorySources, Sources};
//!
//! let tally = MemorySources::new()
//!     .add("See [[Journals/ColoradoReview]] and [[ColoradoReview]] again.")
//!     .tally()
//!     .unwrap();
//! assert_eq!(tally.count("ColoradoReview"), 2);
//! ```
//!
//! # Building the report
//!
//! [`MapReport::compute`] joins one tally per period with a registry;
//! output order is total-descending with registry order breaking ties:
//!
//! ```
//! use citemap_core::{GeoRegistry, JournalInfo, MapReport, MemorySources, Period, Sources};
//!
//! let mut registry = GeoRegistry::new();
//! registry.insert(
//!     "Fugue",
//!     JournalInfo {
//!         name: "Fugue".into(),
//!         institution: "University of Idaho".into(),
//!         city: "Moscow".into(),
//!         state: "ID".into(),
//!         lat: 46.7298,
//!         lng: -117.0002,
//!     },
//! );
//!
//! let periods = vec![Period::new("Years 1-5", "1–5")];
//! let tallies = vec![MemorySources::new().add("[[Fugue]]").tally().unwrap()];
//!
//! let report = MapReport::compute(&periods, &tallies, &registry);
//! assert_eq!(report.journals[0].total, 1);
//! ```
//!
//! The full static registry ships as [`GeoRegistry::builtin`]; the
//! pipeline in the `citemap` crate wires [`DirSources`] to the archive's
//! period directories.

mod periods;
mod registry;
mod report;
mod sources;
pub mod wikilink;

pub use periods::{Period, default_periods};
pub use registry::{GeoRegistry, JournalInfo};
pub use report::{JournalRecord, MapReport};
pub use sources::{DirSources, ISSUE_EXTENSION, MemorySources, Sources, Tally};
