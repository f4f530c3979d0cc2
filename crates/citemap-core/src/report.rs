//! Aggregation of period tallies into the map report.

use crate::periods::Period;
use crate::registry::GeoRegistry;
use crate::sources::Tally;
use eyre::{Result, WrapErr};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// One journal's aggregated appearance data, as emitted to the map front end.
#[derive(Debug, Clone, Serialize)]
pub struct JournalRecord {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub city: String,
    pub state: String,
    pub lat: f64,
    pub lng: f64,
    /// Sum of all period counts.
    pub total: usize,
    /// Period label -> count, zero-filled, in configured period order.
    pub by_period: IndexMap<String, usize>,
}

/// The consolidated map document, plus console-only diagnostics.
#[derive(Debug, Serialize)]
pub struct MapReport {
    /// Records sorted by total descending; ties keep registry order.
    pub journals: Vec<JournalRecord>,
    /// Identifiers that were referenced but are not in the registry, with
    /// their combined counts, highest first. Dropped from the document on
    /// purpose - unknown references are treated as not-yet-catalogued
    /// rather than errors - but surfaced here so typos stay discoverable.
    #[serde(skip)]
    pub unregistered: Vec<(String, usize)>,
}

impl MapReport {
    /// Join per-period tallies with the registry.
    ///
    /// `tallies` must be parallel to `periods`. Every registry entry
    /// produces a record, referenced or not; every identifier outside the
    /// registry lands in [`MapReport::unregistered`].
    pub fn compute(periods: &[Period], tallies: &[Tally], registry: &GeoRegistry) -> Self {
        debug_assert_eq!(periods.len(), tallies.len());

        let mut journals: Vec<JournalRecord> = registry
            .iter()
            .map(|(id, info)| {
                let by_period: IndexMap<String, usize> = periods
                    .iter()
                    .zip(tallies)
                    .map(|(period, tally)| (period.label.clone(), tally.count(id)))
                    .collect();
                let total = by_period.values().copied().sum();

                JournalRecord {
                    id: id.to_owned(),
                    name: info.name.clone(),
                    institution: info.institution.clone(),
                    city: info.city.clone(),
                    state: info.state.clone(),
                    lat: info.lat,
                    lng: info.lng,
                    total,
                    by_period,
                }
            })
            .collect();

        // Stable sort: equal totals stay in registry insertion order.
        journals.sort_by(|a, b| b.total.cmp(&a.total));

        let mut dropped: HashMap<&str, usize> = HashMap::new();
        for tally in tallies {
            for (id, n) in tally.iter() {
                if !registry.contains(id) {
                    *dropped.entry(id).or_insert(0) += n;
                }
            }
        }
        let mut unregistered: Vec<(String, usize)> = dropped
            .into_iter()
            .map(|(id, n)| (id.to_owned(), n))
            .collect();
        unregistered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        MapReport {
            journals,
            unregistered,
        }
    }

    /// Serialize the map document: `{ "journals": [ ... ] }`, pretty-printed.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("Failed to serialize map report")
    }
}
