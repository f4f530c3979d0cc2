//! End-to-end tests for the scan -> aggregate -> emit pipeline.
//!
//! Each test builds a throwaway archive under a temp directory, runs the
//! full pipeline against it, and inspects the written `data.json`.

use citemap::config::Config;
use citemap::pipeline;
use citemap_core::{GeoRegistry, JournalInfo, default_periods};
use std::path::Path;

/// A small registry with a known insertion order.
fn test_registry() -> GeoRegistry {
    let mut registry = GeoRegistry::new();
    for (id, institution, city, state, lat, lng) in [
        (
            "ColoradoReview",
            "Colorado State University",
            "Fort Collins",
            "CO",
            40.5734,
            -105.0865,
        ),
        (
            "Fugue",
            "University of Idaho",
            "Moscow",
            "ID",
            46.7298,
            -117.0002,
        ),
        (
            "AGNI",
            "Boston University",
            "Boston",
            "MA",
            42.3505,
            -71.1054,
        ),
    ] {
        registry.insert(
            id,
            JournalInfo {
                name: id.to_owned(),
                institution: institution.to_owned(),
                city: city.to_owned(),
                state: state.to_owned(),
                lat,
                lng,
            },
        );
    }
    registry
}

fn write_issue(vault: &Path, period_dir: &str, file_name: &str, content: &str) {
    let dir = vault.join("Issues").join(period_dir);
    std::fs::create_dir_all(&dir).expect("Failed to create period dir");
    std::fs::write(dir.join(file_name), content).expect("Failed to write issue file");
}

fn read_document(config: &Config) -> serde_json::Value {
    let raw = std::fs::read_to_string(&config.output_path).expect("Failed to read data.json");
    serde_json::from_str(&raw).expect("data.json is not valid JSON")
}

fn record<'a>(document: &'a serde_json::Value, id: &str) -> &'a serde_json::Value {
    document["journals"]
        .as_array()
        .expect("journals is not an array")
        .iter()
        .find(|j| j["id"] == id)
        .unwrap_or_else(|| panic!("no record for {id}"))
}

#[test]
fn test_repeated_references_count_per_period() {
    let temp = tempfile::tempdir().unwrap();
    write_issue(
        temp.path(),
        "Years 1-5",
        "issue01.md",
        "See [[Journals/ColoradoReview]] and [[ColoradoReview]] again.",
    );

    let config = Config::for_vault(temp.path());
    pipeline::run(&config, &test_registry()).unwrap();

    let document = read_document(&config);
    let colorado = record(&document, "ColoradoReview");
    assert_eq!(colorado["by_period"]["1–5"], 2);
    assert_eq!(colorado["total"], 2);
}

#[test]
fn test_missing_period_directories_count_zero() {
    let temp = tempfile::tempdir().unwrap();
    // Only "Years 1-5" exists on disk; the other four periods don't.
    write_issue(temp.path(), "Years 1-5", "issue01.md", "[[Fugue]]");

    let config = Config::for_vault(temp.path());
    pipeline::run(&config, &test_registry()).unwrap();

    let document = read_document(&config);
    let fugue = record(&document, "Fugue");
    assert_eq!(fugue["total"], 1);
    for period in default_periods() {
        let expected = if period.label == "1–5" { 1 } else { 0 };
        assert_eq!(fugue["by_period"][&period.label], expected);
    }
}

#[test]
fn test_unreferenced_journal_still_emitted() {
    let temp = tempfile::tempdir().unwrap();
    write_issue(temp.path(), "Years 1-5", "issue01.md", "[[ColoradoReview]]");

    let config = Config::for_vault(temp.path());
    pipeline::run(&config, &test_registry()).unwrap();

    let document = read_document(&config);
    let fugue = record(&document, "Fugue");
    assert_eq!(fugue["total"], 0);
    assert!(
        fugue["by_period"]
            .as_object()
            .unwrap()
            .values()
            .all(|n| n == 0)
    );
}

#[test]
fn test_unknown_identifier_is_dropped_without_error() {
    let temp = tempfile::tempdir().unwrap();
    write_issue(
        temp.path(),
        "Years 1-5",
        "issue01.md",
        "[[UnknownXYZ]] [[UnknownXYZ]] [[Fugue]]",
    );

    let config = Config::for_vault(temp.path());
    let summary = pipeline::run(&config, &test_registry()).unwrap();

    let document = read_document(&config);
    let ids: Vec<&str> = document["journals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_str().unwrap())
        .collect();
    assert!(!ids.contains(&"UnknownXYZ"));

    // Dropped, but not lost: the run surfaces them as diagnostics.
    assert_eq!(
        summary.report.unregistered,
        [("UnknownXYZ".to_owned(), 2)]
    );
}

#[test]
fn test_records_sorted_by_total_descending() {
    let temp = tempfile::tempdir().unwrap();
    write_issue(
        temp.path(),
        "Years 1-5",
        "issue01.md",
        "[[AGNI]] [[AGNI]] [[Fugue]]",
    );
    write_issue(temp.path(), "Years 6-10", "issue02.md", "[[AGNI]]");

    let config = Config::for_vault(temp.path());
    pipeline::run(&config, &test_registry()).unwrap();

    let document = read_document(&config);
    let journals = document["journals"].as_array().unwrap();
    let totals: Vec<u64> = journals
        .iter()
        .map(|j| j["total"].as_u64().unwrap())
        .collect();
    assert_eq!(totals, [3, 1, 0]);
    assert_eq!(journals[0]["id"], "AGNI");

    // Cross-period breakdown is zero-filled and ordered.
    assert_eq!(journals[0]["by_period"]["1–5"], 2);
    assert_eq!(journals[0]["by_period"]["6–10"], 1);
    assert_eq!(journals[0]["by_period"]["11–15"], 0);
}

#[test]
fn test_equal_totals_keep_registry_order() {
    let temp = tempfile::tempdir().unwrap();
    write_issue(
        temp.path(),
        "Years 1-5",
        "issue01.md",
        "[[AGNI]] [[Fugue]] [[ColoradoReview]]",
    );

    let config = Config::for_vault(temp.path());
    pipeline::run(&config, &test_registry()).unwrap();

    let document = read_document(&config);
    let ids: Vec<&str> = document["journals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_str().unwrap())
        .collect();
    // All tied at 1; registry insertion order wins.
    assert_eq!(ids, ["ColoradoReview", "Fugue", "AGNI"]);
}

#[test]
fn test_reruns_are_byte_identical() {
    let temp = tempfile::tempdir().unwrap();
    write_issue(
        temp.path(),
        "Years 1-5",
        "issue01.md",
        "[[ColoradoReview]] [[Fugue]] [[Fugue]] [[UnknownXYZ]]",
    );
    write_issue(temp.path(), "Years 11-15", "issue02.md", "[[AGNI]]");

    let config = Config::for_vault(temp.path());
    let registry = test_registry();

    pipeline::run(&config, &registry).unwrap();
    let first = std::fs::read(&config.output_path).unwrap();
    pipeline::run(&config, &registry).unwrap();
    let second = std::fs::read(&config.output_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_non_issue_files_are_ignored() {
    let temp = tempfile::tempdir().unwrap();
    write_issue(temp.path(), "Years 1-5", "issue01.md", "[[Fugue]]");
    write_issue(temp.path(), "Years 1-5", "index.html", "[[AGNI]]");
    write_issue(temp.path(), "Years 1-5", "README", "[[AGNI]]");

    let config = Config::for_vault(temp.path());
    pipeline::run(&config, &test_registry()).unwrap();

    let document = read_document(&config);
    assert_eq!(record(&document, "Fugue")["total"], 1);
    assert_eq!(record(&document, "AGNI")["total"], 0);
}

#[test]
fn test_builtin_registry_end_to_end() {
    let temp = tempfile::tempdir().unwrap();
    write_issue(
        temp.path(),
        "Years 21-25",
        "issue25.md",
        "[[Journals/MFA Journals/ColoradoReview]] and [[Ploughshares]]",
    );

    let config = Config::for_vault(temp.path());
    let registry = GeoRegistry::builtin();
    pipeline::run(&config, &registry).unwrap();

    let document = read_document(&config);
    assert_eq!(
        document["journals"].as_array().unwrap().len(),
        registry.len()
    );

    let colorado = record(&document, "ColoradoReview");
    assert_eq!(colorado["total"], 1);
    assert_eq!(colorado["by_period"]["21–25"], 1);
    assert_eq!(colorado["institution"], "Colorado State University");
    assert_eq!(colorado["city"], "Fort Collins");
    assert_eq!(colorado["state"], "CO");

    let ploughshares = record(&document, "Ploughshares");
    assert_eq!(ploughshares["institution"], "Emerson College");
}
