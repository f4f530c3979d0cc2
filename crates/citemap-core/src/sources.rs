//! Source providers for period tallying.

use crate::wikilink;
use eyre::{Result, WrapErr};
use std::collections::HashMap;
use std::path::PathBuf;

/// The file suffix eligible for scanning. Exact, case-sensitive.
pub const ISSUE_EXTENSION: &str = ".md";

/// Identifier occurrence counts for one period's worth of issue files.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    counts: HashMap<String, usize>,
}

impl Tally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one appearance of an identifier.
    pub fn record(&mut self, id: &str) {
        *self.counts.entry(id.to_owned()).or_insert(0) += 1;
    }

    /// Record every wikilink in a block of text.
    pub fn record_text(&mut self, text: &str) {
        for id in wikilink::links(text) {
            self.record(id);
        }
    }

    /// The count for an identifier; zero if it was never seen.
    pub fn count(&self, id: &str) -> usize {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Number of distinct identifiers seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no identifiers were seen.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(identifier, count)` pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(id, n)| (id.as_str(), *n))
    }

    /// Merge another tally into this one.
    pub fn extend(&mut self, other: Tally) {
        for (id, n) in other.counts {
            *self.counts.entry(id).or_insert(0) += n;
        }
    }
}

/// Trait for providing issue text to tally.
pub trait Sources {
    /// Tally every wikilink across all sources.
    fn tally(self) -> Result<Tally>;
}

/// One level of a period directory: every `.md` file, nothing else.
///
/// A directory that does not exist tallies to empty - periods may
/// legitimately have no data yet. Read failures are fatal: a partial
/// scan would silently under-count downstream totals.
pub struct DirSources {
    dir: PathBuf,
}

impl DirSources {
    /// Create a provider for the given period directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Sources for DirSources {
    fn tally(self) -> Result<Tally> {
        let mut tally = Tally::new();

        if !self.dir.is_dir() {
            return Ok(tally);
        }

        // The period layout is a data convention, not a source tree:
        // no gitignore or hidden-file filtering, one level only.
        let walker = ignore::WalkBuilder::new(&self.dir)
            .standard_filters(false)
            .max_depth(Some(1))
            .build();

        for entry in walker {
            let entry =
                entry.wrap_err_with(|| format!("Failed to walk {}", self.dir.display()))?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            let eligible = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(ISSUE_EXTENSION));
            if !eligible {
                continue;
            }

            let content = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
            tally.record_text(&content);
        }

        Ok(tally)
    }
}

/// In-memory sources (useful for testing).
pub struct MemorySources(Vec<String>);

impl MemorySources {
    /// Create empty memory sources.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add one file's worth of text.
    pub fn add(mut self, content: impl Into<String>) -> Self {
        self.0.push(content.into());
        self
    }
}

impl Default for MemorySources {
    fn default() -> Self {
        Self::new()
    }
}

impl Sources for MemorySources {
    fn tally(self) -> Result<Tally> {
        let mut tally = Tally::new();
        for content in self.0 {
            tally.record_text(&content);
        }
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sources() {
        let tally = MemorySources::new()
            .add("See [[Journals/ColoradoReview]] and [[ColoradoReview]] again.")
            .add("[[Fugue]]")
            .tally()
            .unwrap();

        assert_eq!(tally.count("ColoradoReview"), 2);
        assert_eq!(tally.count("Fugue"), 1);
        assert_eq!(tally.count("AGNI"), 0);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn test_tally_extend() {
        let mut a = Tally::new();
        a.record("Fugue");
        let mut b = Tally::new();
        b.record("Fugue");
        b.record("AGNI");

        a.extend(b);
        assert_eq!(a.count("Fugue"), 2);
        assert_eq!(a.count("AGNI"), 1);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let temp = tempfile::tempdir().unwrap();
        let tally = DirSources::new(temp.path().join("Years 6-10"))
            .tally()
            .unwrap();
        assert!(tally.is_empty());
    }

    #[test]
    fn test_only_md_files_are_read() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("issue1.md"), "[[Fugue]]").unwrap();
        std::fs::write(temp.path().join("notes.txt"), "[[AGNI]]").unwrap();
        std::fs::write(temp.path().join("issue2.MD"), "[[AGNI]]").unwrap();

        let tally = DirSources::new(temp.path()).tally().unwrap();
        assert_eq!(tally.count("Fugue"), 1);
        assert_eq!(tally.count("AGNI"), 0);
    }

    #[test]
    fn test_subdirectories_are_not_recursed() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("issue.md"), "[[Fugue]]").unwrap();
        let nested = temp.path().join("drafts");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("draft.md"), "[[AGNI]]").unwrap();

        let tally = DirSources::new(temp.path()).tally().unwrap();
        assert_eq!(tally.count("Fugue"), 1);
        assert_eq!(tally.count("AGNI"), 0);
    }

    #[test]
    fn test_counts_accumulate_across_files() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("a.md"), "[[Fugue]] [[Fugue]]").unwrap();
        std::fs::write(temp.path().join("b.md"), "[[Fugue]]").unwrap();

        let tally = DirSources::new(temp.path()).tally().unwrap();
        assert_eq!(tally.count("Fugue"), 3);
    }
}
