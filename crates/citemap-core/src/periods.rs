//! Period configuration.

/// A named time bucket: a directory of issue files plus its display label.
///
/// Period order defines the left-to-right order of any per-period
/// breakdown; it has no effect on totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    /// Subdirectory of the issues root holding this period's files.
    pub dir_name: String,
    /// Label used as the `by_period` key in the output document.
    pub label: String,
}

impl Period {
    pub fn new(dir_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            dir_name: dir_name.into(),
            label: label.into(),
        }
    }
}

/// The archive's year-range buckets, in display order.
///
/// Directory names are plain ASCII; labels carry the en-dash the map
/// front end displays.
pub fn default_periods() -> Vec<Period> {
    [
        ("Years 1-5", "1–5"),
        ("Years 6-10", "6–10"),
        ("Years 11-15", "11–15"),
        ("Years 16-20", "16–20"),
        ("Years 21-25", "21–25"),
    ]
    .into_iter()
    .map(|(dir_name, label)| Period::new(dir_name, label))
    .collect()
}
