//! Console summary rendering.

use crate::pipeline::RunSummary;
use owo_colors::OwoColorize;

/// How many of the highest-total journals the summary lists.
pub const TOP_COUNT: usize = 20;

/// Render the post-run summary: the totals line, the ranked top slice,
/// and any unregistered identifiers that were dropped.
pub fn render_summary(summary: &RunSummary) -> String {
    let report = &summary.report;
    let mut out = String::new();

    out.push_str(&format!(
        "{} Wrote {} journals to {}\n",
        "OK".green().bold(),
        report.journals.len(),
        summary.output_path.display()
    ));

    for record in report.journals.iter().take(TOP_COUNT) {
        // Pad before coloring so the escape codes don't skew the columns.
        let total = format!("{:>4}", record.total);
        let name = format!("{:<35}", record.name);
        out.push_str(&format!(
            "  {}  {} {}, {}\n",
            total.green(),
            name.cyan(),
            record.city,
            record.state
        ));
    }

    if !report.unregistered.is_empty() {
        out.push_str(&format!(
            "\n{} Unregistered identifiers ({}):\n",
            "!".yellow().bold(),
            report.unregistered.len()
        ));
        for (id, count) in &report.unregistered {
            out.push_str(&format!(
                "  {} {} ({} references)\n",
                "-".yellow(),
                id,
                count.dimmed()
            ));
        }
    }

    out
}
