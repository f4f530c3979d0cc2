//! Wikilink extraction from issue text.
//!
//! Issue files reference journals with Obsidian-style wikilinks, either
//! bare (`[[ColoradoReview]]`) or with a vault path prefix
//! (`[[Journals/ColoradoReview]]`). Extraction is a single forward scan:
//! brackets never nest, and the first `]]` closes a link.

/// Strip any path prefix from a wikilink target.
///
/// Keeps only the text after the last `/`, so `Journals/ColoradoReview`
/// and `ColoradoReview` name the same journal.
pub fn normalize(raw: &str) -> &str {
    raw.rsplit('/').next().unwrap_or(raw)
}

/// Iterate over the normalized wikilink targets in `text`, in order of
/// appearance, duplicates included.
///
/// ```
/// use citemap_core::wikilink;
///
/// let ids: Vec<&str> = wikilink::links("[[Journals/Fugue]] beats [[AGNI]]").collect();
/// assert_eq!(ids, ["Fugue", "AGNI"]);
/// ```
pub fn links(text: &str) -> WikiLinks<'_> {
    WikiLinks { rest: text }
}

/// Iterator returned by [`links`].
#[derive(Debug, Clone)]
pub struct WikiLinks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for WikiLinks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let open = self.rest.find("[[")?;
            let after = &self.rest[open + 2..];
            let Some(close) = after.find("]]") else {
                // Unterminated link: nothing further can match.
                self.rest = "";
                return None;
            };
            self.rest = &after[close + 2..];
            let target = normalize(&after[..close]);
            if !target.is_empty() {
                return Some(target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<&str> {
        links(text).collect()
    }

    #[test]
    fn test_extracts_in_order_with_duplicates() {
        let text = "See [[ColoradoReview]], then [[Fugue]], then [[ColoradoReview]] again.";
        assert_eq!(collect(text), ["ColoradoReview", "Fugue", "ColoradoReview"]);
    }

    #[test]
    fn test_normalizes_path_prefixes() {
        assert_eq!(collect("[[Journals/ColoradoReview]]"), ["ColoradoReview"]);
        assert_eq!(collect("[[A/B/Name]]"), ["Name"]);
        assert_eq!(normalize("Group/Sub/Name"), "Name");
        assert_eq!(normalize("Name"), "Name");
    }

    #[test]
    fn test_empty_input() {
        assert!(collect("").is_empty());
        assert!(collect("no links here").is_empty());
    }

    #[test]
    fn test_unterminated_link_does_not_match() {
        assert!(collect("dangling [[ColoradoReview").is_empty());
        assert_eq!(collect("[[Fugue]] then dangling [[Colorado"), ["Fugue"]);
    }

    #[test]
    fn test_first_close_terminates() {
        // No nesting: the first ]] wins, whatever came in between.
        assert_eq!(collect("[[a]b]]"), ["a]b"]);
        assert_eq!(collect("[[[[Fugue]]"), ["[[Fugue"]);
    }

    #[test]
    fn test_empty_targets_are_skipped() {
        assert!(collect("[[]]").is_empty());
        assert!(collect("[[Journals/]]").is_empty());
        assert_eq!(collect("[[]] [[Fugue]]"), ["Fugue"]);
    }

    #[test]
    fn test_targets_are_case_sensitive_and_unvalidated() {
        assert_eq!(
            collect("[[coloradoreview]] [[What? Ever!]]"),
            ["coloradoreview", "What? Ever!"]
        );
    }
}
