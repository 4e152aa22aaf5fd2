//! Caller-owned accumulator for paginated listings

use std::collections::HashSet;

use rotom_model::{NamedResource, ResourcePage};

/// Accumulates listing pages into one deduplicated, ordered collection.
///
/// Entries are merged by unique name, never by index: an entry whose name
/// has been seen before is skipped, so re-fetching an overlapping page is
/// harmless. First-seen order is preserved. The accumulator is owned by
/// the caller; a failed page fetch simply never reaches [`merge`] and
/// leaves the collected state untouched.
///
/// [`merge`]: ListAccumulator::merge
#[derive(Debug, Default)]
pub struct ListAccumulator {
    entries: Vec<NamedResource>,
    seen: HashSet<String>,
    count: Option<u32>,
    next: Option<String>,
    merged: bool,
}

impl ListAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one page, appending unseen entries. Returns how many entries
    /// were actually appended.
    pub fn merge(&mut self, page: &ResourcePage) -> usize {
        let before = self.entries.len();

        for result in &page.results {
            if self.seen.insert(result.name.clone()) {
                self.entries.push(result.clone());
            }
        }

        self.count = Some(page.count);
        self.next = page.next.clone();
        self.merged = true;

        self.entries.len() - before
    }

    /// Everything collected so far, in first-seen order.
    pub fn entries(&self) -> &[NamedResource] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total count reported by the most recent page, if any.
    pub fn total(&self) -> Option<u32> {
        self.count
    }

    /// True once a merged page reported no further pages.
    pub fn is_complete(&self) -> bool {
        self.merged && self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(names: &[&str], next: Option<&str>) -> ResourcePage {
        ResourcePage {
            count: 1302,
            next: next.map(String::from),
            previous: None,
            results: names
                .iter()
                .map(|n| NamedResource {
                    name: n.to_string(),
                    url: format!("https://api/pokemon/{n}/"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_merge_appends_in_order() {
        let mut acc = ListAccumulator::new();
        let appended = acc.merge(&page(&["bulbasaur", "ivysaur"], Some("next")));

        assert_eq!(appended, 2);
        assert_eq!(acc.len(), 2);
        assert_eq!(acc.entries()[0].name, "bulbasaur");
        assert_eq!(acc.total(), Some(1302));
        assert!(!acc.is_complete());
    }

    #[test]
    fn test_merge_skips_seen_names() {
        let mut acc = ListAccumulator::new();
        acc.merge(&page(&["bulbasaur", "ivysaur"], Some("next")));

        // Overlapping page: only the new name lands
        let appended = acc.merge(&page(&["ivysaur", "venusaur"], None));

        assert_eq!(appended, 1);
        assert_eq!(acc.len(), 3);
        assert_eq!(acc.entries()[2].name, "venusaur");
        assert!(acc.is_complete());
    }

    #[test]
    fn test_merge_same_page_twice_is_idempotent() {
        let mut acc = ListAccumulator::new();
        let p = page(&["bulbasaur"], None);
        acc.merge(&p);
        let appended = acc.merge(&p);

        assert_eq!(appended, 0);
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_empty_accumulator_is_not_complete() {
        let acc = ListAccumulator::new();

        assert!(acc.is_empty());
        assert!(!acc.is_complete());
        assert_eq!(acc.total(), None);
    }
}
