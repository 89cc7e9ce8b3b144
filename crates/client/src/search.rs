//! Local, synchronous filtering of already-loaded notes.

use crate::model::Note;

/// Free-text term plus an optional single tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub term: String,
    pub selected_tag: Option<String>,
}

impl SearchFilter {
    pub fn new(term: impl Into<String>, selected_tag: Option<String>) -> Self {
        Self {
            term: term.into(),
            selected_tag,
        }
    }

    /// An empty tag selection counts as no selection.
    fn tag(&self) -> Option<&str> {
        self.selected_tag.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_active(&self) -> bool {
        !self.term.trim().is_empty() || self.tag().is_some()
    }

    /// A note matches when it carries the selected tag (if any) and the
    /// trimmed term occurs, case-insensitively, in its title, content or
    /// one of its tags.
    pub fn matches(&self, note: &Note) -> bool {
        if let Some(tag) = self.tag() {
            if !note.tags.iter().any(|t| t == tag) {
                return false;
            }
        }

        let term = self.term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        note.title.to_lowercase().contains(&term)
            || note.content.to_lowercase().contains(&term)
            || note.tags.iter().any(|t| t.to_lowercase().contains(&term))
    }
}

/// Notes matching `filter`, in source order.
pub fn filter_notes<'a>(notes: &'a [Note], filter: &SearchFilter) -> Vec<&'a Note> {
    notes.iter().filter(|note| filter.matches(note)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fake::note;

    fn ids(notes: &[&Note]) -> Vec<String> {
        notes.iter().map(|n| n.id.clone()).collect()
    }

    fn sample() -> Vec<Note> {
        vec![
            note("1", "Groceries", &["home"]),
            note("2", "Standup", &["work", "daily"]),
            note("3", "Retro", &["work"]),
            note("4", "Home office", &[]),
        ]
    }

    #[test]
    fn empty_filter_returns_everything() {
        let notes = sample();
        let filter = SearchFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter_notes(&notes, &filter).len(), 4);
    }

    #[test]
    fn selected_tag_keeps_source_order() {
        let notes = sample();
        let filter = SearchFilter::new("", Some("work".into()));
        assert_eq!(ids(&filter_notes(&notes, &filter)), vec!["2", "3"]);
    }

    #[test]
    fn term_is_case_insensitive_over_title_content_and_tags() {
        let notes = sample();
        let filter = SearchFilter::new("  HOME ", None);
        assert_eq!(ids(&filter_notes(&notes, &filter)), vec!["1", "4"]);
    }

    #[test]
    fn term_and_tag_must_both_match() {
        let notes = sample();
        let filter = SearchFilter::new("retro", Some("work".into()));
        assert_eq!(ids(&filter_notes(&notes, &filter)), vec!["3"]);
    }

    #[test]
    fn empty_selected_tag_is_ignored() {
        let notes = sample();
        let filter = SearchFilter::new("", Some(String::new()));
        assert!(!filter.is_active());
        assert_eq!(filter_notes(&notes, &filter).len(), 4);
    }
}
