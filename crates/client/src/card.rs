//! View model for a single note card.

use chrono::{DateTime, Utc};

use crate::api::NotesApi;
use crate::error::ClientResult;
use crate::markdown::{has_markdown_syntax, render_html};
use crate::model::Note;
use crate::store::NotesStore;

/// How a card's content is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentView {
    Rendered,
    Raw,
}

/// Content ready for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardContent<'a> {
    Html(String),
    Text(&'a str),
}

#[derive(Debug, Clone)]
pub struct NoteCard {
    note: Note,
    has_markdown: bool,
    view: ContentView,
    confirm_open: bool,
    deleting: bool,
}

impl NoteCard {
    pub fn new(note: Note) -> Self {
        let has_markdown = has_markdown_syntax(&note.content);
        Self {
            note,
            has_markdown,
            view: ContentView::Rendered,
            confirm_open: false,
            deleting: false,
        }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    /// The rendered/raw toggle is only offered for markdown-looking content.
    pub fn shows_markdown_toggle(&self) -> bool {
        self.has_markdown
    }

    pub fn content_view(&self) -> ContentView {
        self.view
    }

    pub fn toggle_view(&mut self) {
        if !self.has_markdown {
            return;
        }
        self.view = match self.view {
            ContentView::Rendered => ContentView::Raw,
            ContentView::Raw => ContentView::Rendered,
        };
    }

    pub fn content(&self) -> CardContent<'_> {
        if self.has_markdown && self.view == ContentView::Rendered {
            CardContent::Html(render_html(&self.note.content))
        } else {
            CardContent::Text(&self.note.content)
        }
    }

    /// Creation time as shown on the card, e.g. `Jan 5, 2025, 03:04 PM` (UTC).
    pub fn date_label(&self) -> String {
        format_timestamp(self.note.created_at)
    }

    /// Last-update time, only for notes edited since creation.
    pub fn updated_label(&self) -> Option<String> {
        (self.note.updated_at != self.note.created_at)
            .then(|| format_timestamp(self.note.updated_at))
    }

    /// Edit/delete/toggle are disabled while this card is deleting or the
    /// store reports any delete in flight.
    pub fn actions_disabled(&self, store_deleting: bool) -> bool {
        self.deleting || store_deleting
    }

    pub fn is_confirm_open(&self) -> bool {
        self.confirm_open
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Open the delete confirmation. Returns `false` if actions are disabled.
    pub fn request_delete(&mut self, store_deleting: bool) -> bool {
        if self.actions_disabled(store_deleting) {
            return false;
        }
        self.confirm_open = true;
        true
    }

    /// Dismiss the confirmation; refused while the delete is in flight.
    pub fn cancel_delete(&mut self) -> bool {
        if self.deleting {
            return false;
        }
        self.confirm_open = false;
        true
    }

    /// Confirm deletion, returning the id to delete.
    pub fn confirm_delete(&mut self) -> Option<String> {
        if !self.confirm_open || self.deleting {
            return None;
        }
        self.deleting = true;
        Some(self.note.id.clone())
    }

    /// Settle the delete. The confirmation stays open on failure.
    pub fn finish_delete(&mut self, succeeded: bool) {
        self.deleting = false;
        if succeeded {
            self.confirm_open = false;
        }
    }

    /// Confirm and delete through `store`.
    pub async fn delete<A: NotesApi>(&mut self, store: &NotesStore<A>) -> ClientResult<bool> {
        let Some(id) = self.confirm_delete() else {
            return Ok(false);
        };
        let result = store.delete_note(&id).await;
        self.finish_delete(result.is_ok());
        result.map(|()| true)
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::store::fake::{note, FakeApi};

    fn card_with(content: &str) -> NoteCard {
        let mut n = note("1", "t", &[]);
        n.content = content.to_string();
        NoteCard::new(n)
    }

    #[test]
    fn plain_content_has_no_toggle() {
        let mut card = card_with("plain words");
        assert!(!card.shows_markdown_toggle());
        card.toggle_view();
        assert_eq!(card.content_view(), ContentView::Rendered);
        assert_eq!(card.content(), CardContent::Text("plain words"));
    }

    #[test]
    fn markdown_content_toggles_between_views() {
        let mut card = card_with("# Heading");
        assert!(card.shows_markdown_toggle());
        assert!(matches!(card.content(), CardContent::Html(ref html) if html.contains("<h1>")));

        card.toggle_view();
        assert_eq!(card.content(), CardContent::Text("# Heading"));
    }

    #[test]
    fn date_label_format() {
        let card = card_with("x");
        assert_eq!(card.date_label(), "Jan 5, 2025, 03:04 PM");
    }

    #[test]
    fn updated_label_only_after_edit() {
        let card = card_with("x");
        assert_eq!(card.updated_label(), None);

        let mut edited = note("1", "t", &[]);
        edited.updated_at = edited.created_at + chrono::Duration::hours(2);
        let card = NoteCard::new(edited);
        assert_eq!(card.updated_label().as_deref(), Some("Jan 5, 2025, 05:04 PM"));
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut card = card_with("x");
        assert!(card.confirm_delete().is_none());

        assert!(card.request_delete(false));
        assert_eq!(card.confirm_delete().as_deref(), Some("1"));
        assert!(card.actions_disabled(false));
        assert!(!card.cancel_delete());
    }

    #[test]
    fn store_delete_flag_disables_actions() {
        let mut card = card_with("x");
        assert!(!card.request_delete(true));
        assert!(!card.is_confirm_open());
    }

    #[tokio::test]
    async fn delete_through_store() {
        let store = NotesStore::new(FakeApi::with_notes(vec![note("1", "t", &[])]));
        store.load().await;
        let mut card = NoteCard::new(store.snapshot().await.notes[0].clone());

        card.request_delete(false);
        assert!(card.delete(&store).await.unwrap());
        assert!(!card.is_confirm_open());
        assert!(store.snapshot().await.notes.is_empty());
    }

    #[tokio::test]
    async fn failed_delete_keeps_confirmation_open() {
        let store = NotesStore::new(FakeApi::with_notes(vec![note("1", "t", &[])]));
        store.load().await;
        store.api().offline.store(true, Ordering::SeqCst);
        let mut card = NoteCard::new(note("1", "t", &[]));

        card.request_delete(false);
        assert!(card.delete(&store).await.is_err());
        assert!(card.is_confirm_open());
        assert!(!card.is_deleting());
    }
}
