//! Create/edit form state.
//!
//! One form serves both modes: it edits when opened with a target note and
//! creates otherwise. The form keeps its own submission state so it can
//! refuse to close while a request is in flight.

use crate::api::NotesApi;
use crate::error::ClientResult;
use crate::model::{CreateNoteData, Note, UpdateNoteData};
use crate::store::NotesStore;

/// Shown when required fields are blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and content are required";

/// Maximum number of autocomplete suggestions offered at once.
pub const MAX_SUGGESTIONS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// What a validated form asks the store to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(CreateNoteData),
    Edit { id: String, data: UpdateNoteData },
}

#[derive(Debug, Clone)]
pub struct NoteForm {
    mode: FormMode,
    open: bool,
    pub title: String,
    pub content: String,
    tags: Vec<String>,
    pub tag_input: String,
    submitting: bool,
    error: Option<String>,
}

impl Default for NoteForm {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteForm {
    /// A closed form in create mode.
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            open: false,
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            tag_input: String::new(),
            submitting: false,
            error: None,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Open an empty form for a new note.
    pub fn open_create(&mut self) {
        if self.submitting {
            return;
        }
        self.reset();
        self.open = true;
    }

    /// Open the form pre-filled with `note` in edit mode.
    pub fn start_edit(&mut self, note: &Note) {
        if self.submitting {
            return;
        }
        self.mode = FormMode::Edit {
            id: note.id.clone(),
        };
        self.title = note.title.clone();
        self.content = note.content.clone();
        self.tags = note.tags.clone();
        self.tag_input.clear();
        self.error = None;
        self.open = true;
    }

    /// Close and reset the form. Refused (returns `false`) while a
    /// submission is in flight; covers cancel, escape and backdrop clicks.
    pub fn close(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.reset();
        true
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    fn reset(&mut self) {
        self.mode = FormMode::Create;
        self.open = false;
        self.title.clear();
        self.content.clear();
        self.tags.clear();
        self.tag_input.clear();
        self.error = None;
    }

    /// Add a tag. Blank and already-present tags are ignored.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Add whatever is typed in the tag input, then clear it.
    pub fn commit_tag_input(&mut self) -> bool {
        let input = std::mem::take(&mut self.tag_input);
        self.add_tag(&input)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Known tags containing the current input (case-insensitive) that
    /// the form does not carry yet.
    pub fn suggestions<'a>(&self, available: &'a [String]) -> Vec<&'a str> {
        let needle = self.tag_input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        available
            .iter()
            .filter(|t| t.to_lowercase().contains(&needle))
            .filter(|t| !self.tags.iter().any(|selected| selected == *t))
            .take(MAX_SUGGESTIONS)
            .map(String::as_str)
            .collect()
    }

    /// Client-side check before anything is sent.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(REQUIRED_FIELDS_MESSAGE);
        }
        Ok(())
    }

    /// Validate and mark the form as submitting.
    ///
    /// On validation failure the message is recorded and nothing is sent.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.submitting {
            return None;
        }
        if let Err(message) = self.validate() {
            self.error = Some(message.to_string());
            return None;
        }

        self.submitting = true;
        self.error = None;

        let data = CreateNoteData {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
        };
        Some(match &self.mode {
            FormMode::Create => Submission::Create(data),
            FormMode::Edit { id } => Submission::Edit {
                id: id.clone(),
                data: data.into(),
            },
        })
    }

    /// Settle a submission: reset and close on success, keep the form open
    /// with the error otherwise.
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        self.submitting = false;
        match result {
            Ok(()) => self.reset(),
            Err(message) => self.error = Some(message),
        }
    }

    /// Validate, send through `store`, and settle.
    ///
    /// Returns `Ok(None)` when client-side validation stopped the submit.
    pub async fn submit<A: NotesApi>(&mut self, store: &NotesStore<A>) -> ClientResult<Option<Note>> {
        let Some(submission) = self.begin_submit() else {
            return Ok(None);
        };

        let result = match submission {
            Submission::Create(data) => store.add_note(data).await,
            Submission::Edit { id, data } => store.edit_note(&id, data).await,
        };

        match result {
            Ok(note) => {
                self.finish_submit(Ok(()));
                Ok(Some(note))
            }
            Err(err) => {
                self.finish_submit(Err(err.to_string()));
                Err(err)
            }
        }
    }
}
