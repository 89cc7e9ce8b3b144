//! Authoritative client-side copy of notes and tags.
//!
//! [`NotesStore`] is handed to views explicitly; it owns its [`NotesApi`]
//! so tests can substitute an in-memory implementation. Local state only
//! changes after the server confirms an action.

use tagnotes_core::tags::merge_tags;
use tokio::sync::RwLock;

use crate::api::NotesApi;
use crate::error::ClientResult;
use crate::model::{CreateNoteData, Note, UpdateNoteData};

/// In-flight flags for the three mutating actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionLoading {
    pub add: bool,
    pub edit: bool,
    pub delete: bool,
}

/// Which mutating action a flag update refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Edit,
    Delete,
}

impl ActionLoading {
    fn set(&mut self, action: Action, value: bool) {
        match action {
            Action::Add => self.add = value,
            Action::Edit => self.edit = value,
            Action::Delete => self.delete = value,
        }
    }
}

/// A point-in-time copy of the store's state.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesState {
    /// Most recent first.
    pub notes: Vec<Note>,
    /// Deduplicated and sorted.
    pub tags: Vec<String>,
    /// True while a full load is in progress.
    pub loading: bool,
    pub action_loading: ActionLoading,
    /// The single, latest error message.
    pub error: Option<String>,
}

impl Default for NotesState {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            tags: Vec::new(),
            loading: true,
            action_loading: ActionLoading::default(),
            error: None,
        }
    }
}

/// Holds notes state and orchestrates API calls.
pub struct NotesStore<A> {
    api: A,
    state: RwLock<NotesState>,
}

impl<A: NotesApi> NotesStore<A> {
    /// Create a store in its initial `loading` state. Call [`Self::load`]
    /// to populate it.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwLock::new(NotesState::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Clone the current state.
    pub async fn snapshot(&self) -> NotesState {
        self.state.read().await.clone()
    }

    async fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut NotesState),
    {
        let mut state = self.state.write().await;
        f(&mut state);
    }

    /// Fetch notes and tags concurrently and replace local state.
    ///
    /// Failures are recorded in the error slot, not returned; `loading` is
    /// cleared either way.
    pub async fn load(&self) {
        self.fetch_all("Error loading data").await;
    }

    /// Re-fetch notes and tags wholesale.
    pub async fn refresh(&self) {
        self.fetch_all("Error refreshing data").await;
    }

    /// Re-run the initial load after a failure.
    pub async fn retry(&self) {
        self.load().await;
    }

    async fn fetch_all(&self, context: &'static str) {
        self.update(|s| {
            s.loading = true;
            s.error = None;
        })
        .await;

        let result = tokio::try_join!(self.api.list_notes(), self.api.list_tags());

        self.update(|s| {
            match result {
                Ok((notes, tags)) => {
                    tracing::debug!(notes = notes.len(), tags = tags.len(), "Notes loaded");
                    s.notes = notes;
                    s.tags = tags;
                }
                Err(err) => {
                    tracing::error!(error = %err, "{context}");
                    s.error = Some(err.to_string());
                }
            }
            s.loading = false;
        })
        .await;
    }

    async fn begin(&self, action: Action) {
        self.update(|s| {
            s.action_loading.set(action, true);
            s.error = None;
        })
        .await;
    }

    /// Settle an action: record a failure, clear the in-flight flag, and
    /// pass the result through so callers can track their own state.
    async fn settle<T>(&self, action: Action, result: ClientResult<T>) -> ClientResult<T> {
        self.update(|s| {
            if let Err(err) = &result {
                tracing::error!(?action, error = %err, "Note action failed");
                s.error = Some(err.to_string());
            }
            s.action_loading.set(action, false);
        })
        .await;
        result
    }

    /// Create a note and prepend it once the server confirms.
    pub async fn add_note(&self, data: CreateNoteData) -> ClientResult<Note> {
        self.begin(Action::Add).await;

        let result = self.api.create_note(&data).await;
        if let Ok(note) = &result {
            self.update(|s| {
                s.notes.insert(0, note.clone());
                merge_tags(&mut s.tags, &note.tags);
            })
            .await;
        }

        self.settle(Action::Add, result).await
    }

    /// Update a note and replace the local copy by id.
    pub async fn edit_note(&self, id: &str, data: UpdateNoteData) -> ClientResult<Note> {
        self.begin(Action::Edit).await;

        let result = self.api.update_note(id, &data).await;
        if let Ok(note) = &result {
            self.update(|s| {
                if let Some(slot) = s.notes.iter_mut().find(|n| n.id == id) {
                    *slot = note.clone();
                }
                merge_tags(&mut s.tags, &note.tags);
            })
            .await;
        }

        self.settle(Action::Edit, result).await
    }

    /// Delete a note, then re-fetch the tag list from the server so tags
    /// that only this note carried disappear.
    pub async fn delete_note(&self, id: &str) -> ClientResult<()> {
        self.begin(Action::Delete).await;

        let result: ClientResult<()> = async {
            self.api.delete_note(id).await?;
            self.update(|s| s.notes.retain(|n| n.id != id)).await;

            let tags = self.api.list_tags().await?;
            self.update(|s| s.tags = tags).await;
            Ok(())
        }
        .await;

        self.settle(Action::Delete, result).await
    }

    pub async fn clear_error(&self) {
        self.update(|s| s.error = None).await;
    }
}
