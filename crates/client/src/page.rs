//! Top-level page state derived from the store and the search filter.

use crate::model::Note;
use crate::search::{filter_notes, SearchFilter};
use crate::store::NotesState;

/// Number of skeleton cards shown while loading.
pub const SKELETON_COUNT: usize = 6;

/// What the search area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBarView {
    Skeleton,
    Bar,
    Hidden,
}

/// What the main area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView<'a> {
    Loading { skeletons: usize },
    /// Full-page error banner; its retry action is [`crate::NotesStore::retry`].
    Error { message: String },
    /// No notes exist yet.
    Empty,
    /// Notes exist but none match the filter.
    NoMatches { total: usize },
    Notes {
        notes: Vec<&'a Note>,
        total: usize,
        tag_count: usize,
    },
}

impl<'a> PageView<'a> {
    pub fn from_state(state: &'a NotesState, filter: &SearchFilter) -> Self {
        if state.loading {
            return PageView::Loading {
                skeletons: SKELETON_COUNT,
            };
        }
        if let Some(message) = &state.error {
            return PageView::Error {
                message: message.clone(),
            };
        }
        if state.notes.is_empty() {
            return PageView::Empty;
        }

        let notes = filter_notes(&state.notes, filter);
        if notes.is_empty() {
            return PageView::NoMatches {
                total: state.notes.len(),
            };
        }

        PageView::Notes {
            notes,
            total: state.notes.len(),
            tag_count: state.tags.len(),
        }
    }

    /// Footer line, e.g. `2 of 5 notes shown • 3 unique tags`.
    pub fn stats_line(&self) -> Option<String> {
        match self {
            PageView::Notes {
                notes,
                total,
                tag_count,
            } => Some(stats_line(notes.len(), *total, *tag_count)),
            PageView::NoMatches { total } => Some(stats_line(0, *total, 0)),
            _ => None,
        }
    }
}

fn stats_line(visible: usize, total: usize, tag_count: usize) -> String {
    let mut line = format!("{visible} of {total} notes shown");
    if tag_count > 0 {
        line.push_str(&format!(" • {tag_count} unique tags"));
    }
    line
}

pub fn search_bar_view(state: &NotesState) -> SearchBarView {
    if state.loading {
        SearchBarView::Skeleton
    } else if state.notes.is_empty() {
        SearchBarView::Hidden
    } else {
        SearchBarView::Bar
    }
}

/// The "add note" trigger is disabled during a full load or an add.
pub fn add_button_enabled(state: &NotesState) -> bool {
    !(state.loading || state.action_loading.add)
}
