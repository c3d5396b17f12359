//! In-memory notes collection mirrored from the server.

use chrono::{DateTime, Utc};
use itertools::Itertools;
use notes_api::endpoints::{notes::Note as RemoteNote, NoteId};

/// Number of characters of content shown as a note's preview
pub const PREVIEW_LEN: usize = 100;

/// First `PREVIEW_LEN` characters of `content`, with `...` appended iff
/// anything was cut off.
pub fn preview_of(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_LEN).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// A note as held by the client.
///
/// Content and preview are private so the preview can only change together
/// with the content.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    content: String,
    preview: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let content = content.into();
        Self {
            id,
            title: title.into(),
            preview: preview_of(&content),
            content,
            created_at,
            updated_at,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.preview = preview_of(&self.content);
    }

    pub fn was_edited(&self) -> bool {
        self.updated_at != self.created_at
    }

    fn matches(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term) || self.content.to_lowercase().contains(term)
    }
}

impl From<RemoteNote> for Note {
    fn from(note: RemoteNote) -> Self {
        Note::new(
            note.id,
            note.title,
            note.content,
            note.created_at,
            note.updated_at,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotesStore {
    notes: Vec<Note>,
    loaded: bool,
}

impl NotesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with a fresh server listing, most recently
    /// updated first.
    pub fn replace_all(&mut self, notes: Vec<RemoteNote>) {
        self.notes = notes
            .into_iter()
            .map(Note::from)
            .sorted_by(|a, b| b.updated_at.cmp(&a.updated_at))
            .collect();
        self.loaded = true;
    }

    /// Put a note at the top of the list. A note with the same id is
    /// replaced, never duplicated.
    pub fn insert(&mut self, note: Note) {
        self.notes.retain(|n| n.id != note.id);
        self.notes.insert(0, note);
    }

    /// Apply an edit confirmed by the server. Returns false when the note
    /// is not held locally.
    pub fn apply_update(
        &mut self,
        id: &NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        updated_at: DateTime<Utc>,
    ) -> bool {
        match self.notes.iter_mut().find(|n| &n.id == id) {
            Some(note) => {
                note.title = title.into();
                note.set_content(content);
                note.updated_at = updated_at;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|n| &n.id == id)?;
        Some(self.notes.remove(index))
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    /// Notes whose title or content contains `term`, ignoring case
    pub fn search(&self, term: &str) -> Vec<&Note> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.notes.iter().collect();
        }
        self.notes.iter().filter(|n| n.matches(&term)).collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Whether a server listing has been received since the last clear
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn clear(&mut self) {
        self.notes.clear();
        self.loaded = false;
    }
}
