use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::entity::{Category, CategoryFilter, Note};
use crate::error::{JotterError, Result};

/// Shortest id prefix accepted by [`NoteStore::resolve`].
pub const MIN_ID_PREFIX: usize = 4;

/// Ordered note collection backed by a single JSON file.
///
/// Every mutation rewrites the whole file. There is no locking, so only one
/// writer may use a given file at a time.
pub struct NoteStore {
    notes: Vec<Note>,
    path: PathBuf,
}

impl NoteStore {
    /// Open the store at `path`, loading whatever notes it already holds.
    ///
    /// Notes stored without an id are given one and written back at once, so
    /// the ids shown by read-only commands stay valid on the next run.
    pub fn open(path: &Path) -> Result<Self> {
        let (notes, assigned) = Self::read_notes(path)?;
        let store = Self {
            notes,
            path: path.to_path_buf(),
        };

        if assigned > 0 {
            tracing::info!(path = %path.display(), count = assigned, "assigned ids to notes without one");
            store.persist()?;
        }

        Ok(store)
    }

    /// Read the full note sequence from `path`.
    ///
    /// A missing or blank file is an empty store. Anything else that does not
    /// parse as a note array is an error.
    pub fn load(path: &Path) -> Result<Vec<Note>> {
        Self::read_notes(path).map(|(notes, _)| notes)
    }

    /// Load notes and fill in missing ids. Returns how many ids were assigned.
    fn read_notes(path: &Path) -> Result<(Vec<Note>, usize)> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no note file yet, starting empty");
                return Ok((Vec::new(), 0));
            }
            Err(source) => {
                return Err(JotterError::Storage {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        if raw.trim().is_empty() {
            return Ok((Vec::new(), 0));
        }

        let mut notes: Vec<Note> =
            serde_json::from_str(&raw).map_err(|source| JotterError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut assigned = 0;
        for note in notes.iter_mut().filter(|n| n.id.is_nil()) {
            note.id = Uuid::new_v4();
            assigned += 1;
        }

        tracing::debug!(path = %path.display(), count = notes.len(), "loaded notes");
        Ok((notes, assigned))
    }

    /// Overwrite the store file with the whole in-memory sequence.
    pub fn persist(&self) -> Result<()> {
        let storage_err = |source| JotterError::Storage {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(storage_err)?;
        }

        let json = serde_json::to_string_pretty(&self.notes)?;
        fs::write(&self.path, json).map_err(storage_err)?;
        tracing::debug!(path = %self.path.display(), count = self.notes.len(), "persisted notes");
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append a note and persist.
    ///
    /// The body is trimmed first; an empty result is rejected with
    /// [`JotterError::EmptyNote`] and nothing changes.
    pub fn append(&mut self, body: &str, category: Category) -> Result<Note> {
        let body = body.trim();
        if body.is_empty() {
            tracing::info!("rejected empty note");
            return Err(JotterError::EmptyNote);
        }

        let note = Note::new(body.to_string(), category);
        self.push(note.clone())?;
        Ok(note)
    }

    /// Append an already-built note and persist.
    pub fn push(&mut self, note: Note) -> Result<()> {
        self.notes.push(note);
        if let Err(e) = self.persist() {
            self.notes.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Notes matching `selector`, in insertion order.
    pub fn filter(&self, selector: CategoryFilter) -> Vec<&Note> {
        self.filter_positions(selector)
            .into_iter()
            .map(|(_, n)| n)
            .collect()
    }

    /// Like [`NoteStore::filter`], paired with each note's 1-based position
    /// in the full sequence.
    pub fn filter_positions(&self, selector: CategoryFilter) -> Vec<(usize, &Note)> {
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, n)| selector.matches(n.category))
            .map(|(i, n)| (i + 1, n))
            .collect()
    }

    /// `All` followed by every category currently in use.
    pub fn selector_options(&self) -> Vec<CategoryFilter> {
        let present: BTreeSet<Category> = self.notes.iter().map(|n| n.category).collect();

        std::iter::once(CategoryFilter::All)
            .chain(present.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == *id)
    }

    /// Resolve a user reference: a 1-based position or an id prefix.
    ///
    /// A digits-only reference can be both; if it names two different notes
    /// it is rejected as ambiguous.
    pub fn resolve(&self, reference: &str) -> Result<&Note> {
        let reference = reference.trim();

        let by_position = reference
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|i| self.notes.get(i));

        let prefix = reference.to_lowercase();
        let by_prefix = if prefix.len() < MIN_ID_PREFIX {
            None
        } else {
            let mut matches = self
                .notes
                .iter()
                .filter(|n| n.id.to_string().starts_with(&prefix));
            match (matches.next(), matches.next()) {
                (Some(note), None) => Some(note),
                (Some(_), Some(_)) => {
                    return Err(JotterError::AmbiguousReference(reference.to_string()))
                }
                (None, _) => None,
            }
        };

        match (by_position, by_prefix) {
            (Some(a), Some(b)) if a.id != b.id => {
                Err(JotterError::AmbiguousReference(reference.to_string()))
            }
            (Some(note), _) | (None, Some(note)) => Ok(note),
            (None, None) => Err(JotterError::NoteNotFound(reference.to_string())),
        }
    }

    /// Remove the note with `id` and persist. Returns the removed note.
    pub fn remove(&mut self, id: &Uuid) -> Result<Note> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == *id)
            .ok_or_else(|| JotterError::NoteNotFound(id.to_string()))?;

        let removed = self.notes.remove(index);
        if let Err(e) = self.persist() {
            self.notes.insert(index, removed);
            return Err(e);
        }
        tracing::debug!(id = %removed.id, "removed note");
        Ok(removed)
    }

    /// Remove every note and persist. Returns how many were removed.
    pub fn clear(&mut self) -> Result<usize> {
        let previous = std::mem::take(&mut self.notes);
        if let Err(e) = self.persist() {
            self.notes = previous;
            return Err(e);
        }
        tracing::debug!(count = previous.len(), "cleared notes");
        Ok(previous.len())
    }

    /// All notes as plain text, one `[timestamp] (category)\nbody\n\n` block each.
    pub fn export_text(&self) -> String {
        self.notes.iter().map(Note::export_block).collect()
    }
}
