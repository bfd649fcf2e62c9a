use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotterError {
    #[error("Note is empty.")]
    EmptyNote,

    #[error("Invalid category: {0}. Valid categories: General, Work, Personal, Ideas, To-Do")]
    InvalidCategory(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Ambiguous note reference '{0}'. Use more characters of the id.")]
    AmbiguousReference(String),

    #[error("Storage error at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed note file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cancelled: {0}")]
    Cancelled(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JotterError {
    /// Validation errors are reported as warnings; the caller can fix the
    /// input and retry.
    pub fn is_validation(&self) -> bool {
        matches!(self, JotterError::EmptyNote | JotterError::InvalidCategory(_))
    }
}

pub type Result<T> = std::result::Result<T, JotterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(JotterError::EmptyNote.is_validation());
        assert!(JotterError::InvalidCategory("x".into()).is_validation());
        assert!(!JotterError::NoteNotFound("1".into()).is_validation());

        let storage = JotterError::Storage {
            path: PathBuf::from("notes.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!storage.is_validation());
    }

    #[test]
    fn test_storage_message_names_path() {
        let err = JotterError::Storage {
            path: PathBuf::from("/tmp/notes.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/notes.json"));
        assert!(msg.contains("denied"));
    }
}
