mod json_store;

pub use json_store::{NoteStore, MIN_ID_PREFIX};
