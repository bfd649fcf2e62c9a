pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod storage;
pub mod warnings;

pub use config::StoreConfig;
pub use entity::{Category, CategoryFilter, Note};
pub use error::{JotterError, Result};
pub use storage::NoteStore;
