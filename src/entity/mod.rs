mod category;
mod note;

pub use category::{Category, CategoryFilter};
pub use note::{Note, TIMESTAMP_FORMAT};
