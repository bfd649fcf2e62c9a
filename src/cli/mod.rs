mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_add, handle_categories, handle_clear, handle_delete, handle_export, handle_get,
    handle_list,
};
