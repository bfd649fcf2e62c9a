use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(version, about = "Keep categorized notes in a JSON file")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Note file to use (defaults to $JOTTER_FILE, then ./notes.json)
    #[arg(long, short = 'f', global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    Add {
        /// Note text
        body: Option<String>,

        /// Category (General, Work, Personal, Ideas, To-Do)
        #[arg(long, short = 'c', default_value = "General")]
        category: String,

        /// Read note text from stdin
        #[arg(long, conflicts_with = "body")]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes
    List {
        /// Only show this category ("All" shows everything)
        #[arg(long, short = 'c', default_value = "All")]
        category: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Get {
        /// Note position like "2" or id prefix like "a1b2c"
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note position like "2" or id prefix like "a1b2c"
        id: String,

        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },

    /// Delete every note
    Clear {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },

    /// Show the category filters available for the current notes
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export all notes as plain text
    Export {
        /// Write to this file instead of stdout
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },
}
