use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::config::StoreConfig;
use crate::entity::{Category, CategoryFilter, Note};
use crate::error::{JotterError, Result};
use crate::storage::NoteStore;
use crate::warnings::{check_thresholds, format_warning, Warning};

fn open_store(config: &StoreConfig) -> Result<NoteStore> {
    NoteStore::open(config.path())
}

fn print_threshold_warnings(store: &NoteStore) {
    for warning in check_thresholds(store.len()) {
        eprintln!("{}", format_warning(&warning));
    }
}

/// Ask for a y/N confirmation on stderr. Refuses outright when stdin is not
/// a terminal, since nobody can answer.
fn confirm(prompt: &str) -> Result<bool> {
    eprintln!("{} [y/N] ", prompt);

    if !atty::is(atty::Stream::Stdin) {
        return Err(JotterError::Cancelled(
            "use --force in non-interactive mode".to_string(),
        ));
    }

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

pub fn handle_add(
    config: &StoreConfig,
    body: Option<String>,
    category: String,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let category: Category = category.parse()?;

    let body = if stdin {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        content
    } else {
        body.unwrap_or_default()
    };

    let mut store = open_store(config)?;
    let note = match store.append(&body, category) {
        Ok(note) => note,
        Err(e) if e.is_validation() => {
            eprintln!("{}", format_warning(&Warning::Rejected(e.to_string())));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!(
            "Added note {:03} ({}) [{}] {}",
            store.len(),
            note.short_id(),
            note.category,
            note.headline()
        );
    }
    print_threshold_warnings(&store);

    Ok(())
}

pub fn handle_list(config: &StoreConfig, category: String, json: bool) -> Result<()> {
    let selector: CategoryFilter = category.parse()?;
    let store = open_store(config)?;

    // Positions are relative to the full sequence so they can be fed back
    // into `get` and `delete`; JSON output carries them too.
    let listed = store.filter_positions(selector);

    if json {
        #[derive(serde::Serialize)]
        struct ListedNote<'a> {
            position: usize,
            #[serde(flatten)]
            note: &'a Note,
        }

        let rows: Vec<ListedNote> = listed
            .iter()
            .map(|&(position, note)| ListedNote { position, note })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if listed.is_empty() {
        match selector {
            CategoryFilter::All => println!("No notes yet."),
            CategoryFilter::Only(c) => println!("No {} notes.", c),
        }
    } else {
        println!("Notes ({}):\n", selector);
        for (position, n) in listed {
            println!(
                "  {:03} ({}) {} [{}] {}",
                position,
                n.short_id(),
                n.formatted_timestamp(),
                n.category,
                n.headline()
            );
        }
    }

    Ok(())
}

pub fn handle_get(config: &StoreConfig, id: String, json: bool) -> Result<()> {
    let store = open_store(config)?;
    let note = store.resolve(&id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        println!("Note {}", note.id);
        println!("Category: {}", note.category);
        println!("Created: {}", note.formatted_timestamp());
        println!("\n{}", note.body);
    }

    Ok(())
}

pub fn handle_delete(config: &StoreConfig, id: String, force: bool) -> Result<()> {
    let mut store = open_store(config)?;
    let target = store.resolve(&id)?.clone();

    if !force {
        let prompt = format!(
            "Delete note ({}) [{}] {}?",
            target.short_id(),
            target.category,
            target.headline()
        );
        if !confirm(&prompt)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let removed = store.remove(&target.id)?;

    println!(
        "Deleted note ({}) [{}] {}",
        removed.short_id(),
        removed.category,
        removed.headline()
    );

    Ok(())
}

pub fn handle_clear(config: &StoreConfig, force: bool) -> Result<()> {
    let mut store = open_store(config)?;

    if store.is_empty() {
        println!("No notes to delete.");
        return Ok(());
    }

    if !force && !confirm(&format!("Delete all {} notes?", store.len()))? {
        println!("Cancelled.");
        return Ok(());
    }

    let count = store.clear()?;
    println!("Deleted {} notes from {}.", count, store.path().display());

    Ok(())
}

pub fn handle_categories(config: &StoreConfig, json: bool) -> Result<()> {
    let store = open_store(config)?;
    let options: Vec<String> = store
        .selector_options()
        .iter()
        .map(ToString::to_string)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else {
        for option in options {
            println!("{}", option);
        }
    }

    Ok(())
}

pub fn handle_export(config: &StoreConfig, output: Option<PathBuf>) -> Result<()> {
    let store = open_store(config)?;
    let text = store.export_text();

    match output {
        Some(path) => {
            fs::write(&path, &text)?;
            eprintln!("Exported {} notes to {}", store.len(), path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}
