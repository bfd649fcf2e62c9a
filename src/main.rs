use std::io;

use clap::Parser;
use jotter::cli::{
    handle_add, handle_categories, handle_clear, handle_delete, handle_export, handle_get,
    handle_list, Cli, Commands,
};
use jotter::config::StoreConfig;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("JOTTER_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries --json and export output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let config = StoreConfig::resolve(cli.file);

    let result = match cli.command {
        Commands::Add {
            body,
            category,
            stdin,
            json,
        } => handle_add(&config, body, category, stdin, json),
        Commands::List { category, json } => handle_list(&config, category, json),
        Commands::Get { id, json } => handle_get(&config, id, json),
        Commands::Delete { id, force } => handle_delete(&config, id, force),
        Commands::Clear { force } => handle_clear(&config, force),
        Commands::Categories { json } => handle_categories(&config, json),
        Commands::Export { output } => handle_export(&config, output),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
