use std::io::Read;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{self, LoadedConfig};
use crate::io::logging;
use crate::ops::script;
use crate::ops::store::TaskStore;
use crate::ops::view;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let loaded = load_and_init(&cli)?;

    let result = match cli.command {
        None => crate::tui::run(&loaded),
        Some(cmd) => match cmd {
            Commands::List(args) => cmd_list(&loaded, args, json),
            Commands::Categories => cmd_categories(&loaded, json),
            Commands::Replay(args) => cmd_replay(&loaded, args, json),
        },
    };
    logging::flush();
    result
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load config and start logging if it asks for it
fn load_and_init(cli: &Cli) -> Result<LoadedConfig, Box<dyn std::error::Error>> {
    let loaded = config_io::load_config(cli.config.as_deref())?;
    logging::init_logging(&loaded.config.log.level, &loaded.log_dir())?;
    let source = if loaded.from_file { "file" } else { "default" };
    log::info!(
        "event=config_load source={} path={}",
        source,
        loaded.path.display()
    );
    Ok(loaded)
}

fn seeded_store(loaded: &LoadedConfig) -> TaskStore {
    TaskStore::new(&loaded.config.seed_items())
}

fn print_items(store: &TaskStore, category: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let shown = view::filter(store.current().items(), category);
    if json {
        println!("{}", serde_json::to_string_pretty(&items_to_json(&shown))?);
    } else {
        for line in format_item_list(&shown) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn read_script(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(source)
            .map_err(|e| -> Box<dyn std::error::Error> {
                format!("could not read {}: {}", source, e).into()
            })
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(loaded: &LoadedConfig, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = seeded_store(loaded);
    print_items(&store, args.category.as_deref(), json)
}

fn cmd_categories(loaded: &LoadedConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = seeded_store(loaded);
    let categories = view::distinct_categories(store.current().items());
    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else {
        for category in categories {
            println!("{}", category);
        }
    }
    Ok(())
}

fn cmd_replay(loaded: &LoadedConfig, args: ReplayArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_script(&args.script)?;
    let commands = script::parse_script(&text)?;
    let mut store = seeded_store(loaded);
    script::run_script(&mut store, &commands)?;
    log::info!(
        "event=replay commands={} items={}",
        commands.len(),
        store.len()
    );
    print_items(&store, args.category.as_deref(), json)
}
