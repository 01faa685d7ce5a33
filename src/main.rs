/*!
# Wander - A Photo Travel Diary

Wander keeps a photo travel diary for one terminal session: take a photo,
attach your location and a caption, then browse, star, or delete what you
saved. Entries live in memory; only the display name persists between runs.

## Usage

```
wander [OPTIONS]

Options:
  -n, --name <NAME>        Saves your display name before starting the session
      --forget-name        Forgets the stored display name and exits
  -a, --address <ADDRESS>  Address served to the locator for this session
  -v, --verbose            Enable verbose output
  -h, --help               Print help information
  -V, --version            Print version information
```

## Configuration

The application can be configured with the following environment variables:
- `WANDER_PREFS`: Path of the display-name file (defaults to ~/.wander/name)
- `WANDER_ADDRESS`: Address the locator serves ("name, city, region")
*/

use clap::Parser;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wander::cli::CliArgs;
use wander::collaborators::console::{
    ConfiguredLocator, ConsoleNotifier, FilePreferences, PromptCamera,
};
use wander::collaborators::{Address, PreferenceStore};
use wander::config::Config;
use wander::entry::{DiaryEntry, EntryId};
use wander::errors::AppResult;
use wander::store::EntryStore;
use wander::workflow::{EntryWorkflow, WorkflowState};

/// The main entry point for the wander application.
///
/// Coordinates the overall application flow:
/// 1. Parses command-line arguments and initializes logging
/// 2. Loads and validates configuration
/// 3. Handles the display-name preference flags
/// 4. Wires the console collaborators into the entry workflow
/// 5. Runs the interactive session loop until the user quits
#[tokio::main]
async fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    let default_filter = if args.verbose {
        "wander=debug"
    } else {
        "wander=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    info!("Starting wander");

    let mut config = Config::load()?;
    if let Some(raw) = &args.address {
        config.address = Some(Address::parse(raw));
    }
    debug!(?config, "configuration loaded");

    let prefs = FilePreferences::new(config.prefs_path.clone());
    if args.forget_name {
        prefs.clear().await?;
        println!("Display name forgotten.");
        return Ok(());
    }
    if let Some(name) = &args.name {
        prefs.save(name).await?;
    }

    match prefs.load().await? {
        Some(name) => println!("Welcome back, {name}!"),
        None => println!("Welcome to wander!"),
    }

    let mut workflow = EntryWorkflow::new(
        EntryStore::new(),
        Arc::new(PromptCamera::new()),
        Arc::new(ConfiguredLocator::new(config.address.clone())),
        Arc::new(ConsoleNotifier::new()),
    );

    run_session(&mut workflow).await?;

    info!("Session ended");
    Ok(())
}

/// Runs the interactive session loop until the user quits or stdin closes.
async fn run_session(workflow: &mut EntryWorkflow) -> AppResult<()> {
    println!("Commands: [t]ake photo, [l]ist, [f]avorites, [r]ecent, [s]tar N, [d]elete N, [q]uit");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();

        match parts.next() {
            None => continue,
            Some("t") => take_photo(workflow).await,
            Some("l") => {
                let entries: Vec<&DiaryEntry> = workflow.store().list().iter().collect();
                print_entries("Saved Photos", &entries);
            }
            Some("f") => print_entries("Favorite Photos", &workflow.store().favorites()),
            Some("r") => match workflow.store().most_recent() {
                Some(entry) => print_entry(entry),
                None => println!("No recent photos. Take a picture to get started."),
            },
            Some("s") => star(workflow, parts.next()).await,
            Some("d") => delete(workflow, parts.next()).await,
            Some("q") => break,
            Some(other) => println!("Unknown command: {other}"),
        }
    }

    Ok(())
}

/// Drives one capture cycle: capture, locate, caption, confirm.
async fn take_photo(workflow: &mut EntryWorkflow) {
    match workflow.start_capture().await {
        Ok(WorkflowState::AwaitingConfirmation) => {}
        Ok(_) => return, // cycle aborted; the notifier already told the user
        Err(e) => {
            println!("{e}");
            return;
        }
    }

    if let Some(draft) = workflow.draft() {
        println!("Photo: {}", draft.image());
        println!("Location: {}", draft.address().unwrap_or_default());
    }

    print!("Add a caption (max 50 characters, blank for none): ");
    if io::stdout().flush().is_err() {
        return;
    }
    let mut caption = String::new();
    let _ = io::stdin().read_line(&mut caption);
    let caption = caption.trim();
    if !caption.is_empty() {
        match workflow.edit_caption(caption) {
            Ok(true) => {}
            Ok(false) => println!("Caption is longer than 50 characters and was not applied."),
            Err(e) => println!("{e}"),
        }
    }

    let result = if prompt_yes_no("Do you want to save this photo?", true) {
        workflow.confirm_save().await.map(|_| ())
    } else {
        workflow.discard().await
    };
    if let Err(e) = result {
        println!("{e}");
    }
}

/// Toggles the favorite flag of the Nth listed entry.
async fn star(workflow: &mut EntryWorkflow, index_arg: Option<&str>) {
    let Some(id) = entry_id_at(workflow, index_arg) else {
        println!("No such entry.");
        return;
    };
    if let Err(e) = workflow.toggle_favorite(id).await {
        println!("{e}");
    }
}

/// Runs the delete-confirmation sub-flow for the Nth listed entry.
async fn delete(workflow: &mut EntryWorkflow, index_arg: Option<&str>) {
    let Some(id) = entry_id_at(workflow, index_arg) else {
        println!("No such entry.");
        return;
    };
    if let Err(e) = workflow.request_delete(id) {
        println!("{e}");
        return;
    }

    if let Some(entry) = workflow.pending_deletion() {
        print_entry(entry);
    }
    let result = if prompt_yes_no("Are you sure you want to delete this photo?", false) {
        workflow.confirm_delete().await.map(|_| ())
    } else {
        workflow.cancel_delete()
    };
    if let Err(e) = result {
        println!("{e}");
    }
}

/// Resolves a 1-based list index argument to an entry identifier.
fn entry_id_at(workflow: &EntryWorkflow, index_arg: Option<&str>) -> Option<EntryId> {
    let index: usize = index_arg?.parse().ok()?;
    let entries = workflow.store().list();
    entries.get(index.checked_sub(1)?).map(|e| e.id)
}

fn print_entries(heading: &str, entries: &[&DiaryEntry]) {
    println!("{heading}:");
    if entries.is_empty() {
        println!("  (none)");
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        let star = if entry.is_favorite { "*" } else { " " };
        let caption = if entry.caption.is_empty() {
            "(no caption)".to_string()
        } else {
            format!("\"{}\"", entry.caption)
        };
        println!(
            "{:>3}.{star} {caption} at {} ({})",
            i + 1,
            entry.address,
            entry.image
        );
    }
}

fn print_entry(entry: &DiaryEntry) {
    let star = if entry.is_favorite { " *" } else { "" };
    let caption = if entry.caption.is_empty() {
        "(no caption)".to_string()
    } else {
        format!("\"{}\"", entry.caption)
    };
    println!("{caption}{star} at {} ({})", entry.address, entry.image);
}

/// Prompts the user for a yes/no answer with a default.
///
/// Returns the default when stdin closes.
fn prompt_yes_no(question: &str, default: bool) -> bool {
    let prompt = if default {
        format!("{question} [Y/n] ")
    } else {
        format!("{question} [y/N] ")
    };

    loop {
        print!("{prompt}");
        if io::stdout().flush().is_err() {
            return default;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => return default,
            Ok(_) => {}
        }

        match input.trim().to_lowercase().as_str() {
            "" => return default,
            "y" | "yes" => return true,
            "n" | "no" => return false,
            _ => println!("Please answer yes or no."),
        }
    }
}
