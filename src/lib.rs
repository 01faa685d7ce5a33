/*!
# Wander

Wander is a photo travel diary: capture a photo, attach a reverse-geocoded
location and an optional caption, and keep the result as a diary entry that
can be listed, marked favorite, or deleted. Entries live in process memory
for the duration of a session.

## Core Features

- A non-reentrant capture workflow: capture, locate, confirm, commit
- Location failures never cost the user a photo; the entry falls back to a
  sentinel address
- An ordered entry store with favorites and most-recent views
- One best-effort notification per workflow transition
- A stored display name used to greet the user across sessions

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `entry`: The diary-entry data model
- `store`: The committed-entry collection and its views
- `collaborators`: Async contracts for camera, locator, notifier, and
  preference storage, plus console-backed implementations
- `workflow`: The entry capture-and-lifecycle state machine

## Usage Example

```rust
use std::sync::Arc;
use wander::collaborators::console::{ConfiguredLocator, ConsoleNotifier, PromptCamera};
use wander::{EntryStore, EntryWorkflow};

let workflow = EntryWorkflow::new(
    EntryStore::new(),
    Arc::new(PromptCamera::new()),
    Arc::new(ConfiguredLocator::new(None)),
    Arc::new(ConsoleNotifier::new()),
);
assert!(workflow.store().is_empty());
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Collaborator contracts and console implementations
pub mod collaborators;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// The diary-entry data model
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// The committed-entry collection
pub mod store;
/// The entry capture-and-lifecycle workflow
pub mod workflow;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use entry::{DiaryEntry, Draft, EntryId, ImageRef};
pub use errors::{AppError, AppResult};
pub use store::EntryStore;
pub use workflow::{EntryWorkflow, WorkflowState};
