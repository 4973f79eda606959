/*!
# Grato

Grato is a personal gratitude journal: users log in with a display name, write
daily entries, and receive a short AI-generated reflective quote per entry.
Entries can be searched, filtered by day, sorted, edited, deleted (with
confirmation), and shared.

## Core Features

- Per-user entry lists in a local key-value store
- AI reflections and a daily quote via the Gemini API, with graceful fallback
  when the credential is missing or the service fails
- Derived filtering/sorting view that never mutates the stored list
- Two-phase deletes and notification-based reporting for non-fatal failures

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `journal_core`: Pure entry model and derived-view logic
- `journal`: The stateful engine coordinating store and generator
- `store`: Key-value persistence behind an injectable trait
- `ai`: Gemini client behind the `ReflectionGenerator` trait
- `share`: Share-block formatting behind the `ShareTarget` trait

## Usage Example

```rust,no_run
use grato::ai::GeminiClient;
use grato::store::{MemoryStore, StorageService};
use grato::JournalEngine;

# async fn demo() -> grato::AppResult<()> {
let storage = StorageService::new(MemoryStore::new());
let generator = GeminiClient::new("https://generativelanguage.googleapis.com", None);

let mut engine = JournalEngine::new(storage, generator, "alice");
engine.add_entry("Pelo café da manhã").await?;

for entry in engine.filtered_entries() {
    println!("{}: {}", entry.text, entry.reflection);
}
# Ok(())
# }
```
*/

/// Reflection generation via the Gemini API
pub mod ai;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// The journal engine: state and operations for the active user
pub mod journal;
/// Pure entry model and derived-view logic
pub mod journal_core;
/// Entry sharing
pub mod share;
/// Persistent key-value store and storage service
pub mod store;

// Re-export important types for convenience
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal::{JournalEngine, Notification, Severity};
pub use journal_core::{Entry, FilterState, SortOrder};
pub use store::{StorageService, Theme};
