/*!
# Grato - A Gratitude Journal

Grato is a command-line gratitude journal. It keeps one entry list per display
name in a local store and attaches a short AI-generated reflection to every
entry, falling back gracefully when the AI credential is absent.

## Usage

```
grato login <name>        Log in with a display name
grato add <text>          Add an entry and generate its reflection
grato list [filters]      List entries (search, date, sort)
grato edit <id> <text>    Rewrite an entry
grato delete <id>         Delete an entry (asks for confirmation)
grato share <id>          Share an entry
grato quote               Show the daily quote
grato theme [light|dark]  Set or toggle the theme
grato logout              Log out
```

## Configuration

The application can be configured with the following environment variables:
- `GRATO_DIR`: Data directory (defaults to ~/.local/share/grato)
- `GEMINI_API_KEY` or `GRATO_API_KEY`: Gemini credential; unset disables AI
- `GRATO_API_URL`: Override for the Gemini API base URL
*/

use clap::Parser;
use grato::cli::{run, CliArgs};
use grato::config::Config;
use grato::errors::AppResult;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the grato application.
///
/// Coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads and validates configuration
/// 4. Dispatches the subcommand against the store and the reflection client
#[tokio::main]
async fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting grato");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    debug!("Loaded configuration: {:?}", config);

    run(args, &config).await
}
