//! Command-line interface for the gratitude journal.
//!
//! The CLI is the presentation layer over the journal engine: it parses
//! subcommands with clap, wires the SQLite store and the Gemini client
//! together, renders queued notifications, and owns the interactive pieces
//! (delete confirmation, greeting, theme probe) that a GUI shell would
//! otherwise provide.

use crate::ai::{GeminiClient, ReflectionGenerator};
use crate::config::Config;
use crate::constants::{DATE_FORMAT_COMPACT, DATE_FORMAT_ISO, MSG_AI_NOT_CONFIGURED};
use crate::errors::{AiError, AppResult, JournalError};
use crate::journal::{JournalEngine, Severity};
use crate::journal_core::SortOrder;
use crate::share::StdoutShare;
use crate::store::{SqliteStore, StorageService, StringStore, Theme};
use chrono::{Local, NaiveDate, Timelike};
use clap::{Parser, Subcommand, ValueEnum};
use std::env;
use std::io::{self, Write};
use tracing::debug;

/// A gratitude journal with AI-generated reflections
#[derive(Parser, Debug)]
#[command(name = "grato", about = "A gratitude journal with AI-generated reflections")]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in with a display name
    Login {
        /// Display name; entries are kept per name
        name: String,
    },
    /// Log out the current user
    Logout,
    /// Add a journal entry and generate its reflection
    Add {
        /// The entry text
        text: String,
    },
    /// List entries, optionally filtered and sorted
    List {
        /// Case-insensitive search over text and reflections
        #[arg(short, long)]
        search: Option<String>,
        /// Only entries from this calendar day (YYYY-MM-DD or YYYYMMDD)
        #[arg(short, long)]
        date: Option<String>,
        /// Display order
        #[arg(long, value_enum, default_value_t = SortArg::Newest)]
        sort: SortArg,
    },
    /// Rewrite an entry's text and regenerate its reflection
    Edit {
        /// Id of the entry to edit
        id: i64,
        /// The new text
        text: String,
    },
    /// Delete an entry (asks for confirmation)
    Delete {
        /// Id of the entry to delete
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Share an entry
    Share {
        /// Id of the entry to share
        id: i64,
    },
    /// Show the daily quote
    Quote,
    /// Set or toggle the theme
    Theme {
        /// New theme; omit to toggle
        #[arg(value_enum)]
        value: Option<ThemeArg>,
    },
}

/// CLI spelling of the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Newest,
    Oldest,
}

impl From<SortArg> for SortOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Newest => SortOrder::Newest,
            SortArg::Oldest => SortOrder::Oldest,
        }
    }
}

/// CLI spelling of the theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// Runs the parsed command against the configured store and generator.
pub async fn run(args: CliArgs, config: &Config) -> AppResult<()> {
    let store = SqliteStore::open(&config.store_path())?;
    let mut storage = StorageService::new(store);

    match args.command {
        Command::Login { name } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(JournalError::EmptyInput.into());
            }
            storage.set_current_user(name);

            println!("{}, {}!", greeting(Local::now().hour()), name);
            println!("Bem-vindo(a) ao Diário de Gratidão.");

            let mut engine =
                JournalEngine::new(storage, GeminiClient::from_config(config), name);
            show_daily_quote(&mut engine).await;
            Ok(())
        }

        Command::Logout => {
            storage.clear_current_user();
            println!("Até logo!");
            Ok(())
        }

        Command::Add { text } => {
            let user = storage.current_user().ok_or(JournalError::NoActiveSession)?;
            let mut engine =
                JournalEngine::new(storage, GeminiClient::from_config(config), &user);

            engine.add_entry(&text).await?;
            render_notifications(&mut engine);

            let entry = &engine.entries()[0];
            println!("Entrada salva ({}).", entry.id);
            println!("✨ {}", entry.reflection);
            Ok(())
        }

        Command::List { search, date, sort } => {
            let user = storage.current_user().ok_or(JournalError::NoActiveSession)?;
            let mut engine =
                JournalEngine::new(storage, GeminiClient::from_config(config), &user);

            if let Some(term) = search {
                engine.set_search(&term);
            }
            if let Some(raw) = date {
                engine.set_date_filter(Some(parse_filter_date(&raw)?));
            }
            engine.set_sort_order(sort.into());

            let total = engine.entries().len();
            let view = engine.filtered_entries();

            if view.is_empty() {
                if engine.has_filters() {
                    println!("Nenhuma entrada corresponde aos filtros.");
                } else {
                    println!("Nenhuma entrada ainda. Comece com 'grato add'.");
                }
                return Ok(());
            }

            for entry in &view {
                let local = entry.date.with_timezone(&Local);
                println!("[{}] {}", entry.id, local.format("%d/%m/%Y %H:%M"));
                println!("  {}", entry.text);
                println!("  ✨ {}", entry.reflection);
            }
            if engine.has_filters() {
                println!("{} de {} entradas.", view.len(), total);
            }
            Ok(())
        }

        Command::Edit { id, text } => {
            let user = storage.current_user().ok_or(JournalError::NoActiveSession)?;
            let mut engine =
                JournalEngine::new(storage, GeminiClient::from_config(config), &user);

            engine.edit_entry(id, &text).await?;
            render_notifications(&mut engine);
            println!("Entrada atualizada.");
            Ok(())
        }

        Command::Delete { id, yes } => {
            let user = storage.current_user().ok_or(JournalError::NoActiveSession)?;
            let mut engine =
                JournalEngine::new(storage, GeminiClient::from_config(config), &user);

            if !engine.entries().iter().any(|entry| entry.id == id) {
                return Err(JournalError::NotFound(id).into());
            }

            engine.request_delete(id);
            let confirmed = yes
                || prompt_yes_no(
                    "Tem certeza de que deseja apagar esta entrada? Esta ação não pode ser desfeita.",
                    false,
                );

            if confirmed {
                engine.confirm_delete();
            } else {
                engine.cancel_delete();
                debug!("Delete of entry {} cancelled", id);
            }
            render_notifications(&mut engine);
            Ok(())
        }

        Command::Share { id } => {
            let user = storage.current_user().ok_or(JournalError::NoActiveSession)?;
            let mut engine =
                JournalEngine::new(storage, GeminiClient::from_config(config), &user);

            let mut target = StdoutShare;
            engine.share_entry(id, &mut target)?;
            render_notifications(&mut engine);
            Ok(())
        }

        Command::Quote => {
            let user = storage.current_user().unwrap_or_default();
            let mut engine =
                JournalEngine::new(storage, GeminiClient::from_config(config), &user);

            if !user.is_empty() {
                println!("{}, {}!", greeting(Local::now().hour()), user);
            }
            show_daily_quote(&mut engine).await;
            Ok(())
        }

        Command::Theme { value } => {
            let theme = match value {
                Some(arg) => arg.into(),
                None => storage.theme(detect_system_theme()).toggled(),
            };
            storage.set_theme(theme);
            println!("Tema: {}", theme.as_str());
            Ok(())
        }
    }
}

/// Prints the daily quote, staying quiet on failure.
///
/// A missing credential is covered by the persistent banner; transient
/// failures have already been logged by the engine.
async fn show_daily_quote<S: StringStore, G: ReflectionGenerator>(
    engine: &mut JournalEngine<S, G>,
) {
    println!();
    println!("Reflexão do Dia");
    match engine.daily_quote().await {
        Ok(quote) => println!("\"{}\"", quote),
        Err(AiError::CredentialMissing) => eprintln!("{}", MSG_AI_NOT_CONFIGURED),
        Err(_) => {}
    }
}

/// Prints queued engine notifications: errors to stderr, the rest to stdout.
fn render_notifications<S: StringStore, G: ReflectionGenerator>(
    engine: &mut JournalEngine<S, G>,
) {
    for notice in engine.drain_notifications() {
        match notice.severity {
            Severity::Error => eprintln!("{}", notice.message),
            Severity::Success | Severity::Info => println!("{}", notice.message),
        }
    }
}

/// Parse a date filter in YYYY-MM-DD or YYYYMMDD format.
pub fn parse_filter_date(raw: &str) -> Result<NaiveDate, JournalError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(raw, DATE_FORMAT_COMPACT))
        .map_err(|_| JournalError::InvalidDate(raw.to_string()))
}

/// Time-of-day greeting matching the journal screen header.
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Bom dia"
    } else if hour < 18 {
        "Boa tarde"
    } else {
        "Boa noite"
    }
}

/// Probes the terminal for a dark background via COLORFGBG.
///
/// The variable holds "fg;bg" ANSI indexes; backgrounds 0-6 and 8 are dark.
/// Anything unparseable defaults to light, matching the product default.
pub fn detect_system_theme() -> Theme {
    match env::var("COLORFGBG") {
        Ok(value) => match value.rsplit(';').next().and_then(|raw| raw.parse::<u8>().ok()) {
            Some(bg) if bg <= 6 || bg == 8 => Theme::Dark,
            _ => Theme::Light,
        },
        Err(_) => Theme::Light,
    }
}

/// Prompts the user for a yes/no answer with a default.
///
/// # Arguments
///
/// * `question` - The question to ask
/// * `default` - Default answer if user just presses Enter
///
/// # Returns
///
/// Returns `true` for yes, `false` for no.
pub fn prompt_yes_no(question: &str, default: bool) -> bool {
    let prompt = if default {
        format!("{} [S/n] ", question)
    } else {
        format!("{} [s/N] ", question)
    };

    print!("{}", prompt);
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    match input.trim().to_lowercase().as_str() {
        "" => default,
        "s" | "sim" | "y" | "yes" => true,
        "n" | "não" | "nao" | "no" => false,
        _ => {
            println!("Por favor, responda sim ou não.");
            prompt_yes_no(question, default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_login_command_parses() {
        let args = CliArgs::parse_from(vec!["grato", "login", "alice"]);
        match args.command {
            Command::Login { name } => assert_eq!(name, "alice"),
            _ => panic!("Expected Login command"),
        }
    }

    #[test]
    fn test_add_command_parses() {
        let args = CliArgs::parse_from(vec!["grato", "add", "Pelo café quente"]);
        match args.command {
            Command::Add { text } => assert_eq!(text, "Pelo café quente"),
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_list_command_with_filters() {
        let args = CliArgs::parse_from(vec![
            "grato", "list", "--search", "café", "--date", "2024-03-01", "--sort", "oldest",
        ]);
        match args.command {
            Command::List { search, date, sort } => {
                assert_eq!(search.as_deref(), Some("café"));
                assert_eq!(date.as_deref(), Some("2024-03-01"));
                assert_eq!(sort, SortArg::Oldest);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_list_defaults_to_newest() {
        let args = CliArgs::parse_from(vec!["grato", "list"]);
        match args.command {
            Command::List { search, date, sort } => {
                assert!(search.is_none());
                assert!(date.is_none());
                assert_eq!(sort, SortArg::Newest);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_delete_command_with_yes() {
        let args = CliArgs::parse_from(vec!["grato", "delete", "1700000000000", "--yes"]);
        match args.command {
            Command::Delete { id, yes } => {
                assert_eq!(id, 1700000000000);
                assert!(yes);
            }
            _ => panic!("Expected Delete command"),
        }
    }

    #[test]
    fn test_theme_command_values() {
        let args = CliArgs::parse_from(vec!["grato", "theme", "dark"]);
        match args.command {
            Command::Theme { value } => assert_eq!(value, Some(ThemeArg::Dark)),
            _ => panic!("Expected Theme command"),
        }

        let args = CliArgs::parse_from(vec!["grato", "theme"]);
        match args.command {
            Command::Theme { value } => assert!(value.is_none()),
            _ => panic!("Expected Theme command"),
        }
    }

    #[test]
    fn test_invalid_sort_value_rejected() {
        let result = CliArgs::try_parse_from(vec!["grato", "list", "--sort", "sideways"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_filter_date_formats() {
        let iso = parse_filter_date("2024-03-01").unwrap();
        let compact = parse_filter_date("20240301").unwrap();
        assert_eq!(iso, compact);

        match parse_filter_date("not-a-date") {
            Err(JournalError::InvalidDate(raw)) => assert_eq!(raw, "not-a-date"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting(0), "Bom dia");
        assert_eq!(greeting(11), "Bom dia");
        assert_eq!(greeting(12), "Boa tarde");
        assert_eq!(greeting(17), "Boa tarde");
        assert_eq!(greeting(18), "Boa noite");
        assert_eq!(greeting(23), "Boa noite");
    }

    #[test]
    #[serial]
    fn test_detect_system_theme() {
        env::set_var("COLORFGBG", "15;0");
        assert_eq!(detect_system_theme(), Theme::Dark);

        env::set_var("COLORFGBG", "0;15");
        assert_eq!(detect_system_theme(), Theme::Light);

        env::set_var("COLORFGBG", "garbage");
        assert_eq!(detect_system_theme(), Theme::Light);

        env::remove_var("COLORFGBG");
        assert_eq!(detect_system_theme(), Theme::Light);
    }
}
