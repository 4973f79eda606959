//! Constants used throughout the application.
//!
//! This module centralizes storage keys, environment variable names, and the
//! user-facing strings so they can be referenced consistently from the engine,
//! the store, and the CLI.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "grato";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A gratitude journal with AI-generated reflections";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the grato data directory.
pub const ENV_VAR_GRATO_DIR: &str = "GRATO_DIR";
/// Environment variable for the Gemini API credential.
pub const ENV_VAR_API_KEY: &str = "GEMINI_API_KEY";
/// Application-specific fallback for the API credential.
pub const ENV_VAR_GRATO_API_KEY: &str = "GRATO_API_KEY";
/// Environment variable overriding the Gemini API base URL.
pub const ENV_VAR_API_URL: &str = "GRATO_API_URL";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for grato data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/grato";
/// Filename of the key-value store database inside the data directory.
pub const STORE_FILENAME: &str = "grato.db";

// Reflection Generator
/// Default base URL for the Gemini API.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Model used for reflections and quotes.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
/// Sampling temperature for the daily quote request.
pub const DAILY_QUOTE_TEMPERATURE: f32 = 0.9;

// Persistent Store Keys
/// Key holding the logged-in username.
pub const KEY_CURRENT_USER: &str = "currentUser";
/// Key holding the theme preference.
pub const KEY_THEME: &str = "theme";
/// Prefix for the per-user entry list key; the username is appended.
pub const KEY_ENTRIES_PREFIX: &str = "entries:";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";

// User-Facing Strings (the product speaks Portuguese)
/// Reflection stored when generation fails during add.
pub const FALLBACK_REFLECTION: &str = "Não foi possível gerar uma reflexão neste momento.";
/// Notification shown when the AI credential is not configured.
pub const MSG_AI_NOT_CONFIGURED: &str =
    "A funcionalidade de IA não está configurada. Defina GEMINI_API_KEY para ativá-la.";
/// Notification shown when reflection generation fails transiently.
pub const MSG_REFLECTION_FAILED: &str =
    "Falha ao gerar reflexão de IA. Sua entrada foi salva sem ela.";
/// Notification shown after a confirmed delete.
pub const MSG_ENTRY_DELETED: &str = "Entrada apagada com sucesso.";
/// Notification shown after copying a share block to the clipboard.
pub const MSG_COPIED: &str = "Copiado para a área de transferência!";
/// Notification shown when the clipboard copy fails.
pub const MSG_COPY_FAILED: &str = "Falha ao copiar.";
/// Title passed to the native share surface.
pub const SHARE_TITLE: &str = "Meu Momento de Gratidão";
