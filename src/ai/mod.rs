//! Reflection generation for journal entries.
//!
//! This module provides the integration with the Gemini API used to generate
//! the short reflection attached to each entry and the daily quote shown on
//! the journal screen.
//!
//! # Module Structure
//!
//! - `gemini`: HTTP client for the Gemini generateContent API
//! - `prompts`: fixed system instructions for reflections and quotes
//!
//! The engine consumes the `ReflectionGenerator` trait rather than the
//! concrete client, so tests can substitute a deterministic fake. Calls are
//! asynchronous and perform no retry or timeout internally; callers add their
//! own wrappers if they need one.

pub mod gemini;
pub mod prompts;

// Re-export commonly used types
pub use gemini::GeminiClient;
pub use prompts::{DAILY_QUOTE_INSTRUCTION, DAILY_QUOTE_REQUEST, REFLECTION_INSTRUCTION};

use crate::errors::AiError;

/// Interface the journal engine uses to obtain generated text.
///
/// Both operations fail with `AiError::CredentialMissing` when no API
/// credential is configured, or another `AiError` variant for upstream
/// failures; the caller decides the fallback behavior.
#[allow(async_fn_in_trait)]
pub trait ReflectionGenerator {
    /// Generates a short uplifting reflection for an entry's text.
    async fn generate_reflection(&self, entry_text: &str) -> Result<String, AiError>;

    /// Fetches a short inspirational quote about gratitude.
    async fn daily_quote(&self) -> Result<String, AiError>;
}
