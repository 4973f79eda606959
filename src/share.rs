//! Sharing of journal entries.
//!
//! The engine formats a fixed human-readable block and hands it to a
//! `ShareTarget`: the platform's native share surface when one exists,
//! otherwise a clipboard copy. The CLI target treats the terminal as its
//! native surface and prints the block.

use crate::journal_core::Entry;
use std::io::{self, Write};

/// Platform seam for sharing an entry.
pub trait ShareTarget {
    /// Whether a native share surface is available.
    fn can_share(&self) -> bool;

    /// Hands the block to the native share surface.
    fn share(&mut self, title: &str, body: &str) -> io::Result<()>;

    /// Copies the block to the clipboard.
    fn copy(&mut self, body: &str) -> io::Result<()>;
}

/// Formats the share block for an entry.
///
/// # Examples
///
/// ```
/// use grato::journal_core::Entry;
/// use grato::share::share_block;
///
/// let entry = Entry {
///     id: 1,
///     date: "2024-03-01T12:00:00Z".parse().unwrap(),
///     text: "Café quente".to_string(),
///     reflection: "Pequenos prazeres sustentam grandes dias.".to_string(),
/// };
/// let block = share_block(&entry);
/// assert!(block.starts_with("Gratidão do dia:"));
/// assert!(block.contains("Café quente"));
/// ```
pub fn share_block(entry: &Entry) -> String {
    format!(
        "Gratidão do dia:\n\"{}\"\n\nReflexão:\n\"{}\"\n\n- Compartilhado do meu Diário de Gratidão",
        entry.text, entry.reflection
    )
}

/// Share target that writes to standard output.
#[derive(Debug, Default)]
pub struct StdoutShare;

impl ShareTarget for StdoutShare {
    fn can_share(&self) -> bool {
        true
    }

    fn share(&mut self, title: &str, body: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}\n", title)?;
        writeln!(stdout, "{}", body)?;
        Ok(())
    }

    fn copy(&mut self, body: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", body)?;
        Ok(())
    }
}
