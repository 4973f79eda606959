//! The journal engine: state and operations for the active user's entries.
//!
//! `JournalEngine` owns the in-memory entry list for one logged-in user and
//! coordinates the mutation operations with the reflection generator and the
//! persistent store. The displayed list is always derived through
//! `journal_core::filtered_view`; storage order stays insertion order.
//!
//! Failure semantics follow the product's degradation policy: reflection
//! failures never block a save (add falls back to a fixed string, edit keeps
//! the previous reflection) and are reported through the notification queue;
//! persistence failures are swallowed inside the storage service.


use crate::ai::ReflectionGenerator;
use crate::constants::{
    FALLBACK_REFLECTION, MSG_AI_NOT_CONFIGURED, MSG_COPIED, MSG_COPY_FAILED, MSG_ENTRY_DELETED,
    MSG_REFLECTION_FAILED, SHARE_TITLE,
};
use crate::errors::{AiError, AppResult, JournalError};
use crate::journal_core::{filtered_view, next_entry_id, Entry, FilterState, SortOrder};
use crate::share::{share_block, ShareTarget};
use crate::store::{StorageService, StringStore};
use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

/// Kind of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A message for the presentation layer, queued by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }
}

/// Journal state and operations for one active user.
pub struct JournalEngine<S: StringStore, G: ReflectionGenerator> {
    storage: StorageService<S>,
    generator: G,
    user: String,
    entries: Vec<Entry>,
    filter: FilterState,
    pending_delete: Option<i64>,
    notices: Vec<Notification>,
    ai_available: bool,
}

impl<S: StringStore, G: ReflectionGenerator> JournalEngine<S, G> {
    /// Creates an engine for `user`, loading their persisted entries.
    pub fn new(storage: StorageService<S>, generator: G, user: &str) -> Self {
        let entries = storage.load_entries(user);
        debug!("Loaded {} entries for '{}'", entries.len(), user);

        Self {
            storage,
            generator,
            user: user.to_string(),
            entries,
            filter: FilterState::default(),
            pending_delete: None,
            notices: Vec::new(),
            ai_available: true,
        }
    }

    /// The active username.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The entry list in storage order (newest additions first).
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The derived view under the current filter and sort state.
    pub fn filtered_entries(&self) -> Vec<&Entry> {
        filtered_view(&self.entries, &self.filter)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.search = term.to_string();
    }

    pub fn set_date_filter(&mut self, day: Option<NaiveDate>) {
        self.filter.date = day;
    }

    pub fn set_sort_order(&mut self, sort: SortOrder) {
        self.filter.sort = sort;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn has_filters(&self) -> bool {
        self.filter.is_active()
    }

    /// False once a generation attempt reported a missing credential.
    ///
    /// The presentation layer uses this to show a persistent banner, in
    /// addition to the per-action notification.
    pub fn ai_available(&self) -> bool {
        self.ai_available
    }

    /// Queued notifications, in the order the operations pushed them.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notices)
    }

    /// Adds a new entry with a generated reflection.
    ///
    /// Fails with `EmptyInput` (no mutation) when the text trims empty.
    /// A generation failure degrades to the fixed fallback reflection and a
    /// non-fatal error notification; the entry is saved regardless and
    /// prepended to the list.
    pub async fn add_entry(&mut self, text: &str) -> AppResult<()> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(JournalError::EmptyInput.into());
        }

        let reflection = match self.generator.generate_reflection(trimmed).await {
            Ok(reflection) => reflection,
            Err(err) => {
                self.report_generation_failure(&err);
                FALLBACK_REFLECTION.to_string()
            }
        };

        let now = Utc::now();
        let entry = Entry {
            id: next_entry_id(now.timestamp_millis(), &self.entries),
            date: now,
            text: text.to_string(),
            reflection,
        };

        info!("Adding entry {}", entry.id);
        self.entries.insert(0, entry);
        self.persist();
        Ok(())
    }

    /// Rewrites an entry's text and regenerates its reflection.
    ///
    /// Fails with `NotFound` when no entry has `id`, or `EmptyInput` when the
    /// new text trims empty; neither mutates state. On a generation failure
    /// the previous reflection is kept (unlike add's fixed fallback) and the
    /// failure is reported as a notification. The list is persisted either
    /// way.
    pub async fn edit_entry(&mut self, id: i64, new_text: &str) -> AppResult<()> {
        let trimmed = new_text.trim();
        if trimmed.is_empty() {
            return Err(JournalError::EmptyInput.into());
        }

        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(JournalError::NotFound(id))?;

        match self.generator.generate_reflection(trimmed).await {
            Ok(reflection) => {
                let entry = &mut self.entries[index];
                entry.text = new_text.to_string();
                entry.reflection = reflection;
            }
            Err(err) => {
                self.report_generation_failure(&err);
                self.entries[index].text = new_text.to_string();
            }
        }

        info!("Edited entry {}", id);
        self.persist();
        Ok(())
    }

    /// Marks `id` for deletion without mutating the list.
    ///
    /// At most one id is pending; a second request replaces the first.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    /// Clears the pending deletion, if any, with no mutation.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Removes the pending entry and persists; a no-op when nothing is
    /// pending.
    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            info!("Deleting entry {}", id);
            self.entries.retain(|entry| entry.id != id);
            self.persist();
            self.push_notice(Notification::info(MSG_ENTRY_DELETED));
        }
    }

    /// The id awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Shares an entry through `target`; no state mutation.
    ///
    /// Uses the native share surface when available, otherwise copies the
    /// block to the clipboard and reports the outcome as a notification.
    pub fn share_entry<T: ShareTarget>(&mut self, id: i64, target: &mut T) -> AppResult<()> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or(JournalError::NotFound(id))?;
        let block = share_block(entry);

        if target.can_share() {
            if let Err(err) = target.share(SHARE_TITLE, &block) {
                warn!("Native share failed: {}", err);
            }
        } else {
            match target.copy(&block) {
                Ok(()) => self.push_notice(Notification::success(MSG_COPIED)),
                Err(err) => {
                    warn!("Clipboard copy failed: {}", err);
                    self.push_notice(Notification::error(MSG_COPY_FAILED));
                }
            }
        }

        Ok(())
    }

    /// Fetches the daily quote.
    ///
    /// Quote failures are quiet: a missing credential only latches the
    /// AI-unavailable state (the banner covers it), other failures are logged.
    pub async fn daily_quote(&mut self) -> Result<String, AiError> {
        match self.generator.daily_quote().await {
            Ok(quote) => Ok(quote),
            Err(err) => {
                if matches!(err, AiError::CredentialMissing) {
                    self.ai_available = false;
                } else {
                    warn!("Daily quote failed: {}", err);
                }
                Err(err)
            }
        }
    }

    fn report_generation_failure(&mut self, err: &AiError) {
        warn!("Reflection generation failed: {}", err);
        match err {
            AiError::CredentialMissing => {
                self.ai_available = false;
                self.push_notice(Notification::error(MSG_AI_NOT_CONFIGURED));
            }
            _ => self.push_notice(Notification::error(MSG_REFLECTION_FAILED)),
        }
    }

    fn push_notice(&mut self, notice: Notification) {
        self.notices.push(notice);
    }

    fn persist(&mut self) {
        self.storage.save_entries(&self.user, &self.entries);
    }
}
