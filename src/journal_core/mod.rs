//! Core journal model and derived-view logic without I/O.
//!
//! This module contains the `Entry` data model together with the pure
//! filtering and sorting rules that produce the displayed view of a user's
//! entry list. Nothing here touches the store or the reflection generator.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One gratitude-journal record.
///
/// Entries are stored in insertion order (newest prepended) and serialized as
/// `{id, date, text, reflection}` with an ISO-8601 date string. The `id` and
/// `date` are fixed at creation; `text` and `reflection` may change on edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique within a user's entry set; derived from the creation timestamp.
    pub id: i64,
    /// Creation timestamp, never mutated.
    pub date: DateTime<Utc>,
    /// User-authored text; never empty or whitespace-only after trimming.
    pub text: String,
    /// AI-generated or fallback reflection.
    pub reflection: String,
}

/// Display order for the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recent entries first.
    #[default]
    Newest,
    /// Oldest entries first.
    Oldest,
}

/// Transient filter and sort state for the derived view.
///
/// Never persisted; reset only by explicit user action.
///
/// # Examples
///
/// ```
/// use grato::journal_core::{FilterState, SortOrder};
///
/// let mut filter = FilterState::default();
/// assert!(!filter.is_active());
///
/// filter.search = "café".to_string();
/// assert!(filter.is_active());
///
/// filter.clear();
/// assert!(!filter.is_active());
/// assert_eq!(filter.sort, SortOrder::Newest);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Case-insensitive substring matched against text and reflection.
    pub search: String,
    /// Calendar day the entry's recorded (UTC) timestamp must fall on.
    pub date: Option<NaiveDate>,
    /// Display order; not considered a filter by `is_active`.
    pub sort: SortOrder,
}

impl FilterState {
    /// Whether a search term or date filter is set.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.date.is_some()
    }

    /// Clears the search term and date filter, leaving the sort order as is.
    pub fn clear(&mut self) {
        self.search.clear();
        self.date = None;
    }
}

/// Computes the derived view of an entry list.
///
/// An entry matches when the search term is empty or is a case-insensitive
/// substring of its text or reflection, and when no date filter is set or the
/// entry's recorded timestamp falls on that calendar day. The result is sorted
/// by timestamp according to `filter.sort`; the sort is stable, so entries
/// sharing a timestamp keep their original relative order.
///
/// Pure and non-destructive: the input list is never reordered or mutated.
pub fn filtered_view<'a>(entries: &'a [Entry], filter: &FilterState) -> Vec<&'a Entry> {
    let needle = filter.search.to_lowercase();

    let mut view: Vec<&Entry> = entries
        .iter()
        .filter(|entry| {
            let matches_search = needle.is_empty()
                || entry.text.to_lowercase().contains(&needle)
                || entry.reflection.to_lowercase().contains(&needle);

            let matches_date = filter
                .date
                .map_or(true, |day| entry.date.date_naive() == day);

            matches_search && matches_date
        })
        .collect();

    match filter.sort {
        SortOrder::Newest => view.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Oldest => view.sort_by(|a, b| a.date.cmp(&b.date)),
    }

    view
}

/// Picks a unique id for a new entry.
///
/// Ids are the creation timestamp in milliseconds; if that value is already
/// taken (two entries created within the same millisecond) it is bumped until
/// unique, keeping ids monotonic for a growing list.
///
/// # Examples
///
/// ```
/// use grato::journal_core::next_entry_id;
///
/// assert_eq!(next_entry_id(1000, &[]), 1000);
/// ```
pub fn next_entry_id(now_millis: i64, entries: &[Entry]) -> i64 {
    let mut id = now_millis;
    while entries.iter().any(|entry| entry.id == id) {
        id += 1;
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(id: i64, date: &str, text: &str, reflection: &str) -> Entry {
        Entry {
            id,
            date: date.parse().unwrap(),
            text: text.to_string(),
            reflection: reflection.to_string(),
        }
    }

    fn sample_entries() -> Vec<Entry> {
        vec![
            entry(3, "2024-03-03T08:00:00Z", "Grateful for Sun", "Aproveite a luz."),
            entry(2, "2024-03-02T12:30:00Z", "Coffee with a friend", "Bons momentos."),
            entry(1, "2024-03-01T23:59:00Z", "Quiet evening", "Descanse bem."),
        ]
    }

    #[test]
    fn test_no_filters_returns_all_newest_first() {
        let entries = sample_entries();
        let view = filtered_view(&entries, &FilterState::default());

        let ids: Vec<i64> = view.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let entries = sample_entries();
        let filter = FilterState {
            search: "sun".to_string(),
            ..Default::default()
        };

        let view = filtered_view(&entries, &filter);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 3);
    }

    #[test]
    fn test_search_matches_reflection_too() {
        let entries = sample_entries();
        let filter = FilterState {
            search: "MOMENTOS".to_string(),
            ..Default::default()
        };

        let view = filtered_view(&entries, &filter);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 2);
    }

    #[test]
    fn test_date_filter_matches_exact_calendar_day() {
        let entries = sample_entries();

        // Entry 1 is dated 2024-03-01T23:59 and must not leak into March 2nd.
        let filter = FilterState {
            date: Some(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()),
            ..Default::default()
        };
        let view = filtered_view(&entries, &filter);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 2);

        let filter = FilterState {
            date: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            ..Default::default()
        };
        let view = filtered_view(&entries, &filter);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn test_search_and_date_filters_combine() {
        let entries = sample_entries();
        let filter = FilterState {
            search: "coffee".to_string(),
            date: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            ..Default::default()
        };

        assert!(filtered_view(&entries, &filter).is_empty());
    }

    #[test]
    fn test_filtered_view_is_idempotent() {
        let entries = sample_entries();
        let filter = FilterState {
            search: "e".to_string(),
            sort: SortOrder::Oldest,
            ..Default::default()
        };

        let first: Vec<i64> = filtered_view(&entries, &filter).iter().map(|e| e.id).collect();
        let second: Vec<i64> = filtered_view(&entries, &filter).iter().map(|e| e.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_newest_reversed_equals_oldest_for_distinct_timestamps() {
        let entries = sample_entries();

        let newest = FilterState::default();
        let oldest = FilterState {
            sort: SortOrder::Oldest,
            ..Default::default()
        };

        let mut newest_ids: Vec<i64> =
            filtered_view(&entries, &newest).iter().map(|e| e.id).collect();
        let oldest_ids: Vec<i64> =
            filtered_view(&entries, &oldest).iter().map(|e| e.id).collect();

        newest_ids.reverse();
        assert_eq!(newest_ids, oldest_ids);
    }

    #[test]
    fn test_sort_is_stable_for_shared_timestamps() {
        let shared = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        let entries = vec![
            Entry {
                id: 10,
                date: shared,
                text: "first".to_string(),
                reflection: String::new(),
            },
            Entry {
                id: 11,
                date: shared,
                text: "second".to_string(),
                reflection: String::new(),
            },
        ];

        for sort in [SortOrder::Newest, SortOrder::Oldest] {
            let filter = FilterState {
                sort,
                ..Default::default()
            };
            let ids: Vec<i64> = filtered_view(&entries, &filter).iter().map(|e| e.id).collect();
            assert_eq!(ids, vec![10, 11]);
        }
    }

    #[test]
    fn test_next_entry_id_bumps_past_collisions() {
        let shared = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        let entries = vec![
            Entry {
                id: 1000,
                date: shared,
                text: "a".to_string(),
                reflection: String::new(),
            },
            Entry {
                id: 1001,
                date: shared,
                text: "b".to_string(),
                reflection: String::new(),
            },
        ];

        assert_eq!(next_entry_id(1000, &entries), 1002);
        assert_eq!(next_entry_id(999, &entries), 999);
    }

    #[test]
    fn test_entry_serialization_layout() {
        let entry = entry(1709337540000, "2024-03-01T23:59:00Z", "Coffee", "Stay warm.");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["id"], 1709337540000i64);
        assert_eq!(json["text"], "Coffee");
        assert_eq!(json["reflection"], "Stay warm.");
        assert!(json["date"].as_str().unwrap().starts_with("2024-03-01T23:59:00"));
    }
}
