//! # Domain Types
//!
//! The vacation record and its merge-patch companion.
//!
//! ## Identity
//! `id` is assigned by the record store on first save (positive, never
//! reused) and is immutable afterwards. A record that has not been saved
//! yet carries no id.
//!
//! ## Merge Patch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Partial Update Semantics                             │
//! │                                                                         │
//! │  stored:  { startDate: A, endDate: B }                                  │
//! │  patch:   { startDate: X }            ← endDate not supplied            │
//! │       │                                                                 │
//! │       ▼  VacationPatch::apply_to                                        │
//! │  stored:  { startDate: X, endDate: B }  ← only supplied fields change   │
//! │                                                                         │
//! │  "absent" and "null" both mean UNCHANGED. They are never confused       │
//! │  with a legitimate stored value because the patch type wraps each       │
//! │  field in Option explicitly.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Vacation Record
// =============================================================================

/// A vacation entry: a start instant and an end instant, both optional.
///
/// There is deliberately no `start_date <= end_date` invariant. The record
/// store accepts any combination of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationRecord {
    /// Store-assigned identifier. `None` before the first save.
    #[serde(default)]
    pub id: Option<i64>,

    /// When the vacation starts (ISO-8601 instant on the wire).
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    /// When the vacation ends (ISO-8601 instant on the wire).
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

impl VacationRecord {
    /// Creates an unsaved record with the given dates.
    pub fn new(start_date: Option<DateTime<Utc>>, end_date: Option<DateTime<Utc>>) -> Self {
        VacationRecord {
            id: None,
            start_date,
            end_date,
        }
    }

    /// Returns a copy of this record with the given id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

// =============================================================================
// Vacation Patch
// =============================================================================

/// Field-by-field merge patch for a [`VacationRecord`].
///
/// `None` means "leave the stored value unchanged", `Some(v)` means
/// "overwrite with v". A supplied field can therefore never be confused
/// with an absent one, which is the whole point of this wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VacationPatch {
    /// New start instant, if supplied.
    pub start_date: Option<DateTime<Utc>>,
    /// New end instant, if supplied.
    pub end_date: Option<DateTime<Utc>>,
}

impl VacationPatch {
    /// Applies the patch to an existing record, overwriting only the
    /// supplied fields.
    pub fn apply_to(&self, existing: &mut VacationRecord) {
        if let Some(start) = self.start_date {
            existing.start_date = Some(start);
        }
        if let Some(end) = self.end_date {
            existing.end_date = Some(end);
        }
    }

    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

impl From<&VacationRecord> for VacationPatch {
    /// Builds a patch from a partially-populated record body, as sent by
    /// a merge-patch HTTP request.
    fn from(record: &VacationRecord) -> Self {
        VacationPatch {
            start_date: record.start_date,
            end_date: record.end_date,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
