//! Core contact types for contactbook.
//!
//! This module defines the stored `Contact` record and the `ContactDraft`
//! field set that callers submit to create or replace one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact record.
///
/// Field names are camelCase on disk. The legacy `fName`/`lName` keys are
/// accepted when reading an older file and rewritten on the next save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Opaque unique identifier, assigned by the repository.
    pub id: String,

    /// Given name.
    #[serde(alias = "fName")]
    pub first_name: String,

    /// Family name.
    #[serde(alias = "lName")]
    pub last_name: String,

    /// Email address, empty when none was given.
    #[serde(default)]
    pub email: String,

    /// Free-text notes with inline markup limited to the notes allow-list.
    #[serde(default)]
    pub notes: String,

    /// When the contact was created. Never changes.
    pub created_at: DateTime<Utc>,

    /// When the contact was last written.
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Build a new record from a draft with both timestamps set to `now`.
    #[must_use]
    pub fn from_draft(id: String, draft: ContactDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field with the draft's values.
    ///
    /// `updated_at` is moved to `now`, or kept if the clock went backwards,
    /// so that `created_at <= updated_at` always holds.
    pub fn apply(&mut self, draft: ContactDraft, now: DateTime<Utc>) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.email = draft.email;
        self.notes = draft.notes;
        self.updated_at = now.max(self.updated_at);
    }

    /// The mutable fields of this record as a draft.
    #[must_use]
    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            notes: self.notes.clone(),
        }
    }

    /// First and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The caller-supplied fields of a contact.
///
/// Used for both creation and update; an update replaces all four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address, may be empty.
    pub email: String,
    /// Free-text notes.
    pub notes: String,
}

impl ContactDraft {
    /// Create a draft from its four fields.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            notes: notes.into(),
        }
    }
}
