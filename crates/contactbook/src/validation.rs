//! Shape checks for submitted contact fields.
//!
//! Validation answers a single yes/no question. The form is redisplayed with
//! one generic message; no attempt is made to say which field was wrong.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::contact::ContactDraft;
use crate::error::{Error, Result};

/// Message shown next to a rejected form.
pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields.";

/// Letters (any script) and spaces.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L} ]+$").expect("name pattern is valid"));

/// `something@something.something` with no whitespace.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// Check whether a name is non-empty after trimming and made of letters and spaces.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && NAME_PATTERN.is_match(name)
}

/// Check whether an email is either empty or shaped like `local@domain.tld`.
///
/// The value is matched as submitted, so surrounding whitespace is rejected.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email.is_empty() || EMAIL_PATTERN.is_match(email)
}

/// Check the first name, last name, and email of a draft. Notes are free text.
#[must_use]
pub fn is_valid(draft: &ContactDraft) -> bool {
    let valid = is_valid_name(&draft.first_name)
        && is_valid_name(&draft.last_name)
        && is_valid_email(&draft.email);
    trace!(valid, "Validated contact draft");
    valid
}

/// Like [`is_valid`], but as a `Result` for use with `?`.
///
/// # Errors
///
/// Returns [`Error::Validation`] with [`VALIDATION_MESSAGE`] if the draft is invalid.
pub fn validate(draft: &ContactDraft) -> Result<()> {
    if is_valid(draft) {
        Ok(())
    } else {
        Err(Error::validation(VALIDATION_MESSAGE))
    }
}
