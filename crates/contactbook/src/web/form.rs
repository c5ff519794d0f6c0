//! Decoding of submitted contact forms.

use serde::Deserialize;

use crate::contact::ContactDraft;

/// A contact form as posted by the browser.
///
/// Uses the same camelCase names as the stored records. The older `fName`,
/// `lName`, and `emailAddress` field names are still accepted here and go no
/// further than this struct. Missing fields decode as empty strings so that
/// they fail validation instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    /// Given name.
    #[serde(rename = "firstName", alias = "fName")]
    pub first_name: String,
    /// Family name.
    #[serde(rename = "lastName", alias = "lName")]
    pub last_name: String,
    /// Email address.
    #[serde(alias = "emailAddress")]
    pub email: String,
    /// Notes.
    pub notes: String,
}

impl From<ContactForm> for ContactDraft {
    fn from(form: ContactForm) -> Self {
        ContactDraft {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            notes: form.notes,
        }
    }
}
