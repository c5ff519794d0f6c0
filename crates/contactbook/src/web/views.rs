//! HTML views rendered with minijinja.
//!
//! Templates live in `templates/` and are compiled into the binary. Every value
//! is HTML-escaped except contact notes, which are always reduced to the notes
//! allow-list before they reach a template. Notes are rendered raw in the
//! form's textarea as well, so they edit as the markup the user typed.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::contact::{Contact, ContactDraft};
use crate::error::Result;
use crate::sanitize::clean_notes;

const LAYOUT_TEMPLATE: &str = include_str!("../../templates/layout.html");
const LIST_TEMPLATE: &str = include_str!("../../templates/list.html");
const FORM_TEMPLATE: &str = include_str!("../../templates/form.html");
const VIEW_TEMPLATE: &str = include_str!("../../templates/view.html");

/// Format used for timestamps on the detail page.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// The compiled template set.
#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

/// A contact prepared for display.
#[derive(Debug, Serialize)]
struct ContactView<'a> {
    id: &'a str,
    full_name: String,
    email: &'a str,
    notes: &'a str,
    created_at: String,
    updated_at: String,
}

impl<'a> From<&'a Contact> for ContactView<'a> {
    fn from(contact: &'a Contact) -> Self {
        Self {
            id: &contact.id,
            full_name: contact.full_name(),
            email: &contact.email,
            notes: &contact.notes,
            created_at: contact.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: contact.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl Views {
    /// Compile all templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to parse.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("layout.html", LAYOUT_TEMPLATE)?;
        env.add_template("list.html", LIST_TEMPLATE)?;
        env.add_template("form.html", FORM_TEMPLATE)?;
        env.add_template("view.html", VIEW_TEMPLATE)?;
        Ok(Self { env })
    }

    /// The listing page.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn list(&self, contacts: &[Contact]) -> Result<String> {
        let contacts: Vec<ContactView<'_>> = contacts.iter().map(ContactView::from).collect();
        self.render("list.html", context! { contacts })
    }

    /// The detail page for one contact.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn detail(&self, contact: &Contact) -> Result<String> {
        self.render("view.html", context! { contact => ContactView::from(contact) })
    }

    /// The new-contact form, optionally refilled after a rejected submission.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn add_form(&self, draft: &ContactDraft, error: Option<&str>) -> Result<String> {
        self.render(
            "form.html",
            context! {
                heading => "Add contact",
                contact => form_contact(draft),
                error,
            },
        )
    }

    /// The edit form for contact `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn edit_form(&self, id: &str, draft: &ContactDraft, error: Option<&str>) -> Result<String> {
        self.render(
            "form.html",
            context! {
                heading => "Edit contact",
                id,
                contact => form_contact(draft),
                error,
            },
        )
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}

/// A rejected draft still carries unsanitised notes.
fn form_contact(draft: &ContactDraft) -> ContactDraft {
    ContactDraft {
        notes: clean_notes(&draft.notes),
        ..draft.clone()
    }
}
