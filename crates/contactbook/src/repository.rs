//! Contact repository.
//!
//! The only place contacts are constructed, looked up, changed, or removed.
//! Each mutation is one load, one in-memory change, and one save of the whole
//! collection; if the save fails the stored file still holds the result of the
//! last successful save.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::contact::{Contact, ContactDraft};
use crate::error::Result;
use crate::store::ContactStore;

/// CRUD operations over a [`ContactStore`].
#[derive(Debug, Clone)]
pub struct ContactRepository {
    store: ContactStore,
}

impl ContactRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }

    /// Get the underlying store.
    #[must_use]
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// All contacts in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_all(&self) -> Result<Vec<Contact>> {
        self.store.load()
    }

    /// Look up a contact by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn get_by_id(&self, id: &str) -> Result<Option<Contact>> {
        Ok(self.store.load()?.into_iter().find(|c| c.id == id))
    }

    /// Store a new contact built from `draft` and return it.
    ///
    /// The draft is trusted: validation and sanitising happen before this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn create(&self, draft: ContactDraft) -> Result<Contact> {
        let mut contacts = self.store.load()?;

        let contact = Contact::from_draft(new_id(), draft, Utc::now());
        contacts.push(contact.clone());
        self.store.save(&contacts)?;

        info!(id = %contact.id, "Created contact");
        Ok(contact)
    }

    /// Replace the mutable fields of the contact with `id`.
    ///
    /// Returns `None`, without writing, when no such contact exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn update(&self, id: &str, draft: ContactDraft) -> Result<Option<Contact>> {
        let mut contacts = self.store.load()?;

        let Some(contact) = contacts.iter_mut().find(|c| c.id == id) else {
            debug!(%id, "Update skipped, contact not found");
            return Ok(None);
        };
        contact.apply(draft, Utc::now());
        let updated = contact.clone();

        self.store.save(&contacts)?;
        info!(%id, "Updated contact");
        Ok(Some(updated))
    }

    /// Remove the contact with `id`.
    ///
    /// Returns `true` if a contact was removed, `false` if none matched, in
    /// which case nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut contacts = self.store.load()?;

        let Some(index) = contacts.iter().position(|c| c.id == id) else {
            debug!(%id, "Delete skipped, contact not found");
            return Ok(false);
        };
        contacts.remove(index);

        self.store.save(&contacts)?;
        info!(%id, "Deleted contact");
        Ok(true)
    }
}

/// A random v4 UUID, so ids stay unique however quickly contacts are created.
fn new_id() -> String {
    Uuid::new_v4().to_string()
}
