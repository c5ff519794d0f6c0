//! Record store for contactbook.
//!
//! The whole contact collection lives in one pretty-printed JSON array. Every
//! read parses the full file and every write replaces it. There is no locking:
//! two writers racing on the same file lose one of their updates.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::contact::Contact;
use crate::error::{Error, Result};

/// File-backed storage for the contact collection.
#[derive(Debug, Clone)]
pub struct ContactStore {
    /// Path to the contacts file.
    path: PathBuf,
}

impl ContactStore {
    /// Create a store bound to the given file without touching the disk.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open a store, creating the parent directory and an empty contacts
    /// file if they don't exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the initial file cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self::new(path.as_ref());

        if let Some(parent) = store.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        if store.path.exists() {
            debug!("Using contacts file at {}", store.path.display());
        } else {
            store.save(&[])?;
            info!("Created empty contacts file at {}", store.path.display());
        }

        Ok(store)
    }

    /// Get the path to the contacts file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full contact collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageRead`] if the file is missing, unreadable, or
    /// not a JSON array of contacts.
    pub fn load(&self) -> Result<Vec<Contact>> {
        let data = fs::read_to_string(&self.path).map_err(|source| self.read_error(source))?;
        let contacts: Vec<Contact> =
            serde_json::from_str(&data).map_err(|e| self.read_error(e.into()))?;

        debug!(count = contacts.len(), "Loaded contacts");
        Ok(contacts)
    }

    /// Replace the stored collection with `contacts`.
    ///
    /// The JSON is written to a temporary file next to the target and then
    /// renamed over it, so a reader sees either the old or the new content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageWrite`] on any serialization or I/O failure.
    pub fn save(&self, contacts: &[Contact]) -> Result<()> {
        let mut data =
            serde_json::to_string_pretty(contacts).map_err(|e| self.write_error(e.into()))?;
        data.push('\n');

        let tmp_path = self.temp_path();
        if let Err(source) = write_synced(&tmp_path, data.as_bytes()) {
            remove_temp(&tmp_path);
            return Err(self.write_error(source));
        }
        if let Err(source) = fs::rename(&tmp_path, &self.path) {
            remove_temp(&tmp_path);
            return Err(self.write_error(source));
        }

        debug!(count = contacts.len(), "Saved contacts");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map_or_else(|| "contacts".into(), |n| n.to_string_lossy().into_owned());
        self.path
            .with_file_name(format!(".{name}-{}.tmp", Uuid::new_v4().simple()))
    }

    fn read_error(&self, source: std::io::Error) -> Error {
        Error::StorageRead {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: std::io::Error) -> Error {
        Error::StorageWrite {
            path: self.path.clone(),
            source,
        }
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn remove_temp(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %e, "Failed to remove temporary file");
        }
    }
}
