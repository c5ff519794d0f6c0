//! `contactbook` - A small contact book served as HTML over a JSON file
//!
//! This library provides the contact model, the file-backed record store, the
//! repository that owns identifiers and timestamps, field validation and markup
//! sanitising, and the axum web front end that ties them together.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod logging;
pub mod repository;
pub mod sanitize;
pub mod store;
pub mod validation;
pub mod web;

pub use config::Config;
pub use contact::{Contact, ContactDraft};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use repository::ContactRepository;
pub use store::ContactStore;
