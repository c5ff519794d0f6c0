//! HTTP request handlers.
//!
//! Each handler turns a request into repository calls and answers with a
//! rendered page or a redirect. Rejected forms are re-rendered with the
//! submitted values; errors become responses through
//! [`IntoResponse`](axum::response::IntoResponse) on [`Error`].

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::form::ContactForm;
use super::AppState;
use crate::contact::{Contact, ContactDraft};
use crate::error::{Error, Result};
use crate::repository::ContactRepository;
use crate::sanitize::sanitize_draft;
use crate::validation::validate;

/// Where successful form submissions and deletes end up.
pub const LIST_PATH: &str = "/contacts/list";

/// Body of the response when a delete removed nothing.
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete contact";

/// GET /
pub async fn index() -> Redirect {
    Redirect::to(LIST_PATH)
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /contacts/list
pub async fn list_contacts(State(state): State<AppState>) -> Result<Html<String>> {
    let contacts = state.with_repository(ContactRepository::list_all).await?;
    Ok(Html(state.views.list(&contacts)?))
}

/// GET /contacts/add
pub async fn new_contact_form(State(state): State<AppState>) -> Result<Html<String>> {
    Ok(Html(state.views.add_form(&ContactDraft::default(), None)?))
}

/// POST /contacts
pub async fn create_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response> {
    let draft = ContactDraft::from(form);
    match validate(&draft) {
        Ok(()) => {}
        Err(Error::Validation { message }) => {
            debug!("Rejected new contact form");
            let page = state.views.add_form(&draft, Some(message.as_str()))?;
            return Ok(Html(page).into_response());
        }
        Err(e) => return Err(e),
    }

    let clean = sanitize_draft(&draft);
    state
        .with_repository(move |repo| repo.create(clean))
        .await?;
    Ok(Redirect::to(LIST_PATH).into_response())
}

/// GET /contacts/:id
pub async fn show_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let contact = find_contact(&state, id).await?;
    Ok(Html(state.views.detail(&contact)?))
}

/// GET /contacts/:id/edit
pub async fn edit_contact_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let contact = find_contact(&state, id).await?;
    let page = state
        .views
        .edit_form(&contact.id, &contact.to_draft(), None)?;
    Ok(Html(page))
}

/// POST /contacts/:id
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ContactForm>,
) -> Result<Response> {
    let existing = find_contact(&state, id).await?;

    let draft = ContactDraft::from(form);
    match validate(&draft) {
        Ok(()) => {}
        Err(Error::Validation { message }) => {
            debug!(id = %existing.id, "Rejected contact edit form");
            let page = state.views.edit_form(&existing.id, &draft, Some(message.as_str()))?;
            return Ok(Html(page).into_response());
        }
        Err(e) => return Err(e),
    }

    let clean = sanitize_draft(&draft);
    let id = existing.id;
    let lookup = id.clone();
    let updated = state
        .with_repository(move |repo| repo.update(&lookup, clean))
        .await?;

    match updated {
        Some(_) => Ok(Redirect::to(LIST_PATH).into_response()),
        // Removed between the lookup and the write
        None => Err(Error::not_found(id)),
    }
}

/// POST /contacts/:id/delete
///
/// A delete that removes nothing answers 500, like a failed write.
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let lookup = id.clone();
    let removed = state
        .with_repository(move |repo| repo.delete(&lookup))
        .await?;

    if removed {
        Ok(Redirect::to(LIST_PATH).into_response())
    } else {
        warn!(%id, "Delete removed no contact");
        Ok((StatusCode::INTERNAL_SERVER_ERROR, DELETE_FAILED_MESSAGE).into_response())
    }
}

async fn find_contact(state: &AppState, id: String) -> Result<Contact> {
    let lookup = id.clone();
    state
        .with_repository(move |repo| repo.get_by_id(&lookup))
        .await?
        .ok_or_else(|| Error::not_found(id))
}
