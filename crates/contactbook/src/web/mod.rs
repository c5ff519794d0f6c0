//! Web front end for contactbook.
//!
//! An axum router over the contact repository. Pages are server-rendered HTML;
//! form submissions redirect back to the listing on success.

mod form;
mod handlers;
mod views;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::repository::ContactRepository;
use crate::store::ContactStore;

pub use form::ContactForm;
pub use handlers::{DELETE_FAILED_MESSAGE, LIST_PATH};
pub use views::Views;

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    repository: Arc<ContactRepository>,
    views: Arc<Views>,
}

impl AppState {
    /// Create handler state over a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the view templates fail to compile.
    pub fn new(repository: ContactRepository) -> Result<Self> {
        Ok(Self {
            repository: Arc::new(repository),
            views: Arc::new(Views::new()?),
        })
    }

    /// Run a repository operation on the blocking thread pool.
    ///
    /// Repository calls do synchronous file I/O. Nothing serializes two
    /// requests against each other; the last save wins.
    async fn with_repository<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&ContactRepository) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let repository = Arc::clone(&self.repository);
        tokio::task::spawn_blocking(move || op(&repository))
            .await
            .map_err(|e| Error::internal(format!("repository task failed: {e}")))?
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/contacts", post(handlers::create_contact))
        .route("/contacts/list", get(handlers::list_contacts))
        .route("/contacts/add", get(handlers::new_contact_form))
        .route(
            "/contacts/:id",
            get(handlers::show_contact).post(handlers::update_contact),
        )
        .route("/contacts/:id/edit", get(handlers::edit_contact_form))
        .route("/contacts/:id/delete", post(handlers::delete_contact))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Open the configured contacts file and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the store cannot be opened, the address cannot be
/// bound, or the server stops with an error.
pub async fn serve(config: &Config) -> Result<()> {
    let store = ContactStore::open(config.data_path())?;
    info!("Contacts file: {}", store.path().display());

    let state = AppState::new(ContactRepository::new(store))?;
    let addr = config.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::server(format!("failed to bind to {addr}: {e}")))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound { id } => {
                debug!(%id, "Contact not found");
                (StatusCode::NOT_FOUND, "Contact not found").into_response()
            }
            Error::Validation { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message).into_response()
            }
            other => {
                error!(error = %other, storage = other.is_storage(), "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
