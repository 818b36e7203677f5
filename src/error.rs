//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Could not acquire the lock on the expense store.
    ///
    /// This only happens if a thread panicked while holding the lock.
    #[error("could not acquire the expense store lock")]
    StoreLockError,

    /// The redirect URL for the expenses page could not be built.
    #[error("could not encode the query string: {0}")]
    QueryEncodingError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("An unexpected error occurred: {}", self);
        InternalServerError.into_response()
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    ///
    /// Use this for htmx routes so the alert is swapped into the alert
    /// container instead of a full error page.
    pub fn into_alert_response(self) -> Response {
        tracing::error!("An unexpected error occurred: {}", self);

        let alert = Alert::Error {
            message: "Something went wrong".to_owned(),
            details: "An unexpected error occurred, check the server logs for more details."
                .to_owned(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, alert.into_html()).into_response()
    }
}
