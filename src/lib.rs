//! Budget Book is a web client for recording and reviewing personal finances.
//!
//! This library serves HTML pages for entering transactions, browsing them in
//! an overview table and exploring a yearly dashboard of charts. All data is
//! read from and written to an external finance REST API through
//! [BackendClient].

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HX_RESWAP;
use axum_server::Handle;
use tokio::signal;

mod about;
mod alert;
mod app_state;
mod backend;
mod config;
mod dashboard;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod select_option;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use backend::BackendClient;
pub use config::Config;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFound};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The configured base URL of the finance API could not be parsed.
    #[error("invalid API URL \"{0}\"")]
    InvalidApiUrl(String),

    /// The finance API could not be reached, or did not answer in time.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("could not reach the finance API: {0}")]
    BackendUnavailable(String),

    /// The finance API answered with a status code other than 2xx.
    #[error("the finance API responded with status {0}: {1}")]
    BackendStatus(u16, String),

    /// The finance API answered with a body that could not be decoded.
    #[error("could not decode the response from the finance API: {0}")]
    InvalidBackendResponse(String),

    /// The requested resource was not found.
    ///
    /// For update and delete requests this means the finance API does not know
    /// the transaction, e.g., because it was deleted in another tab.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An empty or whitespace-only string was used as the name of a category
    /// or payment method.
    #[error("Name cannot be empty")]
    EmptyOptionName,

    /// An empty or whitespace-only string was used as the name of a
    /// transaction.
    #[error("Transaction name cannot be empty")]
    EmptyTransactionName,

    /// The amount of a transaction must be a finite number greater than zero.
    ///
    /// Whether a transaction adds or removes money is given by its type, not
    /// by the sign of the amount.
    #[error("{0} is not a valid amount, the amount must be greater than zero")]
    InvalidAmount(f64),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Error::InvalidBackendResponse(error.to_string())
        } else if let Some(status) = error.status() {
            if status == reqwest::StatusCode::NOT_FOUND {
                Error::NotFound
            } else {
                Error::BackendStatus(status.as_u16(), error.to_string())
            }
        } else {
            Error::BackendUnavailable(error.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFound.into_response(),
            Error::BackendUnavailable(error) => {
                tracing::error!("The finance API is unavailable: {error}");
                InternalServerError {
                    description: "Finance API Unavailable",
                    fix: "Could not reach the finance API. Check that it is running and try again.",
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert fragment for requests made by HTMX.
    ///
    /// Forms and buttons target these fragments at the alert container with
    /// `hx-target-error`, so the data already on the page stays visible.
    /// The requesting element's own swap style would replace the container,
    /// so the response asks htmx to fill it instead.
    fn into_alert_response(self) -> Response {
        let (status, alert) = match self {
            Error::EmptyOptionName | Error::EmptyTransactionName | Error::InvalidAmount(_) => (
                StatusCode::BAD_REQUEST,
                Alert::error("Invalid input", &self.to_string()),
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not find transaction",
                    "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted.",
                ),
            ),
            Error::BackendUnavailable(ref error) => {
                tracing::error!("The finance API is unavailable: {error}");
                (
                    StatusCode::BAD_GATEWAY,
                    Alert::error(
                        "Finance API unavailable",
                        "Could not reach the finance API. Your changes were not saved, try again in a moment.",
                    ),
                )
            }
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::error(
                        "Something went wrong",
                        "An unexpected error occurred, check the server logs for more details.",
                    ),
                )
            }
        };

        (status, [(HX_RESWAP, "innerHTML")], alert.into_html()).into_response()
    }
}
