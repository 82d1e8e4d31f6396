//! Payview is a web app for browsing a company's employee transactions.
//!
//! This library provides a REST API that directly serves HTML pages: one
//! viewer page with an employee filter and a paginated transaction feed.
//! The state behind the page is owned by [TransactionBrowser], which
//! reconciles the three queries of the remote data source (the employee
//! list, the cursor-paginated all-transactions feed and the per-employee
//! feed) into a single displayed list.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod browser;
mod endpoints;
mod html;
mod logging;
mod model;
mod not_found;
mod routing;
mod source;
mod viewer;

pub use app_state::{AppBrowser, AppState, SharedBrowser};
pub use browser::TransactionBrowser;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use model::{Employee, EmployeeId, PageCursor, Transaction, TransactionPage};
pub use routing::build_router;
pub use source::{MockTransactionSource, PageConfig, TransactionSource};

use crate::html::{error_view, render};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
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
    /// A query to the remote data source failed.
    ///
    /// `operation` names the query for logging; `reason` carries the
    /// transport's own description of the failure.
    #[error("could not fetch {operation}: {reason}")]
    Fetch {
        /// The query that failed, e.g. "employee list".
        operation: &'static str,
        /// The transport's description of the failure.
        reason: String,
    },

    /// A per-employee query referenced an employee the data source does not
    /// know about.
    #[error("no employee with the ID \"{0}\" exists in the data source")]
    UnknownEmployee(EmployeeId),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::UnknownEmployee(employee_id) => {
                tracing::error!("Request for unknown employee: {employee_id}");
                render(
                    StatusCode::NOT_FOUND,
                    error_view(
                        "Unknown Employee",
                        "404",
                        "That employee does not exist.",
                        "Pick an employee from the filter list on the viewer page.",
                    ),
                )
            }
            error @ Error::Fetch { .. } => {
                tracing::error!("A fetch from the data source failed: {error}");
                render(
                    StatusCode::BAD_GATEWAY,
                    error_view(
                        "Fetch Failed",
                        "502",
                        "The data source did not respond.",
                        "Try again in a moment; the data already loaded is unaffected.",
                    ),
                )
            }
        }
    }
}
