//! Moopa Bank is a mobile-first banking demo.
//!
//! This library provides a web server that directly serves HTML pages for
//! logging in, viewing the dashboard, transferring money, paying bills and
//! managing cards. All banking state is mocked in memory and backend calls
//! are simulated with fixed delays.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod auth;
mod bill_payment;
mod cards;
mod dashboard;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod latency;
mod ledger;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod session;
mod settings;
mod timezone;
mod transactions_page;
mod transfer;
mod validation;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use error::Error;
pub use latency::SimulatedLatency;
pub use ledger::Ledger;
pub use logging::logging_middleware;
pub use routing::build_router;
pub use session::User;

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
