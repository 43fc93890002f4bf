//! The HTTP entry point.
//!
//! - `GET /` answers with a greeting, as a cheap way to check the server is up;
//! - `POST /` receives interactions from Discord;
//! - anything else, `HEAD /` included, is a `404`.

mod dispatch;
mod handler;
mod response;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

pub use self::dispatch::{dispatch, hello, interactions};
pub use self::handler::{acknowledge, deliver, handle_command, CallbackReceipt};
pub use self::response::{json_response, text_response, JSON_CONTENT_TYPE};
use crate::config::{CallbackPolicy, Config};
use crate::http::Http;
use crate::interactions_endpoint::Verifier;
use crate::internal::prelude::*;
use crate::model::id::ApplicationId;
use crate::utils::Clock;

/// Read-only state shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub verifier: Arc<Verifier>,
    pub http: Arc<Http>,
    pub application_id: ApplicationId,
    pub callback_policy: CallbackPolicy,
    pub clock: Clock,
}

impl AppState {
    /// Builds the state from the configuration, reading the time from the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the public key is malformed, or [`Error::Http`] if the
    /// HTTP client can't be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            verifier: Arc::new(config.verifier()?),
            http: Arc::new(config.http()?),
            application_id: config.application_id,
            callback_policy: config.callback_policy,
            clock: Clock::System,
        })
    }
}

async fn not_found() -> axum::response::Response {
    response::not_found()
}

/// Builds the router serving the interactions endpoint.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello).head(not_found).post(interactions).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
}

/// Serves the interactions endpoint on the configured address until Ctrl-C is pressed.
///
/// # Errors
///
/// Returns an error if the state can't be built from the configuration, or [`Error::Io`] if the
/// address can't be bound.
pub async fn serve(config: &Config) -> Result<()> {
    let state = AppState::from_config(config)?;

    let listener = TcpListener::bind(config.bind_address).await?;
    info!(
        address = %config.bind_address,
        application_id = %config.application_id,
        "Listening for interactions"
    );

    axum::serve(listener, router(state)).with_graceful_shutdown(shutdown_signal()).await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(why) => {
            tracing::error!("Failed to listen for Ctrl-C: {why}");
            std::future::pending::<()>().await;
        },
    }
}
