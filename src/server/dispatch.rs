use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use tracing::{debug, error, warn};

use super::handler::handle_command;
use super::response::{bad_signature, json_response, text_response, unknown_type};
use super::AppState;
use crate::builder::CreateInteractionResponse;
use crate::commands::SlashCommand;
use crate::interactions_endpoint::{
    verify_request,
    VerificationResult,
    SIGNATURE_HEADER,
    TIMESTAMP_HEADER,
};
use crate::model::application::Interaction;

/// `GET /`
pub async fn hello(State(state): State<AppState>) -> Response {
    text_response(format!("\u{1f44b} {}", state.application_id), StatusCode::OK)
}

/// `POST /`
pub async fn interactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = headers.get(SIGNATURE_HEADER).and_then(|value| value.to_str().ok());
    let timestamp = headers.get(TIMESTAMP_HEADER).and_then(|value| value.to_str().ok());

    match verify_request(&state.verifier, &body, signature, timestamp) {
        Ok(VerificationResult::Valid(interaction)) => dispatch(&state, interaction).await,
        Ok(VerificationResult::Invalid) => {
            debug!("Rejected request with a missing or invalid signature");
            bad_signature()
        },
        Err(why) => {
            warn!("Signed request body is not an interaction: {why}");
            unknown_type()
        },
    }
}

/// Routes a verified interaction on its type.
pub async fn dispatch(state: &AppState, interaction: Interaction) -> Response {
    match interaction {
        Interaction::Ping(ping) => {
            debug!(interaction_id = ?ping.id, "Answering handshake ping");
            json_response(&CreateInteractionResponse::Pong, StatusCode::OK)
        },
        Interaction::Command(interaction) => match SlashCommand::find(&interaction.data.name) {
            Some(command) => {
                debug!(command = %command, interaction_id = %interaction.id, "Running command");
                handle_command(state, command, &interaction).await
            },
            None => {
                warn!(name = %interaction.data.name, "Unknown command");
                unknown_type()
            },
        },
        Interaction::Other(kind) => {
            error!(?kind, "Unknown Type");
            unknown_type()
        },
    }
}
