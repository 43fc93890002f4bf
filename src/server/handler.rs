use axum::http::StatusCode;
use axum::response::Response;
use tracing::{error, info, warn};

use super::response::json_response;
use super::AppState;
use crate::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use crate::commands::SlashCommand;
use crate::config::CallbackPolicy;
use crate::http::Http;
use crate::internal::prelude::*;
use crate::json::json;
use crate::model::prelude::*;

/// Where the message created by an interaction callback ended up.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CallbackReceipt {
    /// Only known when Discord sends the created message back.
    pub message_id: Option<MessageId>,
    pub channel_id: Option<ChannelId>,
}

/// Runs `command` and answers the interaction with its reply.
///
/// The reply doesn't go out in the HTTP response: it's pushed to the interaction callback
/// endpoint first, and only once that request settled is the inbound request acknowledged.
pub async fn handle_command(
    state: &AppState,
    command: SlashCommand,
    interaction: &CommandInteraction,
) -> Response {
    let content = command.run(state.clock.now());
    let outcome = deliver(&state.http, interaction, content).await;

    acknowledge(outcome, state.callback_policy)
}

/// Sends `content` as a channel message through the interaction callback endpoint.
///
/// # Errors
///
/// Returns [`Error::Http`] if the callback request fails or is rejected. It's never retried.
pub async fn deliver(
    http: &Http,
    interaction: &CommandInteraction,
    content: String,
) -> Result<CallbackReceipt> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().content(content),
    );
    let callback = response.execute(http, interaction.id, &interaction.token).await?;

    Ok(CallbackReceipt {
        message_id: callback.as_ref().and_then(InteractionCallbackResponse::message_id),
        channel_id: callback
            .as_ref()
            .and_then(InteractionCallbackResponse::channel_id)
            .or(interaction.channel_id),
    })
}

/// Answers the inbound request once [`deliver`] settled.
pub fn acknowledge(outcome: Result<CallbackReceipt>, policy: CallbackPolicy) -> Response {
    match (outcome, policy) {
        (Ok(receipt), _) => {
            info!(
                message_id = ?receipt.message_id,
                channel_id = ?receipt.channel_id,
                "Interaction callback delivered"
            );
            success()
        },
        (Err(why), CallbackPolicy::Acknowledge) => {
            warn!("Interaction callback failed: {why}");
            success()
        },
        (Err(why), CallbackPolicy::Propagate) => {
            error!("Interaction callback failed: {why}");
            json_response(&json!({"error": "Callback Failed"}), StatusCode::BAD_GATEWAY)
        },
    }
}

fn success() -> Response {
    json_response(&json!({"success": true}), StatusCode::OK)
}
