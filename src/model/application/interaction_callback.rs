use serde::{Deserialize, Serialize};

use super::{InteractionResponseType, InteractionType};
use crate::model::id::{ChannelId, InteractionId, MessageId};

/// What Discord sends back from the interaction callback endpoint when `with_response` is set.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-callback-interaction-callback-response-object).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct InteractionCallbackResponse {
    /// The interaction the callback answered.
    pub interaction: InteractionCallbackInfo,
    /// The resource created by the callback, if any.
    #[serde(default)]
    pub resource: Option<InteractionCallbackResource>,
}

/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-callback-interaction-callback-object).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct InteractionCallbackInfo {
    pub id: InteractionId,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(default)]
    pub response_message_id: Option<MessageId>,
}

/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-callback-interaction-callback-resource-object).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct InteractionCallbackResource {
    #[serde(rename = "type")]
    pub kind: InteractionResponseType,
    /// The message created by a message callback.
    #[serde(default)]
    pub message: Option<CallbackMessage>,
}

/// The two fields of the created message this crate cares about.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct CallbackMessage {
    pub id: MessageId,
    pub channel_id: ChannelId,
}

impl InteractionCallbackResponse {
    /// The id of the message the callback created, if it created one.
    #[must_use]
    pub fn message_id(&self) -> Option<MessageId> {
        self.resource
            .as_ref()
            .and_then(|resource| resource.message.as_ref())
            .map(|message| message.id)
            .or(self.interaction.response_message_id)
    }

    /// The channel the created message was posted in.
    #[must_use]
    pub fn channel_id(&self) -> Option<ChannelId> {
        self.resource
            .as_ref()
            .and_then(|resource| resource.message.as_ref())
            .map(|message| message.channel_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{from_value, json};

    #[test]
    fn callback_response() {
        let response: InteractionCallbackResponse = from_value(json!({
            "interaction": {
                "id": "1295626540398723082",
                "type": 2,
                "activity_instance_id": null,
                "response_message_id": "1295626541908541532",
                "response_message_loading": false,
                "response_message_ephemeral": false
            },
            "resource": {
                "type": 4,
                "message": {
                    "id": "1295626541908541532",
                    "channel_id": "1066676046512476231",
                    "content": "hello",
                    "type": 20
                }
            }
        }))
        .unwrap();

        assert_eq!(response.message_id(), Some(MessageId::new(1295626541908541532)));
        assert_eq!(response.channel_id(), Some(ChannelId::new(1066676046512476231)));
        assert_eq!(
            response.resource.map(|r| r.kind),
            Some(InteractionResponseType::ChannelMessageWithSource)
        );
    }

    #[test]
    fn callback_without_resource() {
        let response: InteractionCallbackResponse = from_value(json!({
            "interaction": {"id": "1", "type": 2, "response_message_id": "5"}
        }))
        .unwrap();

        assert_eq!(response.message_id(), Some(MessageId::new(5)));
        assert_eq!(response.channel_id(), None);
    }
}
