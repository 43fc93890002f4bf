use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::http::Http;
use crate::internal::prelude::*;
use crate::model::prelude::*;

/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object).
#[derive(Clone, Debug)]
pub enum CreateInteractionResponse {
    /// Acknowledges a Ping (only required when your bot uses an HTTP endpoint URL).
    ///
    /// Corresponds to Discord's `PONG`.
    Pong,
    /// Responds to an interaction with a message.
    ///
    /// Corresponds to Discord's `CHANNEL_MESSAGE_WITH_SOURCE`.
    Message(CreateInteractionResponseMessage),
}

impl CreateInteractionResponse {
    #[must_use]
    pub fn kind(&self) -> InteractionResponseType {
        match self {
            Self::Pong => InteractionResponseType::Pong,
            Self::Message(_) => InteractionResponseType::ChannelMessageWithSource,
        }
    }

    /// Creates a response to the interaction received, through the interaction callback endpoint.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if Discord rejects the response or can't be reached.
    pub async fn execute(
        self,
        http: &Http,
        interaction_id: InteractionId,
        interaction_token: &str,
    ) -> Result<Option<InteractionCallbackResponse>> {
        http.create_interaction_response(interaction_id, interaction_token, &self).await
    }
}

impl Serialize for CreateInteractionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        match self {
            Self::Pong => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", &self.kind())?;
                map.end()
            },
            Self::Message(data) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", &self.kind())?;
                map.serialize_entry("data", data)?;
                map.end()
            },
        }
    }
}

/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-messages).
#[derive(Clone, Debug, Default, Serialize)]
#[must_use]
pub struct CreateInteractionResponseMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    tts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl CreateInteractionResponseMessage {
    /// Equivalent to [`Self::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the message is text-to-speech.
    ///
    /// Think carefully before setting this to `true`.
    ///
    /// Defaults to `false`.
    pub fn tts(mut self, tts: bool) -> Self {
        self.tts = Some(tts);
        self
    }

    /// Set the content of the message.
    ///
    /// **Note**: Message contents must be under 2000 unicode code points.
    #[inline]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}
