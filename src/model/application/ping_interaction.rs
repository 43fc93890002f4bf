use serde::{Deserialize, Serialize};

use crate::model::id::{ApplicationId, InteractionId};

/// A ping interaction, which can only be received through an endpoint url.
///
/// Discord sends it while the endpoint url is being registered and expects a pong back. Only the
/// interaction type decides whether a payload is a ping, so every field here may be missing.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-structure).
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[non_exhaustive]
pub struct PingInteraction {
    /// Id of the interaction.
    #[serde(default)]
    pub id: Option<InteractionId>,
    /// Id of the application this interaction is for.
    #[serde(default)]
    pub application_id: Option<ApplicationId>,
    /// A continuation token for responding to the interaction.
    #[serde(default)]
    pub token: Option<String>,
    /// Always `1`.
    #[serde(default)]
    pub version: u8,
}
