use serde::{Deserialize, Serialize};

use super::CommandType;
use crate::internal::prelude::*;
use crate::model::id::{ApplicationId, ChannelId, CommandId, GuildId, InteractionId};

/// An interaction when a user invokes a slash command.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct CommandInteraction {
    /// Id of the interaction.
    pub id: InteractionId,
    /// Id of the application this interaction is for.
    #[serde(default)]
    pub application_id: Option<ApplicationId>,
    /// The data of the interaction which was triggered.
    pub data: CommandData,
    /// The guild Id this interaction was sent from, if there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<GuildId>,
    /// The channel Id this interaction was sent from.
    #[serde(default)]
    pub channel_id: Option<ChannelId>,
    /// A continuation token for responding to the interaction.
    pub token: String,
    /// Always `1`.
    #[serde(default)]
    pub version: u8,
    /// The selected language of the invoking user.
    #[serde(default)]
    pub locale: Option<String>,
}

/// The command data payload.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-application-command-data-structure).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct CommandData {
    /// The Id of the invoked command.
    #[serde(default)]
    pub id: Option<CommandId>,
    /// The name of the invoked command.
    pub name: String,
    /// The application command type of the triggered application command.
    #[serde(rename = "type", default)]
    pub kind: CommandType,
    /// The parameters and the given values. Kept raw, the registered command takes none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<Value>,
    /// The Id of the guild the command is registered to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<GuildId>,
}
