//! Models about application commands and the interactions they produce.

mod command;
pub use command::*;
mod command_interaction;
pub use command_interaction::*;
mod interaction;
pub use interaction::*;
mod interaction_callback;
pub use interaction_callback::*;
mod ping_interaction;
pub use ping_interaction::*;

use serde::{Deserialize, Serialize};

enum_number! {
    /// The type of an interaction response.
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-interaction-callback-type).
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
    #[serde(from = "u8", into = "u8")]
    #[non_exhaustive]
    pub enum InteractionResponseType {
        /// Acknowledges a handshake ping.
        Pong = 1,
        /// Responds to an interaction with a message.
        ChannelMessageWithSource = 4,
        _ => Unknown(u8),
    }
}
