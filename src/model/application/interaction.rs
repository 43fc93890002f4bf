use serde::de::{Deserializer, Error as DeError};
use serde::ser::{Error as SerError, SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::{CommandInteraction, PingInteraction};
use crate::internal::prelude::*;
use crate::json::{deserialize_val, from_value};
use crate::model::id::InteractionId;

/// An interaction received on the endpoint, split by its [`InteractionType`].
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object)
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Interaction {
    Ping(PingInteraction),
    Command(CommandInteraction),
    /// An interaction type this endpoint does not handle. Only the type is kept.
    Other(InteractionType),
}

impl Interaction {
    /// Gets the interaction Id, if the payload carried one.
    #[must_use]
    pub fn id(&self) -> Option<InteractionId> {
        match self {
            Self::Ping(i) => i.id,
            Self::Command(i) => Some(i.id),
            Self::Other(_) => None,
        }
    }

    /// Gets the interaction type
    #[must_use]
    pub fn kind(&self) -> InteractionType {
        match self {
            Self::Ping(_) => InteractionType::Ping,
            Self::Command(_) => InteractionType::Command,
            Self::Other(kind) => *kind,
        }
    }

    /// Converts this to an [`CommandInteraction`]
    #[must_use]
    pub fn into_command(self) -> Option<CommandInteraction> {
        match self {
            Self::Command(i) => Some(i),
            _ => None,
        }
    }
}

// Manual impl needed to emulate integer enum tags
impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let map = JsonMap::deserialize(deserializer)?;

        let raw_kind = map.get("type").ok_or_else(|| DeError::missing_field("type"))?.clone();
        let value = Value::from(map);

        match deserialize_val(raw_kind)? {
            // A ping is answered whatever else the payload carries.
            InteractionType::Ping => Ok(Interaction::Ping(from_value(value).unwrap_or_default())),
            InteractionType::Command => {
                from_value(value).map(Interaction::Command).map_err(DeError::custom)
            },
            kind => Ok(Interaction::Other(kind)),
        }
    }
}

impl Serialize for Interaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        let value = match self {
            Self::Ping(i) => serde_json::to_value(i),
            Self::Command(i) => serde_json::to_value(i),
            Self::Other(_) => Ok(Value::Object(JsonMap::new())),
        }
        .map_err(S::Error::custom)?;

        let Value::Object(fields) = value else {
            return Err(S::Error::custom("interaction did not serialize to a map"));
        };

        let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
        map.serialize_entry("type", &self.kind())?;
        for (key, value) in &fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

enum_number! {
    /// The type of an Interaction.
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-type).
    #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
    #[serde(from = "u8", into = "u8")]
    #[non_exhaustive]
    pub enum InteractionType {
        Ping = 1,
        Command = 2,
        Component = 3,
        Autocomplete = 4,
        Modal = 5,
        _ => Unknown(u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, from_slice, json};

    #[test]
    fn interaction_type() {
        assert_json(&InteractionType::Ping, json!(1));
        assert_json(&InteractionType::Command, json!(2));
        assert_json(&InteractionType::Unknown(42), json!(42));
    }

    #[test]
    fn bare_ping() {
        let interaction: Interaction = from_slice(br#"{"type":1}"#).unwrap();

        assert_eq!(interaction.kind(), InteractionType::Ping);
        assert!(interaction.id().is_none());
    }

    #[test]
    fn full_ping() {
        let interaction: Interaction = from_slice(
            br#"{
                "application_id": "1295276532704362496",
                "id": "1295620158416306227",
                "token": "aW50ZXJhY3Rpb246MTI5NTYyMDE1ODQxNjMwNjIyNw",
                "type": 1,
                "user": {"id": "123", "username": "discord"},
                "version": 1
            }"#,
        )
        .unwrap();

        let Interaction::Ping(ping) = interaction else { panic!("not a ping: {interaction:?}") };
        assert_eq!(ping.id, Some(InteractionId::new(1295620158416306227)));
        assert_eq!(ping.version, 1);
    }

    #[test]
    fn ping_ignores_malformed_fields() {
        for body in [
            &br#"{"type":1,"id":"0"}"#[..],
            br#"{"type":1,"version":1000}"#,
            br#"{"type":1,"token":5}"#,
            br#"{"type":1,"application_id":"abc"}"#,
        ] {
            let interaction: Interaction = from_slice(body).unwrap();

            assert_eq!(interaction.kind(), InteractionType::Ping);
            assert!(interaction.id().is_none());
        }
    }

    #[test]
    fn command() {
        let interaction: Interaction = from_slice(
            br#"{"type":2,"id":"7","token":"t","channel_id":"9","data":{"name":"last_salary"}}"#,
        )
        .unwrap();

        assert_eq!(interaction.kind(), InteractionType::Command);
        assert_eq!(interaction.id(), Some(InteractionId::new(7)));
        assert_eq!(crate::json::to_value(&interaction).unwrap()["type"], json!(2));
        assert_eq!(interaction.into_command().unwrap().data.name, "last_salary");
    }

    #[test]
    fn other_kinds_keep_their_type() {
        let interaction: Interaction =
            from_slice(br#"{"type":3,"id":"7","data":{"custom_id":"x"}}"#).unwrap();
        assert_eq!(interaction.kind(), InteractionType::Component);

        let interaction: Interaction = from_slice(br#"{"type":99}"#).unwrap();
        assert_eq!(interaction.kind(), InteractionType::Unknown(99));
        assert_eq!(crate::json::to_value(&interaction).unwrap(), json!({"type": 99}));
    }

    #[test]
    fn malformed_payloads() {
        assert!(from_slice::<Interaction>(b"{}").is_err());
        assert!(from_slice::<Interaction>(b"not json").is_err());
        assert!(from_slice::<Interaction>(br#"{"type":"1"}"#).is_err());
        assert!(from_slice::<Interaction>(br#"{"type":2,"id":"7","token":"t"}"#).is_err());
    }
}
