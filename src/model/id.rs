//! A collection of newtypes defining type-strong IDs.

use std::fmt;
use std::num::NonZeroU64;

use serde::de::{Deserialize, Deserializer, Error as DeError, Unexpected, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::internal::prelude::*;

macro_rules! id_u64 {
    ($($(#[$attr:meta])* $name:ident;)*) => {
        $(
            $(#[$attr])*
            #[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
            pub struct $name(NonZeroU64);

            impl $name {
                /// Creates a new Id from a u64
                ///
                /// # Panics
                /// Panics if `id` is zero.
                #[inline]
                #[must_use]
                #[track_caller]
                pub const fn new(id: u64) -> Self {
                    match NonZeroU64::new(id) {
                        Some(inner) => Self(inner),
                        None => panic!(concat!("Attempted to call ", stringify!($name), "::new with invalid (0) value")),
                    }
                }

                /// Retrieves the inner `id` as a [`u64`].
                #[inline]
                #[must_use]
                pub const fn get(self) -> u64 {
                    self.0.get()
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($name)).field(&self.get()).finish()
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.0, f)
                }
            }

            impl From<NonZeroU64> for $name {
                fn from(id: NonZeroU64) -> $name {
                    $name(id)
                }
            }

            impl From<$name> for u64 {
                fn from(id: $name) -> u64 {
                    id.get()
                }
            }

            impl std::str::FromStr for $name {
                type Err = std::num::ParseIntError;

                fn from_str(s: &str) -> StdResult<Self, Self::Err> {
                    s.parse().map(Self)
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
                    deserializer.deserialize_any(SnowflakeVisitor).map(Self)
                }
            }

            impl Serialize for $name {
                fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
                    serializer.collect_str(&self.0)
                }
            }
        )*
    }
}

id_u64! {
    /// An identifier for an Application.
    ApplicationId;
    /// An identifier for a Channel
    ChannelId;
    /// An identifier for a slash command.
    CommandId;
    /// An identifier for a Guild
    GuildId;
    /// An identifier for an interaction.
    InteractionId;
    /// An identifier for a Message
    MessageId;
}

/// Discord sends snowflakes as strings, but accepts and occasionally sends plain integers.
struct SnowflakeVisitor;

impl<'de> Visitor<'de> for SnowflakeVisitor {
    type Value = NonZeroU64;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a non-zero string or integer snowflake")
    }

    fn visit_u64<E: DeError>(self, value: u64) -> StdResult<Self::Value, E> {
        NonZeroU64::new(value).ok_or_else(|| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: DeError>(self, value: i64) -> StdResult<Self::Value, E> {
        let value = u64::try_from(value)
            .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))?;
        self.visit_u64(value)
    }

    fn visit_str<E: DeError>(self, value: &str) -> StdResult<Self::Value, E> {
        value.parse().map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}
