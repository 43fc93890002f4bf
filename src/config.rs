//! Server configuration.
//!
//! Loads configuration from environment variables. The binary reads an optional `.env` file into
//! the environment first.

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use url::Url;

use crate::constants;
use crate::http::{Http, HttpBuilder};
use crate::interactions_endpoint::Verifier;
use crate::internal::prelude::*;
use crate::model::id::ApplicationId;

pub const APPLICATION_ID_VAR: &str = "DISCORD_APPLICATION_ID";
pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
pub const PUBLIC_KEY_VAR: &str = "DISCORD_PUBLIC_KEY";
pub const BIND_ADDRESS_VAR: &str = "BIND_ADDRESS";
pub const API_PROXY_VAR: &str = "DISCORD_API_PROXY";
pub const CALLBACK_POLICY_VAR: &str = "CALLBACK_FAILURE_POLICY";

/// What the command handler does when pushing its message to the interaction callback endpoint
/// fails. Failed callbacks are never retried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallbackPolicy {
    /// Log the failure and still acknowledge the inbound request with `{"success": true}`.
    #[default]
    Acknowledge,
    /// Log the failure and answer the inbound request with `502 Bad Gateway`.
    Propagate,
}

impl FromStr for CallbackPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "acknowledge" => Ok(Self::Acknowledge),
            "propagate" => Ok(Self::Propagate),
            other => Err(ConfigError::Invalid {
                name: CALLBACK_POLICY_VAR,
                reason: format!("expected `acknowledge` or `propagate`, got `{other}`"),
            }),
        }
    }
}

/// Configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// The application's id, shown on the greeting page and used to register commands.
    pub application_id: ApplicationId,
    /// The bot token authenticating outbound requests.
    pub token: SecretString,
    /// The application's public key as a 64 digit hex string.
    pub public_key: String,
    /// Server bind address (default: "0.0.0.0:8787")
    pub bind_address: SocketAddr,
    /// Base url replacing `https://discord.com/` on outbound requests.
    pub api_proxy: Option<Url>,
    /// See [`CallbackPolicy`].
    pub callback_policy: CallbackPolicy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is missing or a variable can't be parsed.
    pub fn from_env() -> StdResult<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value. Empty values
    /// count as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is missing or a variable can't be parsed.
    pub fn from_lookup<F>(lookup: F) -> StdResult<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let application_id = required(APPLICATION_ID_VAR)?
            .trim()
            .parse::<ApplicationId>()
            .map_err(|why| ConfigError::Invalid {
                name: APPLICATION_ID_VAR,
                reason: format!("{why}"),
            })?;

        let bind_address = var(BIND_ADDRESS_VAR)
            .unwrap_or_else(|| constants::DEFAULT_BIND_ADDRESS.into())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|why| ConfigError::Invalid {
                name: BIND_ADDRESS_VAR,
                reason: format!("{why}"),
            })?;

        let api_proxy = var(API_PROXY_VAR)
            .map(|proxy| Url::parse(proxy.trim()))
            .transpose()
            .map_err(|why| ConfigError::Invalid {
                name: API_PROXY_VAR,
                reason: format!("{why}"),
            })?;

        let callback_policy = var(CALLBACK_POLICY_VAR)
            .map(|policy| policy.parse::<CallbackPolicy>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            application_id,
            token: SecretString::from(required(TOKEN_VAR)?.trim().to_string()),
            public_key: required(PUBLIC_KEY_VAR)?.trim().to_string(),
            bind_address,
            api_proxy,
            callback_policy,
        })
    }

    /// Builds the verifier for inbound requests from the configured public key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the public key is malformed.
    pub fn verifier(&self) -> Result<Verifier> {
        Ok(Verifier::try_from_hex(&self.public_key)?)
    }

    /// Builds the client for outbound requests.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the underlying client can't be built.
    pub fn http(&self) -> Result<Http> {
        let mut builder = HttpBuilder::new(self.token.expose_secret());
        if let Some(proxy) = &self.api_proxy {
            builder = builder.proxy(proxy.clone());
        }

        builder.build()
    }
}

/// An error while reading the configuration.
#[derive(Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required variable is not set.
    Missing(&'static str),
    /// A variable is set but its value can't be used.
    Invalid { name: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "{name} must be set"),
            Self::Invalid {
                name,
                reason,
            } => write!(f, "{name} is invalid: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}
