use std::error::Error as StdError;
use std::fmt;
use std::io::Error as IoError;

use crate::config::ConfigError;
use crate::http::HttpError;
use crate::interactions_endpoint::InvalidKey;
use crate::json::JsonError;

/// The common result type between most library functions.
///
/// The library exposes functions which, for a result type, exposes only one type, rather than the
/// usual 2 (`Result<T, Error>`). This is because all functions that return a result return
/// lastpay's [`Error`], so this is implied, and a "simpler" result is used.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A common error enum returned by most of the library's functionality within a custom
/// [`Result`].
///
/// The most common error type, the [`HttpError`], is wrapped around this in the form of the
/// [`Self::Http`] variant.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An error from the [`std::io`] module.
    Io(IoError),
    /// An error from the `serde_json` crate.
    Json(JsonError),
    /// An error while reading the configuration.
    Config(ConfigError),
    /// The configured public key can't be used to verify interactions.
    InvalidKey(InvalidKey),
    /// An HTTP error from talking to the Discord API.
    Http(HttpError),
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Error {
        Error::Io(e)
    }
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Error {
        Error::Json(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Error {
        Error::Config(e)
    }
}

impl From<InvalidKey> for Error {
    fn from(e: InvalidKey) -> Error {
        Error::InvalidKey(e)
    }
}

impl From<HttpError> for Error {
    fn from(e: HttpError) -> Error {
        Error::Http(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(HttpError::Request(e))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(inner) => fmt::Display::fmt(&inner, f),
            Self::Json(inner) => fmt::Display::fmt(&inner, f),
            Self::Config(inner) => fmt::Display::fmt(&inner, f),
            Self::InvalidKey(inner) => fmt::Display::fmt(&inner, f),
            Self::Http(inner) => fmt::Display::fmt(&inner, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(inner) => Some(inner),
            Self::Json(inner) => Some(inner),
            Self::Config(inner) => Some(inner),
            Self::InvalidKey(inner) => Some(inner),
            Self::Http(inner) => Some(inner),
        }
    }
}
