//! The HTTP module which provides functions for performing requests to endpoints in Discord's API.
//!
//! Only the two endpoints this application talks to are covered: the interaction callback, used
//! to answer a slash command, and the bulk overwrite of global commands, used to register them.
//! Both require an authorization token, which the [`Http`] client sends as a bot token.
//!
//! Failed requests are never retried.

mod client;
mod error;
pub mod request;
pub mod routing;

use reqwest::Method;

pub use self::client::*;
pub use self::error::*;
pub use self::request::Request;
pub use self::routing::Route;

/// An method used for specifying a route's HTTP method.
///
/// This is needed because `reqwest`'s `Method` enum does not derive Copy.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LightMethod {
    /// Indicates that a route is for the `POST` method only.
    Post,
    /// Indicates that a route is for the `PUT` method only.
    Put,
}

impl LightMethod {
    #[must_use]
    pub const fn reqwest_method(self) -> Method {
        match self {
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
        }
    }
}
