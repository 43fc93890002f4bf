//! lastpay is a Discord [interactions endpoint] that answers a single slash command with how long
//! ago the last salary was paid.
//!
//! Discord delivers every interaction as an HTTP `POST` to the endpoint. Each request is
//! cryptographically verified with the application's public key (see [`interactions_endpoint`]),
//! parsed into an [`Interaction`], and dispatched on its type:
//!
//! - handshake pings are acknowledged with a pong;
//! - the registered command renders its message and pushes it to Discord through the interaction
//!   callback endpoint (see [`http::Http`]), then acknowledges the inbound request;
//! - anything else is rejected.
//!
//! The [`server`] module wires this up as an [`axum`] router, and [`config::Config`] reads the
//! credentials from the environment.
//!
//! [interactions endpoint]: https://discord.com/developers/docs/interactions/receiving-and-responding#receiving-an-interaction
//! [`Interaction`]: crate::model::application::Interaction
#![forbid(unsafe_code)]
#![warn(
    unused,
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::clone_on_ref_ptr,
    clippy::non_ascii_literal,
    clippy::fallible_impl_from,
    clippy::let_underscore_must_use,
    clippy::format_push_string,
    clippy::pedantic
)]
#![allow(
    // Allowed as they are too pedantic
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::unreadable_literal,
    clippy::wildcard_imports,
    clippy::doc_markdown,
    clippy::missing_panics_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[macro_use]
mod internal;

pub mod builder;
pub mod commands;
pub mod config;
pub mod constants;
pub mod http;
pub mod interactions_endpoint;
pub mod json;
pub mod model;
pub mod server;
pub mod utils;

mod error;
mod secret_string;

pub use crate::error::{Error, Result};
pub use crate::secret_string::SecretString;
