//! Builders for the request bodies sent to Discord.
//!
//! Each builder serializes into exactly the JSON an endpoint expects, and offers a method that
//! sends it through an [`Http`](crate::http::Http) client.

mod create_command;
mod create_interaction_response;

pub use create_command::*;
pub use create_interaction_response::*;
