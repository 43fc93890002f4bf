//! Mappings of objects received from the API.
//!
//! Only the slice of Discord's object model that an interactions endpoint touches is mapped here:
//! snowflake ids, the interaction payloads themselves, and the application commands they refer to.

pub mod application;
pub mod id;
pub mod prelude;
