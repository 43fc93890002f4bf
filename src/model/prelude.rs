//! Re-exports every model type, for handlers that touch ids and interaction payloads alike.
//!
//! ```rust,no_run
//! use lastpay::model::prelude::*;
//! ```
#[doc(inline)]
pub use super::{application::*, id::*};
