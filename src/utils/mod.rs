//! A set of utilities to help with common use cases that are not required to fully use the
//! library.

mod clock;
mod elapsed;

pub use self::clock::Clock;
pub use self::elapsed::{CivilZone, Elapsed};
