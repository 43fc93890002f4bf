//! A set of constants used by the library.

use time::macros::datetime;
use time::OffsetDateTime;

use crate::utils::CivilZone;

/// The [UserAgent] sent along with every request.
///
/// [UserAgent]: ::reqwest::header::USER_AGENT
pub const USER_AGENT: &str = concat!(
    "DiscordBot (https://github.com/lastpay/lastpay, ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// The address the server listens on unless configured otherwise.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8787";

/// The moment the last salary was paid, as an RFC 3339 string.
pub const LAST_SALARY_AT_STR: &str = "2024-10-14T01:09:00Z";

/// The moment the last salary was paid.
pub const LAST_SALARY_AT: OffsetDateTime = datetime!(2024-10-14 01:09:00 UTC);

/// The civil time zone elapsed time is reported in.
pub const SALARY_ZONE: CivilZone = CivilZone::ASIA_DHAKA;

#[cfg(test)]
mod tests {
    use time::format_description::well_known::Rfc3339;

    use super::*;

    #[test]
    fn reference_instant_matches_its_string_form() {
        assert_eq!(OffsetDateTime::parse(LAST_SALARY_AT_STR, &Rfc3339).unwrap(), LAST_SALARY_AT);
        assert_eq!(LAST_SALARY_AT.format(&Rfc3339).unwrap(), LAST_SALARY_AT_STR);
    }
}
