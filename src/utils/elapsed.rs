use std::fmt;

use time::macros::offset;
use time::{OffsetDateTime, UtcOffset};

const NANOS_PER_DAY: i128 = 86_400 * 1_000_000_000;

/// A named civil time zone.
///
/// Only zones with a fixed offset can be represented, which covers the zones this crate reports
/// in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CivilZone {
    name: &'static str,
    offset: UtcOffset,
}

impl CivilZone {
    /// Bangladesh Standard Time. No daylight saving time has been observed since 2009.
    pub const ASIA_DHAKA: Self = Self::new("Asia/Dhaka", offset!(+6));

    #[must_use]
    pub const fn new(name: &'static str, offset: UtcOffset) -> Self {
        Self {
            name,
            offset,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn offset(self) -> UtcOffset {
        self.offset
    }

    /// Expresses the instant as wall-clock time in this zone. The instant itself doesn't change.
    #[must_use]
    pub fn localize(self, instant: OffsetDateTime) -> OffsetDateTime {
        instant.to_offset(self.offset)
    }
}

impl fmt::Display for CivilZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The time between two instants, split into whole days and the hours, minutes and seconds
/// left over.
///
/// `days` is floored. The remaining components are truncated toward zero, so for an instant
/// before the reference they come out negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    /// Measures `now - reference`.
    #[must_use]
    pub fn between(reference: OffsetDateTime, now: OffsetDateTime) -> Self {
        let delta = now - reference;
        let seconds = delta.whole_seconds();

        Self {
            days: delta.whole_nanoseconds().div_euclid(NANOS_PER_DAY) as i64,
            hours: seconds / 3600 % 24,
            minutes: seconds / 60 % 60,
            seconds: seconds % 60,
        }
    }

    /// Measures `now - reference` with both instants read as wall-clock time in `zone`.
    #[must_use]
    pub fn between_in(zone: CivilZone, reference: OffsetDateTime, now: OffsetDateTime) -> Self {
        Self::between(zone.localize(reference), zone.localize(now))
    }

    /// Whether less than a full day has passed.
    #[must_use]
    pub fn is_under_a_day(&self) -> bool {
        self.days < 1
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;
    use time::Duration;

    use super::*;

    const REFERENCE: OffsetDateTime = datetime!(2024-10-14 01:09:00 UTC);

    fn elapsed(days: i64, hours: i64, minutes: i64, seconds: i64) -> Elapsed {
        Elapsed {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    #[test]
    fn same_day() {
        let now = datetime!(2024-10-14 05:09:30 UTC);

        let elapsed = Elapsed::between(REFERENCE, now);
        assert_eq!(elapsed, self::elapsed(0, 4, 0, 30));
        assert!(elapsed.is_under_a_day());
    }

    #[test]
    fn several_days() {
        let now = REFERENCE + Duration::days(2) + Duration::hours(3);

        let elapsed = Elapsed::between(REFERENCE, now);
        assert_eq!(elapsed, self::elapsed(2, 3, 0, 0));
        assert!(!elapsed.is_under_a_day());
    }

    #[test]
    fn day_boundary() {
        let almost = REFERENCE + Duration::days(1) - Duration::seconds(1);
        assert_eq!(Elapsed::between(REFERENCE, almost), elapsed(0, 23, 59, 59));

        let exactly = REFERENCE + Duration::days(1);
        assert_eq!(Elapsed::between(REFERENCE, exactly), elapsed(1, 0, 0, 0));
    }

    #[test]
    fn fractional_seconds_are_truncated() {
        let now = REFERENCE + Duration::milliseconds(1_900);
        assert_eq!(Elapsed::between(REFERENCE, now), elapsed(0, 0, 0, 1));
    }

    #[test]
    fn before_the_reference() {
        let now = REFERENCE - Duration::minutes(90);

        let elapsed = Elapsed::between(REFERENCE, now);
        assert_eq!(elapsed, self::elapsed(-1, -1, -30, 0));
        assert!(elapsed.is_under_a_day());
    }

    #[test]
    fn zone_does_not_change_the_distance() {
        let now = datetime!(2024-10-16 09:41:07 +00:00);

        assert_eq!(
            Elapsed::between_in(CivilZone::ASIA_DHAKA, REFERENCE, now),
            Elapsed::between(REFERENCE, now)
        );
        assert_eq!(Elapsed::between(REFERENCE, now), elapsed(2, 8, 32, 7));
    }

    #[test]
    fn localize() {
        let local = CivilZone::ASIA_DHAKA.localize(REFERENCE);

        assert_eq!(local.hour(), 7);
        assert_eq!(local.minute(), 9);
        assert_eq!(local, REFERENCE);
        assert_eq!(CivilZone::ASIA_DHAKA.to_string(), "Asia/Dhaka");
    }
}
