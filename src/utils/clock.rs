use time::OffsetDateTime;

/// Where the current instant comes from.
///
/// Request handling asks the clock once per command invocation; nothing is cached between
/// requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    /// The system clock, in UTC.
    #[default]
    System,
    /// A frozen instant.
    Fixed(OffsetDateTime),
}

impl Clock {
    #[must_use]
    pub fn now(self) -> OffsetDateTime {
        match self {
            Self::System => OffsetDateTime::now_utc(),
            Self::Fixed(instant) => instant,
        }
    }
}
