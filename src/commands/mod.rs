//! The slash commands this application answers.
//!
//! Each command lives in its own module with a `NAME`, a `register` function returning its
//! definition and a `run` function rendering its reply.

pub mod last_salary;

use std::fmt;

use time::OffsetDateTime;

use crate::builder::CreateCommand;

/// The command table.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum SlashCommand {
    /// Tells how long ago the last salary was paid.
    LastSalary,
}

impl SlashCommand {
    /// Every registered command.
    pub const ALL: &'static [Self] = &[Self::LastSalary];

    /// Looks a command up by name, ignoring ASCII case.
    #[must_use]
    pub fn find(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|command| command.name().eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LastSalary => last_salary::NAME,
        }
    }

    /// The definition sent to Discord when registering the command.
    #[must_use]
    pub fn register(self) -> CreateCommand {
        match self {
            Self::LastSalary => last_salary::register(),
        }
    }

    /// Renders the command's reply as seen at `now`.
    #[must_use]
    pub fn run(self, now: OffsetDateTime) -> String {
        match self {
            Self::LastSalary => last_salary::run(now),
        }
    }

    /// Definitions of every command, for a bulk overwrite.
    #[must_use]
    pub fn definitions() -> Vec<CreateCommand> {
        Self::ALL.iter().map(|command| command.register()).collect()
    }
}

impl fmt::Display for SlashCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(SlashCommand::find("last_salary"), Some(SlashCommand::LastSalary));
        assert_eq!(SlashCommand::find("LAST_Salary"), Some(SlashCommand::LastSalary));
        assert_eq!(SlashCommand::find("foo"), None);
        assert_eq!(SlashCommand::find(""), None);
    }

    #[test]
    fn every_command_has_a_definition() {
        assert_eq!(SlashCommand::definitions().len(), SlashCommand::ALL.len());
        assert_eq!(SlashCommand::LastSalary.to_string(), "last_salary");
    }
}
