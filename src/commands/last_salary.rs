use time::OffsetDateTime;

use crate::builder::CreateCommand;
use crate::constants::{LAST_SALARY_AT, SALARY_ZONE};
use crate::model::application::CommandType;
use crate::utils::Elapsed;

pub const NAME: &str = "last_salary";
pub const DESCRIPTION: &str = "How long ago was the last salary?";

#[must_use]
pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION).kind(CommandType::ChatInput)
}

/// Renders how long ago the last salary was paid, as seen at `now`.
#[must_use]
pub fn run(now: OffsetDateTime) -> String {
    render(Elapsed::between_in(SALARY_ZONE, LAST_SALARY_AT, now))
}

fn render(elapsed: Elapsed) -> String {
    let Elapsed {
        days,
        hours,
        minutes,
        seconds,
    } = elapsed;

    if elapsed.is_under_a_day() {
        format!(
            "\n\n ** You guys got last salary {hours} Hours, {minutes} Minutes, {seconds} Seconds ago.** \u{1f612}\u{1f612}"
        )
    } else {
        format!(
            "\n\n ** SOON, BUT NOT TODAY ** \n\n ```Last Salary: {days} Days, {hours} Hours, {minutes} Minutes, {seconds} Seconds ago.```"
        )
    }
}
