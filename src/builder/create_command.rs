use serde::Serialize;

use crate::http::Http;
use crate::internal::prelude::*;
use crate::model::prelude::*;

/// A builder for creating a new [`Command`].
///
/// [`Self::name`] and [`Self::description`] are required fields.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-object-application-command-structure).
#[derive(Clone, Debug, Serialize)]
#[must_use]
pub struct CreateCommand {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    kind: Option<CommandType>,
}

impl CreateCommand {
    /// Creates a new builder with the given name, leaving all other fields empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: None,
            name: name.into(),
            description: None,
        }
    }

    /// Specifies the name of the application command, replacing the current value as set in
    /// [`Self::new`].
    ///
    /// **Note**: Must be between 1 and 32 lowercase characters, matching `r"^[\w-]{1,32}$"`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Specifies the type of the application command.
    pub fn kind(mut self, kind: CommandType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Specifies the description of the application command.
    ///
    /// **Note**: Must be between 1 and 100 characters long.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overwrites every global command of the application with `commands`. Commands missing
    /// from the list are deleted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if invalid data is given. See [Discord's docs] for more details.
    ///
    /// May also return [`Error::Json`] if there is an error in deserializing the API response.
    ///
    /// [Discord's docs]: https://discord.com/developers/docs/interactions/application-commands#bulk-overwrite-global-application-commands
    pub async fn set_global_commands(
        http: &Http,
        application_id: ApplicationId,
        commands: &[Self],
    ) -> Result<Vec<Command>> {
        http.create_global_commands(application_id, &commands).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{json, to_value};

    #[test]
    fn serializes_only_what_is_set() {
        assert_eq!(to_value(CreateCommand::new("ping")).unwrap(), json!({"name": "ping"}));

        let command = CreateCommand::new("ping")
            .name("last_salary")
            .description("How long ago was the last salary?")
            .kind(CommandType::ChatInput);
        assert_eq!(
            to_value(command).unwrap(),
            json!({
                "name": "last_salary",
                "description": "How long ago was the last salary?",
                "type": 1,
            })
        );
    }
}
