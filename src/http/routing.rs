use std::borrow::Cow;

use crate::model::id::*;

/// A macro for defining routes. Takes as input a list of route definitions, and generates a
/// definition for the `Route` enum and implements methods on it.
macro_rules! routes {
    ($lt:lifetime, {
        $(
            $name:ident $({ $($field_name:ident: $field_type:ty),* })?,
            $path:expr;
        )+
    }) => {
        #[derive(Clone, Copy, Debug)]
        pub enum Route<$lt> {
            $(
                $name $({ $($field_name: $field_type),* })?,
            )+
        }

        impl<$lt> Route<$lt> {
            #[must_use]
            pub fn path(self) -> Cow<'static, str> {
                match self {
                    $(
                        Self::$name $({ $($field_name),* })? => $path.into(),
                    )+
                }
            }
        }
    };
}

// This macro takes as input a list of route definitions, represented in the following way:
// 1. The first line defines an enum variant representing an endpoint.
// 2. The second line provides the url for that endpoint.
routes! ('a, {
    Commands { application_id: ApplicationId },
    api!("/applications/{}/commands", application_id);

    InteractionResponse { interaction_id: InteractionId, token: &'a str },
    api!("/interactions/{}/{}/callback?with_response=true", interaction_id, token);
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        let route = Route::Commands {
            application_id: ApplicationId::new(1295276532704362496),
        };
        assert_eq!(route.path(), "https://discord.com/api/v10/applications/1295276532704362496/commands");

        let route = Route::InteractionResponse {
            interaction_id: InteractionId::new(1295620158416306227),
            token: "aW50ZXJhY3Rpb24",
        };
        assert_eq!(
            route.path(),
            "https://discord.com/api/v10/interactions/1295620158416306227/aW50ZXJhY3Rpb24/callback?with_response=true"
        );
    }
}
