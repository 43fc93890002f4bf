use std::sync::Arc;

use reqwest::{Client, ClientBuilder, Response as ReqwestResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use super::request::Request;
use super::routing::Route;
use super::{HttpError, LightMethod};
use crate::internal::prelude::*;
use crate::json::{self, decode_resp};
use crate::model::prelude::*;

/// A builder allowing the [`Http`] client to be configured before use.
#[must_use]
pub struct HttpBuilder {
    token: SecretString,
    proxy: Option<Url>,
}

impl HttpBuilder {
    /// Construct a new builder to call methods on for the HTTP construction. The `token` will
    /// automatically be prefixed "Bot " if not already.
    pub fn new(token: &str) -> Self {
        Self {
            token: SecretString::new(parse_token(token)),
            proxy: None,
        }
    }

    /// Sets the proxy that Discord HTTP API requests will be passed to. This is mainly intended
    /// for testing against a local fake of the API.
    ///
    /// The proxy's URL replaces `https://discord.com` in every request, so a request to
    /// `https://discord.com/api/v10/interactions/1/token/callback` is sent to
    /// `{proxy}/api/v10/interactions/1/token/callback`.
    pub fn proxy(mut self, proxy: Url) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Use the given configuration to build the `Http` client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the [`reqwest::Client`] can't be built.
    pub fn build(self) -> Result<Http> {
        let builder = configure_client_backend(Client::builder());
        let client = builder.build().map_err(HttpError::Request)?;

        Ok(Http {
            client,
            token: self.token,
            proxy: self.proxy,
        })
    }
}

fn parse_token(token: impl AsRef<str>) -> Arc<str> {
    let token = token.as_ref().trim();

    if token.starts_with("Bot ") || token.starts_with("Bearer ") {
        Arc::from(token)
    } else {
        Arc::from(format!("Bot {token}"))
    }
}

/// **Note**: For all member functions that return a [`Result`], the Error kind will be either
/// [`Error::Http`] or [`Error::Json`].
#[derive(Debug)]
pub struct Http {
    client: Client,
    token: SecretString,
    proxy: Option<Url>,
}

impl Http {
    /// Responds to an interaction through the interaction callback endpoint.
    ///
    /// The response is requested back, so the id and channel of the message Discord created are
    /// returned when it sends them. Once Discord accepted the callback, a response body that
    /// can't be decoded is logged and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on a network failure or an unsuccessful status code, and
    /// [`Error::Json`] if `map` can't be serialized.
    pub async fn create_interaction_response(
        &self,
        interaction_id: InteractionId,
        interaction_token: &str,
        map: &impl Serialize,
    ) -> Result<Option<InteractionCallbackResponse>> {
        let response = self
            .request(
                Request::new(
                    Route::InteractionResponse {
                        interaction_id,
                        token: interaction_token,
                    },
                    LightMethod::Post,
                )
                .body(Some(json::to_vec(map)?)),
            )
            .await?;

        match decode_resp(response).await {
            Err(Error::Json(why)) => {
                warn!("Undecodable interaction callback response: {why}");
                Ok(None)
            },
            other => other,
        }
    }

    /// Creates or overrides all global application commands.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on a network failure or an unsuccessful status code, and
    /// [`Error::Json`] if the response body can't be decoded.
    pub async fn create_global_commands(
        &self,
        application_id: ApplicationId,
        map: &impl Serialize,
    ) -> Result<Vec<Command>> {
        let commands = self
            .fire(
                Request::new(
                    Route::Commands {
                        application_id,
                    },
                    LightMethod::Put,
                )
                .body(Some(json::to_vec(map)?)),
            )
            .await?;

        Ok(commands.unwrap_or_default())
    }

    /// Fires off a request, deserializing the response body into the given type. An empty body
    /// deserializes to `None`.
    ///
    /// # Errors
    ///
    /// If there is an error, it will be either [`Error::Http`] or [`Error::Json`].
    pub async fn fire<T: DeserializeOwned>(&self, req: Request<'_>) -> Result<Option<T>> {
        let response = self.request(req).await?;
        decode_resp(response).await
    }

    /// Performs a request.
    ///
    /// Returns the raw reqwest Response. Use [`Self::fire`] to deserialize the response into some
    /// type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on a network failure or if the status code isn't successful.
    #[instrument(skip(self, req), fields(method = ?req.method))]
    pub async fn request(&self, req: Request<'_>) -> Result<ReqwestResponse> {
        let method = req.method.reqwest_method();
        let request = req
            .build(&self.client, self.token.expose_secret(), self.proxy.as_ref())?
            .build()
            .map_err(HttpError::Request)?;

        debug!("{} {}", request.method(), request.url().path());
        let response = self.client.execute(request).await.map_err(HttpError::Request)?;

        if response.status().is_success() {
            Ok(response)
        } else {
            warn!("Unsuccessful response: {}", response.status());
            Err(Error::Http(HttpError::from_response(response, method).await))
        }
    }
}

#[cfg(feature = "rustls_backend")]
fn configure_client_backend(builder: ClientBuilder) -> ClientBuilder {
    builder.use_rustls_tls()
}

#[cfg(all(feature = "native_tls_backend", not(feature = "rustls_backend")))]
fn configure_client_backend(builder: ClientBuilder) -> ClientBuilder {
    builder.use_native_tls()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_prefix() {
        assert_eq!(&*parse_token("abc"), "Bot abc");
        assert_eq!(&*parse_token(" Bot abc "), "Bot abc");
        assert_eq!(&*parse_token("Bearer abc"), "Bearer abc");
    }

    #[test]
    fn builder() {
        let http = HttpBuilder::new("abc")
            .proxy(Url::parse("http://127.0.0.1:9000").unwrap())
            .build()
            .unwrap();

        assert_eq!(http.proxy.as_ref().map(Url::as_str), Some("http://127.0.0.1:9000/"));
        assert_eq!(http.token.expose_secret(), "Bot abc");
        assert!(!format!("{http:?}").contains("abc"));
    }
}
