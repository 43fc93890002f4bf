use reqwest::header::{
    HeaderMap as Headers,
    HeaderValue,
    AUTHORIZATION,
    CONTENT_LENGTH,
    CONTENT_TYPE,
    USER_AGENT,
};
use reqwest::{Client, RequestBuilder as ReqwestRequestBuilder};
use tracing::instrument;
use url::Url;

use super::{HttpError, LightMethod, Route};
use crate::constants;
use crate::internal::prelude::*;

/// A single outbound request to the Discord API.
#[derive(Clone, Debug)]
#[must_use]
pub struct Request<'a> {
    pub(super) body: Option<Vec<u8>>,
    pub(super) method: LightMethod,
    pub(super) route: Route<'a>,
}

impl<'a> Request<'a> {
    pub const fn new(route: Route<'a>, method: LightMethod) -> Self {
        Self {
            body: None,
            method,
            route,
        }
    }

    pub fn body(mut self, body: Option<Vec<u8>>) -> Self {
        self.body = body;
        self
    }

    #[instrument(skip(token))]
    pub fn build(
        self,
        client: &Client,
        token: &str,
        proxy: Option<&Url>,
    ) -> Result<ReqwestRequestBuilder> {
        let mut path = self.route.path().into_owned();

        if let Some(proxy) = proxy {
            // trim_end_matches to prevent double slashes after the domain
            path = path.replace("https://discord.com", proxy.as_str().trim_end_matches('/'));
        }

        let url = Url::parse(&path).map_err(HttpError::Url)?;
        let mut builder = client.request(self.method.reqwest_method(), url);

        let mut headers = Headers::with_capacity(4);
        headers.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));
        let authorization = HeaderValue::from_str(token).map_err(HttpError::InvalidHeader)?;
        headers.insert(AUTHORIZATION, authorization);

        // Discord will return a 400: Bad Request response if we set the content type header,
        // but don't give a body.
        if self.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let length = self.body.as_ref().map_or(0, Vec::len);
        headers.insert(CONTENT_LENGTH, HeaderValue::from(length));

        if let Some(bytes) = self.body {
            builder = builder.body(bytes);
        }

        Ok(builder.headers(headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::InteractionId;

    fn request() -> Request<'static> {
        Request::new(
            Route::InteractionResponse {
                interaction_id: InteractionId::new(7),
                token: "tok",
            },
            LightMethod::Post,
        )
        .body(Some(br#"{"type":1}"#.to_vec()))
    }

    #[test]
    fn builds_headers_and_url() {
        let built = request().build(&Client::new(), "Bot secret", None).unwrap().build().unwrap();

        assert_eq!(built.method(), &reqwest::Method::POST);
        assert_eq!(
            built.url().as_str(),
            "https://discord.com/api/v10/interactions/7/tok/callback?with_response=true"
        );
        assert_eq!(built.headers()[AUTHORIZATION], "Bot secret");
        assert_eq!(built.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(built.headers()[CONTENT_LENGTH], "10");
        assert_eq!(built.headers()[USER_AGENT], constants::USER_AGENT);
    }

    #[test]
    fn proxy_replaces_the_host() {
        let proxy = Url::parse("http://127.0.0.1:9000/").unwrap();
        let built =
            request().build(&Client::new(), "Bot secret", Some(&proxy)).unwrap().build().unwrap();

        assert_eq!(
            built.url().as_str(),
            "http://127.0.0.1:9000/api/v10/interactions/7/tok/callback?with_response=true"
        );
    }
}
