use reqwest::Client;

use crate::error::PocketError;

const BASE_URL: &str = "https://getpocket.com/v3";

/// Pocket v3 API client
pub struct PocketClient {
    client: Client,
    consumer_key: String,
    access_token: String,
}

impl PocketClient {
    /// Create a new client from a shared reqwest Client and API credentials
    pub fn new(
        client: Client,
        consumer_key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            consumer_key: consumer_key.into(),
            access_token: access_token.into(),
        }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", BASE_URL, path)
    }

    pub(crate) fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub(crate) fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Check the response status; Pocket reports the failure cause in the
    /// X-Error header rather than the body.
    pub(crate) fn check_response(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .headers()
                .get("X-Error")
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned)
                .unwrap_or_else(|| {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                });
            return Err(PocketError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}
