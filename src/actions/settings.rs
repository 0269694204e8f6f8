//! Site settings action.

use crate::actions::{encode_params, soften};
use crate::clients::{HttpClient, HttpMethod, HttpResponse};
use crate::config::AisearchConfig;
use crate::error::Error;
use crate::models::Settings;

/// Action for the `/settings` endpoint.
///
/// The only parameter the endpoint takes is the client token, so there is no
/// parameter builder here.
#[derive(Debug)]
pub struct SettingsAction {
    config: AisearchConfig,
    client: HttpClient,
    response: Option<HttpResponse>,
    result: Option<Settings>,
}

impl SettingsAction {
    /// Creates the action.
    #[must_use]
    pub fn new(config: AisearchConfig) -> Self {
        Self {
            config,
            client: HttpClient::new(),
            response: None,
            result: None,
        }
    }

    /// Returns the last response envelope, if a fetch has happened.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// Returns the last hydrated settings; `None` after a soft failure.
    #[must_use]
    pub const fn result(&self) -> Option<&Settings> {
        self.result.as_ref()
    }

    fn build_url(&self) -> String {
        let params = [(
            "client-token",
            self.config.client_token().as_ref().to_string(),
        )];
        format!(
            "{}/settings?{}",
            self.config.base_url(),
            encode_params(&params)
        )
    }

    /// Fetches the site settings.
    ///
    /// A 200 answer hydrates into [`Settings`]; any other status clears the
    /// result and keeps the envelope (soft failure).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on transport failure or when a 200 payload does not
    /// match the expected shape.
    pub async fn get(&mut self) -> Result<Option<&Settings>, Error> {
        let url = self.build_url();
        let response = soften(self.client.request(&url, HttpMethod::Get, None).await)?;

        self.response = Some(response);
        self.result = None;
        if let Some(response) = self.response.as_ref() {
            if response.code == 200 {
                if let Some(payload) = response.payload.as_ref() {
                    self.result = Some(Settings::from_value(payload)?);
                }
            }
        }
        Ok(self.result.as_ref())
    }
}
