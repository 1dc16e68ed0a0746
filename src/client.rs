use std::fs;

use tracing::debug;

use crate::error::{CheckError, Result};
use crate::types::{Config, Credential, Event};

/// HTTP client for the backend API. Built once per run; holds the base
/// URL and the basic credentials used by the single `/auth` call.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    user: String,
    pass: String,
}

impl ApiClient {
    /// Builds the client, optionally trusting an extra CA bundle for
    /// backends behind a private TLS authority.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(path) = &config.ca_path {
            let pem = fs::read(path).map_err(|source| CheckError::CaBundle {
                path: path.clone(),
                source,
            })?;
            builder = builder.add_root_certificate(reqwest::Certificate::from_pem(&pem)?);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: format!(
                "{}://{}:{}",
                config.api_proto, config.api_host, config.api_port
            ),
            user: config.api_user.clone(),
            pass: config.api_pass.clone(),
        })
    }

    /// Obtains a bearer token from `/auth` using basic credentials.
    pub async fn authenticate(&self) -> Result<Credential> {
        let url = format!("{}/auth", self.base_url);
        debug!("authenticating against {url}");

        let body = self
            .http
            .get(&url)
            .basic_auth(&self.user, Some(&self.pass))
            .send()
            .await?
            .text()
            .await?;

        let credential: Credential = serde_json::from_str(&body)?;
        Ok(credential)
    }

    /// Fetches all events of one namespace. A namespace with no events
    /// yields an empty list, not an error.
    pub async fn events(&self, credential: &Credential, namespace: &str) -> Result<Vec<Event>> {
        let url = format!(
            "{}/api/core/v2/namespaces/{}/events",
            self.base_url, namespace
        );
        debug!("fetching events from {url}");

        let body = self
            .http
            .get(&url)
            .bearer_auth(&credential.access_token)
            .header("Content-Type", "application/json")
            .send()
            .await?
            .text()
            .await?;

        let events: Vec<Event> = serde_json::from_str(&body)?;
        Ok(events)
    }
}
