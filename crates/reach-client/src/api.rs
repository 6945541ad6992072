//! [`ContactApi`] — the `reqwest` implementation of
//! [`reach_core::gateway::ContactGateway`].

use reach_core::{contact::ContactRecord, gateway::ContactGateway};
use reqwest::Client;

use crate::{ClientConfig, Error, Result, http_client};

/// Async client for the backend contact endpoint.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct ContactApi {
  client: Client,
  config: ClientConfig,
}

impl ContactApi {
  pub fn new(config: ClientConfig) -> Result<Self> {
    let client = http_client(&config)?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.config.base_url.trim_end_matches('/'))
  }
}

impl ContactGateway for ContactApi {
  type Error = Error;

  /// `POST /api/contacts` — the backend echoes the stored record.
  async fn submit(&self, record: ContactRecord) -> Result<ContactRecord> {
    let url = self.url("/api/contacts");
    tracing::debug!(%url, "submitting contact request");

    let resp = self.client.post(url).json(&record).send().await?;
    if !resp.status().is_success() {
      return Err(Error::Status(resp.status()));
    }
    Ok(resp.json().await?)
  }
}
