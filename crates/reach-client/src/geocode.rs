//! [`Nominatim`] — reverse geocoding against an OpenStreetMap Nominatim
//! instance.

use reach_core::gateway::{Position, ReverseGeocoder};
use reqwest::Client;
use serde::Deserialize;

use crate::{ClientConfig, Error, Result, http_client};

/// Async client for Nominatim's `/reverse` endpoint.
#[derive(Debug, Clone)]
pub struct Nominatim {
  client: Client,
  config: ClientConfig,
}

impl Nominatim {
  pub fn new(config: ClientConfig) -> Result<Self> {
    let client = http_client(&config)?;
    Ok(Self { client, config })
  }
}

/// The slice of Nominatim's response we care about. The field is absent
/// when the coordinates resolve to nothing (open ocean, bad input).
#[derive(Debug, Deserialize)]
struct ReverseResponse {
  display_name: Option<String>,
}

impl ReverseGeocoder for Nominatim {
  type Error = Error;

  /// `GET /reverse?format=json&lat=<lat>&lon=<lon>`
  async fn reverse(&self, position: Position) -> Result<Option<String>> {
    let url = format!(
      "{}/reverse",
      self.config.geocode_url.trim_end_matches('/')
    );
    tracing::debug!(
      %url,
      lat = position.latitude,
      lon = position.longitude,
      "reverse geocoding"
    );

    let resp = self
      .client
      .get(url)
      .query(&[
        ("format", "json".to_string()),
        ("lat", position.latitude.to_string()),
        ("lon", position.longitude.to_string()),
      ])
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Error::Status(resp.status()));
    }
    let body: ReverseResponse = resp.json().await?;
    Ok(body.display_name)
  }
}
