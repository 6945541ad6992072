//! Connection settings for the contact backend and the geocoding service.

use serde::Deserialize;

/// Where the original deployment posted its contact requests.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// The public OpenStreetMap Nominatim instance.
pub const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org";

/// Settings shared by [`crate::ContactApi`] and [`crate::Nominatim`].
///
/// Every field has a default, so an empty config source yields a working
/// configuration pointed at a local backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
  /// Base URL of the contact backend; `/api/contacts` is appended.
  pub base_url: String,

  /// Base URL of the reverse-geocoding service; `/reverse` is appended.
  pub geocode_url: String,

  /// Sent on every request. The public Nominatim instance rejects clients
  /// without an identifying agent.
  pub user_agent: String,

  /// Per-request timeout in seconds. `None` relies entirely on the
  /// transport's own defaults.
  pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url:     DEFAULT_BASE_URL.to_string(),
      geocode_url:  DEFAULT_GEOCODE_URL.to_string(),
      user_agent:   concat!("reach/", env!("CARGO_PKG_VERSION")).to_string(),
      timeout_secs: Some(30),
    }
  }
}

impl ClientConfig {
  /// A default configuration pointed at `base_url`.
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      ..Self::default()
    }
  }
}
