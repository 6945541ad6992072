//! `reqwest` implementations of the `reach-core` collaborator traits:
//! [`ContactApi`] for the backend contact endpoint and [`Nominatim`] for
//! reverse geocoding.

pub mod api;
pub mod config;
pub mod error;
pub mod geocode;

pub use api::ContactApi;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use geocode::Nominatim;

use std::time::Duration;

/// Build the shared `reqwest` client from `config`. The timeout is an
/// explicit choice: `None` leaves the transport's own defaults in force.
pub(crate) fn http_client(
  config: &ClientConfig,
) -> Result<reqwest::Client> {
  let mut builder =
    reqwest::Client::builder().user_agent(&config.user_agent);
  if let Some(secs) = config.timeout_secs {
    builder = builder.timeout(Duration::from_secs(secs));
  }
  Ok(builder.build()?)
}
