//! Error types for `reach-core`.
//!
//! The `Display` string of every variant doubles as the user-visible message:
//! the form surfaces failures through a single message field, never as
//! structured objects.

use thiserror::Error;

/// A synchronous pre-submission validation failure. Checked in a fixed
/// order; the first failing rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("please fill in all fields")]
  MissingFields,

  #[error("invalid email format")]
  InvalidEmail,

  #[error("phone number must be exactly 10 digits")]
  InvalidPhone,
}

/// An error raised by a [`crate::form::ContactForm`] operation.
#[derive(Debug, Error)]
pub enum Error {
  /// No positioning capability exists on this platform.
  #[error("geolocation is not supported on this platform")]
  GeolocationUnsupported,

  /// The sensor is present but failed, was denied, or timed out. The
  /// platform-provided message is passed through verbatim.
  #[error("error fetching location: {0}")]
  Sensor(String),

  /// The reverse-geocode response carried no human-readable address.
  #[error("unable to fetch location details")]
  AddressMissing,

  /// The reverse-geocode call failed in transport (network, non-2xx,
  /// parse). Collapsed to one generic message; the cause is kept as source.
  #[error("error fetching location details")]
  GeocodeFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error(transparent)]
  Validation(#[from] ValidationError),

  /// The submission POST failed. Collapsed like [`Error::GeocodeFailed`].
  #[error("error submitting the form, please try again")]
  SubmitFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// Another resolve or submit is already in flight (single-flight guard).
  #[error("another request is already in flight")]
  Busy,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
