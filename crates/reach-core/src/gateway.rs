//! Trait seams for the workflow's three external collaborators.
//!
//! `reach-client` implements the two HTTP-facing traits with `reqwest`;
//! front ends supply whatever positioning source the platform offers. All
//! methods return `Send` futures so the traits can be used from
//! multi-threaded async runtimes.

use std::future::Future;

use crate::contact::ContactRecord;

/// A device position, as reported by the platform sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
  pub latitude:  f64,
  pub longitude: f64,
}

// ─── Traits ──────────────────────────────────────────────────────────────────

/// A single-shot positioning capability — no streaming, no watch handles.
pub trait LocationSensor: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Whether the platform exposes a positioning capability at all. When
  /// `false`, [`Self::current_position`] is never called.
  fn is_available(&self) -> bool;

  /// Acquire the device's current position. May suspend indefinitely on a
  /// user-gated permission prompt; any timeout is the platform's own.
  fn current_position(
    &self,
  ) -> impl Future<Output = Result<Position, Self::Error>> + Send + '_;
}

/// Resolves coordinates to a human-readable address.
pub trait ReverseGeocoder: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Look up `position`. `Ok(None)` means the service answered but its
  /// response carried no address; what to do about that is the caller's
  /// decision, not the implementation's.
  fn reverse(
    &self,
    position: Position,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + '_;
}

/// The backend contact endpoint, reduced to its one operation.
pub trait ContactGateway: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Submit `record` and return the backend-echoed copy.
  fn submit(
    &self,
    record: ContactRecord,
  ) -> impl Future<Output = Result<ContactRecord, Self::Error>> + Send + '_;
}
