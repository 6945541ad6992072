//! The contact-form workflow.
//!
//! A finite sequence of asynchronous steps with explicit failure states:
//! `Editing → Validating → {Editing(error) | Submitting} →
//! {Editing(error) | Displaying}`, and `Displaying → Editing` on dismiss.
//! There is no terminal state; the form is re-enterable after any outcome.

use crate::{
  contact::{ContactRecord, FormField},
  error::{Error, Result},
  gateway::{ContactGateway, LocationSensor, ReverseGeocoder},
};

/// One mounted contact form. All state is local to the instance; nothing is
/// shared across forms and nothing survives a drop.
#[derive(Debug, Default)]
pub struct ContactForm {
  draft:     ContactRecord,
  submitted: Option<ContactRecord>,
  busy:      bool,
  error:     Option<String>,
}

impl ContactForm {
  /// An empty form in the `Editing` state.
  pub fn new() -> Self {
    Self::default()
  }

  // ── Accessors ───────────────────────────────────────────────────────────

  pub fn draft(&self) -> &ContactRecord {
    &self.draft
  }

  /// The backend-echoed snapshot of the last successful submission, held
  /// read-only until [`ContactForm::dismiss`].
  pub fn submitted(&self) -> Option<&ContactRecord> {
    self.submitted.as_ref()
  }

  /// True while a resolve or submit is in flight.
  pub fn is_busy(&self) -> bool {
    self.busy
  }

  /// The single user-visible error message, if any.
  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  // ── Operations ──────────────────────────────────────────────────────────

  /// Set one draft field. No validation, no other side effects.
  pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
    self.draft.set(field, value);
  }

  /// Resolve the device position to an address and store it into the
  /// draft's location field, clearing any prior error message.
  ///
  /// On any failure the draft keeps its old location value and the error
  /// message is set. At most one resolve or submit runs at a time; an
  /// overlapping call fails with [`Error::Busy`] without touching state.
  pub async fn resolve_location<S, G>(
    &mut self,
    sensor: &S,
    geocoder: &G,
  ) -> Result<()>
  where
    S: LocationSensor,
    G: ReverseGeocoder,
  {
    if self.busy {
      return Err(Error::Busy);
    }
    if !sensor.is_available() {
      return self.fail(Error::GeolocationUnsupported);
    }

    self.busy = true;
    let position = match sensor.current_position().await {
      Ok(position) => position,
      Err(e) => return self.fail(Error::Sensor(e.to_string())),
    };

    match geocoder.reverse(position).await {
      Ok(Some(address)) => {
        self.draft.location = address;
        self.error = None;
        self.busy = false;
        Ok(())
      }
      Ok(None) => self.fail(Error::AddressMissing),
      Err(e) => self.fail(Error::GeocodeFailed(Box::new(e))),
    }
  }

  /// Validate the draft and, if it passes, POST it to the backend.
  ///
  /// Validation failures set their specific message and return before any
  /// network access, with the busy flag never raised. On success the echoed
  /// record becomes the snapshot and the draft is reset to empty; on a
  /// transport failure the draft is left untouched.
  pub async fn submit<W>(&mut self, gateway: &W) -> Result<()>
  where
    W: ContactGateway,
  {
    if self.busy {
      return Err(Error::Busy);
    }
    if let Err(e) = self.draft.validate() {
      return self.fail(e.into());
    }

    self.busy = true;
    self.error = None;
    match gateway.submit(self.draft.clone()).await {
      Ok(echo) => {
        self.submitted = Some(echo);
        self.draft = ContactRecord::default();
        self.busy = false;
        Ok(())
      }
      Err(e) => self.fail(Error::SubmitFailed(Box::new(e))),
    }
  }

  /// Clear the snapshot and return to the editable state. A no-op when no
  /// snapshot exists.
  pub fn dismiss(&mut self) {
    self.submitted = None;
  }

  /// Record `err` as the user-visible message and propagate it.
  fn fail(&mut self, err: Error) -> Result<()> {
    self.busy = false;
    self.error = Some(err.to_string());
    Err(err)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
