//! The contact record — the draft being edited and the echoed snapshot
//! share one shape.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// Mirrors the backend's expectations: a simple local@domain.tld shape and
// exactly ten ASCII digits.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern")
});
static PHONE_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern"));

// ─── Record ──────────────────────────────────────────────────────────────────

/// A contact submission. Serialises to the wire shape
/// `{"name", "email", "phoneNo", "location"}`; unknown fields in the echoed
/// response are ignored.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct ContactRecord {
  pub name:     String,
  pub email:    String,
  #[serde(rename = "phoneNo")]
  pub phone_no: String,
  /// Either empty or a resolved human-readable address.
  pub location: String,
}

/// Names a single editable field of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
  Name,
  Email,
  Phone,
  Location,
}

impl ContactRecord {
  /// Set one field by name. No validation happens here.
  pub fn set(&mut self, field: FormField, value: impl Into<String>) {
    let value = value.into();
    match field {
      FormField::Name => self.name = value,
      FormField::Email => self.email = value,
      FormField::Phone => self.phone_no = value,
      FormField::Location => self.location = value,
    }
  }

  /// Pre-submission validation, short-circuiting at the first failing rule:
  /// all-fields-present, then email shape, then phone shape.
  pub fn validate(&self) -> Result<(), ValidationError> {
    if self.name.is_empty()
      || self.email.is_empty()
      || self.phone_no.is_empty()
      || self.location.is_empty()
    {
      return Err(ValidationError::MissingFields);
    }
    if !EMAIL_PATTERN.is_match(&self.email) {
      return Err(ValidationError::InvalidEmail);
    }
    if !PHONE_PATTERN.is_match(&self.phone_no) {
      return Err(ValidationError::InvalidPhone);
    }
    Ok(())
  }

  /// True when every field is empty — the state a fresh or just-submitted
  /// draft is in.
  pub fn is_empty(&self) -> bool {
    self.name.is_empty()
      && self.email.is_empty()
      && self.phone_no.is_empty()
      && self.location.is_empty()
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn complete() -> ContactRecord {
    ContactRecord {
      name:     "A".into(),
      email:    "a@b.com".into(),
      phone_no: "1234567890".into(),
      location: "X".into(),
    }
  }

  #[test]
  fn complete_record_validates() {
    assert_eq!(complete().validate(), Ok(()));
  }

  #[test]
  fn any_empty_field_is_missing_fields() {
    for field in [
      FormField::Name,
      FormField::Email,
      FormField::Phone,
      FormField::Location,
    ] {
      let mut record = complete();
      record.set(field, "");
      assert_eq!(record.validate(), Err(ValidationError::MissingFields));
    }
  }

  #[test]
  fn missing_fields_wins_over_bad_email() {
    let mut record = complete();
    record.email = "not-an-email".into();
    record.location = String::new();
    assert_eq!(record.validate(), Err(ValidationError::MissingFields));
  }

  #[test]
  fn bad_email_shapes_are_rejected() {
    for email in ["not-an-email", "a@b", "a b@c.com", "@b.com", "a@.com "] {
      let mut record = complete();
      record.email = email.into();
      assert_eq!(
        record.validate(),
        Err(ValidationError::InvalidEmail),
        "email {email:?} should be rejected"
      );
    }
  }

  #[test]
  fn bad_email_wins_over_bad_phone() {
    let mut record = complete();
    record.email = "nope".into();
    record.phone_no = "123".into();
    assert_eq!(record.validate(), Err(ValidationError::InvalidEmail));
  }

  #[test]
  fn phone_must_be_exactly_ten_digits() {
    for phone in ["123456789", "12345678901", "12345abcde", "123-456-789"] {
      let mut record = complete();
      record.phone_no = phone.into();
      assert_eq!(
        record.validate(),
        Err(ValidationError::InvalidPhone),
        "phone {phone:?} should be rejected"
      );
    }
  }

  #[test]
  fn set_updates_the_named_field() {
    let mut record = ContactRecord::default();
    record.set(FormField::Name, "Alice");
    record.set(FormField::Phone, "0000000000");
    assert_eq!(record.name, "Alice");
    assert_eq!(record.phone_no, "0000000000");
    assert!(record.email.is_empty());
  }

  #[test]
  fn default_record_is_empty() {
    assert!(ContactRecord::default().is_empty());
    assert!(!complete().is_empty());
  }

  #[test]
  fn wire_shape_uses_camel_case_phone_no() {
    let json = serde_json::to_value(complete()).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "name": "A",
        "email": "a@b.com",
        "phoneNo": "1234567890",
        "location": "X",
      })
    );
  }

  #[test]
  fn echo_with_extra_fields_still_deserialises() {
    let record: ContactRecord = serde_json::from_value(serde_json::json!({
      "id": 7,
      "name": "A",
      "email": "a@b.com",
      "phoneNo": "1234567890",
      "location": "X",
    }))
    .unwrap();
    assert_eq!(record, complete());
  }
}
