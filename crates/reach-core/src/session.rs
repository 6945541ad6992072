//! The in-memory session store.
//!
//! Holds the single record describing the currently authenticated identity.
//! The store is an owned value handed to whoever needs it — there is no
//! ambient singleton — so tests and front ends inject their own fixtures.

use serde::{Deserialize, Serialize};

// ─── Record ──────────────────────────────────────────────────────────────────

/// The current session. Either every field is unset (logged out) or `id` is
/// set (logged in); the route guard only ever inspects `id`.
///
/// The password is an opaque string supplied by the external authentication
/// flow. It is never validated or hashed here.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct SessionRecord {
  pub id:       Option<String>,
  pub name:     Option<String>,
  pub email:    Option<String>,
  pub password: Option<String>,
  pub phone_no: Option<String>,
  pub role:     Option<String>,
  pub address:  Option<String>,
}

/// A partial login payload. `Some` fields overwrite the current record;
/// absent fields leave the prior value in place (full-merge semantics — a
/// partial payload can leave stale fields behind, see DESIGN.md).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionUpdate {
  pub id:       Option<String>,
  pub name:     Option<String>,
  pub email:    Option<String>,
  pub password: Option<String>,
  pub phone_no: Option<String>,
  pub role:     Option<String>,
  pub address:  Option<String>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Owns the session record and exposes its two mutations and one selector.
#[derive(Debug, Default)]
pub struct SessionStore {
  record: SessionRecord,
}

impl SessionStore {
  /// A store in the logged-out (all-unset) state.
  pub fn new() -> Self {
    Self::default()
  }

  /// Merge `payload` over the current record.
  pub fn login(&mut self, payload: SessionUpdate) {
    let record = &mut self.record;
    merge(&mut record.id, payload.id);
    merge(&mut record.name, payload.name);
    merge(&mut record.email, payload.email);
    merge(&mut record.password, payload.password);
    merge(&mut record.phone_no, payload.phone_no);
    merge(&mut record.role, payload.role);
    merge(&mut record.address, payload.address);
  }

  /// Unconditionally reset to the all-unset record.
  pub fn logout(&mut self) {
    self.record = SessionRecord::default();
  }

  /// The current record, for read-only inspection.
  pub fn current(&self) -> &SessionRecord {
    &self.record
  }
}

fn merge(slot: &mut Option<String>, value: Option<String>) {
  if value.is_some() {
    *slot = value;
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
