//! The route guard — a stateless predicate over the session record.

use crate::session::SessionRecord;

/// What a guarded route should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome<T> {
  /// The session is authenticated; render the wrapped view unchanged.
  View(T),
  /// No identity is set; the caller should redirect to the login route.
  RedirectToLogin,
}

impl<T> RouteOutcome<T> {
  pub fn is_redirect(&self) -> bool {
    matches!(self, Self::RedirectToLogin)
  }
}

/// Gate `view` on the session's identity field. No caching, no async: the
/// decision is recomputed from the record on every call.
pub fn protect<T>(session: &SessionRecord, view: T) -> RouteOutcome<T> {
  if session.id.is_some() {
    RouteOutcome::View(view)
  } else {
    RouteOutcome::RedirectToLogin
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::session::{SessionStore, SessionUpdate};

  #[test]
  fn unset_identity_redirects_to_login() {
    let store = SessionStore::new();
    assert_eq!(
      protect(store.current(), "dashboard"),
      RouteOutcome::RedirectToLogin
    );
  }

  #[test]
  fn set_identity_passes_the_view_through() {
    let mut store = SessionStore::new();
    store.login(SessionUpdate {
      id: Some("42".into()),
      ..SessionUpdate::default()
    });
    assert_eq!(
      protect(store.current(), "dashboard"),
      RouteOutcome::View("dashboard")
    );
  }

  #[test]
  fn logout_flips_the_decision_back() {
    let mut store = SessionStore::new();
    store.login(SessionUpdate {
      id: Some("42".into()),
      ..SessionUpdate::default()
    });
    store.logout();
    assert!(protect(store.current(), ()).is_redirect());
  }

  #[test]
  fn non_identity_fields_do_not_grant_access() {
    let mut store = SessionStore::new();
    store.login(SessionUpdate {
      name: Some("Alice".into()),
      ..SessionUpdate::default()
    });
    assert!(protect(store.current(), ()).is_redirect());
  }
}
