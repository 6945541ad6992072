//! reach CLI — a terminal front end for the contact workflow.
//!
//! Reads `config.toml` (or the path given with `--config`), builds the
//! session from the `[session]` table, and drives the form once: the
//! `contact` route is guarded, so submitting without a logged-in session
//! redirects you to "log in" (i.e. add a session to the config).

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use reach_client::{ClientConfig, ContactApi, Nominatim};
use reach_core::{
  contact::FormField,
  form::ContactForm,
  gateway::{LocationSensor, Position},
  guard::{RouteOutcome, protect},
  session::{SessionStore, SessionUpdate},
};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Reach contact-form client")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Submit a contact request (requires a logged-in session).
  Contact {
    /// Full name.
    #[arg(long)]
    name: String,

    /// Email address.
    #[arg(long)]
    email: String,

    /// Phone number, exactly 10 digits.
    #[arg(long)]
    phone: String,

    /// Address to submit as-is, instead of resolving coordinates.
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    location: Option<String>,

    /// Latitude to reverse-geocode into an address.
    #[arg(long, requires = "lon")]
    lat: Option<f64>,

    /// Longitude to reverse-geocode into an address.
    #[arg(long, requires = "lat")]
    lon: Option<f64>,
  },

  /// Show the session record the route guard sees.
  Whoami,
}

/// Everything the binary reads from config.toml / `REACH_*` variables.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CliConfig {
  client:  ClientConfig,
  /// The login payload an external authentication flow would supply.
  session: Option<SessionUpdate>,
}

/// Stand-in for a platform positioning sensor: the coordinates come from
/// command-line flags. Absent flags model a platform without geolocation.
#[derive(Debug, Clone, Copy)]
struct CoordinateSensor(Option<Position>);

#[derive(Debug, thiserror::Error)]
#[error("no coordinates supplied")]
struct NoCoordinates;

impl LocationSensor for CoordinateSensor {
  type Error = NoCoordinates;

  fn is_available(&self) -> bool {
    self.0.is_some()
  }

  async fn current_position(&self) -> Result<Position, NoCoordinates> {
    self.0.ok_or(NoCoordinates)
  }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config.clone()).required(false))
    // Nested keys use double underscores: REACH_CLIENT__BASE_URL,
    // REACH_SESSION__ID, and so on.
    .add_source(
      config::Environment::with_prefix("REACH")
        .prefix_separator("_")
        .separator("__"),
    )
    .build()
    .context("failed to read config file")?;

  let cfg: CliConfig = settings
    .try_deserialize()
    .context("failed to deserialise configuration")?;

  // Build the session the way an external auth flow would: one login with
  // whatever payload the config carries.
  let mut session = SessionStore::new();
  if let Some(payload) = cfg.session {
    session.login(payload);
  }

  match cli.command {
    Command::Whoami => {
      let record = session.current();
      match &record.id {
        Some(id) => {
          println!("Logged in as id {id}");
          if let Some(name) = &record.name {
            println!("  Name:  {name}");
          }
          if let Some(email) = &record.email {
            println!("  Email: {email}");
          }
          if let Some(role) = &record.role {
            println!("  Role:  {role}");
          }
        }
        None => println!("Not logged in"),
      }
      Ok(())
    }

    Command::Contact {
      name,
      email,
      phone,
      location,
      lat,
      lon,
    } => {
      // Route guard: the contact view is only rendered for a session with
      // an identity.
      if let RouteOutcome::RedirectToLogin = protect(session.current(), ()) {
        anyhow::bail!(
          "not logged in — add a [session] table with an id to {}",
          cli.config.display()
        );
      }

      let mut form = ContactForm::new();
      form.set_field(FormField::Name, name);
      form.set_field(FormField::Email, email);
      form.set_field(FormField::Phone, phone);

      if let Some(location) = location {
        form.set_field(FormField::Location, location);
      } else if let (Some(lat), Some(lon)) = (lat, lon) {
        let sensor = CoordinateSensor(Some(Position {
          latitude:  lat,
          longitude: lon,
        }));
        let geocoder = Nominatim::new(cfg.client.clone())
          .context("failed to build geocoding client")?;
        form
          .resolve_location(&sensor, &geocoder)
          .await
          .context("location resolution failed")?;
        tracing::info!(address = %form.draft().location, "resolved location");
      }

      let api = ContactApi::new(cfg.client)
        .context("failed to build contact client")?;
      form.submit(&api).await.context("submission failed")?;

      // The terminal analog of the confirmation modal.
      if let Some(snapshot) = form.submitted() {
        println!("Submitted:");
        println!("  Name:     {}", snapshot.name);
        println!("  Email:    {}", snapshot.email);
        println!("  Phone:    {}", snapshot.phone_no);
        println!("  Location: {}", snapshot.location);
      }
      Ok(())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn env_source_reaches_the_nested_client_table() {
    let env = std::collections::HashMap::from([(
      "REACH_CLIENT__BASE_URL".to_string(),
      "https://api.example.com".to_string(),
    )]);
    let settings = config::Config::builder()
      .add_source(
        config::Environment::with_prefix("REACH")
          .prefix_separator("_")
          .separator("__")
          .source(Some(env)),
      )
      .build()
      .unwrap();

    let cfg: CliConfig = settings.try_deserialize().unwrap();
    assert_eq!(cfg.client.base_url, "https://api.example.com");
    // Untouched fields keep their defaults.
    assert_eq!(cfg.client.timeout_secs, Some(30));
    assert!(cfg.session.is_none());
  }

  #[test]
  fn env_source_reaches_the_nested_session_table() {
    let env = std::collections::HashMap::from([(
      "REACH_SESSION__ID".to_string(),
      "42".to_string(),
    )]);
    let settings = config::Config::builder()
      .add_source(
        config::Environment::with_prefix("REACH")
          .prefix_separator("_")
          .separator("__")
          .source(Some(env)),
      )
      .build()
      .unwrap();

    let cfg: CliConfig = settings.try_deserialize().unwrap();
    let session = cfg.session.expect("session payload");
    assert_eq!(session.id.as_deref(), Some("42"));
  }
}
