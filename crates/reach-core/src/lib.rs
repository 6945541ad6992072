//! Core types and workflow logic for the Reach contact client.
//!
//! This crate is deliberately free of HTTP dependencies. The network-facing
//! collaborators (positioning sensor, reverse geocoder, contact backend) are
//! trait seams defined in [`gateway`]; `reach-client` provides the real
//! implementations.

pub mod contact;
pub mod error;
pub mod form;
pub mod gateway;
pub mod guard;
pub mod session;

pub use error::{Error, Result, ValidationError};
