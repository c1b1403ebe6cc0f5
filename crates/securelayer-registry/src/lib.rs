//! # securelayer-registry
//!
//! Domain services for the SecureLayer backend:
//! - Certificate registration with enforced `certificate_id` uniqueness
//! - Certificate verification by external identifier
//! - Contact form intake

#![warn(clippy::all)]

pub mod errors;
mod service;
pub mod traits;
pub mod types;

pub use errors::{RegistryError, Result};
pub use service::{CertificateRegistryService, ContactIntakeService};
pub use traits::{CertificateRegistry, ContactIntake};
pub use types::*;
