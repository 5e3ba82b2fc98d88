//! Library layer for the Bank Al-Maghrib API: validated endpoint wrappers,
//! subscription key storage, and input validation.
//!
//! Wraps the `bam_api` wire crate. Every public call validates its inputs,
//! then performs exactly one request with the key of the service it targets.

pub mod client;
pub mod config;
pub mod error;
pub mod validation;

pub use bam_api;
pub use bam_api::types;
pub use bam_api::{Endpoint, Service};

pub use client::BamClient;
pub use config::{ApiKeys, ConfigError, KeyStore, KeyUpdate};
pub use error::{BamError, ErrorKind};
pub use validation::ValidationError;
