//! Core library components.
//!
//! Configuration, the key-management and object-store ports with their
//! backends, and the client that orchestrates them.

#[cfg(feature = "aws")]
pub mod aws;
pub mod backend;
pub mod batch;
pub mod client;
pub mod config;
pub mod constants;
pub mod kms;
pub mod store;
pub mod types;
pub mod validation;

pub use client::VaultClient;
pub use config::{KeyPolicy, Settings, VaultConfig};
