//! secrets-vault - application secrets in S3, encrypted with AWS KMS.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── secrets       # put / get / delete
//! │   ├── batch         # put-batch / create-batch-file
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # VaultConfig + .secrets-vault.toml loader
//!     ├── kms/          # Key-management port
//!     │   ├── mod       # KeyManagement trait
//!     │   └── aws       # AWS KMS implementation
//!     ├── store/        # Object-store port
//!     │   ├── mod       # ObjectStore trait
//!     │   ├── s3        # Amazon S3 implementation
//!     │   ├── fs        # Filesystem implementation
//!     │   └── memory    # In-memory implementation
//!     ├── client        # VaultClient: encrypt-then-store, fetch-then-decrypt
//!     ├── batch         # Batch file records
//!     └── backend       # Backend selection
//! ```
//!
//! # Example
//!
//! ```
//! use secrets_vault::core::store::Memory;
//! use secrets_vault::core::{KeyPolicy, VaultClient, VaultConfig};
//! # use secrets_vault::core::kms::KeyManagement;
//! # use secrets_vault::error::Result;
//! # use zeroize::Zeroizing;
//! # struct Plain;
//! # impl KeyManagement for Plain {
//! #     fn encrypt(&self, _key_id: &str, p: &[u8]) -> Result<Vec<u8>> { Ok(p.to_vec()) }
//! #     fn decrypt(&self, c: &[u8]) -> Result<Zeroizing<Vec<u8>>> { Ok(Zeroizing::new(c.to_vec())) }
//! #     fn name(&self) -> &'static str { "plain" }
//! # }
//!
//! let config = VaultConfig::new("alias/app", "secrets-bucket", "app/", KeyPolicy::Required)?;
//! let client = VaultClient::new(config, Box::new(Plain), Box::new(Memory::new()));
//!
//! client.put("db-pass", "hunter2")?;
//! assert_eq!(client.get("db-pass")?.as_str(), "hunter2");
//! # Ok::<(), secrets_vault::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
