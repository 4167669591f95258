//! Command-line interface.

pub mod batch;
pub mod completions;
pub mod output;
pub mod secrets;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::core::backend;
use crate::core::{KeyPolicy, Settings, VaultClient};
use crate::error::Result;

/// secrets-vault - application secrets in S3, encrypted with AWS KMS.
#[derive(Parser)]
#[command(
    name = "secrets-vault",
    about = "Store application secrets in S3, encrypted with AWS KMS",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (defaults to ./.secrets-vault.toml)
    #[arg(long, global = true, env = "SECRETS_VAULT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Region to operate in
    #[arg(short, long, global = true)]
    pub region: Option<String>,

    /// Prompt after performing the action
    #[arg(short, long, global = true)]
    pub prompt: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Put a single key/value into the vault
    Put {
        /// Secret key
        #[arg(short, long)]
        key: String,
        /// Secret value
        #[arg(short, long, allow_hyphen_values = true)]
        value: String,
    },

    /// Get a key's value from the vault
    Get {
        /// Secret key
        #[arg(short, long)]
        key: String,
    },

    /// Delete a key and its value from the vault
    Delete {
        /// Secret key
        #[arg(short, long)]
        key: String,
    },

    /// Put one or more key/values into the vault from a JSON batch file
    PutBatch {
        /// Input JSON file to read
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Create a skeleton batch file
    CreateBatchFile {
        /// Output JSON file to write
        #[arg(short, long)]
        file: PathBuf,
        /// Overwrite the existing file
        #[arg(short, long)]
        overwrite: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Options shared by every command.
#[derive(Debug, Default, Clone)]
pub struct Context {
    config: Option<PathBuf>,
    region: Option<String>,
}

impl Context {
    pub fn new(config: Option<PathBuf>, region: Option<String>) -> Self {
        Self { config, region }
    }

    /// Load settings and connect a client.
    ///
    /// `policy` is [`KeyPolicy::Required`] for commands that encrypt.
    pub fn client(&self, policy: KeyPolicy) -> Result<VaultClient> {
        let settings = Settings::load(self.config.as_deref())?;
        let mut config = settings.into_config(policy)?;

        if let Some(region) = self.region.as_deref().filter(|r| !r.is_empty()) {
            debug!(region = %region, "region override");
            config.set_region_name(Some(region.to_string()));
        }

        backend::connect(&settings, config)
    }
}

/// Execute a command.
pub fn execute(command: Command, ctx: &Context) -> Result<()> {
    use Command::*;

    match command {
        Put { key, value } => secrets::put(ctx, &key, &value),
        Get { key } => secrets::get(ctx, &key),
        Delete { key } => secrets::delete(ctx, &key),
        PutBatch { file } => batch::put(ctx, &file),
        CreateBatchFile { file, overwrite } => batch::create(&file, overwrite),
        Completions { shell } => completions::execute(shell),
    }
}
