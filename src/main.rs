//! secrets-vault - application secrets in S3, encrypted with AWS KMS.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secrets_vault::cli::output;
use secrets_vault::cli::{execute, Cli, Context};
use secrets_vault::core::constants;
use secrets_vault::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secrets_vault=debug")
        } else {
            EnvFilter::new("secrets_vault=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    let prompt = cli.prompt;
    let ctx = Context::new(cli.config, cli.region);
    let result = execute(cli.command, &ctx);

    if let Err(e) = &result {
        output::error(&e.to_string());
        if let Some(hint) = hint(e) {
            output::hint(hint);
        }
    }

    if prompt {
        output::pause();
    }

    if result.is_err() {
        std::process::exit(1);
    }
}

/// Suggest a fix for common configuration mistakes.
fn hint(e: &Error) -> Option<&'static str> {
    match e {
        Error::Config(ConfigError::MissingBucketName) => {
            Some("set bucket_name in .secrets-vault.toml or SECRETS_VAULT_BUCKET_NAME")
        }
        Error::Config(ConfigError::MissingKmsKeyId) => {
            Some("set kms_key_id in .secrets-vault.toml or SECRETS_VAULT_KMS_KEY_ID")
        }
        Error::Config(ConfigError::MissingStoreRoot) => {
            Some("set store_root in .secrets-vault.toml or SECRETS_VAULT_STORE_ROOT")
        }
        _ => None,
    }
}
