//! Single-secret commands (put, get, delete).

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{output, Context};
use crate::core::KeyPolicy;
use crate::error::Result;

/// Put a secret value.
pub fn put(ctx: &Context, key: &str, value: &str) -> Result<()> {
    info!("Putting secret: {}", key.trim());
    let value = Zeroizing::new(value.to_string());
    let client = ctx.client(KeyPolicy::Required)?;
    client.put(key, &value)?;
    output::success(&format!("stored {}", output::key(key.trim())));
    Ok(())
}

/// Get a secret value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let client = ctx.client(KeyPolicy::Optional)?;
    let value = client.get(key)?;
    // Plain output for scripting - no decoration
    println!("{}", value.as_str());
    Ok(())
}

/// Delete a secret.
pub fn delete(ctx: &Context, key: &str) -> Result<()> {
    info!("Deleting secret: {}", key.trim());
    let client = ctx.client(KeyPolicy::Optional)?;
    client.delete(key)?;
    output::success(&format!("deleted {}", output::key(key.trim())));
    Ok(())
}
