//! Batch commands (put-batch, create-batch-file).

use std::path::Path;
use tracing::info;

use crate::cli::{output, Context};
use crate::core::batch::{self, WriteMode};
use crate::core::KeyPolicy;
use crate::error::Result;

/// Store every entry of a batch file, stopping at the first failure.
pub fn put(ctx: &Context, file: &Path) -> Result<()> {
    let client = ctx.client(KeyPolicy::Required)?;

    info!("Reading {}", file.display());
    let entries = batch::read(file)?;
    if entries.is_empty() {
        output::warn("batch file has no entries");
        return Ok(());
    }

    let count = client.put_batch(&entries)?;
    output::success(&format!(
        "stored {} secret{}",
        count,
        if count == 1 { "" } else { "s" }
    ));
    Ok(())
}

/// Write a skeleton batch file.
pub fn create(file: &Path, overwrite: bool) -> Result<()> {
    let shown = file.display().to_string();
    match batch::write_skeleton(file, overwrite)? {
        WriteMode::Created => output::success(&format!("created {}", output::path(&shown))),
        WriteMode::Overwritten => {
            output::success(&format!("overwrote {}", output::path(&shown)))
        }
    }
    output::hint(&format!(
        "fill in keys and values, then run: secrets-vault put-batch -f {}",
        shown
    ));
    Ok(())
}
