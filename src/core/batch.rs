//! Batch files.
//!
//! A batch file is a JSON array of `{ "key": ..., "value": ... }` records,
//! stored in order by `put-batch`. Missing fields read as empty strings so
//! they are reported as validation errors with their index.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::core::constants;
use crate::error::{Error, Result, ValidationError};

/// One record of a batch file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl BatchEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Outcome of writing a skeleton file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Created,
    Overwritten,
}

/// Read a batch file.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read, or `Error::Json` if it is
/// not a JSON array of records.
pub fn read(path: &Path) -> Result<Vec<BatchEntry>> {
    debug!(path = %path.display(), "reading batch file");
    let contents = std::fs::read_to_string(path)?;
    parse(&contents)
}

/// Parse batch file contents.
pub fn parse(contents: &str) -> Result<Vec<BatchEntry>> {
    // tolerate a UTF-8 BOM from editors that add one
    let contents = contents.trim_start_matches('\u{feff}');
    Ok(serde_json::from_str(contents)?)
}

/// Template contents: a few empty records to fill in.
pub fn skeleton() -> Vec<BatchEntry> {
    vec![BatchEntry::default(); constants::SKELETON_ENTRIES]
}

/// Write a skeleton batch file.
///
/// # Errors
///
/// Returns `ValidationError::FileExists` if the file exists and `overwrite`
/// is false, or `Error::Io` on write failure.
pub fn write_skeleton(path: &Path, overwrite: bool) -> Result<WriteMode> {
    let exists = path.exists();
    if exists && !overwrite {
        return Err(ValidationError::FileExists(path.display().to_string()).into());
    }

    let mut json = serde_json::to_string_pretty(&skeleton())?;
    json.push('\n');

    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = options.open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            Error::from(ValidationError::FileExists(path.display().to_string()))
        } else {
            Error::Io(e)
        }
    })?;
    file.write_all(json.as_bytes())?;

    debug!(path = %path.display(), "wrote batch skeleton");
    Ok(if exists {
        WriteMode::Overwritten
    } else {
        WriteMode::Created
    })
}
