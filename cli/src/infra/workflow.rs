//! GitHub Actions workflow command formats.
//!
//! Two channels exist: stdout commands (`::warning::text`) and file
//! commands, where `name<<DELIM` heredocs are appended to the files named by
//! `GITHUB_OUTPUT` / `GITHUB_STATE`.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::domain::LeaseError;

/// Escape a command message (`%`, `\r`, `\n`).
#[must_use]
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value; additionally escapes `:` and `,`.
#[must_use]
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Format a stdout workflow command.
///
/// `properties` are rendered as `name=value` pairs after the command name.
#[must_use]
pub fn stdout_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let props = properties
        .iter()
        .map(|(k, v)| format!("{k}={}", escape_property(v)))
        .collect::<Vec<_>>()
        .join(",");
    if props.is_empty() {
        format!("::{command}::{}", escape_data(message))
    } else {
        format!("::{command} {props}::{}", escape_data(message))
    }
}

/// Format a file command entry with the given heredoc delimiter.
///
/// # Errors
///
/// Returns [`LeaseError::DelimiterCollision`] if the delimiter occurs in the
/// name or the value, which would corrupt the entry.
pub fn format_file_command(name: &str, value: &str, delimiter: &str) -> Result<String, LeaseError> {
    if name.contains(delimiter) || value.contains(delimiter) {
        return Err(LeaseError::DelimiterCollision {
            name: name.to_string(),
        });
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// Append a `name`/`value` entry to a file command file.
///
/// # Errors
///
/// Returns an error if the entry cannot be formatted or the file cannot be
/// opened or written.
pub fn append_file_command(path: &Path, name: &str, value: &str) -> Result<()> {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
    let entry = format_file_command(name, value, &delimiter)?;
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("opening file command file {}", path.display()))?;
    file.write_all(entry.as_bytes())
        .with_context(|| format!("writing file command file {}", path.display()))?;
    Ok(())
}
