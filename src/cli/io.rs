//! JSON I/O handling for CLI
//!
//! - Input: JSON lines `{"question": "..."}` on stdin
//! - Output: one JSON value per line on stdout
//! - UTF-8 only
//!
//! Functions take explicit readers and writers so batch runs can be driven
//! from buffers.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};

/// One batch input line
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionLine {
    #[serde(default)]
    pub question: Option<String>,
}

/// Parse JSON request lines, skipping blank ones
pub fn read_requests<R: BufRead>(reader: R) -> impl Iterator<Item = CliResult<QuestionLine>> {
    reader.lines().filter_map(|line| match line {
        Err(e) => Some(Err(CliError::from(e))),
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(serde_json::from_str(&line).map_err(CliError::from)),
    })
}

/// Write one value as a single JSON line
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write an error line shaped like an engine error result
pub fn write_error<W: Write>(writer: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "error": true,
        "code": code,
        "message": message
    });
    write_json(writer, &response)
}

/// Write plain text as-is
pub fn write_text<W: Write>(writer: &mut W, text: &str) -> CliResult<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}
