//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Where a spec argument points: inline text, a file (`@path`), or stdin (`-`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource<'a> {
    Inline(&'a str),
    File(&'a Path),
    Stdin,
}

impl<'a> SpecSource<'a> {
    pub fn parse(spec: &'a str) -> Result<Self> {
        if spec.trim() == "-" {
            return Ok(SpecSource::Stdin);
        }

        if let Some(path) = spec.strip_prefix('@') {
            if path.trim().is_empty() {
                return Err(Error::validation_invalid_argument(
                    "spec",
                    "Invalid spec '@' (missing file path)",
                    None,
                ));
            }
            return Ok(SpecSource::File(Path::new(path)));
        }

        Ok(SpecSource::Inline(spec))
    }

    pub fn read_to_string(&self) -> Result<String> {
        match self {
            SpecSource::Inline(raw) => Ok(raw.to_string()),
            SpecSource::File(path) => read_file(path, &format!("read {}", path.display())),
            SpecSource::Stdin => {
                use std::io::IsTerminal;

                let mut stdin = std::io::stdin();
                if stdin.is_terminal() {
                    return Err(Error::validation_invalid_argument(
                        "spec",
                        "Cannot read spec from stdin when stdin is a TTY",
                        None,
                    ));
                }
                let mut buf = String::new();
                stdin
                    .read_to_string(&mut buf)
                    .map_err(|e| Error::internal_io(e.to_string(), Some("read stdin".to_string())))?;
                Ok(buf)
            }
        }
    }

    /// True when the source is a file with a YAML extension.
    pub fn is_yaml(&self) -> bool {
        match self {
            SpecSource::File(path) => matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("yaml") | Some("yml")
            ),
            _ => false,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SpecSource::Inline(_) => "inline spec".to_string(),
            SpecSource::File(path) => path.display().to_string(),
            SpecSource::Stdin => "stdin".to_string(),
        }
    }
}
