//! CLI error type.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use mizan_base::ParseError;

#[derive(Debug)]
#[non_exhaustive]
pub enum CliError {
    /// Snapshot file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// Snapshot file is not valid JSON of the expected shape.
    Json(serde_json::Error),
    /// A name in the snapshot is not a planet.
    Parse(ParseError),
    InvalidInput(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Json(e) => write!(f, "invalid JSON: {e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}
