//! Error types for penumbra.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShadowError>;

#[derive(Error, Debug)]
pub enum ShadowError {
    /// One or more bodies failed validation. Every violation is listed.
    #[error("{} invalid field(s): {}", .0.len(), join_violations(.0))]
    Validation(Vec<Violation>),

    /// Raw input could not be read as a list of bodies.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid clock reading: {0}")]
    Clock(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShadowError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ShadowError::InvalidInput(message.into())
    }

    /// Violations carried by a validation error, empty for every other kind.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ShadowError::Validation(v) => v,
            _ => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Distance,
    Size,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Distance => "distance",
            Field::Size => "size",
        }
    }
}

/// A single failed constraint on one body.
#[derive(Clone, Debug, PartialEq)]
pub struct Violation {
    pub index: usize,
    pub name: String,
    pub field: Field,
    pub reason: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.trim().is_empty() {
            "<unnamed>"
        } else {
            self.name.as_str()
        };
        write!(
            f,
            "body #{} ({}) {}: {}",
            self.index,
            name,
            self.field.label(),
            self.reason
        )
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
