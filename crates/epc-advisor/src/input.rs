//! Loading tool inputs from JSON files for the command line, and the
//! field-level problems a tool can report back about them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid input: {}", describe(.problems))]
    Invalid { problems: Vec<FieldProblem> },
}

/// One answer a tool refused, keyed by its camelCase field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldProblem {
    pub field: &'static str,
    pub message: &'static str,
}

fn describe(problems: &[FieldProblem]) -> String {
    problems
        .iter()
        .map(|problem| format!("{} ({})", problem.message, problem.field))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn load_text(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads one JSON document shaped like the matching API request body.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let raw = load_text(path)?;
    serde_json::from_str(&raw).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
