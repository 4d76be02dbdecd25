//! Golden-fixture loading: JSON-encoded template/args/expected-output cases,
//! one `FixtureSet` per family (the S1-S8 end-to-end table and the
//! boundary checks live in `tests/format/golden/*.json`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::arg_spec::ArgSpec;

/// Why a fixture file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The outcome a fixture case expects from `fixfmt_core::format`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Expected {
    /// `format` succeeds and writes exactly `output`.
    Ok { output: String },
    /// `format` fails with the named `FormatError` variant (`spec_error`,
    /// `type_mismatch`, `arg_index`, or `overflow`).
    Err { kind: String },
}

/// A single golden-fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier, unique within its `FixtureSet`.
    pub name: String,
    /// Scenario this case exercises (for the traceability report), e.g.
    /// `"placeholder grammar: positional reorder (S1)"`.
    pub spec_section: String,
    /// The template string, narrow (`u8`) code units.
    pub template: String,
    /// Arguments, in order.
    #[serde(default)]
    pub args: Vec<ArgSpec>,
    /// Output buffer length to format into.
    pub buffer_len: usize,
    /// Expected outcome.
    pub expected: Expected,
}

/// A collection of fixture cases for one family (e.g. `"format"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version, for forward-compatible fixture evolution.
    pub version: String,
    /// Family name this set exercises.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Parse a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize this fixture set back to pretty JSON (used by `capture`-style
    /// tooling to write out newly recorded fixtures).
    pub fn to_json(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
