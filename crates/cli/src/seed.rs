// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON seed files.
//!
//! Every field is decoded through its validating constructor, so a seed can
//! never hold an invalid entity. Identity uniqueness and record references
//! are checked when the dataset is assembled.

use crate::error::CliError;
use serde::Deserialize;
use socialcare::Dataset;
use socialcare_domain::{Event, Record, Volunteer};
use std::path::Path;

/// The on-disk shape of a seed file. Missing sections are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedFile {
    pub volunteers: Vec<Volunteer>,
    pub events: Vec<Event>,
    pub records: Vec<Record>,
}

impl SeedFile {
    /// Assembles the seed into a dataset.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Integrity` if ids repeat or a record is dangling.
    pub fn into_dataset(self) -> Result<Dataset, CliError> {
        Dataset::from_parts(self.volunteers, self.events, self.records).map_err(CliError::from)
    }
}

/// Decodes seed JSON text into a dataset.
///
/// # Errors
///
/// Returns `CliError::Decode` for malformed JSON or invalid fields, and
/// `CliError::Integrity` for inconsistent entities.
pub fn parse_seed(text: &str) -> Result<Dataset, CliError> {
    let seed: SeedFile = serde_json::from_str(text)?;
    seed.into_dataset()
}

/// Reads and decodes a seed file.
///
/// # Errors
///
/// Returns `CliError::Read` if the file cannot be read, otherwise the errors
/// of [`parse_seed`].
pub fn load_seed(path: &Path) -> Result<Dataset, CliError> {
    let text: String = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&text)
}
