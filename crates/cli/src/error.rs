// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use socialcare::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the shell itself. Command failures are rendered, not raised.
#[derive(Debug, Error)]
pub enum CliError {
    /// A seed or script file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A seed file is not valid JSON or holds an invalid field.
    #[error("Failed to decode seed data: {0}")]
    Decode(#[from] serde_json::Error),

    /// A seed file decoded but its entities are inconsistent.
    #[error("Seed data is inconsistent: {0}")]
    Integrity(#[from] CoreError),

    /// Writing to standard output or reading standard input failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
