// Copyright 2026 The Envreplace Project
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// All errors that can abort a replacement run.
#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
    #[error("invalid glob pattern \"{pattern}\": {source}")]
    InvalidGlob {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("failed to resolve \"{pattern}\": {source}")]
    Resolution {
        pattern: String,
        source: glob::GlobError,
    },

    #[error("failed to list directory {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid substitution pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("substitution pattern \"{pattern}\" must have exactly one capture group (found {groups})")]
    PatternArity { pattern: String, groups: usize },

    #[error("failed to process {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("couldn't find expected env var '{text}' in file {}", file.display())]
    MissingVariable { text: String, file: PathBuf },
}

impl ReplaceError {
    /// Process exit status for this error. Missing variables get a distinct
    /// code so callers can tell unresolved templates from I/O failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReplaceError::MissingVariable { .. } => 2,
            _ => 1,
        }
    }
}
