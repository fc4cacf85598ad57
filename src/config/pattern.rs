// Copyright 2026 The Envreplace Project
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::ReplaceError;

/// The default substitution pattern: matches `${env.NAME}` and captures
/// the variable name.
pub const DEFAULT_PATTERN: &str = r"\$\{env\.(.*?)\}";

/// A pre-compiled substitution pattern. Wraps `regex::Regex` with the
/// original pattern string preserved for debugging/display. Matching is
/// always case-insensitive; compilation rejects patterns that do not have
/// exactly one capture group (the environment-variable name).
#[derive(Clone)]
pub struct SubstitutionPattern {
    pub pattern: String,
    pub regex: Regex,
}

impl SubstitutionPattern {
    /// Compile a pattern, returning `ReplaceError::InvalidPattern` on a
    /// regex syntax error and `ReplaceError::PatternArity` when the capture
    /// group count is not exactly one.
    pub fn compile(pattern: &str) -> Result<Self, ReplaceError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ReplaceError::InvalidPattern {
                pattern: pattern.to_string(),
                source: e,
            })?;
        // captures_len counts the implicit whole-match group 0.
        if regex.captures_len() != 2 {
            return Err(ReplaceError::PatternArity {
                pattern: pattern.to_string(),
                groups: regex.captures_len() - 1,
            });
        }
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }
}

impl fmt::Debug for SubstitutionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubstitutionPattern")
            .field("pattern", &self.pattern)
            .finish()
    }
}

impl PartialEq for SubstitutionPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}
