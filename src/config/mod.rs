// Copyright 2026 The Envreplace Project
// SPDX-License-Identifier: Apache-2.0

mod env;
mod pattern;

pub use env::{EnvLookup, MapEnv, ProcessEnv};
pub use pattern::{SubstitutionPattern, DEFAULT_PATTERN};

/// Immutable configuration for one invocation. Built once from CLI input
/// and shared (behind an `Arc`) by every file-processing task.
#[derive(Debug)]
pub struct RunConfig {
    pub pattern: SubstitutionPattern,
    pub verbose: bool,
    pub error_on_missing: bool,
}
