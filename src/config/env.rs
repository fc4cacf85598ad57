// Copyright 2026 The Envreplace Project
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

/// Abstraction over where variable values come from.
///
/// `ProcessEnv` reads the live process environment; `MapEnv` provides values
/// from a fixed map (used in tests to avoid mutating process state).
pub trait EnvLookup: Send + Sync {
    /// Returns the value of `name`, or `None` when it is not set.
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads the live process environment.
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Provides variable values from an in-memory map. Used for testing.
pub struct MapEnv {
    pub vars: HashMap<String, String>,
}

impl EnvLookup for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
