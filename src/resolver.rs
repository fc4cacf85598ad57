// Copyright 2026 The Envreplace Project
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::ReplaceError;

/// Expand a list of paths, directories, and glob patterns into a
/// deduplicated set of regular files.
///
/// Each spec is expanded independently against the filesystem; a spec with
/// no glob metacharacters resolves to itself when it names an existing
/// path. Matched directories contribute their immediate regular-file
/// children (one level only, not recursive); matched regular files pass
/// through as-is. A spec that matches nothing contributes nothing. The
/// result is sorted, so a given filesystem state always yields the same
/// file list.
pub fn resolve_files(specs: &[String]) -> Result<Vec<PathBuf>, ReplaceError> {
    let mut files = BTreeSet::new();
    for spec in specs {
        let matches = glob::glob(spec).map_err(|e| ReplaceError::InvalidGlob {
            pattern: spec.clone(),
            source: e,
        })?;
        for entry in matches {
            let path = entry.map_err(|e| ReplaceError::Resolution {
                pattern: spec.clone(),
                source: e,
            })?;
            if path.is_dir() {
                collect_children(&path, &mut files)?;
            } else if path.is_file() {
                files.insert(path);
            }
        }
    }
    Ok(files.into_iter().collect())
}

/// Keep the immediate regular-file children of `dir`. Subdirectories are
/// not descended into; recursive traversal is the job of `**` globs.
fn collect_children(dir: &Path, files: &mut BTreeSet<PathBuf>) -> Result<(), ReplaceError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ReplaceError::ListDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| ReplaceError::ListDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() {
            files.insert(path);
        }
    }
    Ok(())
}
