// Copyright 2026 The Envreplace Project
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::config::{EnvLookup, RunConfig};
use crate::error::ReplaceError;


/// Process every file in the set, one concurrent task per file.
///
/// Waits for all tasks to finish or returns the first error; the first
/// error wins and remaining tasks are aborted best-effort when the set is
/// dropped. Files already written before the error surfaced stay written.
pub async fn replace_in_files(
    files: Vec<PathBuf>,
    config: Arc<RunConfig>,
    env: Arc<dyn EnvLookup>,
) -> Result<(), ReplaceError> {
    let mut tasks = JoinSet::new();
    for path in files {
        let config = Arc::clone(&config);
        let env = Arc::clone(&env);
        tasks.spawn(async move { process_file(path, config, env).await });
    }
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(result) => result?,
            // Tasks are never cancelled before being joined, so a join
            // failure can only be a panic; resurface it on the caller's
            // thread instead of swallowing it.
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
    Ok(())
}

/// Read one file, substitute every pattern occurrence, and write the result
/// back only when the content actually changed. On a missing-variable error
/// the file is left byte-for-byte untouched.
pub async fn process_file(
    path: PathBuf,
    config: Arc<RunConfig>,
    env: Arc<dyn EnvLookup>,
) -> Result<(), ReplaceError> {
    let original = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| ReplaceError::Io {
            path: path.clone(),
            source: e,
        })?;
    if config.verbose {
        println!("Examining file: {}", path.display());
    }
    let replaced = substitute(&original, &config, env.as_ref(), &path)?;
    if replaced != original {
        tokio::fs::write(&path, replaced)
            .await
            .map_err(|e| ReplaceError::Io {
                path: path.clone(),
                source: e,
            })?;
        tracing::debug!(path = %path.display(), "rewrote file");
    }
    Ok(())
}

/// Single forward pass over `content`, left to right. Replacement text is
/// appended to the output and never re-scanned, so a value that itself
/// looks like a reference stays literal. Unset and empty variables count
/// as missing: the occurrence is dropped, or the whole run fails when
/// `error_on_missing` is set.
fn substitute(
    content: &str,
    config: &RunConfig,
    env: &dyn EnvLookup,
    path: &Path,
) -> Result<String, ReplaceError> {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    for caps in config.pattern.regex.captures_iter(content) {
        // Group 0 is the whole match and always present.
        let matched = caps.get(0).unwrap();
        let name = caps.get(1).map(|g| g.as_str()).unwrap_or("");
        out.push_str(&content[last..matched.start()]);
        match env.get(name) {
            Some(value) if !value.is_empty() => {
                if config.verbose {
                    println!("Replacing '{}' with '{}'", matched.as_str(), value);
                }
                out.push_str(&value);
            }
            _ => {
                if config.error_on_missing {
                    return Err(ReplaceError::MissingVariable {
                        text: matched.as_str().to_string(),
                        file: path.to_path_buf(),
                    });
                }
            }
        }
        last = matched.end();
    }
    out.push_str(&content[last..]);
    Ok(out)
}
