// Copyright 2026 The Envreplace Project
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use clap::Parser;
use envreplace::config::{ProcessEnv, RunConfig, SubstitutionPattern, DEFAULT_PATTERN};
use envreplace::{engine, resolver};

const COMMAND_REFERENCE: &str = "\
Command reference:

  <pathOrGlob...>  one or more paths or globs to perform replace operations in

Example:

  Replace all occurrences of the string ${env.ENV_VAR} in all .txt files
  under the test folder with the words 'My var':

    export ENV_VAR='My var'
    envreplace 'test/**/*.txt'
";

#[derive(Parser)]
#[command(
    name = "envreplace",
    version,
    about = "Replace ${env.VAR} references in files with environment variable values",
    after_help = COMMAND_REFERENCE
)]
struct Cli {
    /// Paths, directories, or globs to perform replace operations in
    #[arg(value_name = "pathOrGlob", required = true)]
    path_or_glob: Vec<String>,

    /// Regex used for searching/replacing env vars in files. Must have the
    /// name of the env var as its first capture group. Default: '\${env\.(.*?)}'
    #[arg(short = 'r', long = "regexEnv", value_name = "regex")]
    regex_env: Option<String>,

    /// Log data about each file examined and each variable substituted
    #[arg(short, long)]
    verbose: bool,

    /// Fail when an env var referenced in a file is not set in the environment
    #[arg(short, long = "errorOnMissing")]
    error_on_missing: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Usage errors must not exit 2: that code is reserved for missing
    // variables under --errorOnMissing. Help and version keep clap's
    // normal exit (0).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                e.exit()
            }
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    let pattern_src = cli.regex_env.as_deref().unwrap_or(DEFAULT_PATTERN);
    let pattern = match SubstitutionPattern::compile(pattern_src) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    };
    let config = Arc::new(RunConfig {
        pattern,
        verbose: cli.verbose,
        error_on_missing: cli.error_on_missing,
    });

    let files = match resolver::resolve_files(&cli.path_or_glob) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    };
    tracing::debug!(files = files.len(), "resolved file set");

    if let Err(e) = engine::replace_in_files(files, config, Arc::new(ProcessEnv)).await {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}
