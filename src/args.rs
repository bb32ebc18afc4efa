use tbs::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("Script file not found: {0}")]
    FileNotFound(String),
}

/// Parses the input arguments. The only, optional, argument is the path of a session script.
pub fn parse_script_arg() -> Result<Option<PathBuf>> {
    return parse_script_path(env::args().skip(1));
}

fn parse_script_path(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>> {
    let filename = match args.next() {
        None => return Ok(None),
        Some(filename) => filename,
    };

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!(
            "Unexpected argument {extra:?}, only a script path is accepted"
        )))?
    }

    let path = fs::canonicalize(&filename)
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok(Some(path))
}
