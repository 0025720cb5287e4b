//! Reads the initial keys of the tree from a text file

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Splits `text` into whitespace-separated keys, in order
pub fn parse_keys(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

/// Reads the whole file at `path` and returns its whitespace-separated keys, in order
pub fn read_keys(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|err| Error::unreadable(path, err))?;
    let keys = parse_keys(&text);
    debug!(path = %path.display(), count = keys.len(), "read keys");

    Ok(keys)
}
