//! CLI command handler for index generation.

use std::path::PathBuf;

use crate::walker;
use crate::{IndexError, IndexResult};

/// Run index generation for every directory at or below `path`.
///
/// # Arguments
/// * `path` - Root directory of the tree to index
pub fn run(path: PathBuf) -> IndexResult<()> {
    if !path.exists() {
        return Err(IndexError::Message(format!(
            "path not found: {}",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(IndexError::Message(format!(
            "not a directory: {}",
            path.display()
        )));
    }
    walker::walk(&path)
}
