//! Static HTML index generation for directory trees.
//!
//! Walks a directory tree and writes an `_index.html` page into every
//! directory, linking the listed files and all subdirectories so the tree
//! can be browsed with plain hyperlinks from a static web server.

pub mod generate_cmd;
pub mod links;
pub mod render;
pub mod walker;

use thiserror::Error;

/// Fixed name of the index document written into every visited directory.
///
/// The name is reserved: an existing `_index.html` is never listed as
/// content and is overwritten on every run.
pub const INDEX_NAME: &str = "_index.html";

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type IndexResult<T> = Result<T, IndexError>;
