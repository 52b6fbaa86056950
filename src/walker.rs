//! Tree walker: visits every directory below a root and writes its index.
//!
//! Each directory is handled in isolation: enumerate direct children, drop
//! the reserved index name, partition into files and subdirectories, build
//! the link mapping, render, write. Subdirectories are then queued on an
//! explicit work stack; depth is unbounded and symlink cycles among
//! directories are not detected.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::links::LinkMap;
use crate::render::render_index_html;
use crate::{INDEX_NAME, IndexError, IndexResult};

/// File extensions (without the leading dot, case-sensitive) that get
/// listed on index pages. Files with any other extension, or none, are
/// deliberately left out.
const LISTED_EXTENSIONS: [&str; 3] = ["html", "pdf", "tex"];

/// Walk every directory at or below `root`, writing `_index.html` into
/// each one.
///
/// Any enumeration or write failure aborts the whole run; directories
/// indexed before the failure keep their already-written pages.
pub fn walk(root: &Path) -> IndexResult<()> {
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let subdirs = write_index(&dir)?;
        pending.extend(subdirs);
    }
    Ok(())
}

/// Index a single directory and return the subdirectory paths still to be
/// visited.
fn write_index(dir: &Path) -> IndexResult<Vec<PathBuf>> {
    info!("generating index for {}", dir.display());

    let mut names = list_children(dir)?;
    names.retain(|name| name != INDEX_NAME);
    debug!("entries in {}: {:?}", dir.display(), names);

    let (files, subdirs) = partition(dir, &names);
    debug!("files in {}: {:?}", dir.display(), files);
    debug!("directories in {}: {:?}", dir.display(), subdirs);

    // Files first, then directories overlaid on top: on a label collision
    // the directory entry replaces the file entry.
    let mut links = LinkMap::new();
    for file in &files {
        if has_listed_extension(file) {
            links.insert(capitalize_first(file), file.clone());
        }
    }
    for sub in &subdirs {
        links.insert(capitalize_first(sub), format!("{sub}/{INDEX_NAME}"));
    }

    let html = render_index_html(&dir.display().to_string(), &links);
    let index_path = dir.join(INDEX_NAME);
    fs::write(&index_path, html).map_err(|e| {
        IndexError::Message(format!("failed to write {}: {e}", index_path.display()))
    })?;

    Ok(subdirs.iter().map(|sub| dir.join(sub)).collect())
}

/// Names of the direct children of `dir`, in filesystem order.
fn list_children(dir: &Path) -> IndexResult<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        IndexError::Message(format!("failed to read directory {}: {e}", dir.display()))
    })?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Split child names into regular files and directories.
///
/// Type checks go through `fs::metadata`, which follows symlinks; an entry
/// whose metadata cannot be read (a broken symlink, say) lands in neither
/// partition.
fn partition(dir: &Path, names: &[String]) -> (Vec<String>, Vec<String>) {
    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for name in names {
        match fs::metadata(dir.join(name)) {
            Ok(meta) if meta.is_file() => files.push(name.clone()),
            Ok(meta) if meta.is_dir() => subdirs.push(name.clone()),
            _ => {}
        }
    }
    (files, subdirs)
}

fn has_listed_extension(name: &str) -> bool {
    matches!(
        Path::new(name).extension().and_then(OsStr::to_str),
        Some(ext) if LISTED_EXTENSIONS.contains(&ext)
    )
}

/// Uppercase the first character of a name, leaving the rest unchanged.
fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
