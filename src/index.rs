//! Index entries derived from the pages already present in an output directory.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// File name of the generated index page.
pub const INDEX_PAGE: &str = "index.html";
/// File name of the shared stylesheet.
pub const STYLESHEET: &str = "style.css";

/// Names that never show up in the listing: the index itself and the stylesheet.
const RESERVED: &[&str] = &[INDEX_PAGE, STYLESHEET];

/// One line of the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// File name without its extension ("wayland.html" → "wayland").
    pub display_name: String,
    /// Public path the server answers on ("/wayland.html").
    pub relative_path: String,
}

/// Build entries from output file base names, skipping the reserved names.
/// Input order is kept.
pub fn entries_from_names<I, S>(names: I) -> Vec<IndexEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter(|name| !RESERVED.contains(&name.as_ref()))
        .map(|name| {
            let name = name.as_ref();
            IndexEntry {
                display_name: strip_extension(name).to_string(),
                relative_path: format!("/{}", name),
            }
        })
        .collect()
}

/// List the regular files of `dir`, sorted by name, as index entries.
pub fn collect(dir: &Path) -> Result<Vec<IndexEntry>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir.display(), e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir.display(), e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path().display(), e))?;
        if file_type.is_dir() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    Ok(entries_from_names(names))
}

/// "a.html" → "a", "archive.tar.gz" → "archive.tar", "README" → "README".
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => name,
        Some(dot) => &name[..dot],
    }
}
