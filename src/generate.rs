//! One-shot generation path: read a protocol file, render it, write the page.

use crate::error::{Error, Result};
use crate::index::{self, INDEX_PAGE, STYLESHEET};
use crate::parser;
use crate::render::Templates;
use crate::sink::Sink;
use std::fs;
use std::path::{Path, PathBuf};

/// Output directory used when no explicit output path is given.
pub const DEFAULT_OUT_DIR: &str = "doc";

/// Where the page for `input` goes.
///
/// An explicit path wins; otherwise the input's file name with its extension
/// replaced by `.html`, inside `out_dir` ("protocols/foo.xml" → "doc/foo.html").
pub fn output_path(input: &Path, explicit: Option<&Path>, out_dir: &Path) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    out_dir.join(format!("{}.html", stem))
}

/// Create the output directory (and parents) if it does not exist.
pub fn ensure_out_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir.display(), e))
}

/// Parse `input`, render it with `templates` and write the page to `output`.
pub fn generate(
    input: &Path,
    output: &Path,
    templates: &Templates,
    sink: &mut impl Sink,
) -> Result<()> {
    let raw = fs::read(input).map_err(|e| Error::io(input.display(), e))?;
    let doc = parser::parse(&raw)?;
    let page = templates.render(&doc)?;
    sink.write(output, page.as_bytes())?;
    log::info!(
        "rendered protocol {:?} from {} ({} interfaces)",
        doc.name,
        input.display(),
        doc.interfaces.len()
    );
    Ok(())
}

/// Regenerate `<out_dir>/index.html` from the files currently in `out_dir`.
/// Returns the number of listed pages.
pub fn write_index(out_dir: &Path, templates: &Templates, sink: &mut impl Sink) -> Result<usize> {
    let entries = index::collect(out_dir)?;
    let page = templates.render_index(&entries)?;
    sink.write(&out_dir.join(INDEX_PAGE), page.as_bytes())?;
    Ok(entries.len())
}

/// Copy `style.css` from the template directory into `out_dir` unless the
/// output directory already has one. Returns whether a file was written.
pub fn install_stylesheet(template_dir: &Path, out_dir: &Path, sink: &mut impl Sink) -> Result<bool> {
    let source = template_dir.join(STYLESHEET);
    let target = out_dir.join(STYLESHEET);
    if !source.is_file() || target.exists() {
        return Ok(false);
    }
    let css = fs::read(&source).map_err(|e| Error::io(source.display(), e))?;
    sink.write(&target, &css)?;
    Ok(true)
}
