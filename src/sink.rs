//! Output sink: where rendered pages end up.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Destination for rendered bytes.
pub trait Sink {
    /// Create or truncate `name` and write all of `bytes` to it.
    ///
    /// On failure the destination may be left truncated or absent.
    fn write(&mut self, name: &Path, bytes: &[u8]) -> Result<()>;
}

/// Writes straight to the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

impl Sink for FsSink {
    fn write(&mut self, name: &Path, bytes: &[u8]) -> Result<()> {
        fs::write(name, bytes).map_err(|e| Error::io(name.display(), e))?;
        log::info!("wrote {} ({} bytes)", name.display(), bytes.len());
        Ok(())
    }
}
