//! Error kinds shared by the generation path and the server.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input is not well-formed XML or does not fit the document shape.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// A template is missing, cannot be compiled, or failed while rendering.
    #[error("failed to load template {}: {reason}", template.display())]
    TemplateLoad { template: PathBuf, reason: String },

    /// Reading, writing, creating or binding `target` failed.
    #[error("failed to access {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: io::Error,
    },

    /// The server could not find the requested file.
    #[error("{}: {reason}", path.display())]
    NotFound { path: PathBuf, reason: String },
}

impl Error {
    pub(crate) fn io(target: impl std::fmt::Display, source: io::Error) -> Self {
        Error::Io {
            target: target.to_string(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
