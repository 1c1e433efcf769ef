//! Static file server for a generated output directory.
//!
//! Requests are answered one at a time from files already on disk; nothing is
//! rendered on the fly. The request → reply mapping lives in
//! [`Server::respond`] so it can be exercised without a socket.

use crate::error::{Error, Result};
use crate::index::INDEX_PAGE;
use std::fs;
use std::io::Cursor;
use std::path::{Component, Path, PathBuf};
use tiny_http::{Header, Response, StatusCode};

/// Address the server binds to when none is configured.
pub const DEFAULT_ADDR: &str = "localhost:8000";

/// Serves the files of one output directory.
#[derive(Debug, Clone)]
pub struct Server {
    root: PathBuf,
}

/// Everything needed to answer a request.
#[derive(Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: Option<&'static str>,
    /// Redirect target, set on 302 replies.
    pub location: Option<&'static str>,
    pub body: Vec<u8>,
}

impl Server {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Server { root: root.into() }
    }

    /// Map a request line to a reply.
    ///
    /// Non-GET requests are redirected to `/`. `/` serves `index.html`, any
    /// other path the file at that relative location.
    pub fn respond(&self, method: &str, url: &str) -> Reply {
        if method != "GET" {
            return Reply {
                status: 302,
                content_type: None,
                location: Some("/"),
                body: Vec::new(),
            };
        }

        match self.lookup(url) {
            Ok((path, body)) => Reply {
                status: 200,
                content_type: content_type(&path),
                location: None,
                body,
            },
            Err(err) => {
                log::warn!("{}", err);
                Reply {
                    status: 404,
                    content_type: None,
                    location: None,
                    body: format!("404 error {}", err).into_bytes(),
                }
            }
        }
    }

    fn lookup(&self, url: &str) -> Result<(PathBuf, Vec<u8>)> {
        let path = url.split('?').next().unwrap_or_default();
        let relative = path.trim_start_matches('/');
        let relative = if relative.is_empty() { INDEX_PAGE } else { relative };

        let escapes_root = Path::new(relative)
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes_root {
            return Err(Error::NotFound {
                path: PathBuf::from(path),
                reason: "path leaves the document root".to_string(),
            });
        }

        let file = self.root.join(relative);
        match fs::read(&file) {
            Ok(body) => Ok((file, body)),
            Err(e) => Err(Error::NotFound {
                path: file,
                reason: e.to_string(),
            }),
        }
    }

    /// Bind `addr` and answer requests until the process is stopped.
    pub fn serve(&self, addr: &str) -> Result<()> {
        let http = tiny_http::Server::http(addr)
            .map_err(|e| Error::io(addr, std::io::Error::other(e)))?;
        println!("Starting server at http://{}", addr);
        self.run(http);
        Ok(())
    }

    /// Answer requests from an already bound server, sequentially.
    pub fn run(&self, http: tiny_http::Server) {
        for request in http.incoming_requests() {
            let method = request.method().to_string();
            let reply = self.respond(&method, request.url());
            log::info!("{} {} {}", method, request.url(), reply.status);
            if let Err(e) = request.respond(reply.into_response()) {
                log::warn!("failed to send response: {}", e);
            }
        }
    }
}

impl Reply {
    fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let mut response = Response::from_data(self.body).with_status_code(StatusCode(self.status));
        let headers = [("Content-Type", self.content_type), ("Location", self.location)];
        for (name, value) in headers {
            let Some(value) = value else { continue };
            if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
                response = response.with_header(header);
            }
        }
        response
    }
}

/// Content type for the fixed set of extensions the generated site uses.
/// Anything else gets no explicit content type.
pub fn content_type(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "css" => Some("text/css"),
        "html" => Some("text/html"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}
