//! Template-driven HTML rendering.
//!
//! Two templates live in the template directory: `protocol.html` renders one
//! [`Document`], `index.html` renders the list of generated pages. Both go
//! through Handlebars with its HTML escaping, so `{{...}}` expressions never
//! inject document text as markup.

use crate::error::{Error, Result};
use crate::index::IndexEntry;
use crate::model::Document;
use handlebars::Handlebars;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const PAGE_TEMPLATE: &str = "protocol.html";
pub const INDEX_TEMPLATE: &str = "index.html";

/// Compiled page and index templates.
pub struct Templates {
    registry: Handlebars<'static>,
    /// Where each template came from, for error messages.
    origin: PathBuf,
}

#[derive(Serialize)]
struct IndexPage<'a> {
    entries: &'a [IndexEntry],
}

impl Templates {
    /// Load and compile `protocol.html` and `index.html` from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let page = read_template(&dir.join(PAGE_TEMPLATE))?;
        let index = read_template(&dir.join(INDEX_TEMPLATE))?;
        let templates = Self::from_sources(dir, &page, &index)?;
        log::debug!("loaded templates from {}", dir.display());
        Ok(templates)
    }

    /// Compile templates from in-memory sources. `origin` is only used to
    /// name the templates in errors.
    pub fn from_sources(origin: &Path, page: &str, index: &str) -> Result<Self> {
        let mut registry = Handlebars::new();
        for (name, source) in [(PAGE_TEMPLATE, page), (INDEX_TEMPLATE, index)] {
            registry
                .register_template_string(name, source)
                .map_err(|e| Error::TemplateLoad {
                    template: origin.join(name),
                    reason: e.to_string(),
                })?;
        }
        Ok(Templates {
            registry,
            origin: origin.to_path_buf(),
        })
    }

    /// Render the details page for one document.
    pub fn render(&self, doc: &Document) -> Result<String> {
        self.render_template(PAGE_TEMPLATE, doc)
    }

    /// Render the listing of generated pages.
    pub fn render_index(&self, entries: &[IndexEntry]) -> Result<String> {
        self.render_template(INDEX_TEMPLATE, &IndexPage { entries })
    }

    fn render_template<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.registry
            .render(name, data)
            .map_err(|e| Error::TemplateLoad {
                template: self.origin.join(name),
                reason: e.to_string(),
            })
    }
}

fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::TemplateLoad {
        template: path.to_path_buf(),
        reason: e.to_string(),
    })
}
