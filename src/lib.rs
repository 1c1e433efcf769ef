//! protodoc: render protocol XML definitions into browsable HTML pages.
//!
//! The generation path is [`parser::parse`] → [`render::Templates::render`]
//! → [`sink::Sink::write`]; [`server::Server`] serves the resulting directory.

pub mod error;
pub mod generate;
pub mod index;
pub mod model;
pub mod parser;
pub mod render;
pub mod server;
pub mod sink;

pub use error::{Error, Result};
