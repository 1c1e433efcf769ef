//! Parser module: protocol XML bytes into a [`Document`].

mod xml;

use crate::error::{Error, Result};
use crate::model::Document;

/// Parse raw XML into a Document.
///
/// Fails with [`Error::MalformedInput`] when the bytes are not UTF-8, not
/// well-formed XML, or do not fit the element shape. Content is never
/// validated: empty names, duplicates and dangling interface references all
/// come through as written.
pub fn parse(raw: &[u8]) -> Result<Document> {
    let text = std::str::from_utf8(raw).map_err(|e| Error::MalformedInput {
        reason: format!("input is not valid UTF-8: {}", e),
    })?;

    let protocol: xml::RawProtocol =
        quick_xml::de::from_str(text).map_err(|e| Error::MalformedInput {
            reason: e.to_string(),
        })?;

    let doc = Document::from(protocol);
    log::debug!(
        "parsed protocol {:?}: {} interfaces, {} members",
        doc.name,
        doc.interfaces.len(),
        doc.member_count()
    );
    Ok(doc)
}
