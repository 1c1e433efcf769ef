//! Serde shapes mirroring the protocol XML schema.
//!
//! Attributes are `@name` fields, element text is `$text`. Every field has a
//! default, so missing attributes become empty strings and elements or
//! attributes the schema does not list are skipped by the deserializer.
//!
//! `overlapped-lists` lets `request` and `event` elements interleave while
//! each list keeps its own source order.

use crate::model::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct RawProtocol {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(default)]
    copyright: String,
    #[serde(rename = "interface", default)]
    interfaces: Vec<RawInterface>,
}

#[derive(Debug, Deserialize)]
struct RawInterface {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "@version", default)]
    version: String,
    #[serde(default)]
    description: RawDescription,
    #[serde(rename = "request", default)]
    requests: Vec<RawMember>,
    #[serde(rename = "event", default)]
    events: Vec<RawMember>,
    #[serde(rename = "enum", default)]
    enums: Vec<RawEnum>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDescription {
    #[serde(rename = "@summary", default)]
    summary: String,
    #[serde(rename = "$text", default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct RawMember {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(default)]
    description: RawDescription,
    #[serde(rename = "arg", default)]
    args: Vec<RawArg>,
}

#[derive(Debug, Deserialize)]
struct RawArg {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "@type", default)]
    ty: String,
    #[serde(rename = "@interface", default)]
    interface: Option<String>,
    #[serde(rename = "@allow-null", default)]
    allow_null: Option<String>,
    #[serde(rename = "@enum", default)]
    enum_ref: Option<String>,
    #[serde(rename = "@summary", default)]
    summary: String,
}

#[derive(Debug, Deserialize)]
struct RawEnum {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "@bitfield", default)]
    bitfield: Option<String>,
    #[serde(default)]
    description: RawDescription,
    #[serde(rename = "entry", default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "@value", default)]
    value: String,
    #[serde(rename = "@summary", default)]
    summary: String,
}

impl From<RawProtocol> for Document {
    fn from(raw: RawProtocol) -> Self {
        Document {
            name: raw.name,
            copyright: raw.copyright.trim().to_string(),
            interfaces: raw.interfaces.into_iter().map(Interface::from).collect(),
        }
    }
}

impl From<RawInterface> for Interface {
    fn from(raw: RawInterface) -> Self {
        Interface {
            name: raw.name,
            version: raw.version,
            description: raw.description.into(),
            requests: tag(MemberKind::Request, raw.requests),
            events: tag(MemberKind::Event, raw.events),
            enums: raw.enums.into_iter().map(Enum::from).collect(),
        }
    }
}

fn tag(kind: MemberKind, raw: Vec<RawMember>) -> Vec<Member> {
    raw.into_iter()
        .map(|m| Member {
            kind,
            name: m.name,
            description: m.description.into(),
            args: m.args.into_iter().map(Argument::from).collect(),
        })
        .collect()
}

impl From<RawDescription> for Description {
    fn from(raw: RawDescription) -> Self {
        Description {
            summary: raw.summary,
            content: raw.content.trim().to_string(),
        }
    }
}

impl From<RawArg> for Argument {
    fn from(raw: RawArg) -> Self {
        Argument {
            name: raw.name,
            ty: raw.ty,
            interface_ref: raw.interface,
            allow_null: raw.allow_null,
            enum_ref: raw.enum_ref,
            summary: raw.summary,
        }
    }
}

impl From<RawEnum> for Enum {
    fn from(raw: RawEnum) -> Self {
        Enum {
            name: raw.name,
            bitfield: raw.bitfield,
            description: raw.description.into(),
            entries: raw
                .entries
                .into_iter()
                .map(|e| Entry {
                    name: e.name,
                    value: e.value,
                    summary: e.summary,
                })
                .collect(),
        }
    }
}
