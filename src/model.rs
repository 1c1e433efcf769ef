//! Data model for a parsed protocol document: independent of the XML shape.
//!
//! The tree is owned top-down: a [`Document`] owns its interfaces, an
//! [`Interface`] owns its members and enums. Every sequence keeps the
//! declaration order of the source file.

use serde::Serialize;

/// Complete parsed protocol from a single input file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub name: String,
    pub copyright: String,
    pub interfaces: Vec<Interface>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    pub name: String,
    /// Kept as text; never interpreted as a number.
    pub version: String,
    pub description: Description,
    pub requests: Vec<Member>,
    pub events: Vec<Member>,
    pub enums: Vec<Enum>,
}

/// Whether a member is called by the client or emitted by the interface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    #[default]
    Request,
    Event,
}

/// A request or an event. Both share one shape and differ only by `kind`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub kind: MemberKind,
    pub name: String,
    pub description: Description,
    pub args: Vec<Argument>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub name: String,
    /// Wire type name (`int`, `new_id`, `object`, ...), not validated.
    #[serde(rename = "type")]
    pub ty: String,
    /// Interface this argument refers to, if any. May name an interface
    /// that does not exist in the document.
    pub interface_ref: Option<String>,
    pub allow_null: Option<String>,
    /// Enum constraining the argument value (`enum` attribute).
    pub enum_ref: Option<String>,
    pub summary: String,
}

/// Short `summary` attribute plus long-form body text.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    pub summary: String,
    pub content: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Enum {
    pub name: String,
    /// `bitfield` attribute, passed through as text.
    pub bitfield: Option<String>,
    pub description: Description,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    /// Usually a decimal or hex literal; kept verbatim.
    pub value: String,
    pub summary: String,
}

impl Document {
    /// Total number of requests and events across all interfaces.
    pub fn member_count(&self) -> usize {
        self.interfaces
            .iter()
            .map(|iface| iface.members().count())
            .sum()
    }
}

impl Interface {
    /// Requests followed by events, each group in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.requests.iter().chain(self.events.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(kind: MemberKind, name: &str) -> Member {
        Member {
            kind,
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn members_lists_requests_before_events() {
        let iface = Interface {
            name: "wl_surface".to_string(),
            requests: vec![
                member(MemberKind::Request, "destroy"),
                member(MemberKind::Request, "attach"),
            ],
            events: vec![member(MemberKind::Event, "enter")],
            ..Default::default()
        };

        let names: Vec<_> = iface.members().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["destroy", "attach", "enter"]);

        let doc = Document {
            interfaces: vec![iface],
            ..Default::default()
        };
        assert_eq!(doc.member_count(), 3);
    }
}
