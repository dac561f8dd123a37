//! Courier Elemental content tree.
//!
//! Elemental is Courier's JSON syntax for rich notification content: a
//! document is a versioned list of nodes, and nodes such as `group` and
//! `channel` nest further nodes recursively.

use serde::{Deserialize, Serialize};

/// Content of a content message: a full Elemental document or the
/// `{title, body}` shorthand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Elemental(ElementalContent),
    Sugar(ElementalContentSugar),
}

impl From<ElementalContent> for Content {
    fn from(c: ElementalContent) -> Self {
        Content::Elemental(c)
    }
}

impl From<ElementalContentSugar> for Content {
    fn from(c: ElementalContentSugar) -> Self {
        Content::Sugar(c)
    }
}

/// A full Elemental document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementalContent {
    /// Elemental schema version, e.g. `"2022-01-01"`.
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<serde_json::Value>,
    pub elements: Vec<ElementalNode>,
}

impl ElementalContent {
    pub fn new(elements: Vec<ElementalNode>) -> Self {
        Self {
            version: "2022-01-01".to_string(),
            brand: None,
            elements,
        }
    }
}

/// Shorthand content: a title and body without the full Elemental envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementalContentSugar {
    pub title: String,
    pub body: String,
}

impl ElementalContentSugar {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A single Elemental node, dispatched on the `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementalNode {
    Text(ElementalTextNode),
    Meta(ElementalMetaNode),
    Channel(ElementalChannelNode),
    Image(ElementalImageNode),
    Action(ElementalActionNode),
    Divider(ElementalDividerNode),
    Quote(ElementalQuoteNode),
    Group(ElementalGroupNode),
}

impl ElementalNode {
    pub fn text(content: impl Into<String>) -> Self {
        ElementalNode::Text(ElementalTextNode {
            content: content.into(),
            align: None,
            text_style: None,
            color: None,
            bold: None,
            italic: None,
            locales: None,
            channels: None,
            r#ref: None,
            r#if: None,
            r#loop: None,
        })
    }

    pub fn action(content: impl Into<String>, href: impl Into<String>) -> Self {
        ElementalNode::Action(ElementalActionNode {
            content: content.into(),
            href: href.into(),
            action_id: None,
            align: None,
            background_color: None,
            style: None,
            locales: None,
            channels: None,
            r#ref: None,
            r#if: None,
            r#loop: None,
        })
    }
}

/// Markdown-capable text block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementalTextNode {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    /// Per-locale content overrides keyed by locale tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locales: Option<std::collections::HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub r#loop: Option<String>,
}

/// Document metadata (e.g. the push/email title).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementalMetaNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub r#loop: Option<String>,
}

/// Channel-scoped subtree: renders `elements` (or `raw`) only for `channel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementalChannelNode {
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<ElementalNode>>,
    /// Raw provider-specific payload, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub r#loop: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementalImageNode {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub r#loop: Option<String>,
}

/// Button or link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementalActionNode {
    pub content: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ActionStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locales: Option<std::collections::HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub r#loop: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementalDividerNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub r#loop: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementalQuoteNode {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locales: Option<std::collections::HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub r#loop: Option<String>,
}

/// Groups child nodes; the recursive case of the tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementalGroupNode {
    pub elements: Vec<ElementalNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub r#loop: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Text,
    H1,
    H2,
    Subtext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    Button,
    Link,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_tag_dispatch() {
        let json = r#"{"type":"text","content":"Hello **world**"}"#;
        let node: ElementalNode = serde_json::from_str(json).unwrap();
        assert!(matches!(node, ElementalNode::Text(t) if t.content == "Hello **world**"));
    }

    #[test]
    fn group_nodes_nest_recursively() {
        let json = r#"{
            "type": "group",
            "elements": [
                {"type": "meta", "title": "Release"},
                {"type": "group", "elements": [{"type": "divider"}]}
            ]
        }"#;
        let node: ElementalNode = serde_json::from_str(json).unwrap();
        let group = match node {
            ElementalNode::Group(g) => g,
            other => panic!("unexpected node: {:?}", other),
        };
        assert_eq!(group.elements.len(), 2);
        assert!(matches!(&group.elements[1], ElementalNode::Group(inner) if inner.elements.len() == 1));
    }

    #[test]
    fn channel_node_carries_raw_override() {
        let json = r#"{"type":"channel","channel":"slack","raw":{"blocks":[]}}"#;
        let node: ElementalNode = serde_json::from_str(json).unwrap();
        match node {
            ElementalNode::Channel(c) => {
                assert_eq!(c.channel, "slack");
                assert!(c.raw.is_some());
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[test]
    fn content_union_resolves_sugar_and_elemental() {
        let sugar: Content =
            serde_json::from_str(r#"{"title":"Hi","body":"There"}"#).unwrap();
        assert!(matches!(sugar, Content::Sugar(_)));

        let doc: Content = serde_json::from_str(
            r#"{"version":"2022-01-01","elements":[{"type":"text","content":"hi"}]}"#,
        )
        .unwrap();
        assert!(matches!(doc, Content::Elemental(e) if e.elements.len() == 1));
    }

    #[test]
    fn control_fields_use_reserved_names() {
        let mut node = ElementalNode::text("hi");
        if let ElementalNode::Text(ref mut t) = node {
            t.r#if = Some("data.vip".to_string());
        }
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["if"], "data.vip");
        assert_eq!(json["type"], "text");
    }
}
