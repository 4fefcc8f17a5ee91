use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a published content node
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub Uuid);

impl NodeId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single property value on a structured block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Integer(i64),
    Flag(bool),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(text) => f.write_str(text),
            PropertyValue::Integer(value) => write!(f, "{value}"),
            PropertyValue::Flag(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Flag(value)
    }
}

/// Property bag of a block, sorted by name so output is stable
pub type Properties = BTreeMap<String, PropertyValue>;

/// Validated structured block: kind, properties and fallback children.
///
/// Nodes are only built by [`crate::editing::InsertCommand`] after the kind's
/// definition accepted the input, and cannot be changed afterwards. The field
/// layout is the contract every renderer consumes:
///
/// ```json
/// {
///   "id": "7d3c…",
///   "kind": "teacher-profile",
///   "properties": { "teacherInput": "filip" },
///   "children": [{ "type": "text", "value": "Teacher profile filip" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentNode {
    id: NodeId,
    kind: String,
    properties: Properties,
    children: Vec<DisplayNode>,
}

impl ContentNode {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Look up a property, `None` when the validator did not set it
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Text property shortcut; non-text values read as absent
    pub fn text_property(&self, name: &str) -> Option<&str> {
        self.property(name).and_then(PropertyValue::as_text)
    }

    /// Fallback display nodes, shown by renderers that don't know this kind
    pub fn children(&self) -> &[DisplayNode] {
        &self.children
    }

    /// Concatenated plain text of all fallback children
    pub fn fallback_text(&self) -> String {
        self.children.iter().map(DisplayNode::plain_text).collect()
    }
}

/// Build a content node from already-validated parts.
///
/// Trusts its caller: kind and properties must have passed the registry's
/// definition for `kind`.
pub(crate) fn make_content_node(
    kind: impl Into<String>,
    properties: Properties,
    children: Vec<DisplayNode>,
) -> ContentNode {
    ContentNode {
        id: NodeId::generate(),
        kind: kind.into(),
        properties,
        children,
    }
}

/// Element of a document tree or of a block's fallback children
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DisplayNode {
    /// Plain text
    Text { value: String },
    /// Nested structured block
    Block(ContentNode),
}

impl DisplayNode {
    pub fn text(value: impl Into<String>) -> Self {
        DisplayNode::Text {
            value: value.into(),
        }
    }

    pub fn as_block(&self) -> Option<&ContentNode> {
        match self {
            DisplayNode::Block(node) => Some(node),
            DisplayNode::Text { .. } => None,
        }
    }

    /// Text content with structure stripped; blocks contribute their fallback text
    pub fn plain_text(&self) -> String {
        match self {
            DisplayNode::Text { value } => value.clone(),
            DisplayNode::Block(node) => node.fallback_text(),
        }
    }
}

impl From<ContentNode> for DisplayNode {
    fn from(node: ContentNode) -> Self {
        DisplayNode::Block(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn teacher_node() -> ContentNode {
        let mut properties = Properties::new();
        properties.insert("teacherInput".to_string(), "filip".into());
        make_content_node(
            "teacher-profile",
            properties,
            vec![DisplayNode::text("Teacher profile filip")],
        )
    }

    #[test]
    fn factory_assigns_distinct_ids() {
        let first = teacher_node();
        let second = teacher_node();
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn serializes_to_wire_shape() {
        let node = teacher_node();
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(
            value,
            json!({
                "id": node.id().to_string(),
                "kind": "teacher-profile",
                "properties": { "teacherInput": "filip" },
                "children": [{ "type": "text", "value": "Teacher profile filip" }],
            })
        );
    }

    #[test]
    fn nested_block_is_tagged_as_block() {
        let inner = teacher_node();
        let outer = make_content_node(
            "card",
            Properties::new(),
            vec![DisplayNode::text("See: "), inner.clone().into()],
        );

        let value = serde_json::to_value(&outer).unwrap();
        assert_eq!(value["children"][1]["type"], "block");
        assert_eq!(value["children"][1]["kind"], "teacher-profile");
        assert_eq!(outer.fallback_text(), "See: Teacher profile filip");
    }

    #[test]
    fn typed_properties_serialize_untagged() {
        let mut properties = Properties::new();
        properties.insert("count".to_string(), 3i64.into());
        properties.insert("autoplay".to_string(), true.into());
        let node = make_content_node("video", properties, Vec::new());

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["properties"], json!({ "autoplay": true, "count": 3 }));
        assert_eq!(node.text_property("count"), None);
        assert_eq!(node.property("count").map(ToString::to_string), Some("3".into()));
    }
}
