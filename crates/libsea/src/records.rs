//! Record types stored in a LibSea document.
//!
//! Each record converts into a [`Native`] value so that it renders through the
//! same dispatcher as everything else. Constructors always build a fresh
//! record; no two records share state.

use std::fmt;

use libsea_core::{Native, Node};

/// Identifier type of the single qualifier the assembler derives.
pub const SPANNING_TREE_TYPE: &str = "spanning_tree";

/// Identifier name of the single qualifier the assembler derives.
pub const SPANNING_TREE_NAME: &str = "default_spanning_tree";

/// Description text of the derived spanning tree qualifier.
pub const SPANNING_TREE_DESCRIPTION: &str = "Spanning tree for walrus";

// =============================================================================
// Structural records
// =============================================================================

/// A directed link between two node ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    source: usize,
    destination: usize,
}

impl Link {
    pub fn new(source: usize, destination: usize) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn destination(&self) -> usize {
        self.destination
    }
}

impl From<Link> for Native {
    fn from(link: Link) -> Self {
        Native::record([("source", link.source), ("destination", link.destination)])
    }
}

/// One entry of an attribute value table: the element id and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeValue {
    id: usize,
    value: Node,
}

impl AttributeValue {
    pub fn new(id: usize, value: impl Into<Node>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn value(&self) -> &Node {
        &self.value
    }
}

impl From<&AttributeValue> for Native {
    fn from(entry: &AttributeValue) -> Self {
        Native::record([
            ("id", Native::from(entry.id)),
            ("value", Native::from(entry.value.clone())),
        ])
    }
}

// =============================================================================
// Attribute definitions
// =============================================================================

/// Value type of an attribute definition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    #[default]
    String,
    Bool,
}

impl AttributeType {
    /// The bare keyword written in the `type` field.
    pub fn keyword(self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Bool => "bool",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Describes one named property and its per-node, per-link and per-path
/// value tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDefinition {
    name: String,
    kind: AttributeType,
    default: Option<Node>,
    node_values: Vec<AttributeValue>,
    link_values: Vec<AttributeValue>,
    path_values: Vec<AttributeValue>,
}

impl AttributeDefinition {
    /// Creates an empty `string` attribute with no default and no values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeType::default(),
            default: None,
            node_values: Vec::new(),
            link_values: Vec::new(),
            path_values: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AttributeType {
        self.kind
    }

    pub fn set_kind(&mut self, kind: AttributeType) {
        self.kind = kind;
    }

    pub fn default_value(&self) -> Option<&Node> {
        self.default.as_ref()
    }

    pub fn set_default(&mut self, default: impl Into<Node>) {
        self.default = Some(default.into());
    }

    pub fn node_values(&self) -> &[AttributeValue] {
        &self.node_values
    }

    pub fn link_values(&self) -> &[AttributeValue] {
        &self.link_values
    }

    pub fn path_values(&self) -> &[AttributeValue] {
        &self.path_values
    }

    pub fn push_node_value(&mut self, entry: AttributeValue) {
        self.node_values.push(entry);
    }

    pub fn push_link_value(&mut self, entry: AttributeValue) {
        self.link_values.push(entry);
    }

    pub fn push_path_value(&mut self, entry: AttributeValue) {
        self.path_values.push(entry);
    }
}

fn value_table(entries: &[AttributeValue]) -> Native {
    Native::sequence(entries.iter().map(Native::from))
}

impl From<&AttributeDefinition> for Native {
    fn from(attribute: &AttributeDefinition) -> Self {
        Native::mapping([
            ("name", Native::from(Node::identifier(&attribute.name))),
            ("type", Native::from(Node::verbatim(attribute.kind.keyword()))),
            ("default", Native::from(attribute.default.clone())),
            ("nodeValues", value_table(&attribute.node_values)),
            ("linkValues", value_table(&attribute.link_values)),
            ("pathValues", value_table(&attribute.path_values)),
        ])
    }
}

// =============================================================================
// Qualifiers and enumerations
// =============================================================================

/// A named, typed grouping of attribute definitions, referenced by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier {
    kind: String,
    name: String,
    description: String,
    attributes: Vec<(usize, String)>,
}

impl Qualifier {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            description: description.into(),
            attributes: Vec::new(),
        }
    }

    /// Creates the default spanning tree qualifier over the `root` and
    /// `tree_link` attribute definitions at the given indices.
    pub fn spanning_tree(root: usize, tree_link: usize) -> Self {
        let mut qualifier = Self::new(
            SPANNING_TREE_TYPE,
            SPANNING_TREE_NAME,
            SPANNING_TREE_DESCRIPTION,
        );
        qualifier.push_attribute(root, "root");
        qualifier.push_attribute(tree_link, "tree_link");
        qualifier
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the referenced `(attribute index, role)` pairs.
    pub fn attributes(&self) -> &[(usize, String)] {
        &self.attributes
    }

    pub fn push_attribute(&mut self, index: usize, role: impl Into<String>) {
        self.attributes.push((index, role.into()));
    }
}

impl From<&Qualifier> for Native {
    fn from(qualifier: &Qualifier) -> Self {
        Native::mapping([
            ("type", Native::from(Node::identifier(&qualifier.kind))),
            ("name", Native::from(Node::identifier(&qualifier.name))),
            ("description", Native::from(&qualifier.description)),
            (
                "attributes",
                Native::sequence(
                    qualifier
                        .attributes
                        .iter()
                        .map(|(index, role)| (*index, Node::identifier(role))),
                ),
            ),
        ])
    }
}

/// A named set of enumerator values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    name: String,
    enumerators: Vec<String>,
}

impl Enumeration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enumerators: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn enumerators(&self) -> &[String] {
        &self.enumerators
    }

    pub fn push_enumerator(&mut self, enumerator: impl Into<String>) {
        self.enumerators.push(enumerator.into());
    }
}

impl From<&Enumeration> for Native {
    fn from(enumeration: &Enumeration) -> Self {
        Native::mapping([
            ("name", Native::from(Node::identifier(&enumeration.name))),
            ("enumerators", Native::sequence(&enumeration.enumerators)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use libsea_core::{Render, RenderContext, dispatch};

    use super::*;

    fn render(value: impl Into<Native>) -> String {
        dispatch(value).render(RenderContext::default())
    }

    #[test]
    fn test_link_renders_as_named_tuple() {
        assert_eq!(render(Link::new(0, 2)), "{@source=0; @destination=2;}");
    }

    #[test]
    fn test_attribute_value_renders_as_named_tuple() {
        let entry = AttributeValue::new(3, Node::text("x"));
        assert_eq!(render(&entry), "{@id=3; @value=\"x\";}");
    }

    #[test]
    fn test_attribute_type_keyword() {
        assert_eq!(AttributeType::default().keyword(), "string");
        assert_eq!(AttributeType::Bool.to_string(), "bool");
    }

    #[test]
    fn test_empty_attribute_definition() {
        let attribute = AttributeDefinition::new("color");
        assert_eq!(
            render(&attribute),
            "{\n    @name=$color;\n    @type=string;\n    @default=;\n    \
             @nodeValues=[\n\n    ];\n    @linkValues=[\n\n    ];\n    \
             @pathValues=[\n\n    ];\n}"
        );
    }

    #[test]
    fn test_attribute_definition_with_values() {
        let mut attribute = AttributeDefinition::new("root");
        attribute.set_kind(AttributeType::Bool);
        attribute.push_node_value(AttributeValue::new(0, true));

        let rendered = render(&attribute);
        assert!(rendered.contains("@type=bool;"));
        assert!(rendered.contains("@nodeValues=[\n        {@id=0; @value=T;}\n    ];"));
    }

    #[test]
    fn test_attribute_definitions_are_not_aliased() {
        let mut first = AttributeDefinition::new("a");
        let second = AttributeDefinition::new("a");

        first.push_node_value(AttributeValue::new(0, "x"));
        first.push_link_value(AttributeValue::new(0, "y"));
        first.set_kind(AttributeType::Bool);

        assert!(second.node_values().is_empty());
        assert!(second.link_values().is_empty());
        assert_eq!(second.kind(), AttributeType::String);
    }

    #[test]
    fn test_qualifiers_are_not_aliased() {
        let mut first = Qualifier::spanning_tree(0, 1);
        let second = Qualifier::spanning_tree(0, 1);

        first.push_attribute(5, "extra");

        assert_eq!(first.attributes().len(), 3);
        assert_eq!(second.attributes().len(), 2);
    }

    #[test]
    fn test_spanning_tree_qualifier() {
        let qualifier = Qualifier::spanning_tree(1, 0);
        assert_eq!(
            render(&qualifier),
            "{\n    @type=$spanning_tree;\n    @name=$default_spanning_tree;\n    \
             @description=\"Spanning tree for walrus\";\n    @attributes=[\n        \
             {1; $root;},\n        {0; $tree_link;}\n    ];\n}"
        );
    }

    #[test]
    fn test_enumeration() {
        let mut enumeration = Enumeration::new("shape");
        enumeration.push_enumerator("box");

        assert_eq!(
            render(&enumeration),
            "{\n    @name=$shape;\n    @enumerators=[\n        \"box\"\n    ];\n}"
        );
    }

    #[test]
    fn test_enumerations_are_not_aliased() {
        let mut first = Enumeration::new("e");
        let second = Enumeration::new("e");
        first.push_enumerator("x");
        assert!(second.enumerators().is_empty());
    }
}
