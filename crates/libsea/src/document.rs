//! The top-level LibSea graph document.
//!
//! A [`Document`] is built once, usually by [`crate::assemble`], and is
//! immutable afterwards. Rendering never mutates it, so rendering the same
//! document twice yields identical text.
//!
//! The rendered document always has the same sections in the same order:
//!
//! ```text
//! Graph
//! {
//!     # Metadata
//!     @name="...";
//!     @description="...";
//!
//!     # Lengths
//!     @numNodes=3;
//!     ...
//! }
//! ```
//!
//! The visualization and interface sections are empty placeholders.

use indexmap::IndexMap;
use log::debug;

use libsea_core::{
    Native, Node, Render, RenderContext,
    format::{INDENT_STEP, TERMINATOR, indent},
};

use crate::{
    config::RenderConfig,
    records::{AttributeDefinition, Enumeration, Link, Qualifier},
};

/// Keyword opening every document.
const DOCUMENT_KEYWORD: &str = "Graph";

/// Placeholder count of links across all paths.
const NUM_PATH_LINKS: usize = 0;

/// An ordered group of fields preceded by a comment line.
struct Section {
    title: &'static str,
    fields: Vec<(&'static str, Node)>,
}

impl Section {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            fields: Vec::new(),
        }
    }

    fn field(mut self, name: &'static str, value: impl Into<Native>) -> Self {
        self.fields.push((name, Node::from(value.into())));
        self
    }

    fn placeholder(self, name: &'static str) -> Self {
        self.field(name, Native::Absent)
    }
}

/// The aggregate root of a LibSea document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    name: String,
    description: String,
    nodes: IndexMap<String, usize>,
    links: Vec<Link>,
    paths: Vec<Node>,
    enumerations: Vec<Enumeration>,
    attributes: Vec<AttributeDefinition>,
    attribute_order: IndexMap<String, usize>,
    qualifiers: Vec<Qualifier>,
}

impl Document {
    /// Creates an empty document. Both metadata fields are required.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            nodes: IndexMap::new(),
            links: Vec::new(),
            paths: Vec::new(),
            enumerations: Vec::new(),
            attributes: Vec::new(),
            attribute_order: IndexMap::new(),
            qualifiers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the mapping from node identity to node id, in id order.
    pub fn nodes(&self) -> &IndexMap<String, usize> {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn paths(&self) -> &[Node] {
        &self.paths
    }

    pub fn enumerations(&self) -> &[Enumeration] {
        &self.enumerations
    }

    pub fn attributes(&self) -> &[AttributeDefinition] {
        &self.attributes
    }

    /// Returns the index of the attribute definition with the given name.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attribute_order.get(name).copied()
    }

    /// Returns the attribute definition with the given name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attribute_index(name)
            .and_then(|index| self.attributes.get(index))
    }

    pub fn qualifiers(&self) -> &[Qualifier] {
        &self.qualifiers
    }

    pub fn add_enumeration(&mut self, enumeration: Enumeration) {
        self.enumerations.push(enumeration);
    }

    pub(crate) fn set_nodes(&mut self, nodes: IndexMap<String, usize>) {
        self.nodes = nodes;
    }

    pub(crate) fn push_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Appends an attribute definition and records its index by name.
    pub(crate) fn push_attribute(&mut self, attribute: AttributeDefinition) -> usize {
        let index = self.attributes.len();
        self.attribute_order
            .insert(attribute.name().to_string(), index);
        self.attributes.push(attribute);
        index
    }

    pub(crate) fn attribute_mut(&mut self, index: usize) -> Option<&mut AttributeDefinition> {
        self.attributes.get_mut(index)
    }

    pub(crate) fn push_qualifier(&mut self, qualifier: Qualifier) {
        self.qualifiers.push(qualifier);
    }

    /// Renders the document to LibSea text.
    pub fn render(&self, config: &RenderConfig) -> String {
        let ctx = RenderContext::new(config.labels(), 0);
        let sections = self.sections();
        debug!(sections = sections.len(), labels = config.labels(); "Rendering document");

        let mut output = format!("{DOCUMENT_KEYWORD}\n{{\n");
        for (position, section) in sections.iter().enumerate() {
            if config.comments() {
                output.push_str(&indent(&format!("# {}", section.title), INDENT_STEP));
                output.push('\n');
            }

            for (name, value) in &section.fields {
                let line = format!("{}{}{TERMINATOR}", ctx.label(name), value.render(ctx));
                output.push_str(&indent(&line, INDENT_STEP));
                output.push('\n');
            }

            if config.comments() && position + 1 < sections.len() {
                output.push('\n');
            }
        }
        output.push('}');

        output
    }

    fn sections(&self) -> Vec<Section> {
        vec![
            Section::new("Metadata")
                .field("name", &self.name)
                .field("description", &self.description),
            Section::new("Lengths")
                .field("numNodes", self.nodes.len())
                .field("numLinks", self.links.len())
                .field("numPaths", self.paths.len())
                .field("numPathLinks", NUM_PATH_LINKS),
            Section::new("Structural information")
                .field("links", self.links.clone())
                .field("paths", self.paths.clone()),
            Section::new("Attributes")
                .field(
                    "enumerations",
                    Native::sequence(self.enumerations.iter().map(Native::from)),
                )
                .field(
                    "attributeDefinitions",
                    Native::sequence(self.attributes.iter().map(Native::from)),
                )
                .field(
                    "qualifiers",
                    Native::sequence(self.qualifiers.iter().map(Native::from)),
                ),
            Section::new("Visualization")
                .placeholder("filters")
                .placeholder("selectors")
                .placeholder("displays")
                .placeholder("presentations"),
            Section::new("Interface")
                .placeholder("presentationMenus")
                .placeholder("displayMenus")
                .placeholder("selectorMenus")
                .placeholder("filterMenus")
                .placeholder("attributeMenus"),
        ]
    }
}
