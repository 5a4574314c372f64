//! Graph assembly: from an attributed source graph to a [`Document`].
//!
//! The assembler makes a single pass over the source graph:
//!
//! 1. Nodes get dense ids `0..n` in iteration order; their attributes are
//!    recorded per attribute name.
//! 2. Edges become [`Link`]s in iteration order; the edge index is the link
//!    id for edge attributes.
//! 3. One [`AttributeDefinition`] is materialized per distinct attribute name,
//!    in first-seen order (nodes are scanned before edges).
//! 4. The `root` and `tree_link` attributes are typed `bool` and referenced by
//!    the spanning tree [`Qualifier`].
//!
//! Attribute values are text; the literals `True` and `False` become booleans.

use std::{fmt, hash::Hash};

use indexmap::IndexMap;
use log::{debug, info, trace};

use libsea_core::{Node, Scalar};

use crate::{
    config::AssemblyConfig,
    document::Document,
    error::AssemblyError,
    records::{AttributeDefinition, AttributeType, AttributeValue, Link, Qualifier},
};

/// Attribute marking the root node of the spanning tree.
pub const ROOT_ATTRIBUTE: &str = "root";

/// Attribute marking the edges of the spanning tree.
pub const TREE_LINK_ATTRIBUTE: &str = "tree_link";

/// An attributed graph that can be converted into a [`Document`].
///
/// Node handles are opaque; their [`Display`](fmt::Display) form is the node
/// identity recorded in the document and reported in errors.
pub trait SourceGraph {
    /// Opaque node handle.
    type Node: Clone + Eq + Hash + fmt::Display;

    /// Opaque edge handle.
    type Edge;

    /// Looks up a graph-level attribute such as `name` or `description`.
    fn graph_attr(&self, name: &str) -> Option<String>;

    /// Iterates node handles. Ids are assigned in this order.
    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_;

    /// The number of nodes the graph reports.
    fn node_count(&self) -> usize;

    /// Iterates edge handles. Links are created in this order.
    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_;

    /// Returns the source and destination node of an edge.
    fn endpoints(&self, edge: &Self::Edge) -> (Self::Node, Self::Node);

    /// Returns the named attributes of a node.
    fn node_attrs(&self, node: &Self::Node) -> Vec<(String, String)>;

    /// Returns the named attributes of an edge.
    fn edge_attrs(&self, edge: &Self::Edge) -> Vec<(String, String)>;
}

/// Per-attribute value tables, keyed by element id.
#[derive(Debug, Default)]
struct ValueBuckets {
    node_values: IndexMap<usize, Node>,
    link_values: IndexMap<usize, Node>,
}

/// Converts a raw attribute value into a node.
///
/// `True` and `False` are booleans; everything else is text.
pub fn attribute_value(raw: &str) -> Node {
    match raw {
        "True" => Scalar::Boolean(true).into(),
        "False" => Scalar::Boolean(false).into(),
        _ => Node::text(raw),
    }
}

/// Builds a [`Document`] from a source graph.
///
/// # Errors
///
/// Returns [`AssemblyError`] if a node identity is produced twice, the
/// reported node count does not match the ids assigned, an edge refers to an
/// unknown node, or either spanning tree attribute is missing.
pub fn assemble<G: SourceGraph>(
    graph: &G,
    config: &AssemblyConfig,
) -> Result<Document, AssemblyError> {
    let name = graph
        .graph_attr("name")
        .unwrap_or_else(|| config.default_name().to_string());
    let description = graph
        .graph_attr("description")
        .unwrap_or_else(|| config.default_description().to_string());
    info!(name, description; "Assembling document");

    let mut document = Document::new(name, description);
    let mut buckets: IndexMap<String, ValueBuckets> = IndexMap::new();

    // Nodes
    let ids = assign_node_ids(graph)?;
    for (node, &id) in &ids {
        for (attribute, raw) in graph.node_attrs(node) {
            buckets
                .entry(attribute)
                .or_default()
                .node_values
                .insert(id, attribute_value(&raw));
        }
    }
    document.set_nodes(node_identities(&ids)?);
    debug!(nodes = ids.len(); "Node ids assigned");

    // Links
    for (id, edge) in graph.edges().enumerate() {
        let (source, destination) = graph.endpoints(&edge);
        document.push_link(Link::new(
            lookup_node(&ids, &source)?,
            lookup_node(&ids, &destination)?,
        ));

        for (attribute, raw) in graph.edge_attrs(&edge) {
            buckets
                .entry(attribute)
                .or_default()
                .link_values
                .insert(id, attribute_value(&raw));
        }
    }
    debug!(links = document.links().len(); "Links collected");

    // Attribute definitions
    for (attribute, values) in buckets {
        let mut definition = AttributeDefinition::new(attribute);
        for (id, value) in values.node_values {
            definition.push_node_value(AttributeValue::new(id, value));
        }
        for (id, value) in values.link_values {
            definition.push_link_value(AttributeValue::new(id, value));
        }
        trace!(definition:?; "Attribute definition");
        document.push_attribute(definition);
    }
    debug!(attributes = document.attributes().len(); "Attribute definitions built");

    // Spanning tree
    let root = mark_boolean(&mut document, ROOT_ATTRIBUTE)?;
    let tree_link = mark_boolean(&mut document, TREE_LINK_ATTRIBUTE)?;
    document.push_qualifier(Qualifier::spanning_tree(root, tree_link));

    info!(
        nodes = document.nodes().len(),
        links = document.links().len(),
        attributes = document.attributes().len();
        "Document assembled"
    );
    Ok(document)
}

/// Assigns dense ids in first-seen order and checks them against the
/// reported node count.
fn assign_node_ids<G: SourceGraph>(
    graph: &G,
) -> Result<IndexMap<G::Node, usize>, AssemblyError> {
    let mut ids = IndexMap::with_capacity(graph.node_count());
    for node in graph.nodes() {
        let id = ids.len();
        if ids.contains_key(&node) {
            return Err(AssemblyError::DuplicateNodeIdentity {
                node: node.to_string(),
            });
        }
        ids.insert(node, id);
    }

    if ids.len() != graph.node_count() {
        return Err(AssemblyError::NodeCountMismatch {
            reported: graph.node_count(),
            assigned: ids.len(),
        });
    }
    Ok(ids)
}

/// Converts node handles into their recorded identities.
fn node_identities<N: fmt::Display>(
    ids: &IndexMap<N, usize>,
) -> Result<IndexMap<String, usize>, AssemblyError> {
    let mut identities = IndexMap::with_capacity(ids.len());
    for (node, &id) in ids {
        let identity = node.to_string();
        if identities.contains_key(&identity) {
            return Err(AssemblyError::DuplicateNodeIdentity { node: identity });
        }
        identities.insert(identity, id);
    }
    Ok(identities)
}

fn lookup_node<N: Eq + Hash + fmt::Display>(
    ids: &IndexMap<N, usize>,
    node: &N,
) -> Result<usize, AssemblyError> {
    ids.get(node)
        .copied()
        .ok_or_else(|| AssemblyError::UnknownEndpoint {
            node: node.to_string(),
        })
}

/// Types the named attribute as `bool` and returns its index.
fn mark_boolean(document: &mut Document, name: &str) -> Result<usize, AssemblyError> {
    let index = document
        .attribute_index(name)
        .ok_or_else(|| AssemblyError::MissingRequiredAttribute {
            name: name.to_string(),
        })?;
    if let Some(definition) = document.attribute_mut(index) {
        definition.set_kind(AttributeType::Bool);
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory source graph for tests.
    #[derive(Default)]
    struct TestGraph {
        graph_attrs: Vec<(String, String)>,
        nodes: Vec<(&'static str, Vec<(String, String)>)>,
        edges: Vec<(&'static str, &'static str, Vec<(String, String)>)>,
        reported_nodes: Option<usize>,
    }

    fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    impl TestGraph {
        fn node(mut self, name: &'static str, pairs: &[(&str, &str)]) -> Self {
            self.nodes.push((name, attrs(pairs)));
            self
        }

        fn edge(
            mut self,
            source: &'static str,
            target: &'static str,
            pairs: &[(&str, &str)],
        ) -> Self {
            self.edges.push((source, target, attrs(pairs)));
            self
        }

        fn with_graph_attr(mut self, key: &str, value: &str) -> Self {
            self.graph_attrs.push((key.to_string(), value.to_string()));
            self
        }
    }

    impl SourceGraph for TestGraph {
        type Node = &'static str;
        type Edge = usize;

        fn graph_attr(&self, name: &str) -> Option<String> {
            self.graph_attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        }

        fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_ {
            self.nodes.iter().map(|(name, _)| *name)
        }

        fn node_count(&self) -> usize {
            self.reported_nodes.unwrap_or(self.nodes.len())
        }

        fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
            0..self.edges.len()
        }

        fn endpoints(&self, edge: &Self::Edge) -> (Self::Node, Self::Node) {
            let (source, target, _) = &self.edges[*edge];
            (*source, *target)
        }

        fn node_attrs(&self, node: &Self::Node) -> Vec<(String, String)> {
            self.nodes
                .iter()
                .find(|(name, _)| name == node)
                .map(|(_, attrs)| attrs.clone())
                .unwrap_or_default()
        }

        fn edge_attrs(&self, edge: &Self::Edge) -> Vec<(String, String)> {
            self.edges[*edge].2.clone()
        }
    }

    fn tree() -> TestGraph {
        TestGraph::default()
            .node("a", &[("root", "True"), ("label", "A")])
            .node("b", &[("root", "False")])
            .node("c", &[])
            .edge("a", "b", &[("tree_link", "True")])
            .edge("b", "c", &[("tree_link", "False"), ("label", "b-c")])
    }

    #[test]
    fn test_counts_and_links() {
        let document = assemble(&tree(), &AssemblyConfig::default()).expect("valid graph");

        assert_eq!(document.nodes().len(), 3);
        assert_eq!(document.links(), &[Link::new(0, 1), Link::new(1, 2)]);
        for link in document.links() {
            assert!(link.source() < 3 && link.destination() < 3);
        }
    }

    #[test]
    fn test_node_ids_follow_iteration_order() {
        let document = assemble(&tree(), &AssemblyConfig::default()).expect("valid graph");
        let ids: Vec<_> = document
            .nodes()
            .iter()
            .map(|(name, id)| (name.as_str(), *id))
            .collect();
        assert_eq!(ids, vec![("a", 0), ("b", 1), ("c", 2)]);
    }

    #[test]
    fn test_attribute_order_nodes_before_edges() {
        let document = assemble(&tree(), &AssemblyConfig::default()).expect("valid graph");
        let names: Vec<_> = document.attributes().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["root", "label", "tree_link"]);
    }

    #[test]
    fn test_attribute_values_by_element_id() {
        let document = assemble(&tree(), &AssemblyConfig::default()).expect("valid graph");

        let label = document.attribute("label").expect("label attribute");
        assert_eq!(label.kind(), AttributeType::String);
        assert_eq!(label.node_values(), &[AttributeValue::new(0, Node::text("A"))]);
        assert_eq!(label.link_values(), &[AttributeValue::new(1, Node::text("b-c"))]);
        assert!(label.path_values().is_empty());

        let root = document.attribute("root").expect("root attribute");
        assert_eq!(root.kind(), AttributeType::Bool);
        assert_eq!(
            root.node_values(),
            &[AttributeValue::new(0, true), AttributeValue::new(1, false)]
        );
    }

    #[test]
    fn test_spanning_tree_qualifier() {
        let document = assemble(&tree(), &AssemblyConfig::default()).expect("valid graph");

        assert_eq!(document.qualifiers().len(), 1);
        let qualifier = &document.qualifiers()[0];
        assert_eq!(qualifier.kind(), "spanning_tree");
        assert_eq!(
            qualifier.attributes(),
            &[(0, "root".to_string()), (2, "tree_link".to_string())]
        );
        assert_eq!(
            document.attribute("tree_link").map(|a| a.kind()),
            Some(AttributeType::Bool)
        );
    }

    #[test]
    fn test_metadata_defaults_and_overrides() {
        let document = assemble(&tree(), &AssemblyConfig::default()).expect("valid graph");
        assert_eq!(document.name(), "Graph");
        assert_eq!(document.description(), "Generated by libsea");

        let graph = tree()
            .with_graph_attr("name", "Tree")
            .with_graph_attr("description", "A small tree");
        let document = assemble(&graph, &AssemblyConfig::new("X", "Y")).expect("valid graph");
        assert_eq!(document.name(), "Tree");
        assert_eq!(document.description(), "A small tree");
    }

    #[test]
    fn test_duplicate_node_identity() {
        let graph = tree().node("a", &[]);
        let err = assemble(&graph, &AssemblyConfig::default()).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::DuplicateNodeIdentity {
                node: "a".to_string()
            }
        );
    }

    #[test]
    fn test_node_count_mismatch() {
        let mut graph = tree();
        graph.reported_nodes = Some(4);
        let err = assemble(&graph, &AssemblyConfig::default()).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::NodeCountMismatch {
                reported: 4,
                assigned: 3
            }
        );
    }

    #[test]
    fn test_missing_tree_link() {
        let graph = TestGraph::default()
            .node("a", &[("root", "True")])
            .node("b", &[])
            .edge("a", "b", &[]);
        let err = assemble(&graph, &AssemblyConfig::default()).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::MissingRequiredAttribute {
                name: "tree_link".to_string()
            }
        );
    }

    #[test]
    fn test_missing_root() {
        let graph = TestGraph::default()
            .node("a", &[])
            .edge("a", "a", &[("tree_link", "True")]);
        let err = assemble(&graph, &AssemblyConfig::default()).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::MissingRequiredAttribute {
                name: "root".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_endpoint() {
        let graph = tree().edge("a", "zz", &[]);
        let err = assemble(&graph, &AssemblyConfig::default()).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::UnknownEndpoint {
                node: "zz".to_string()
            }
        );
    }

    #[test]
    fn test_attribute_value_sentinels() {
        assert_eq!(attribute_value("True"), Node::Scalar(Scalar::Boolean(true)));
        assert_eq!(attribute_value("False"), Node::Scalar(Scalar::Boolean(false)));
        assert_eq!(attribute_value("true"), Node::text("true"));
    }
}
