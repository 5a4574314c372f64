//! Graphviz DOT input.
//!
//! [`DotGraph`] parses DOT source with `graphviz-rust` and exposes it as a
//! [`SourceGraph`]:
//!
//! - Nodes are ordered by first mention, whether in a node statement or as an
//!   edge endpoint, including inside subgraphs.
//! - Edge chains (`a -> b -> c`) expand into consecutive pairs; a subgraph
//!   endpoint connects to every node it contains.
//! - `node [...]` and `edge [...]` defaults apply to elements declared after
//!   them, within the enclosing scope.
//! - Repeated node statements merge their attributes; later values win.
//! - Top-level `key=value` statements and `graph [...]` blocks provide the
//!   graph attributes.
//!
//! Quoted ids are unquoted, so `label="A"` has the value `A`.

use dot_structures::{
    Attribute, Edge, EdgeTy, Graph, GraphAttributes, Id, NodeId, Stmt, Vertex,
};
use indexmap::IndexMap;
use log::debug;

use crate::{assemble::SourceGraph, error::LibseaError};

type Attributes = IndexMap<String, String>;

/// Attribute defaults in effect for a scope.
#[derive(Debug, Clone, Default)]
struct Defaults {
    node: Attributes,
    edge: Attributes,
}

#[derive(Debug, Clone)]
struct DotEdge {
    source: String,
    destination: String,
    attributes: Attributes,
}

/// A graph read from Graphviz DOT source.
#[derive(Debug, Clone, Default)]
pub struct DotGraph {
    graph_attrs: Attributes,
    nodes: IndexMap<String, Attributes>,
    edges: Vec<DotEdge>,
}

impl DotGraph {
    /// Parses DOT source.
    ///
    /// # Errors
    ///
    /// Returns [`LibseaError::Dot`] if the source is not valid DOT.
    pub fn parse(source: &str) -> Result<Self, LibseaError> {
        let graph = graphviz_rust::parse(source).map_err(LibseaError::Dot)?;
        let stmts = match graph {
            Graph::Graph { stmts, .. } | Graph::DiGraph { stmts, .. } => stmts,
        };

        let mut dot = Self::default();
        dot.collect(&stmts, &mut Defaults::default(), true);
        debug!(nodes = dot.nodes.len(), edges = dot.edges.len(); "DOT graph parsed");

        Ok(dot)
    }

    fn collect(&mut self, stmts: &[Stmt], defaults: &mut Defaults, top_level: bool) {
        for stmt in stmts {
            match stmt {
                Stmt::Node(node) => {
                    let attributes = self.touch_node(node_name(&node.id), defaults);
                    attributes.extend(attribute_pairs(&node.attributes));
                }
                Stmt::Edge(edge) => self.collect_edge(edge, defaults),
                Stmt::Subgraph(subgraph) => {
                    self.collect(&subgraph.stmts, &mut defaults.clone(), false);
                }
                Stmt::Attribute(attribute) => {
                    if top_level {
                        let (key, value) = attribute_pair(attribute);
                        self.graph_attrs.insert(key, value);
                    }
                }
                Stmt::GAttribute(GraphAttributes::Graph(attributes)) => {
                    if top_level {
                        self.graph_attrs.extend(attribute_pairs(attributes));
                    }
                }
                Stmt::GAttribute(GraphAttributes::Node(attributes)) => {
                    defaults.node.extend(attribute_pairs(attributes));
                }
                Stmt::GAttribute(GraphAttributes::Edge(attributes)) => {
                    defaults.edge.extend(attribute_pairs(attributes));
                }
            }
        }
    }

    fn collect_edge(&mut self, edge: &Edge, defaults: &Defaults) {
        let groups: Vec<Vec<String>> = edge_vertices(edge)
            .into_iter()
            .map(|vertex| self.vertex_nodes(vertex, defaults))
            .collect();
        let explicit = attribute_pairs(&edge.attributes);

        for pair in groups.windows(2) {
            for source in &pair[0] {
                for destination in &pair[1] {
                    let mut attributes = defaults.edge.clone();
                    attributes.extend(explicit.iter().cloned());
                    self.edges.push(DotEdge {
                        source: source.clone(),
                        destination: destination.clone(),
                        attributes,
                    });
                }
            }
        }
    }

    /// Registers the nodes of an edge endpoint and returns their names.
    fn vertex_nodes(&mut self, vertex: &Vertex, defaults: &Defaults) -> Vec<String> {
        match vertex {
            Vertex::N(id) => {
                let name = node_name(id);
                self.touch_node(name.clone(), defaults);
                vec![name]
            }
            Vertex::S(subgraph) => {
                self.collect(&subgraph.stmts, &mut defaults.clone(), false);
                let mut members = Vec::new();
                subgraph_members(&subgraph.stmts, &mut members);
                members
            }
        }
    }

    fn touch_node(&mut self, name: String, defaults: &Defaults) -> &mut Attributes {
        self.nodes
            .entry(name)
            .or_insert_with(|| defaults.node.clone())
    }
}

impl SourceGraph for DotGraph {
    type Node = String;
    type Edge = usize;

    fn graph_attr(&self, name: &str) -> Option<String> {
        self.graph_attrs.get(name).cloned()
    }

    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_ {
        self.nodes.keys().cloned()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
        0..self.edges.len()
    }

    fn endpoints(&self, edge: &Self::Edge) -> (Self::Node, Self::Node) {
        let edge = &self.edges[*edge];
        (edge.source.clone(), edge.destination.clone())
    }

    fn node_attrs(&self, node: &Self::Node) -> Vec<(String, String)> {
        self.nodes
            .get(node)
            .map(|attributes| attributes.clone().into_iter().collect())
            .unwrap_or_default()
    }

    fn edge_attrs(&self, edge: &Self::Edge) -> Vec<(String, String)> {
        self.edges
            .get(*edge)
            .map(|edge| edge.attributes.clone().into_iter().collect())
            .unwrap_or_default()
    }
}

/// Collects the names of all nodes mentioned inside a subgraph.
fn subgraph_members(stmts: &[Stmt], members: &mut Vec<String>) {
    fn add(name: String, members: &mut Vec<String>) {
        if !members.contains(&name) {
            members.push(name);
        }
    }

    for stmt in stmts {
        match stmt {
            Stmt::Node(node) => add(node_name(&node.id), members),
            Stmt::Edge(edge) => {
                for vertex in edge_vertices(edge) {
                    match vertex {
                        Vertex::N(id) => add(node_name(id), members),
                        Vertex::S(subgraph) => subgraph_members(&subgraph.stmts, members),
                    }
                }
            }
            Stmt::Subgraph(subgraph) => subgraph_members(&subgraph.stmts, members),
            Stmt::Attribute(_) | Stmt::GAttribute(_) => {}
        }
    }
}

fn edge_vertices(edge: &Edge) -> Vec<&Vertex> {
    match &edge.ty {
        EdgeTy::Pair(source, destination) => vec![source, destination],
        EdgeTy::Chain(chain) => chain.iter().collect(),
    }
}

fn node_name(node_id: &NodeId) -> String {
    id_text(&node_id.0)
}

fn attribute_pair(attribute: &Attribute) -> (String, String) {
    (id_text(&attribute.0), id_text(&attribute.1))
}

fn attribute_pairs(attributes: &[Attribute]) -> Vec<(String, String)> {
    attributes.iter().map(attribute_pair).collect()
}

/// Returns the text of an id, without the quotes of a quoted id.
fn id_text(id: &Id) -> String {
    match id {
        Id::Escaped(text) => text
            .strip_prefix('"')
            .and_then(|inner| inner.strip_suffix('"'))
            .unwrap_or(text.as_str())
            .replace("\\\"", "\""),
        Id::Html(text) | Id::Plain(text) | Id::Anonymous(text) => text.clone(),
    }
}
