//! LibSea - Convert attributed graphs into the LibSea text format.
//!
//! Assembly and rendering of LibSea graph documents. An attributed source
//! graph (anything implementing [`SourceGraph`], or Graphviz DOT source with
//! the `graphviz` feature) is turned into a [`Document`] with stable integer
//! ids and derived attribute and qualifier tables, which is then written as
//! LibSea text.

pub mod config;
pub mod records;

mod assemble;
mod document;
#[cfg(feature = "graphviz")]
mod dot;
mod error;

pub use libsea_core::{
    Native, Node, Render, RenderContext, Scalar, composite, dispatch, format, scalar,
};

pub use assemble::{
    ROOT_ATTRIBUTE, SourceGraph, TREE_LINK_ATTRIBUTE, assemble, attribute_value,
};
pub use document::Document;
#[cfg(feature = "graphviz")]
pub use dot::DotGraph;
pub use error::{AssemblyError, LibseaError};

use log::{debug, info};

use config::AppConfig;

/// Builder for assembling and rendering LibSea documents.
///
/// # Examples
///
/// ```rust,no_run
/// use libsea::{DocumentBuilder, config::AppConfig};
///
/// let source = "digraph { a [root=True]; b [root=False]; a -> b [tree_link=True]; }";
///
/// let builder = DocumentBuilder::new(AppConfig::default());
///
/// // Parse DOT source and assemble the document
/// let graph = builder.parse_dot(source).expect("Failed to parse");
/// let document = builder.assemble(&graph).expect("Failed to assemble");
///
/// // Render the document
/// let text = builder.render(&document);
/// assert!(text.starts_with("Graph\n{"));
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    config: AppConfig,
}

impl DocumentBuilder {
    /// Create a new document builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Assembly and render configuration
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder uses.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse Graphviz DOT source into a source graph.
    ///
    /// # Errors
    ///
    /// Returns [`LibseaError::Dot`] if the source is not valid DOT.
    #[cfg(feature = "graphviz")]
    pub fn parse_dot(&self, source: &str) -> Result<DotGraph, LibseaError> {
        info!("Parsing DOT source");
        let graph = DotGraph::parse(source)?;
        log::trace!(graph:?; "Parsed DOT graph");
        Ok(graph)
    }

    /// Assemble a document from any source graph.
    ///
    /// # Errors
    ///
    /// Returns [`LibseaError::Assembly`] on node collisions, unknown edge
    /// endpoints, or a missing `root` / `tree_link` attribute.
    pub fn assemble<G: SourceGraph>(&self, graph: &G) -> Result<Document, LibseaError> {
        let document = assemble(graph, self.config.assembly())?;
        debug!(name = document.name(); "Document built successfully");
        Ok(document)
    }

    /// Render a document to LibSea text.
    pub fn render(&self, document: &Document) -> String {
        info!(
            labels = self.config.render().labels(),
            comments = self.config.render().comments();
            "Rendering document"
        );
        document.render(self.config.render())
    }

    /// Convert DOT source straight to LibSea text.
    ///
    /// # Errors
    ///
    /// Returns [`LibseaError`] for DOT parse errors or assembly errors.
    #[cfg(feature = "graphviz")]
    pub fn convert_dot(&self, source: &str) -> Result<String, LibseaError> {
        let graph = self.parse_dot(source)?;
        let document = self.assemble(&graph)?;
        Ok(self.render(&document))
    }
}
