//! Error types for LibSea operations.
//!
//! [`AssemblyError`] covers the fatal conditions of building a document from a
//! source graph. [`LibseaError`] is the crate-level error that wraps it
//! together with input and configuration failures.

use std::io;

use thiserror::Error;

/// Fatal conditions raised while assembling a document.
///
/// Every variant carries the identity that triggered it. There is no partial
/// document on failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// The same node identity was produced twice by the node iterator, or two
    /// distinct node handles share one display name.
    #[error("Node collision: `{node}` was assigned more than one id")]
    DuplicateNodeIdentity { node: String },

    /// The source graph reports a node count that differs from the number of
    /// ids assigned while iterating its nodes.
    #[error("Node collision: graph reports {reported} nodes but {assigned} ids were assigned")]
    NodeCountMismatch { reported: usize, assigned: usize },

    /// An edge refers to a node that the node iterator never produced.
    #[error("Edge endpoint `{node}` is not a node of the graph")]
    UnknownEndpoint { node: String },

    /// The spanning tree qualifier needs an attribute that no node or edge has.
    #[error("Required attribute `{name}` is not defined on any node or edge")]
    MissingRequiredAttribute { name: String },
}

/// The main error type for LibSea operations.
#[derive(Debug, Error)]
pub enum LibseaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("DOT parse error: {0}")]
    Dot(String),

    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembly_error_names_identity() {
        let err = AssemblyError::DuplicateNodeIdentity {
            node: "a".to_string(),
        };
        assert!(err.to_string().contains("`a`"));

        let err = AssemblyError::MissingRequiredAttribute {
            name: "tree_link".to_string(),
        };
        assert!(err.to_string().contains("`tree_link`"));
    }

    #[test]
    fn test_assembly_error_wraps() {
        let err: LibseaError = AssemblyError::UnknownEndpoint {
            node: "z".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Assembly error: Edge endpoint `z` is not a node of the graph"
        );
    }
}
