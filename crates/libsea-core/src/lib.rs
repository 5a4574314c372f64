//! LibSea Core Types and Formatting
//!
//! This crate provides the document model and the formatting engine for the
//! LibSea text format. It includes:
//!
//! - **Format**: The render protocol and indentation ([`format`] module)
//! - **Scalars**: Text, boolean, identifier and numeric leaves ([`scalar::Scalar`])
//! - **Composites**: Tuples, lists and objects ([`composite`] module)
//! - **Nodes**: The document node sum type ([`node::Node`])
//! - **Dispatch**: Conversion of native values into nodes ([`dispatch`] module)

pub mod composite;
pub mod dispatch;
pub mod format;
pub mod node;
pub mod scalar;

pub use composite::{List, Object, Tuple};
pub use dispatch::{Native, dispatch};
pub use format::{Render, RenderContext};
pub use node::Node;
pub use scalar::Scalar;
