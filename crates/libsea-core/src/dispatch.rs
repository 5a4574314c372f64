//! Type dispatcher: native values to document nodes.
//!
//! [`Native`] enumerates every kind of value the document model accepts. The
//! dispatcher ([`dispatch`], or `Node::from(native)`) maps each kind to its
//! wrapper:
//!
//! | Native | Node |
//! |--------|------|
//! | `Absent` | empty verbatim scalar |
//! | `Text` | [`Scalar::Text`] |
//! | `Boolean` | [`Scalar::Boolean`] |
//! | `Integer` | [`Scalar::Integer`] |
//! | `Double` | [`Scalar::Double`] |
//! | `Sequence` | [`List`] |
//! | `Mapping` | [`Object`] |
//! | `Tuple` | unnamed [`Tuple`] |
//! | `Record` | named [`Tuple`] |
//! | `Node` | unchanged |
//! | `Opaque` | verbatim scalar (fallback, unescaped) |
//!
//! Dispatch has no side effects and recurses into nested values.
//!
//! # Example
//!
//! ```
//! use libsea_core::{Native, Render, RenderContext, dispatch};
//!
//! let link = Native::record([("source", 0i64), ("destination", 1i64)]);
//! let node = dispatch(link);
//! assert_eq!(node.render(RenderContext::default()), "{@source=0; @destination=1;}");
//! ```

use indexmap::IndexMap;
use log::debug;

use crate::{
    composite::{List, Object, Tuple},
    node::Node,
    scalar::Scalar,
};

/// A native value awaiting conversion into a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
    Absent,
    Text(String),
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Sequence(Vec<Native>),
    Mapping(IndexMap<String, Native>),
    /// Tuple-like value without field names.
    Tuple(Vec<Native>),
    /// Tuple-like value that exposes field names.
    Record(Vec<(String, Native)>),
    /// A value that is already a document node.
    Node(Node),
    /// A value with no dedicated representation, carried as its plain text.
    ///
    /// Rendered verbatim, without quoting or escaping. This is a deliberate
    /// fallback; the output is only well formed if the text itself is.
    Opaque(String),
}

impl Native {
    /// Creates a tuple-like value with named fields.
    pub fn record<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Native>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Creates a tuple-like value without field names.
    pub fn tuple<V: Into<Native>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::Tuple(values.into_iter().map(Into::into).collect())
    }

    /// Creates a sequence.
    pub fn sequence<V: Into<Native>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }

    /// Creates a mapping that keeps the given field order.
    pub fn mapping<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Native>,
    {
        Self::Mapping(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Carries any displayable value through the plain-text fallback.
    pub fn opaque(value: impl ToString) -> Self {
        Self::Opaque(value.to_string())
    }
}

/// Converts a native value into the node that wraps it.
pub fn dispatch(value: impl Into<Native>) -> Node {
    Node::from(value.into())
}

impl From<Native> for Node {
    fn from(native: Native) -> Self {
        match native {
            Native::Absent => Node::empty(),
            Native::Text(value) => Scalar::Text(value).into(),
            Native::Boolean(value) => Scalar::Boolean(value).into(),
            Native::Integer(value) => Scalar::Integer(value).into(),
            Native::Double(value) => Scalar::Double(value).into(),
            Native::Sequence(items) => items.into_iter().map(Node::from).collect::<List>().into(),
            Native::Mapping(fields) => fields
                .into_iter()
                .map(|(name, value)| (name, Node::from(value)))
                .collect::<Object>()
                .into(),
            Native::Tuple(values) => Tuple::unnamed(values.into_iter().map(Node::from)).into(),
            Native::Record(fields) => Tuple::named(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, Node::from(value))),
            )
            .into(),
            Native::Node(node) => node,
            Native::Opaque(text) => {
                debug!(text; "Rendering value through plain-text fallback");
                Scalar::Verbatim(text).into()
            }
        }
    }
}

// =============================================================================
// Conversions into Native
// =============================================================================

impl From<&str> for Native {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Native {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Native {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for Native {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Native {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Native {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for Native {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<usize> for Native {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::opaque(value), Self::Integer)
    }
}

impl From<f64> for Native {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<f32> for Native {
    fn from(value: f32) -> Self {
        Self::Double(value.into())
    }
}

impl From<Node> for Native {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Scalar> for Native {
    fn from(scalar: Scalar) -> Self {
        Self::Node(scalar.into())
    }
}

impl<T: Into<Native>> From<Option<T>> for Native {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<Native>> From<Vec<T>> for Native {
    fn from(values: Vec<T>) -> Self {
        Self::sequence(values)
    }
}

impl<K: Into<String>, V: Into<Native>> From<IndexMap<K, V>> for Native {
    fn from(fields: IndexMap<K, V>) -> Self {
        Self::mapping(fields)
    }
}

impl<A: Into<Native>, B: Into<Native>> From<(A, B)> for Native {
    fn from((a, b): (A, B)) -> Self {
        Self::Tuple(vec![a.into(), b.into()])
    }
}

impl<A: Into<Native>, B: Into<Native>, C: Into<Native>> From<(A, B, C)> for Native {
    fn from((a, b, c): (A, B, C)) -> Self {
        Self::Tuple(vec![a.into(), b.into(), c.into()])
    }
}
