//! The document node sum type.

use crate::{
    composite::{List, Object, Tuple},
    dispatch::dispatch,
    format::{Render, RenderContext},
    scalar::Scalar,
};

/// Any value participating in the render protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Tuple(Tuple),
    List(List),
    Object(Object),
}

impl Node {
    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::text(value))
    }

    /// Creates an identifier node.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Scalar(Scalar::identifier(name))
    }

    /// Creates a node that renders `value` exactly as given.
    pub fn verbatim(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::verbatim(value))
    }

    /// The rendering of an absent value.
    pub fn empty() -> Self {
        Self::Scalar(Scalar::empty())
    }
}

impl Render for Node {
    fn render_block(&self, ctx: RenderContext) -> String {
        match self {
            Node::Scalar(scalar) => scalar.render_block(ctx),
            Node::Tuple(tuple) => tuple.render_block(ctx),
            Node::List(list) => list.render_block(ctx),
            Node::Object(object) => object.render_block(ctx),
        }
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Tuple> for Node {
    fn from(tuple: Tuple) -> Self {
        Self::Tuple(tuple)
    }
}

impl From<List> for Node {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<Object> for Node {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

macro_rules! node_from_native {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    dispatch(value)
                }
            }
        )*
    };
}

node_from_native!(&str, String, bool, i32, i64, u32, usize, f32, f64);
