//! Composite values: tuples, lists, and objects.
//!
//! - [`Tuple`]: ordered, heterogeneous, optionally named members on one line,
//!   e.g. `{@source=0; @destination=1;}`
//! - [`List`]: ordered values, one per line, e.g. `[\n    1,\n    2\n]`
//! - [`Object`]: insertion-ordered named fields, one per line, e.g.
//!   `{\n    @k="v";\n}`
//!
//! Children are always rendered flat and positioned by their parent, so a
//! composite nested at any depth picks up its margin from the enclosing
//! block.

use indexmap::IndexMap;

use crate::{
    format::{INDENT_STEP, Render, RenderContext, TERMINATOR, indent},
    node::Node,
};

// =============================================================================
// Tuple
// =============================================================================

/// An ordered sequence of `(optional field name, value)` members.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tuple {
    members: Vec<(Option<String>, Node)>,
}

impl Tuple {
    /// Creates an empty tuple.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tuple whose members all carry a field name.
    pub fn named<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Node>,
    {
        Self {
            members: fields
                .into_iter()
                .map(|(name, value)| (Some(name.into()), value.into()))
                .collect(),
        }
    }

    /// Creates a tuple with no field names.
    pub fn unnamed<V: Into<Node>>(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            members: values.into_iter().map(|value| (None, value.into())).collect(),
        }
    }

    /// Appends a member.
    pub fn push(&mut self, name: Option<String>, value: impl Into<Node>) {
        self.members.push((name, value.into()));
    }

    /// Returns the members in order.
    pub fn members(&self) -> &[(Option<String>, Node)] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Render for Tuple {
    fn render_block(&self, ctx: RenderContext) -> String {
        let ctx = ctx.flat();
        let members = self
            .members
            .iter()
            .map(|(name, value)| {
                let label = name.as_deref().map(|name| ctx.label(name)).unwrap_or_default();
                format!("{label}{}{TERMINATOR}", value.render(ctx))
            })
            .collect::<Vec<_>>()
            .join(" ");
        format!("{{{members}}}")
    }
}

// =============================================================================
// List
// =============================================================================

/// An ordered sequence of values rendered one per line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    items: Vec<Node>,
}

impl List {
    /// Creates a list from already dispatched values.
    pub fn new(items: Vec<Node>) -> Self {
        Self { items }
    }

    /// Appends a value.
    pub fn push(&mut self, item: impl Into<Node>) {
        self.items.push(item.into());
    }

    /// Returns the values in order.
    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<V: Into<Node>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl Render for List {
    fn render_block(&self, ctx: RenderContext) -> String {
        let item_ctx = ctx.with_indent(INDENT_STEP);
        let items = self
            .items
            .iter()
            .map(|item| item.render(item_ctx))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("[\n{items}\n]")
    }
}

// =============================================================================
// Object
// =============================================================================

/// An insertion-ordered mapping from field name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    fields: IndexMap<String, Node>,
}

impl Object {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, keeping its original position if it already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Node>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder variant of [`Object::insert`].
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Node>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.fields.get(name)
    }

    /// Iterates fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl Render for Object {
    fn render_block(&self, ctx: RenderContext) -> String {
        let ctx = ctx.flat();
        let mut output = String::from("{\n");
        for (name, value) in &self.fields {
            let line = format!("{}{}{TERMINATOR}", ctx.label(name), value.render(ctx));
            output.push_str(&indent(&line, INDENT_STEP));
            output.push('\n');
        }
        output.push('}');
        output
    }
}
