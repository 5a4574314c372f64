//! Render protocol shared by every document node.
//!
//! Every node renders itself through [`Render`]. The protocol has two inputs,
//! carried together in a [`RenderContext`]:
//!
//! - **labeled**: whether composite members are prefixed with `@name=`
//! - **indent**: the left margin applied to every non-empty line of the
//!   rendered block
//!
//! Rendered text never starts or ends with a newline and never ends with the
//! record terminator. Callers append the terminator themselves.
//!
//! # Example
//!
//! ```
//! use libsea_core::format::{RenderContext, indent};
//!
//! let ctx = RenderContext::new(true, 4);
//! assert_eq!(ctx.label("name"), "@name=");
//! assert_eq!(indent("a\n\nb", 2), "  a\n\n  b");
//! ```

/// Number of spaces each nesting level of a list or object adds.
pub const INDENT_STEP: usize = 4;

/// Terminator appended after every field and tuple member.
pub const TERMINATOR: char = ';';

/// Formatting state passed by value through every recursive render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    labeled: bool,
    indent: usize,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(true, 0)
    }
}

impl RenderContext {
    /// Creates a context with the given label mode and left margin.
    pub fn new(labeled: bool, indent: usize) -> Self {
        Self { labeled, indent }
    }

    /// Returns `true` if members should be prefixed with `@name=`.
    pub fn is_labeled(self) -> bool {
        self.labeled
    }

    /// Returns the left margin in spaces.
    pub fn indent(self) -> usize {
        self.indent
    }

    /// Returns a copy of this context with a different left margin.
    pub fn with_indent(self, indent: usize) -> Self {
        Self { indent, ..self }
    }

    /// Returns a copy of this context with no left margin.
    ///
    /// Children of composite nodes are rendered flat and positioned by
    /// their parent.
    pub fn flat(self) -> Self {
        self.with_indent(0)
    }

    /// Returns the `@name=` prefix, or an empty string when unlabeled.
    pub fn label(self, name: &str) -> String {
        if self.labeled {
            format!("@{name}=")
        } else {
            String::new()
        }
    }
}

/// The render contract implemented by every document node.
pub trait Render {
    /// Renders the node without any left margin.
    ///
    /// Implementations decide the internal layout of their block; the margin
    /// requested by the context is applied by [`Render::render`].
    fn render_block(&self, ctx: RenderContext) -> String;

    /// Renders the node and applies the context's left margin to every
    /// non-empty line.
    fn render(&self, ctx: RenderContext) -> String {
        indent(&self.render_block(ctx), ctx.indent())
    }
}

/// Prefixes every non-empty line of `text` with `amount` spaces.
///
/// Blank lines are left untouched so separator lines stay empty.
pub fn indent(text: &str, amount: usize) -> String {
    if amount == 0 {
        return text.to_string();
    }

    let margin = " ".repeat(amount);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{margin}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_when_labeled() {
        let ctx = RenderContext::new(true, 0);
        assert_eq!(ctx.label("numNodes"), "@numNodes=");
    }

    #[test]
    fn test_label_when_unlabeled() {
        let ctx = RenderContext::new(false, 0);
        assert_eq!(ctx.label("numNodes"), "");
    }

    #[test]
    fn test_with_indent_keeps_label_mode() {
        let ctx = RenderContext::new(false, 0).with_indent(8);
        assert!(!ctx.is_labeled());
        assert_eq!(ctx.indent(), 8);
        assert_eq!(ctx.flat().indent(), 0);
    }

    #[test]
    fn test_indent_zero_is_identity() {
        assert_eq!(indent("a\n b\n", 0), "a\n b\n");
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("[\n\n]", 4), "    [\n\n    ]");
    }

    #[test]
    fn test_indent_trailing_newline_preserved() {
        assert_eq!(indent("x;\n", 4), "    x;\n");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn check_indent_only_adds_margin(text: &str, amount: usize) -> Result<(), TestCaseError> {
        let indented = indent(text, amount);
        let margin = " ".repeat(amount);

        let original: Vec<&str> = text.split('\n').collect();
        let result: Vec<&str> = indented.split('\n').collect();
        prop_assert_eq!(original.len(), result.len());

        for (before, after) in original.iter().zip(&result) {
            if before.is_empty() {
                prop_assert!(after.is_empty());
            } else {
                prop_assert_eq!(after.strip_prefix(margin.as_str()), Some(*before));
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn indent_only_adds_margin(text in "[a-z ;{}\n]{0,40}", amount in 0usize..12) {
            check_indent_only_adds_margin(&text, amount)?;
        }
    }
}
