//! Scalar leaf values.
//!
//! A [`Scalar`] holds exactly one primitive value and renders it according to
//! fixed lexical rules:
//!
//! | Variant | Example input | Rendered |
//! |---------|---------------|----------|
//! | `Text` | `say "hi"` | `"say \"hi\""` |
//! | `Boolean` | `true` | `T` |
//! | `Identifier` | `root` | `$root` |
//! | `Integer` | `42` | `42` |
//! | `Double` | `2.0` | `2.0` |
//! | `Verbatim` | `string` | `string` |
//!
//! Scalars ignore the label flag of the render context.

use std::fmt;

use crate::format::{Render, RenderContext};

/// A primitive value in the document model.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Quoted, escaped text.
    Text(String),
    /// `T` or `F`.
    Boolean(bool),
    /// Symbolic name rendered as `$name`, without escaping.
    Identifier(String),
    /// Signed integer.
    Integer(i64),
    /// Floating point number.
    Double(f64),
    /// Text emitted exactly as given.
    ///
    /// Used for bare keywords such as attribute type tags, for absent values
    /// (empty text), and as the last-resort rendering of values that have no
    /// dedicated variant. Nothing is escaped, so the caller is responsible for
    /// keeping the output well formed.
    Verbatim(String),
}

impl Scalar {
    /// Creates a text scalar.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates an identifier scalar.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Creates a verbatim scalar.
    pub fn verbatim(value: impl Into<String>) -> Self {
        Self::Verbatim(value.into())
    }

    /// The rendering of an absent value.
    pub fn empty() -> Self {
        Self::Verbatim(String::new())
    }
}

impl Render for Scalar {
    fn render_block(&self, _ctx: RenderContext) -> String {
        self.to_string()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(value) => write!(f, "\"{}\"", escape_text(value)),
            Scalar::Boolean(true) => write!(f, "T"),
            Scalar::Boolean(false) => write!(f, "F"),
            Scalar::Identifier(name) => write!(f, "${name}"),
            Scalar::Integer(value) => write!(f, "{value}"),
            Scalar::Double(value) => write!(f, "{}", format_double(*value)),
            Scalar::Verbatim(value) => write!(f, "{value}"),
        }
    }
}

/// Escapes text for use between double quotes.
///
/// Each of `\ " | TAB FF BS` gets a single leading backslash. Raw newlines and
/// carriage returns become the two-character sequences `\n` and `\r`, so the
/// escaped text is always a single line. The escape is applied in one pass:
/// a literal backslash already present in the input is escaped like any other.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\\' | '"' | '|' | '\t' | '\u{0c}' | '\u{08}' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Formats a double so that integral values still read as doubles.
fn format_double(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(scalar: Scalar) -> String {
        scalar.render(RenderContext::default())
    }

    #[test]
    fn test_boolean() {
        assert_eq!(render(Scalar::Boolean(true)), "T");
        assert_eq!(render(Scalar::Boolean(false)), "F");
    }

    #[test]
    fn test_identifier() {
        assert_eq!(render(Scalar::identifier("root")), "$root");
    }

    #[test]
    fn test_identifier_is_not_escaped() {
        assert_eq!(render(Scalar::identifier("a|b")), "$a|b");
    }

    #[test]
    fn test_text_plain() {
        assert_eq!(render(Scalar::text("hello")), "\"hello\"");
    }

    #[test]
    fn test_text_quotes_and_pipes() {
        assert_eq!(render(Scalar::text(r#"a"b|c"#)), r#""a\"b\|c""#);
    }

    #[test]
    fn test_text_backslash() {
        assert_eq!(render(Scalar::text(r"C:\tmp")), r#""C:\\tmp""#);
    }

    #[test]
    fn test_text_newlines_become_letters() {
        assert_eq!(render(Scalar::text("a\nb\r")), r#""a\nb\r""#);
    }

    #[test]
    fn test_text_literal_escape_sequence_escaped_once() {
        // Backslash followed by `n`, not a newline.
        assert_eq!(render(Scalar::text(r"a\nb")), r#""a\\nb""#);
    }

    #[test]
    fn test_text_control_characters() {
        assert_eq!(escape_text("\t\u{0c}\u{08}"), "\\\t\\\u{0c}\\\u{08}");
    }

    #[test]
    fn test_integer() {
        assert_eq!(render(Scalar::Integer(42)), "42");
        assert_eq!(render(Scalar::Integer(-7)), "-7");
    }

    #[test]
    fn test_double() {
        assert_eq!(render(Scalar::Double(2.5)), "2.5");
        assert_eq!(render(Scalar::Double(1.0)), "1.0");
        assert_eq!(render(Scalar::Double(-0.125)), "-0.125");
        assert_eq!(render(Scalar::Double(f64::INFINITY)), "inf");
    }

    #[test]
    fn test_verbatim() {
        assert_eq!(render(Scalar::verbatim("string")), "string");
        assert_eq!(render(Scalar::empty()), "");
    }

    #[test]
    fn test_scalar_ignores_label_and_indent_is_applied() {
        let ctx = RenderContext::new(false, 2);
        assert_eq!(Scalar::Integer(3).render(ctx), "  3");
    }
}
