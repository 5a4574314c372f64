//! Configuration types for LibSea document assembly and rendering.
//!
//! This module provides configuration structures that control how documents
//! are assembled from source graphs and how they are written. All types
//! implement [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining assembly and render settings.
//! - [`AssemblyConfig`] - Fallback metadata used when the source graph has none.
//! - [`RenderConfig`] - Label and comment switches for the text output.
//!
//! # Example
//!
//! ```
//! # use libsea::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.render().labels());
//! assert_eq!(config.assembly().default_name(), "Graph");
//! ```

use serde::Deserialize;

/// Document name used when the source graph has no `name` attribute.
pub const DEFAULT_NAME: &str = "Graph";

/// Document description used when the source graph has no `description` attribute.
pub const DEFAULT_DESCRIPTION: &str = "Generated by libsea";

/// Top-level configuration combining assembly and render settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Assembly configuration section.
    #[serde(default)]
    assembly: AssemblyConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(assembly: AssemblyConfig, render: RenderConfig) -> Self {
        Self { assembly, render }
    }

    /// Returns the assembly configuration.
    pub fn assembly(&self) -> &AssemblyConfig {
        &self.assembly
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the render configuration for in-place overrides.
    pub fn render_mut(&mut self) -> &mut RenderConfig {
        &mut self.render
    }
}

/// Fallback document metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    default_name: String,
    default_description: String,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_NAME.to_string(),
            default_description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl AssemblyConfig {
    /// Creates a new [`AssemblyConfig`] with the given fallbacks.
    pub fn new(default_name: impl Into<String>, default_description: impl Into<String>) -> Self {
        Self {
            default_name: default_name.into(),
            default_description: default_description.into(),
        }
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn default_description(&self) -> &str {
        &self.default_description
    }
}

/// Switches for the text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Emit `@name=` labels before every field and named tuple member.
    labels: bool,

    /// Emit section comments and the blank lines between sections.
    comments: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            labels: true,
            comments: true,
        }
    }
}

impl RenderConfig {
    pub fn new(labels: bool, comments: bool) -> Self {
        Self { labels, comments }
    }

    pub fn labels(&self) -> bool {
        self.labels
    }

    pub fn comments(&self) -> bool {
        self.comments
    }

    pub fn set_labels(&mut self, labels: bool) {
        self.labels = labels;
    }

    pub fn set_comments(&mut self, comments: bool) {
        self.comments = comments;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.render().labels());
        assert!(config.render().comments());
        assert_eq!(config.assembly().default_name(), DEFAULT_NAME);
        assert_eq!(config.assembly().default_description(), DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [render]
            comments = false

            [assembly]
            default_name = "Tree"
            "#,
        )
        .expect("valid config");

        assert!(config.render().labels());
        assert!(!config.render().comments());
        assert_eq!(config.assembly().default_name(), "Tree");
        assert_eq!(config.assembly().default_description(), DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").expect("valid config");
        assert_eq!(*config.render(), RenderConfig::default());
    }

    #[test]
    fn test_render_overrides() {
        let mut config = AppConfig::default();
        config.render_mut().set_labels(false);
        config.render_mut().set_comments(false);
        assert_eq!(*config.render(), RenderConfig::new(false, false));
    }
}
