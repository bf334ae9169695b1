//! Data-driven snippet generation.
//!
//! A recipe is a TOML (or JSON) document holding the formatting
//! configuration and a tree of snippet nodes:
//!
//! ```toml
//! [format]
//! spaces_per_tab = 2
//!
//! [[snippets]]
//! kind = "for"
//! limit = "items.length"
//!
//! [[snippets.body]]
//! kind = "call"
//! func_name = "visit"
//! args = ["items[i]"]
//! ```
//!
//! Rendering walks the tree through [`snipgen_js::Emitter`], so the output is
//! exactly what the same calls would produce from Rust.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod node;
mod validate;

use std::path::Path;

use serde::Deserialize;
use snipgen_core::{FormatConfig, IteratorNames};
use snipgen_js::Emitter;
use tracing::debug;

pub use error::{Error, Result};
pub use node::{Node, render_nodes};
use validate::ParseContext;

/// Root of a recipe document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    /// Indentation applied by every block.
    #[serde(default)]
    pub format: FormatConfig,

    /// Top-level snippets, rendered one after another.
    #[serde(default)]
    pub snippets: Vec<Node>,
}

impl Recipe {
    /// Emitter configured with this recipe's formatting.
    pub fn emitter(&self) -> Emitter {
        Emitter::with_config(self.format)
    }

    /// Render every snippet with a fresh set of iterator names.
    pub fn render(&self) -> eyre::Result<String> {
        self.render_with(&mut IteratorNames::new())
    }

    /// Render every snippet, drawing loop counters from `names`.
    pub fn render_with(&self, names: &mut IteratorNames) -> eyre::Result<String> {
        debug!(snippets = self.snippets.len(), "rendering recipe");
        render_nodes(&self.snippets, &self.emitter(), names)
    }
}

/// Parse a recipe file. Files ending in `.json` are read as JSON, anything
/// else as TOML.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Recipe> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();

    if path.extension().is_some_and(|ext| ext == "json") {
        parse_json_with_filename(&content, &filename)
    } else {
        parse_str_with_filename(&content, &filename)
    }
}

/// Parse a TOML recipe from a string (uses "recipe.toml" as default filename)
pub fn parse_str(content: &str) -> Result<Recipe> {
    parse_str_with_filename(content, "recipe.toml")
}

/// Parse a TOML recipe from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Recipe> {
    debug!(filename, "parsing TOML recipe");
    let recipe: Recipe =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

    ParseContext::new(content, filename).validate(&recipe)?;
    Ok(recipe)
}

/// Parse a JSON recipe from a string (uses "recipe.json" as default filename)
pub fn parse_json(content: &str) -> Result<Recipe> {
    parse_json_with_filename(content, "recipe.json")
}

/// Parse a JSON recipe from a string with a custom filename for error reporting
pub fn parse_json_with_filename(content: &str, filename: &str) -> Result<Recipe> {
    debug!(filename, "parsing JSON recipe");
    let recipe: Recipe =
        serde_json::from_str(content).map_err(|e| Error::json(e, content, filename))?;

    ParseContext::new(content, filename).validate(&recipe)?;
    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_recipe() {
        let recipe = parse_str("").unwrap();
        assert_eq!(recipe, Recipe::default());
        assert_eq!(recipe.render().unwrap(), "");
    }

    #[test]
    fn test_format_section() {
        let recipe = parse_str("[format]\nspaces_per_tab = 2\ntabs = 2\n").unwrap();
        assert_eq!(recipe.format, FormatConfig::new(2, 2));
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = parse_str("[format]\nspaces_per_tab = 0\n").unwrap_err();
        match *err {
            Error::Validation { span, message, .. } => {
                assert!(message.contains("spaces_per_tab"));
                assert_eq!(span.unwrap().offset(), 9);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_top_level_key() {
        let err = parse_str("[output]\npath = \"x\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_kind() {
        let err = parse_str("[[snippets]]\nkind = \"switch\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_nested_for_validation() {
        let src = r#"
[[snippets]]
kind = "if"
condition = "ready"

[[snippets.body]]
kind = "for"
start = "var i = 0"
"#;
        let err = parse_str(src).unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_json("{\"snippets\": [}").unwrap_err();
        assert!(matches!(*err, Error::Json { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
