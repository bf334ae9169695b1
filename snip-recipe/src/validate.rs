//! Checks run on a recipe after parsing.

use miette::SourceSpan;

use crate::node::FOR_CLAUSES;
use crate::{Error, Node, Recipe, Result};

/// Source information carried through validation for error reporting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    fn error(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Error::validation(message, self.src, self.filename, span)
    }

    pub fn validate(&self, recipe: &Recipe) -> Result<()> {
        if recipe.format.spaces_per_tab == 0 {
            return Err(self.error(
                "spaces_per_tab must be at least 1",
                find_key_span(self.src, "spaces_per_tab"),
            ));
        }

        let mut fors = 0;
        for node in &recipe.snippets {
            self.validate_node(node, &mut fors)?;
        }
        Ok(())
    }

    /// Check `node` and its children. `fors` counts the `for` nodes seen so
    /// far in document order, so a failing loop can be found in the source.
    fn validate_node(&self, node: &Node, fors: &mut usize) -> Result<()> {
        if let Node::For {
            start,
            stop,
            increment,
            iterator,
            limit,
            ..
        } = node
        {
            let index = *fors;
            *fors += 1;

            let present: Vec<&str> = [("start", start), ("stop", stop), ("increment", increment)]
                .into_iter()
                .filter(|(_, clause)| clause.is_some())
                .map(|(key, _)| key)
                .collect();
            let valid = match limit {
                Some(_) => present.is_empty(),
                None => present.len() == 3 && iterator.is_none(),
            };
            if !valid {
                let key = if limit.is_some() {
                    "limit"
                } else if present.len() == 3 {
                    "iterator"
                } else {
                    present.first().copied().unwrap_or("kind")
                };
                return Err(self.error(FOR_CLAUSES, self.for_key_span(index, key)));
            }
        }

        for child in node.children() {
            self.validate_node(child, fors)?;
        }
        Ok(())
    }

    /// Span of `key` inside the `index`-th `for` node of the source.
    ///
    /// The node runs from its `kind` key to the next `kind` key. When `key`
    /// is not inside that range the `kind` key itself is labelled.
    fn for_key_span(&self, index: usize, key: &str) -> Option<SourceSpan> {
        let markers = kind_markers(self.src);
        let (pos, (start, _)) = markers
            .iter()
            .enumerate()
            .filter(|(_, (_, kind))| *kind == "for")
            .nth(index)?;
        let end = markers
            .get(pos + 1)
            .map_or(self.src.len(), |(offset, _)| *offset);

        find_key_span(&self.src[*start..end], key)
            .map(|span| SourceSpan::from((start + span.offset(), span.len())))
            .or_else(|| Some(SourceSpan::from((*start, "kind".len()))))
    }
}

/// Offsets of every `kind` key in the source, paired with its value.
///
/// Matches both `kind = "for"` and `"kind": "for"`.
fn kind_markers(src: &str) -> Vec<(usize, &str)> {
    src.match_indices("kind")
        .filter(|(offset, _)| {
            !src[..*offset]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_')
        })
        .filter_map(|(offset, key)| {
            let rest = &src[offset + key.len()..];
            let rest = rest.strip_prefix('"').unwrap_or(rest).trim_start();
            let rest = rest
                .strip_prefix('=')
                .or_else(|| rest.strip_prefix(':'))?
                .trim_start()
                .strip_prefix('"')?;
            let value = &rest[..rest.find('"')?];
            Some((offset, value))
        })
        .collect()
}

/// Find the span of the first `key` used as a TOML key or JSON member.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{key}\"");
    for (offset, line) in line_offsets(src) {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        let is_toml_key = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_toml_key {
            return Some(SourceSpan::from((offset + indent, key.len())));
        }

        if let Some(pos) = line.find(&quoted) {
            return Some(SourceSpan::from((offset + pos, quoted.len())));
        }
    }
    None
}

fn line_offsets(src: &str) -> impl Iterator<Item = (usize, &str)> {
    src.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line.trim_end_matches(['\r', '\n'])))
    })
}
