//! The result every emitter returns, and the body blocks are built from.

use std::fmt;

use eyre::Result;
use serde::Serialize;

/// A rendered fragment paired with the record that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet<D = ()> {
    /// Final, formatted source text.
    pub code: String,
    /// Input record, possibly enriched with derived fields.
    pub data: Option<D>,
}

impl<D> Snippet<D> {
    /// A snippet carrying its input record.
    pub fn new(code: impl Into<String>, data: D) -> Self {
        Self {
            code: code.into(),
            data: Some(data),
        }
    }

    /// A snippet with no record attached.
    pub fn code_only(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            data: None,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    pub fn into_code(self) -> String {
        self.code
    }
}

impl<D: Serialize> Snippet<D> {
    /// The record as a JSON mapping, for callers that inspect it generically.
    pub fn data_json(&self) -> Result<Option<serde_json::Value>> {
        self.data
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(Into::into)
    }
}

impl<D> fmt::Display for Snippet<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// The nested text of a block construct.
///
/// Either already-rendered text or a producer evaluated only when the
/// enclosing block renders. A failing producer's error reaches the caller
/// of the block emitter unchanged.
pub enum Body<'a> {
    Code(String),
    Deferred(Box<dyn FnOnce() -> Result<String> + 'a>),
}

impl<'a> Body<'a> {
    /// Wrap a producer that renders the body on demand.
    pub fn deferred<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<String> + 'a,
    {
        Self::Deferred(Box::new(f))
    }

    /// Join already-rendered statements, one per line.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines.into_iter().map(|l| l.as_ref().to_string()).collect();
        Self::Code(lines.join("\n"))
    }

    /// Produce the body text.
    pub fn render(self) -> Result<String> {
        match self {
            Self::Code(code) => Ok(code),
            Self::Deferred(f) => f(),
        }
    }
}

impl fmt::Debug for Body<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => f.debug_tuple("Code").field(code).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<String> for Body<'_> {
    fn from(code: String) -> Self {
        Self::Code(code)
    }
}

impl From<&str> for Body<'_> {
    fn from(code: &str) -> Self {
        Self::Code(code.to_string())
    }
}

impl<D> From<Snippet<D>> for Body<'_> {
    fn from(snippet: Snippet<D>) -> Self {
        Self::Code(snippet.code)
    }
}

impl<D> From<&Snippet<D>> for Body<'_> {
    fn from(snippet: &Snippet<D>) -> Self {
        Self::Code(snippet.code.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use eyre::eyre;
    use serde::Serialize;

    use super::*;

    #[derive(Debug, Serialize)]
    struct Record {
        name: String,
    }

    #[test]
    fn test_snippet_accessors() {
        let s = Snippet::new("var x;", Record { name: "x".into() });
        assert_eq!(s.code(), "var x;");
        assert_eq!(s.data().unwrap().name, "x");
        assert_eq!(s.to_string(), "var x;");
        assert_eq!(s.into_code(), "var x;");
    }

    #[test]
    fn test_data_json() {
        let s = Snippet::new("var x;", Record { name: "x".into() });
        let json = s.data_json().unwrap().unwrap();
        assert_eq!(json["name"], "x");

        let none: Snippet<Record> = Snippet::code_only("// hi");
        assert!(none.data_json().unwrap().is_none());
    }

    #[test]
    fn test_body_from_snippet() {
        let s: Snippet = Snippet::code_only("a();");
        assert_eq!(Body::from(&s).render().unwrap(), "a();");
        assert_eq!(Body::from(s).render().unwrap(), "a();");
    }

    #[test]
    fn test_body_lines() {
        let body = Body::lines(["a();", "b();"]);
        assert_eq!(body.render().unwrap(), "a();\nb();");
    }

    #[test]
    fn test_deferred_runs_only_on_render() {
        let calls = Cell::new(0);
        let body = Body::deferred(|| {
            calls.set(calls.get() + 1);
            Ok("x;".to_string())
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(body.render().unwrap(), "x;");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_deferred_error_propagates() {
        let body = Body::deferred(|| Err(eyre!("body failed")));
        let err = body.render().unwrap_err();
        assert_eq!(err.to_string(), "body failed");
    }
}
