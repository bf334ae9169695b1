//! Single-line statements: declarations, updates, returns, logging, comments.

use serde::{Deserialize, Serialize};
use snipgen_core::{Snippet, clean_line};

use crate::Emitter;

/// `var name = value;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// `name = value;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reassign {
    pub name: String,
    pub value: String,
}

impl Reassign {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Increment or decrement of a variable, by one unless `value` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Step {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn by(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// `return value;`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Return {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Return {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// A bare `return;`.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A line comment, or a block comment when `block` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    #[serde(default)]
    pub block: bool,
}

impl Comment {
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            block: false,
        }
    }

    pub fn block(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            block: true,
        }
    }
}

impl Emitter {
    pub fn variable(&self, data: Variable) -> Snippet<Variable> {
        let code = match &data.value {
            Some(value) => format!("var {} = {};", data.name, value),
            None => format!("var {};", data.name),
        };
        Snippet::new(clean_line(&code), data)
    }

    pub fn reassign_variable(&self, data: Reassign) -> Snippet<Reassign> {
        let code = format!("{} = {};", data.name, data.value);
        Snippet::new(clean_line(&code), data)
    }

    /// `name += value;`, or the bare expression `name++`.
    pub fn increment_variable(&self, data: Step) -> Snippet<Step> {
        let code = match &data.value {
            Some(value) => format!("{} += {};", data.name, value),
            None => format!("{}++", data.name),
        };
        Snippet::new(clean_line(&code), data)
    }

    /// `name -= value;`, or the bare expression `name--`.
    pub fn decrement_variable(&self, data: Step) -> Snippet<Step> {
        let code = match &data.value {
            Some(value) => format!("{} -= {};", data.name, value),
            None => format!("{}--", data.name),
        };
        Snippet::new(clean_line(&code), data)
    }

    pub fn return_statement(&self, data: Return) -> Snippet<Return> {
        let code = match &data.value {
            Some(value) => format!("return {};", value),
            None => "return;".to_string(),
        };
        Snippet::new(clean_line(&code), data)
    }

    pub fn console_log<S: AsRef<str>>(&self, args: &[S]) -> Snippet {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        Snippet::code_only(clean_line(&format!("console.log({});", args.join(", "))))
    }

    /// Block comments are laid out like any other block: `/*` and `*/` stay
    /// put and the text is indented.
    pub fn comment(&self, data: Comment) -> Snippet {
        let code = if data.block {
            self.formatter().format(&format!("/*\n{}\n*/", data.text))
        } else {
            clean_line(&format!("// {}", data.text))
        };
        Snippet::code_only(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable() {
        let js = Emitter::new();
        assert_eq!(js.variable(Variable::new("x")).code, "var x;");
        assert_eq!(js.variable(Variable::new("x").value("1")).code, "var x = 1;");
    }

    #[test]
    fn test_variable_collapses_terminators() {
        let s = Emitter::new().variable(Variable::new("x").value("f();"));
        assert_eq!(s.code, "var x = f();");
        assert_eq!(s.data.unwrap().value.as_deref(), Some("f();"));
    }

    #[test]
    fn test_reassign() {
        let s = Emitter::new().reassign_variable(Reassign::new("total", "total * 2"));
        assert_eq!(s.code, "total = total * 2;");
    }

    #[test]
    fn test_increment_and_decrement() {
        let js = Emitter::new();
        assert_eq!(js.increment_variable(Step::new("i")).code, "i++");
        assert_eq!(js.increment_variable(Step::new("i").by("2")).code, "i += 2;");
        assert_eq!(js.decrement_variable(Step::new("n")).code, "n--");
        assert_eq!(js.decrement_variable(Step::new("n").by("k")).code, "n -= k;");
    }

    #[test]
    fn test_return() {
        let js = Emitter::new();
        assert_eq!(js.return_statement(Return::new("a + b")).code, "return a + b;");
        assert_eq!(js.return_statement(Return::empty()).code, "return;");
    }

    #[test]
    fn test_console_log() {
        let js = Emitter::new();
        let s = js.console_log(&["\"total\"", "sum"]);
        assert_eq!(s.code, "console.log(\"total\", sum);");
        assert!(s.data.is_none());

        let empty: [&str; 0] = [];
        assert_eq!(js.console_log(&empty).code, "console.log();");
    }

    #[test]
    fn test_line_comment() {
        let s = Emitter::new().comment(Comment::line("setup"));
        assert_eq!(s.code, "// setup");
    }

    #[test]
    fn test_line_comment_collapses_terminators() {
        let s = Emitter::new().comment(Comment::line("done;;"));
        assert_eq!(s.code, "// done;");
    }

    #[test]
    fn test_block_comment() {
        let s = Emitter::new().comment(Comment::block("first\nsecond"));
        assert_eq!(s.code, "/*\n    first\n    second\n*/");
    }
}
