//! Snippet tree nodes and their rendering.

use eyre::{Result, eyre};
use serde::Deserialize;
use snipgen_core::{Body, IteratorNames, clean_line};
use snipgen_js::{
    Catch, ChainCall, Comment, Conditional, DoWhile, Emitter, ForEach, ForLoop, FunctionDecl,
    MethodCall, NewInstance, ObjectFunction, PropertyAssign, Reassign, Return, Step, Variable,
};
use tracing::trace;

/// Message for a `for` node with an inconsistent set of clauses.
pub(crate) const FOR_CLAUSES: &str =
    "for loop needs either start, stop and increment, or a limit (with an optional iterator)";

/// One construct in a recipe, tagged by `kind`.
///
/// Block kinds carry their nested nodes in `body`; the children are
/// rendered one per line and become the block's body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Variable(Variable),
    Reassign(Reassign),
    Increment(Step),
    Decrement(Step),
    Return(Return),
    Comment(Comment),
    #[serde(rename = "new")]
    NewInstance(NewInstance),
    Call(MethodCall),
    Assign(PropertyAssign),
    Log {
        #[serde(default)]
        args: Vec<String>,
    },
    Chain {
        base: String,
        #[serde(default)]
        calls: Vec<ChainCall>,
    },
    /// Text copied through with only its terminators collapsed.
    Raw {
        code: String,
    },
    Function {
        name: String,
        #[serde(default)]
        args: Vec<String>,
        #[serde(default)]
        body: Vec<Node>,
    },
    Method {
        #[serde(default)]
        obj_name: Option<String>,
        func_name: String,
        #[serde(default)]
        args: Vec<String>,
        #[serde(default)]
        body: Vec<Node>,
    },
    If {
        condition: String,
        #[serde(default)]
        body: Vec<Node>,
    },
    ElseIf {
        condition: String,
        #[serde(default)]
        body: Vec<Node>,
    },
    Else {
        #[serde(default)]
        body: Vec<Node>,
    },
    While {
        condition: String,
        #[serde(default)]
        body: Vec<Node>,
    },
    Do {
        condition: String,
        #[serde(default)]
        body: Vec<Node>,
    },
    /// Either the three explicit clauses, or a `limit` counted up to by
    /// `iterator` (allocated when left out).
    For {
        #[serde(default)]
        start: Option<String>,
        #[serde(default)]
        stop: Option<String>,
        #[serde(default)]
        increment: Option<String>,
        #[serde(default)]
        iterator: Option<String>,
        #[serde(default)]
        limit: Option<String>,
        #[serde(default)]
        body: Vec<Node>,
    },
    ForEach {
        array: String,
        #[serde(default)]
        iterator: Option<String>,
        #[serde(default)]
        body: Vec<Node>,
    },
    Try {
        #[serde(default)]
        body: Vec<Node>,
    },
    Catch {
        #[serde(default)]
        arg: Option<String>,
        #[serde(default)]
        body: Vec<Node>,
    },
}

impl Node {
    /// The `kind` tag this node was read from.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Variable(_) => "variable",
            Self::Reassign(_) => "reassign",
            Self::Increment(_) => "increment",
            Self::Decrement(_) => "decrement",
            Self::Return(_) => "return",
            Self::Comment(_) => "comment",
            Self::NewInstance(_) => "new",
            Self::Call(_) => "call",
            Self::Assign(_) => "assign",
            Self::Log { .. } => "log",
            Self::Chain { .. } => "chain",
            Self::Raw { .. } => "raw",
            Self::Function { .. } => "function",
            Self::Method { .. } => "method",
            Self::If { .. } => "if",
            Self::ElseIf { .. } => "else_if",
            Self::Else { .. } => "else",
            Self::While { .. } => "while",
            Self::Do { .. } => "do",
            Self::For { .. } => "for",
            Self::ForEach { .. } => "for_each",
            Self::Try { .. } => "try",
            Self::Catch { .. } => "catch",
        }
    }

    /// Nested nodes of a block kind; empty for statements.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Function { body, .. }
            | Self::Method { body, .. }
            | Self::If { body, .. }
            | Self::ElseIf { body, .. }
            | Self::Else { body }
            | Self::While { body, .. }
            | Self::Do { body, .. }
            | Self::For { body, .. }
            | Self::ForEach { body, .. }
            | Self::Try { body }
            | Self::Catch { body, .. } => body,
            _ => &[],
        }
    }

    /// Render this node and everything below it.
    ///
    /// Loop counters left out of the recipe are drawn from `names` before
    /// the loop's body renders, so nested loops never share a counter.
    pub fn render(&self, js: &Emitter, names: &mut IteratorNames) -> Result<String> {
        trace!(kind = self.kind(), "rendering node");

        let code = match self {
            Self::Variable(data) => js.variable(data.clone()).into_code(),
            Self::Reassign(data) => js.reassign_variable(data.clone()).into_code(),
            Self::Increment(data) => js.increment_variable(data.clone()).into_code(),
            Self::Decrement(data) => js.decrement_variable(data.clone()).into_code(),
            Self::Return(data) => js.return_statement(data.clone()).into_code(),
            Self::Comment(data) => js.comment(data.clone()).into_code(),
            Self::NewInstance(data) => js.new_instance(data.clone()).into_code(),
            Self::Call(data) => js.object_function_call(data.clone()).into_code(),
            Self::Assign(data) => js.object_property_assignment(data.clone()).into_code(),
            Self::Log { args } => js.console_log(args.as_slice()).into_code(),
            Self::Chain { base, calls } => js.chain(base, calls.iter().cloned()),
            Self::Raw { code } => clean_line(code),
            Self::Function { name, args, body } => {
                let data = FunctionDecl::new(name).args(args.iter().cloned());
                js.first_class_function(data, deferred(body, js, names))?
                    .code
            }
            Self::Method {
                obj_name,
                func_name,
                args,
                body,
            } => {
                let data = ObjectFunction {
                    obj_name: obj_name.clone(),
                    func_name: func_name.clone(),
                    args: args.clone(),
                };
                js.object_function(data, deferred(body, js, names))?.code
            }
            Self::If { condition, body } => {
                js.if_statement(Conditional::new(condition), deferred(body, js, names))?
                    .code
            }
            Self::ElseIf { condition, body } => {
                js.else_if_statement(Conditional::new(condition), deferred(body, js, names))?
                    .code
            }
            Self::Else { body } => js.else_statement(deferred(body, js, names))?.code,
            Self::While { condition, body } => {
                js.while_statement(Conditional::new(condition), deferred(body, js, names))?
                    .code
            }
            Self::Do { condition, body } => {
                js.do_statement(DoWhile::new(condition), deferred(body, js, names))?
                    .code
            }
            Self::For {
                start,
                stop,
                increment,
                iterator,
                limit,
                body,
            } => {
                let data = match (start, stop, increment, iterator, limit) {
                    (Some(start), Some(stop), Some(increment), None, None) => {
                        ForLoop::new(start, stop, increment)
                    }
                    (None, None, None, iterator, Some(limit)) => {
                        let it = iterator.clone().unwrap_or_else(|| names.next_name());
                        ForLoop::counting(&it, limit)
                    }
                    _ => return Err(eyre!(FOR_CLAUSES)),
                };
                js.for_loop(data, deferred(body, js, names))?.code
            }
            Self::ForEach {
                array,
                iterator,
                body,
            } => {
                let it = iterator.clone().unwrap_or_else(|| names.next_name());
                js.for_each_loop(ForEach::new(array, it), deferred(body, js, names))?
                    .code
            }
            Self::Try { body } => js.try_block(deferred(body, js, names))?.code,
            Self::Catch { arg, body } => {
                let data = Catch { arg: arg.clone() };
                js.catch_block(data, deferred(body, js, names))?.code
            }
        };

        Ok(code)
    }
}

/// Render nodes one per line.
pub fn render_nodes(nodes: &[Node], js: &Emitter, names: &mut IteratorNames) -> Result<String> {
    let lines = nodes
        .iter()
        .map(|node| node.render(js, names))
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

fn deferred<'a>(body: &'a [Node], js: &'a Emitter, names: &'a mut IteratorNames) -> Body<'a> {
    Body::deferred(move || render_nodes(body, js, names))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(node: &Node) -> String {
        node.render(&Emitter::new(), &mut IteratorNames::new())
            .unwrap()
    }

    fn call(func: &str) -> Node {
        Node::Call(MethodCall::new(func))
    }

    #[test]
    fn test_statement_nodes() {
        assert_eq!(render(&Node::Variable(Variable::new("x").value("1"))), "var x = 1;");
        assert_eq!(render(&Node::Increment(Step::new("x"))), "x++");
        assert_eq!(render(&Node::Return(Return::empty())), "return;");
        assert_eq!(
            render(&Node::Log {
                args: vec!["a".into(), "b".into()]
            }),
            "console.log(a, b);"
        );
        assert_eq!(
            render(&Node::Raw {
                code: "debugger;".into()
            }),
            "debugger;"
        );
    }

    #[test]
    fn test_chain_node() {
        let node = Node::Chain {
            base: "$(el)".into(),
            calls: vec![ChainCall::new("show"), ChainCall::new("fadeIn").arg("200")],
        };
        assert_eq!(render(&node), "$(el).show().fadeIn(200)");
    }

    #[test]
    fn test_for_with_explicit_clauses() {
        let node = Node::For {
            start: Some("var i = 0".into()),
            stop: Some("i < 10".into()),
            increment: Some("i++".into()),
            iterator: None,
            limit: None,
            body: vec![Node::Raw {
                code: "doWork(i);;".into(),
            }],
        };
        assert_eq!(render(&node), "for (var i = 0; i < 10; i++) {\n    doWork(i);\n}");
    }

    #[test]
    fn test_for_allocates_counters_outside_in() {
        let inner = Node::For {
            start: None,
            stop: None,
            increment: None,
            iterator: None,
            limit: Some("m".into()),
            body: vec![call("step")],
        };
        let outer = Node::For {
            start: None,
            stop: None,
            increment: None,
            iterator: None,
            limit: Some("n".into()),
            body: vec![inner],
        };
        assert_eq!(
            render(&outer),
            "for (var i = 0; i < n; i++) {\n    for (var j = 0; j < m; j++) {\n        this.step();\n    }\n}"
        );
    }

    #[test]
    fn test_for_explicit_iterator_skips_allocation() {
        let mut names = IteratorNames::new();
        let node = Node::For {
            start: None,
            stop: None,
            increment: None,
            iterator: Some("row".into()),
            limit: Some("rows".into()),
            body: vec![],
        };
        node.render(&Emitter::new(), &mut names).unwrap();
        assert_eq!(names.next_name(), "i");
    }

    #[test]
    fn test_for_with_partial_clauses_fails() {
        let node = Node::For {
            start: Some("var i = 0".into()),
            stop: None,
            increment: None,
            iterator: None,
            limit: None,
            body: vec![],
        };
        let err = node
            .render(&Emitter::new(), &mut IteratorNames::new())
            .unwrap_err();
        assert!(err.to_string().contains("for loop needs"));
    }

    #[test]
    fn test_for_rejects_iterator_with_explicit_clauses() {
        let node = Node::For {
            start: Some("var i = 0".into()),
            stop: Some("i < 10".into()),
            increment: Some("i++".into()),
            iterator: Some("row".into()),
            limit: None,
            body: vec![],
        };
        assert!(node.render(&Emitter::new(), &mut IteratorNames::new()).is_err());

        let with_limit = Node::For {
            start: Some("var i = 0".into()),
            stop: Some("i < 10".into()),
            increment: Some("i++".into()),
            iterator: None,
            limit: Some("n".into()),
            body: vec![],
        };
        assert!(with_limit.render(&Emitter::new(), &mut IteratorNames::new()).is_err());
    }

    #[test]
    fn test_raw_cleaned_at_top_level() {
        let raw = Node::Raw {
            code: "x();;".into(),
        };
        assert_eq!(render(&raw), "x();");

        let nested = Node::Try { body: vec![raw] };
        assert_eq!(render(&nested), "try {\n    x();\n}");
    }

    #[test]
    fn test_for_each_allocates_iterator() {
        let node = Node::ForEach {
            array: "rows".into(),
            iterator: None,
            body: vec![Node::Log {
                args: vec!["i".into()],
            }],
        };
        assert_eq!(render(&node), "rows.forEach(i => {\n    console.log(i);\n});");
    }

    #[test]
    fn test_children() {
        let node = Node::Try {
            body: vec![call("a"), call("b")],
        };
        assert_eq!(node.children().len(), 2);
        assert!(call("a").children().is_empty());
        assert_eq!(node.kind(), "try");
    }
}
