//! Chained method call fragments.

use serde::{Deserialize, Serialize};
use snipgen_core::{Snippet, clean_line};

use crate::Emitter;

/// One `.method(args)` link of a call chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainCall {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ChainCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument to the call.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add several arguments at once.
    pub fn args(mut self, args: Vec<String>) -> Self {
        self.args.extend(args);
        self
    }
}

impl Emitter {
    /// A `.name(args)` fragment with no terminator, meant to be appended to
    /// an expression.
    pub fn chain_function(&self, data: ChainCall) -> Snippet<ChainCall> {
        let code = format!(".{}({})", data.name, data.args.join(", "));
        Snippet::new(clean_line(&code), data)
    }

    /// Append each link to `base`, rendering the whole chain on one line.
    pub fn chain<I>(&self, base: &str, calls: I) -> String
    where
        I: IntoIterator<Item = ChainCall>,
    {
        let code = calls.into_iter().fold(base.to_string(), |mut acc, call| {
            acc.push_str(&self.chain_function(call).code);
            acc
        });
        clean_line(&code)
    }
}
