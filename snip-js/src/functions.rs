//! Function expressions bound to variables and object members.

use eyre::Result;
use serde::{Deserialize, Serialize};
use snipgen_core::{Body, Snippet};

use crate::{Emitter, emitter::receiver};

/// `var name = function(args) { ... };`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// `obj.funcName = function(args) { ... };`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectFunction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obj_name: Option<String>,
    pub func_name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ObjectFunction {
    /// A method assigned on `this`.
    pub fn new(func_name: impl Into<String>) -> Self {
        Self {
            obj_name: None,
            func_name: func_name.into(),
            args: Vec::new(),
        }
    }

    pub fn on(mut self, obj_name: impl Into<String>) -> Self {
        self.obj_name = Some(obj_name.into());
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl Emitter {
    /// Arguments are joined without spaces: `function(a,b)`.
    pub fn first_class_function<'a>(
        &self,
        data: FunctionDecl,
        body: impl Into<Body<'a>>,
    ) -> Result<Snippet<FunctionDecl>> {
        let header = format!("var {} = function({}) {{", data.name, data.args.join(","));
        let code = self.block(&header, body.into(), "};")?;
        Ok(Snippet::new(code, data))
    }

    pub fn object_function<'a>(
        &self,
        data: ObjectFunction,
        body: impl Into<Body<'a>>,
    ) -> Result<Snippet<ObjectFunction>> {
        let header = format!(
            "{}.{} = function({}) {{",
            receiver(&data.obj_name),
            data.func_name,
            data.args.join(", ")
        );
        let code = self.block(&header, body.into(), "};")?;
        Ok(Snippet::new(code, data))
    }
}
