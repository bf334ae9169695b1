//! Object construction, method calls and property assignment.

use serde::{Deserialize, Serialize};
use snipgen_core::{Snippet, clean_line};

use crate::{Emitter, emitter::receiver};

/// `new Type(args);`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInstance {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl NewInstance {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// `obj.funcName(args);`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obj_name: Option<String>,
    pub func_name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl MethodCall {
    /// A call on `this`.
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

fn default_dot_notation() -> bool {
    true
}

/// `obj.prop = value;` or `obj["prop"] = value;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAssign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obj_name: Option<String>,
    pub prop_name: String,
    pub value: String,
    #[serde(default = "default_dot_notation")]
    pub dot_notation: bool,
    /// Assignment target, filled in by the emitter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PropertyAssign {
    pub fn new(prop_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            obj_name: None,
            prop_name: prop_name.into(),
            value: value.into(),
            dot_notation: true,
            name: None,
        }
    }

    pub fn on(mut self, obj_name: impl Into<String>) -> Self {
        self.obj_name = Some(obj_name.into());
        self
    }

    /// Use `obj["prop"]` instead of `obj.prop`.
    pub fn bracket(mut self) -> Self {
        self.dot_notation = false;
        self
    }
}

impl Emitter {
    pub fn new_instance(&self, data: NewInstance) -> Snippet<NewInstance> {
        let code = format!("new {}({});", data.ty, data.args.join(", "));
        Snippet::new(clean_line(&code), data)
    }

    pub fn object_function_call(&self, data: MethodCall) -> Snippet<MethodCall> {
        let code = format!(
            "{}.{}({});",
            receiver(&data.obj_name),
            data.func_name,
            data.args.join(", ")
        );
        Snippet::new(clean_line(&code), data)
    }

    /// The returned record carries the assignment target in `name`, so the
    /// caller can keep chaining on it.
    pub fn object_property_assignment(&self, mut data: PropertyAssign) -> Snippet<PropertyAssign> {
        let obj = receiver(&data.obj_name);
        let target = if data.dot_notation {
            format!("{}.{}", obj, data.prop_name)
        } else {
            format!("{}[\"{}\"]", obj, data.prop_name)
        };
        let code = format!("{} = {};", target, data.value);
        data.name = Some(target);
        Snippet::new(clean_line(&code), data)
    }
}
