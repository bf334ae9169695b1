//! Control-flow blocks: conditionals, loops and exception handling.

use eyre::Result;
use serde::{Deserialize, Serialize};
use snipgen_core::{Body, Snippet};

use crate::Emitter;

/// Condition of an `if`, `else if` or `while` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditional {
    pub condition: String,
}

impl Conditional {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
        }
    }
}

/// Condition checked after each pass of a `do` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoWhile {
    pub condition: String,
}

impl DoWhile {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
        }
    }
}

/// The three clauses of a `for` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForLoop {
    pub start_condition: String,
    pub stop_condition: String,
    pub increment_action: String,
}

impl ForLoop {
    pub fn new(
        start_condition: impl Into<String>,
        stop_condition: impl Into<String>,
        increment_action: impl Into<String>,
    ) -> Self {
        Self {
            start_condition: start_condition.into(),
            stop_condition: stop_condition.into(),
            increment_action: increment_action.into(),
        }
    }

    /// Count `iterator` from zero up to, not including, `limit`.
    ///
    /// Pair with [`IteratorNames`](snipgen_core::IteratorNames) to keep
    /// counters of nested loops apart.
    pub fn counting(iterator: &str, limit: impl AsRef<str>) -> Self {
        Self::new(
            format!("var {iterator} = 0"),
            format!("{iterator} < {}", limit.as_ref()),
            format!("{iterator}++"),
        )
    }
}

/// `array.forEach(item => { ... });`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForEach {
    pub object_array: String,
    pub iteration_name: String,
}

impl ForEach {
    pub fn new(object_array: impl Into<String>, iteration_name: impl Into<String>) -> Self {
        Self {
            object_array: object_array.into(),
            iteration_name: iteration_name.into(),
        }
    }
}

/// Name bound to the caught exception, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
}

impl Catch {
    pub fn new(arg: impl Into<String>) -> Self {
        Self {
            arg: Some(arg.into()),
        }
    }
}

impl Emitter {
    pub fn if_statement<'a>(
        &self,
        data: Conditional,
        body: impl Into<Body<'a>>,
    ) -> Result<Snippet<Conditional>> {
        let header = format!("if ({}) {{", data.condition);
        let code = self.block(&header, body.into(), "}")?;
        Ok(Snippet::new(code, data))
    }

    /// Chained after an `if` block by the caller; carries no record.
    pub fn else_if_statement<'a>(
        &self,
        data: Conditional,
        body: impl Into<Body<'a>>,
    ) -> Result<Snippet> {
        let header = format!("else if ({}) {{", data.condition);
        let code = self.block(&header, body.into(), "}")?;
        Ok(Snippet::code_only(code))
    }

    pub fn else_statement<'a>(&self, body: impl Into<Body<'a>>) -> Result<Snippet> {
        let code = self.block("else {", body.into(), "}")?;
        Ok(Snippet::code_only(code))
    }

    pub fn while_statement<'a>(
        &self,
        data: Conditional,
        body: impl Into<Body<'a>>,
    ) -> Result<Snippet<Conditional>> {
        let header = format!("while ({}) {{", data.condition);
        let code = self.block(&header, body.into(), "}")?;
        Ok(Snippet::new(code, data))
    }

    pub fn do_statement<'a>(
        &self,
        data: DoWhile,
        body: impl Into<Body<'a>>,
    ) -> Result<Snippet<DoWhile>> {
        let footer = format!("}} while ({});", data.condition);
        let code = self.block("do {", body.into(), &footer)?;
        Ok(Snippet::new(code, data))
    }

    /// The header clauses are emitted verbatim.
    pub fn for_loop<'a>(
        &self,
        data: ForLoop,
        body: impl Into<Body<'a>>,
    ) -> Result<Snippet<ForLoop>> {
        let header = format!(
            "for ({}; {}; {}) {{",
            data.start_condition, data.stop_condition, data.increment_action
        );
        let code = self.block(&header, body.into(), "}")?;
        Ok(Snippet::new(code, data))
    }

    pub fn for_each_loop<'a>(
        &self,
        data: ForEach,
        body: impl Into<Body<'a>>,
    ) -> Result<Snippet<ForEach>> {
        let header = format!(
            "{}.forEach({} => {{",
            data.object_array, data.iteration_name
        );
        let code = self.block(&header, body.into(), "});")?;
        Ok(Snippet::new(code, data))
    }

    pub fn try_block<'a>(&self, body: impl Into<Body<'a>>) -> Result<Snippet> {
        let code = self.block("try {", body.into(), "}")?;
        Ok(Snippet::code_only(code))
    }

    pub fn catch_block<'a>(
        &self,
        data: Catch,
        body: impl Into<Body<'a>>,
    ) -> Result<Snippet<Catch>> {
        let header = format!("catch({}) {{", data.arg.as_deref().unwrap_or_default());
        let code = self.block(&header, body.into(), "}")?;
        Ok(Snippet::new(code, data))
    }
}
