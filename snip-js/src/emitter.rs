//! The emitter entry point shared by every construct.

use eyre::Result;
use snipgen_core::{Body, FormatConfig, Formatter};

/// Receiver used when a record leaves the object name out.
pub const DEFAULT_RECEIVER: &str = "this";

/// Builds snippets for the target language.
///
/// Statement emitters clean their single line. Block emitters render
/// `header`, body and `footer` on separate lines and run the result through
/// the [`Formatter`], so any block can be used as the body of another.
///
/// # Example
///
/// ```
/// use snipgen_core::Body;
/// use snipgen_js::{Conditional, Emitter, ForLoop};
///
/// let js = Emitter::new();
/// let check = js.if_statement(Conditional::new("i % 2 == 0"), "even(i);")?;
/// let lp = js.for_loop(ForLoop::counting("i", "10"), check)?;
///
/// assert_eq!(
///     lp.code,
///     "for (var i = 0; i < 10; i++) {\n    if (i % 2 == 0) {\n        even(i);\n    }\n}"
/// );
/// # Ok::<(), eyre::Report>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    formatter: Formatter,
}

impl Emitter {
    /// Emitter with the default 4-space indentation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormatConfig) -> Self {
        Self {
            formatter: Formatter::new(config),
        }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Render a block construct around `body`.
    ///
    /// The body is produced before anything is formatted; a failing
    /// producer yields no output at all.
    pub(crate) fn block(&self, header: &str, body: Body<'_>, footer: &str) -> Result<String> {
        let body = body.render()?;
        Ok(self.formatter.format(&format!("{header}\n{body}\n{footer}")))
    }
}

pub(crate) fn receiver(obj_name: &Option<String>) -> &str {
    obj_name.as_deref().unwrap_or(DEFAULT_RECEIVER)
}
