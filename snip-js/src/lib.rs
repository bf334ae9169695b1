//! Snippet emitters for curly-brace, JavaScript-style code.
//!
//! Each emitter takes a small input record and returns a
//! [`Snippet`](snipgen_core::Snippet) holding the rendered code and the
//! record. Block emitters accept their body as a [`Body`](snipgen_core::Body):
//! plain text, another snippet, or a deferred producer.
//!
//! # Usage
//!
//! ```
//! use snipgen_core::{Body, IteratorNames};
//! use snipgen_js::{Emitter, ForLoop, MethodCall};
//!
//! let js = Emitter::new();
//! let mut names = IteratorNames::new();
//!
//! let outer = names.next_name();
//! let inner = names.next_name();
//! let grid = js.for_loop(
//!     ForLoop::counting(&outer, "rows"),
//!     Body::deferred(|| {
//!         let call = js.object_function_call(MethodCall::new("visit").arg(&outer).arg(&inner));
//!         Ok(js.for_loop(ForLoop::counting(&inner, "cols"), call)?.code)
//!     }),
//! )?;
//!
//! assert!(grid.code.contains("for (var j = 0; j < cols; j++) {"));
//! # Ok::<(), eyre::Report>(())
//! ```

mod blocks;
mod chain;
mod emitter;
mod functions;
mod objects;
mod statements;

pub use blocks::{Catch, Conditional, DoWhile, ForEach, ForLoop};
pub use chain::ChainCall;
pub use emitter::{DEFAULT_RECEIVER, Emitter};
pub use functions::{FunctionDecl, ObjectFunction};
pub use objects::{MethodCall, NewInstance, PropertyAssign};
pub use statements::{Comment, Reassign, Return, Step, Variable};
