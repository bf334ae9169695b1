//! Core text-generation primitives for snipgen.
//!
//! Every block-shaped emitter in `snipgen-js` renders its construct as
//! plain text and hands it to the [`Formatter`] before returning. This crate
//! holds that formatting engine together with the other pieces shared by
//! all emitters:
//!
//! - [`Formatter`], [`format`], [`clean_line`] - interior re-indentation and
//!   duplicate terminator cleanup
//! - [`FormatConfig`] - indentation width
//! - [`IteratorNames`] - collision-free loop counter names
//! - [`Snippet`], [`Body`] - the emitter result and block body contract

mod format;
mod indent;
mod iterators;
mod snippet;

pub use format::{Formatter, TERMINATOR, clean_line, format};
pub use indent::FormatConfig;
pub use iterators::{ALPHABET, IteratorNames, START_POSITION, name_at};
pub use snippet::{Body, Snippet};
