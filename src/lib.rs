//! Annotate errors with messages, call stacks and details as they bubble up,
//! without losing the original cause.
//!
//! # Basic usage
//!
//! ```rust
//! use errchain::Annotate;
//!
//! fn read_config() -> Result<String, errchain::Error> {
//!     std::fs::read_to_string("/definitely/not/here.toml").wrap("read config")
//! }
//!
//! let error = read_config().unwrap_err();
//!
//! assert!(error.to_string().starts_with("read config: "));
//! assert!(error.stack().is_some());
//! ```
//!
//! # Building a chain
//!
//! Every annotation is one link wrapping the previous error:
//!
//! - [`new()`] and [`errorf!`] start a chain, recording the call stack.
//! - [`wrap()`] and [`wrapf!`] add a message and a fresh call stack.
//! - [`with_stack()`] adds only a call stack.
//! - [`with_message()`] and [`with_messagef!`] add only a message.
//! - [`with_details()`] and [`with_details!`] attach opaque values.
//!
//! The [`Annotate`] extension trait offers the same operations on `Result`
//! and `Option`, passing `Ok` and `None` through untouched.
//!
//! # Formatting
//!
//! - `{}` prints the messages of the chain joined with `": "`.
//! - `{:#}` prints every link on its own block, root cause first, with the
//!   captured call stacks.
//! - `{:?}` prints the `{}` form quoted, `{:#?}` the `{:#}` form.
//!
//! [`lines()`] flattens a chain into one string per link, outermost first.
//! The separators used are controlled with [`set_options()`] or passed
//! explicitly with a [`RenderConfig`].
//!
//! # Safety
//!
//! **No instances of `unsafe` are permitted.**

#![forbid(unsafe_code)]
#![deny(
    // For derived implementations.
    unused_qualifications,
    clippy::pedantic
)]
#![forbid(
    anonymous_parameters,
    missing_docs,
    trivial_numeric_casts,
    unstable_features,
    unused_extern_crates,
    unused_import_braces,
    unused_results
)]
#![allow(
    clippy::inline_always,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

#[macro_use]
mod macros;

mod display;
mod error;
mod lines;

pub mod stack;

pub use self::display::{
    config, set_options, with_func_sep, with_msg_sep, with_stack_sep, ErrorDisplay, RenderConfig,
    RenderOption,
};
pub use self::error::{
    cause, detail, details, new, with_details, with_message, with_stack, wrap, Annotate, Cause,
    Detail, Error,
};
pub use self::lines::{lines, lines_with, Chain};
