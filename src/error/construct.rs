use core::any::Any;
use std::error::Error as StdError;

use crate::stack::{Stack, CALLER_SKIP};

use super::{Cause, Detail, Error, Node};

/// Returns an error with the supplied message, recording the call stack at
/// the point it was called.
///
/// See [`errorf!`] to format the message.
///
/// # Example
///
/// ```
/// let error = errchain::new("connection refused");
///
/// assert_eq!(error.to_string(), "connection refused");
/// assert!(error.cause().is_none());
/// ```
#[inline(never)]
pub fn new(message: impl Into<String>) -> Error {
    Error::from_node(Node::Fundamental {
        message: message.into(),
        stack: Stack::capture(CALLER_SKIP),
    })
}

/// Annotates `cause` with the call stack at the point `with_stack` was
/// called.
///
/// # Example
///
/// ```
/// use std::io;
///
/// let error = errchain::with_stack(io::Error::new(io::ErrorKind::Other, "EOF"));
///
/// assert_eq!(error.to_string(), "EOF");
/// assert!(error.stack().is_some());
/// ```
#[inline(never)]
pub fn with_stack<E>(cause: E) -> Error
where
    E: Into<Cause>,
{
    Error::from_node(Node::StackMessage {
        message: String::new(),
        cause: cause.into(),
        stack: Stack::capture(CALLER_SKIP),
    })
}

/// Annotates `cause` with a message and the call stack at the point `wrap`
/// was called.
///
/// See [`wrapf!`] to format the message.
///
/// # Example
///
/// ```
/// let error = errchain::wrap(errchain::new("EOF"), "read header");
///
/// assert_eq!(error.to_string(), "read header: EOF");
/// ```
#[inline(never)]
pub fn wrap<E>(cause: E, message: impl Into<String>) -> Error
where
    E: Into<Cause>,
{
    Error::from_node(Node::StackMessage {
        message: message.into(),
        cause: cause.into(),
        stack: Stack::capture(CALLER_SKIP),
    })
}

/// Annotates `cause` with a message, without recording a call stack.
///
/// See [`with_messagef!`] to format the message.
///
/// # Example
///
/// ```
/// let error = errchain::with_message(errchain::new("EOF"), "read header");
///
/// assert_eq!(error.to_string(), "read header: EOF");
/// assert!(error.stack().is_none());
/// ```
pub fn with_message<E>(cause: E, message: impl Into<String>) -> Error
where
    E: Into<Cause>,
{
    Error::from_node(Node::Message {
        message: message.into(),
        cause: cause.into(),
    })
}

/// Annotates `cause` with opaque details, in order.
///
/// Details add no text to the chain. They are retrieved with [`details()`].
/// See [`with_details!`] to attach values without boxing them first.
///
/// # Example
///
/// ```
/// let error = errchain::with_details(
///     errchain::new("rate limited"),
///     vec![errchain::detail(429_u16), errchain::detail("retry-after")],
/// );
///
/// let details = errchain::details(&error).unwrap();
/// assert_eq!(details[0].downcast_ref::<u16>(), Some(&429));
/// assert_eq!(error.to_string(), "rate limited");
/// ```
pub fn with_details<E, I>(cause: E, details: I) -> Error
where
    E: Into<Cause>,
    I: IntoIterator<Item = Detail>,
{
    Error::from_node(Node::Details {
        cause: cause.into(),
        details: details.into_iter().collect(),
    })
}

/// Boxes a value into a [`Detail`].
pub fn detail<T>(value: T) -> Detail
where
    T: Any + Send + Sync,
{
    Box::new(value)
}

/// Returns the details attached to `error` if it was created with
/// [`with_details()`].
///
/// Only `error` itself is inspected, the chain is not searched.
pub fn details<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a [Detail]> {
    error.downcast_ref::<Error>()?.details()
}

/// Returns the root cause of an error.
///
/// Follows [`Error::cause`] while the current error is an [`Error`] wrapping
/// another, and stops at the first error that exposes no cause: either the
/// [`Error`] that started the chain or an error from outside this crate.
/// Errors from outside this crate are never looked into, even if they have a
/// [`StdError::source`]. Use [`lines()`] or [`Error::chain`] to walk those.
///
/// [`lines()`]: crate::lines()
///
/// # Example
///
/// ```
/// use std::io;
///
/// let root = io::Error::new(io::ErrorKind::Other, "EOF");
/// let error = errchain::wrap(errchain::with_message(root, "read"), "load");
///
/// let cause = errchain::cause(&error);
/// assert!(cause.downcast_ref::<io::Error>().is_some());
/// ```
pub fn cause<'a>(error: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = error;
    while let Some(next) = current.downcast_ref::<Error>().and_then(Error::cause) {
        current = next;
    }
    current
}
