//! The error chain.
//!
//! Every [`Error`] is one link of a chain: it annotates the error it wraps
//! (its cause) with a message, a captured call stack, or a set of opaque
//! details. The cause is either another [`Error`] or any error type from
//! outside this crate.

mod construct;
mod ext;

use core::any::Any;
use core::fmt;
use std::error::Error as StdError;

use crate::display::{self, ErrorDisplay, RenderConfig};
use crate::lines::Chain;
use crate::stack::Stack;

pub use self::construct::{cause, detail, details, new, with_details, with_message, with_stack, wrap};
pub use self::ext::Annotate;

/// An opaque value attached to an error with [`with_details()`].
pub type Detail = Box<dyn Any + Send + Sync>;

/// The error wrapped by a link.
///
/// Anything convertible into it is accepted as a cause: any error type, an
/// already boxed error, an `anyhow::Error`, or a plain `&str`/`String`.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// The kinds of link a chain is made of.
pub(crate) enum Node {
    /// Starts a chain.
    Fundamental { message: String, stack: Stack },
    StackMessage {
        message: String,
        cause: Cause,
        stack: Stack,
    },
    Message { message: String, cause: Cause },
    Details { cause: Cause, details: Vec<Detail> },
}

/// One annotated link of an error chain.
///
/// See the [crate documentation](crate) for how the chain is built and
/// formatted.
#[must_use = "error must be handled"]
pub struct Error {
    node: Box<Node>,
}

impl Error {
    pub(crate) fn from_node(node: Node) -> Self {
        Self {
            node: Box::new(node),
        }
    }

    pub(crate) fn node(&self) -> &Node {
        &self.node
    }

    /// The message this link added.
    ///
    /// Returns `None` for links that only attach details. Links created with
    /// [`with_stack()`] return an empty message.
    pub fn message(&self) -> Option<&str> {
        match self.node() {
            Node::Fundamental { message, .. }
            | Node::StackMessage { message, .. }
            | Node::Message { message, .. } => Some(message),
            Node::Details { .. } => None,
        }
    }

    /// The call stack captured when this link was created, if it captured
    /// one.
    pub fn stack(&self) -> Option<&Stack> {
        match self.node() {
            Node::Fundamental { stack, .. } | Node::StackMessage { stack, .. } => Some(stack),
            Node::Message { .. } | Node::Details { .. } => None,
        }
    }

    /// The error this link wraps.
    ///
    /// Returns `None` if this link started the chain.
    pub fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        match self.node() {
            Node::Fundamental { .. } => None,
            Node::StackMessage { cause, .. }
            | Node::Message { cause, .. }
            | Node::Details { cause, .. } => Some(&**cause),
        }
    }

    /// The details attached by this link.
    ///
    /// Returns `None` unless this link was created with [`with_details()`].
    /// The chain is not searched.
    pub fn details(&self) -> Option<&[Detail]> {
        match self.node() {
            Node::Details { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Follow [`Error::cause`] until reaching an error that exposes no cause.
    ///
    /// See [`cause()`].
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        cause(self)
    }

    /// Iterate the chain through [`StdError::source`], starting with `self`.
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// The contribution of this link alone to [`lines()`], using the
    /// process-wide [`RenderConfig`].
    ///
    /// [`lines()`]: crate::lines()
    pub fn line(&self, include_stack: bool) -> String {
        self.line_with(include_stack, &display::config())
    }

    /// The contribution of this link alone to [`lines_with()`].
    ///
    /// [`lines_with()`]: crate::lines_with()
    pub fn line_with(&self, include_stack: bool, config: &RenderConfig) -> String {
        let mut line = String::new();
        // Writing to a `String` can't fail.
        let _ = display::write_line(self, &mut line, include_stack, config);
        line
    }

    /// Returns an [`ErrorDisplay`] to configure how the chain is written.
    pub fn display(&self) -> ErrorDisplay<'_> {
        ErrorDisplay::new(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ErrorDisplay::from_formatter(self, f).write(f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            ErrorDisplay::new(self).extended(true).write(f)
        } else {
            fmt::Debug::fmt(self.to_string().as_str(), f)
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause()
    }
}
