use core::fmt::{self, Write};
use std::error::Error as StdError;

use crate::error::{Error, Node};

use super::writer::Joiner;
use super::{config, RenderConfig};

const CAUSE_SEP: &str = ": ";

/// Provides configurable [`Error`] formatting.
///
/// The short form joins the messages of the chain with `": "`. The extended
/// form writes the root cause first and every link after it, each followed by
/// the call stack it captured.
#[must_use = "error displays must be written"]
pub struct ErrorDisplay<'a> {
    error: &'a Error,
    extended: bool,
    config: Option<&'a RenderConfig>,
}

impl<'a> ErrorDisplay<'a> {
    /// Create a new short form `ErrorDisplay` using the process-wide
    /// [`RenderConfig`].
    pub fn new(error: &'a Error) -> Self {
        Self {
            error,
            extended: false,
            config: None,
        }
    }

    /// Derive an `ErrorDisplay` from a [`fmt::Formatter`].
    ///
    /// The alternate flag (`{:#}`) selects the extended form. Other flags are
    /// ignored.
    pub fn from_formatter(error: &'a Error, f: &fmt::Formatter<'_>) -> Self {
        Self::new(error).extended(f.alternate())
    }

    /// Set whether the extended form is written.
    pub fn extended(mut self, value: bool) -> Self {
        self.extended = value;
        self
    }

    /// Render with an explicit config instead of the process-wide one.
    pub fn config(mut self, config: &'a RenderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Writes the [`Error`] to a writer with the chosen form.
    ///
    /// # Errors
    ///
    /// Returns a [`fmt::Error`] if failed to write to the writer.
    pub fn write(&self, w: &mut dyn Write) -> fmt::Result {
        if !self.extended {
            return write_short(self.error, w);
        }
        match self.config {
            Some(config) => write_extended(self.error, w, config),
            None => write_extended(self.error, w, &config()),
        }
    }
}

impl<'a> Clone for ErrorDisplay<'a> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a> fmt::Debug for ErrorDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

impl<'a> fmt::Display for ErrorDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

///////////////////////////////////////////////////////////////////////////////
// Short form

fn write_short(error: &Error, w: &mut dyn Write) -> fmt::Result {
    let (message, cause) = match error.node() {
        Node::Fundamental { message, .. } => return w.write_str(message),
        Node::StackMessage { message, cause, .. } | Node::Message { message, cause } => {
            (message.as_str(), cause)
        }
        Node::Details { cause, .. } => return write!(w, "{}", cause),
    };
    let mut w = Joiner::new(w);
    w.write_str(message)?;
    w.separate(CAUSE_SEP);
    write!(w, "{}", cause)
}

///////////////////////////////////////////////////////////////////////////////
// Extended form

/// Writes any error in the extended form.
///
/// Errors from outside this crate are written with their `Display` impl.
fn write_extended_dyn(
    error: &(dyn StdError + 'static),
    w: &mut dyn Write,
    config: &RenderConfig,
) -> fmt::Result {
    match error.downcast_ref::<Error>() {
        Some(error) => write_extended(error, w, config),
        None => write!(w, "{}", error),
    }
}

fn write_extended(error: &Error, w: &mut dyn Write, config: &RenderConfig) -> fmt::Result {
    let mut w = Joiner::new(w);
    if let Some(cause) = error.cause() {
        write_extended_dyn(cause, &mut w, config)?;
        w.separate(config.stack_sep());
    }
    write_line(error, &mut w, true, config)
}

///////////////////////////////////////////////////////////////////////////////
// Line form

/// Writes the contribution of this link alone, ignoring its cause.
pub(crate) fn write_line(
    error: &Error,
    w: &mut dyn Write,
    include_stack: bool,
    config: &RenderConfig,
) -> fmt::Result {
    match error.node() {
        Node::Fundamental { message, stack } | Node::StackMessage { message, stack, .. } => {
            w.write_str(message)?;
            if include_stack && !stack.is_empty() {
                if !message.is_empty() {
                    w.write_str(config.msg_sep())?;
                    w.write_char('\n')?;
                }
                stack.write_to(w, config)?;
            }
            Ok(())
        }
        Node::Message { message, .. } => w.write_str(message),
        Node::Details { .. } => Ok(()),
    }
}
