use crate::stack::{Stack, CALLER_SKIP};

use super::{Cause, Detail, Error, Node};

/// Annotation methods for values that may or may not hold an error.
///
/// Implemented for `Result<T, E>` and `Option<E>`. An `Ok` or a `None` is
/// returned untouched, no link is ever created around a missing error. Stacks
/// are recorded at the call site of the method.
///
/// # Example
///
/// ```
/// use std::io;
/// use errchain::Annotate;
///
/// let ok: Result<u8, io::Error> = Ok(1);
/// assert_eq!(ok.wrap("read byte").unwrap(), 1);
///
/// let missing: Option<io::Error> = None;
/// assert!(missing.wrap("read byte").is_none());
///
/// let failed: Result<u8, io::Error> = Err(io::Error::new(io::ErrorKind::Other, "EOF"));
/// assert_eq!(failed.wrap("read byte").unwrap_err().to_string(), "read byte: EOF");
/// ```
pub trait Annotate: Sized {
    /// `Self` with the error replaced by an [`Error`].
    type Output;

    /// See [`with_stack()`](crate::with_stack()).
    fn with_stack(self) -> Self::Output;

    /// See [`wrap()`](crate::wrap()).
    fn wrap<M>(self, message: M) -> Self::Output
    where
        M: Into<String>;

    /// Like [`Annotate::wrap`], only building the message if there is an
    /// error.
    fn wrap_with<M, F>(self, f: F) -> Self::Output
    where
        M: Into<String>,
        F: FnOnce() -> M;

    /// See [`with_message()`](crate::with_message()).
    fn with_message<M>(self, message: M) -> Self::Output
    where
        M: Into<String>;

    /// Like [`Annotate::with_message`], only building the message if there
    /// is an error.
    fn with_message_with<M, F>(self, f: F) -> Self::Output
    where
        M: Into<String>,
        F: FnOnce() -> M;

    /// See [`with_details()`](crate::with_details()).
    fn with_details<I>(self, details: I) -> Self::Output
    where
        I: IntoIterator<Item = Detail>;
}

fn stack_message_link(cause: Cause, message: String, stack: Stack) -> Error {
    Error::from_node(Node::StackMessage {
        message,
        cause,
        stack,
    })
}

fn message_link(cause: Cause, message: String) -> Error {
    Error::from_node(Node::Message { message, cause })
}

fn details_link<I>(cause: Cause, details: I) -> Error
where
    I: IntoIterator<Item = Detail>,
{
    Error::from_node(Node::Details {
        cause,
        details: details.into_iter().collect(),
    })
}

// Stacks are captured by matching in place: a `map` closure would add a frame
// between the caller and the capture.
impl<T, E> Annotate for Result<T, E>
where
    E: Into<Cause>,
{
    type Output = Result<T, Error>;

    #[inline(never)]
    fn with_stack(self) -> Self::Output {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(stack_message_link(
                err.into(),
                String::new(),
                Stack::capture(CALLER_SKIP),
            )),
        }
    }

    #[inline(never)]
    fn wrap<M>(self, message: M) -> Self::Output
    where
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(stack_message_link(
                err.into(),
                message.into(),
                Stack::capture(CALLER_SKIP),
            )),
        }
    }

    #[inline(never)]
    fn wrap_with<M, F>(self, f: F) -> Self::Output
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(stack_message_link(
                err.into(),
                f().into(),
                Stack::capture(CALLER_SKIP),
            )),
        }
    }

    fn with_message<M>(self, message: M) -> Self::Output
    where
        M: Into<String>,
    {
        self.map_err(|err| message_link(err.into(), message.into()))
    }

    fn with_message_with<M, F>(self, f: F) -> Self::Output
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        self.map_err(|err| message_link(err.into(), f().into()))
    }

    fn with_details<I>(self, details: I) -> Self::Output
    where
        I: IntoIterator<Item = Detail>,
    {
        self.map_err(|err| details_link(err.into(), details))
    }
}

impl<E> Annotate for Option<E>
where
    E: Into<Cause>,
{
    type Output = Option<Error>;

    #[inline(never)]
    fn with_stack(self) -> Self::Output {
        match self {
            Some(err) => Some(stack_message_link(
                err.into(),
                String::new(),
                Stack::capture(CALLER_SKIP),
            )),
            None => None,
        }
    }

    #[inline(never)]
    fn wrap<M>(self, message: M) -> Self::Output
    where
        M: Into<String>,
    {
        match self {
            Some(err) => Some(stack_message_link(
                err.into(),
                message.into(),
                Stack::capture(CALLER_SKIP),
            )),
            None => None,
        }
    }

    #[inline(never)]
    fn wrap_with<M, F>(self, f: F) -> Self::Output
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Some(err) => Some(stack_message_link(
                err.into(),
                f().into(),
                Stack::capture(CALLER_SKIP),
            )),
            None => None,
        }
    }

    fn with_message<M>(self, message: M) -> Self::Output
    where
        M: Into<String>,
    {
        self.map(|err| message_link(err.into(), message.into()))
    }

    fn with_message_with<M, F>(self, f: F) -> Self::Output
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        self.map(|err| message_link(err.into(), f().into()))
    }

    fn with_details<I>(self, details: I) -> Self::Output
    where
        I: IntoIterator<Item = Detail>,
    {
        self.map(|err| details_link(err.into(), details))
    }
}
