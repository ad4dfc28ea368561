use std::error::Error as StdError;

use crate::display::{config, RenderConfig};
use crate::error::Error;

/// Iterator over an error and its sources, through [`StdError::source`].
///
/// Unlike [`cause()`](crate::cause()), the walk also descends into errors
/// from outside this crate.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    /// Create a new `Chain` starting with `head`.
    pub fn new(head: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Flattens an error chain into one string per link, outermost first, using
/// the process-wide [`RenderConfig`].
///
/// Each [`Error`] contributes [`Error::line`], which includes the call stack
/// it captured if `include_stack` is set. Errors from outside this crate
/// contribute their `Display` text. Empty contributions are skipped.
///
/// # Example
///
/// ```
/// let error = errchain::with_message(errchain::with_stack(errchain::new("foo")), "bar");
///
/// assert_eq!(errchain::lines(&error, false), ["bar", "foo"]);
/// ```
pub fn lines(error: &(dyn StdError + 'static), include_stack: bool) -> Vec<String> {
    lines_with(error, include_stack, &config())
}

/// Like [`lines()`], with an explicit [`RenderConfig`].
pub fn lines_with(
    error: &(dyn StdError + 'static),
    include_stack: bool,
    config: &RenderConfig,
) -> Vec<String> {
    Chain::new(error)
        .map(|link| match link.downcast_ref::<Error>() {
            Some(error) => error.line_with(include_stack, config),
            None => link.to_string(),
        })
        .filter(|line| !line.is_empty())
        .collect()
}
