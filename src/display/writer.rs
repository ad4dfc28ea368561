use core::fmt;

/// Writer that only emits a separator between two non-empty writes.
///
/// Lets a chain be rendered straight into the output without first rendering
/// a cause to a string to check whether it is empty.
pub(super) struct Joiner<'w, 's> {
    w: &'w mut dyn fmt::Write,
    pending: Option<&'s str>,
    written: bool,
}

impl<'w, 's> Joiner<'w, 's> {
    pub(super) fn new(w: &'w mut dyn fmt::Write) -> Self {
        Self {
            w,
            pending: None,
            written: false,
        }
    }

    /// Queue `sep` to be written before the next non-empty write, if anything
    /// was written so far.
    pub(super) fn separate(&mut self, sep: &'s str) {
        if self.written {
            self.pending = Some(sep);
        }
    }
}

impl<'w, 's> fmt::Write for Joiner<'w, 's> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if s.is_empty() {
            return Ok(());
        }
        if let Some(sep) = self.pending.take() {
            self.w.write_str(sep)?;
        }
        self.written = true;
        self.w.write_str(s)
    }
}
