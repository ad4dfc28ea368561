//! Call stack capture.
//!
//! A [`Stack`] only records the instruction addresses of the frames it walks.
//! Turning an address into a function name, file and line is deferred until
//! the stack is rendered and goes through the [`Resolve`] capability.

use core::ffi::c_void;
use core::fmt::{self, Write};
use core::slice;

use crate::display::RenderConfig;

/// Frames skipped when capturing on behalf of a caller: the capture routine
/// itself and the public function that called it.
pub(crate) const CALLER_SKIP: usize = 2;

///////////////////////////////////////////////////////////////////////////////
// Call site

/// An opaque reference to one frame of a captured [`Stack`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct CallSite(usize);

impl CallSite {
    /// The instruction address the frame will return to.
    pub fn ip(self) -> usize {
        self.0
    }
}

impl fmt::Debug for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallSite({:#x})", self.0)
    }
}

/// Resolves a frame reference to its source [`Location`].
pub trait Resolve {
    /// Returns the location of the frame, or `None` if no symbol information
    /// is available for it.
    fn resolve(&self) -> Option<Location>;
}

impl Resolve for CallSite {
    fn resolve(&self) -> Option<Location> {
        let mut location = None;
        // `backtrace::resolve` looks up the call instruction preceding the
        // return address itself.
        backtrace::resolve(self.0 as *mut c_void, |symbol| {
            if location.is_some() {
                return;
            }
            if let Some(name) = symbol.name() {
                location = Some(Location {
                    function: format!("{:#}", name),
                    file: symbol
                        .filename()
                        .map(|path| path.display().to_string())
                        .unwrap_or_default(),
                    line: symbol.lineno().unwrap_or(0),
                });
            }
        });
        location
    }
}

///////////////////////////////////////////////////////////////////////////////
// Location

/// The function, file and line a [`CallSite`] resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    function: String,
    file: String,
    line: u32,
}

impl Location {
    /// Create a new `Location`.
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }

    /// The demangled path of the function, without its hash.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// The source file.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The line within the source file, `0` if unknown.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Writes the location as `function<func_sep>file:line`.
    ///
    /// # Errors
    ///
    /// Returns a [`fmt::Error`] if failed to write to the writer.
    pub fn write_to(&self, w: &mut dyn Write, config: &RenderConfig) -> fmt::Result {
        w.write_str(&self.function)?;
        w.write_str(config.func_sep())?;
        w.write_str(&self.file)?;
        w.write_char(':')?;
        write!(w, "{}", self.line)
    }
}

///////////////////////////////////////////////////////////////////////////////
// Stack

/// An immutable sequence of [`CallSite`]s, innermost first.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stack {
    frames: Box<[CallSite]>,
}

impl Stack {
    /// Capture the current call stack.
    ///
    /// `skip` counts the innermost frames left out of the result, this
    /// function's own frame included: `capture(1)` starts at the caller of
    /// `capture`, `capture(2)` at the caller's caller.
    ///
    /// If the frame of this function can't be located on the stack, which
    /// happens when symbol addresses are unavailable for the platform,
    /// `skip` is counted from the innermost frame walked. That frame belongs
    /// to the stack walker, so the recorded call site is then wrong.
    ///
    /// A `skip` past the end of the stack returns an empty `Stack`.
    #[inline(never)]
    pub fn capture(skip: usize) -> Self {
        let this = Self::capture as *const () as usize;
        let mut walked = Vec::with_capacity(32);
        let mut anchor = None;
        backtrace::trace(|frame| {
            if anchor.is_none() && frame.symbol_address() as usize == this {
                anchor = Some(walked.len());
            }
            walked.push(CallSite(frame.ip() as usize));
            match anchor {
                Some(at) if !cfg!(feature = "full-backtrace") => walked.len() - at <= skip,
                _ => true,
            }
        });
        let start = anchor.unwrap_or(0).saturating_add(skip).min(walked.len());
        let mut frames = walked.split_off(start);
        if !cfg!(feature = "full-backtrace") {
            frames.truncate(1);
        }
        Self {
            frames: frames.into_boxed_slice(),
        }
    }

    /// The number of frames captured.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no frames were captured.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The innermost frame, the call site the stack was captured for.
    pub fn call_site(&self) -> Option<CallSite> {
        self.frames.first().copied()
    }

    /// Iterate the frames, innermost first.
    pub fn iter(&self) -> slice::Iter<'_, CallSite> {
        self.frames.iter()
    }

    /// Writes one frame per line, each as `function<func_sep>file:line`.
    ///
    /// A frame that can't be resolved is written as an empty line.
    ///
    /// # Errors
    ///
    /// Returns a [`fmt::Error`] if failed to write to the writer.
    pub fn write_to(&self, w: &mut dyn Write, config: &RenderConfig) -> fmt::Result {
        for (i, site) in self.frames.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            if let Some(location) = site.resolve() {
                location.write_to(w, config)?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a CallSite;
    type IntoIter = slice::Iter<'a, CallSite>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.frames.iter().map(Resolve::resolve))
            .finish()
    }
}
