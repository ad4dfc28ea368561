#![allow(unused_macros, dead_code)]

use std::io;

pub use errchain::*;
pub use indoc::indoc;
pub use regex::Regex;

macro_rules! assert_str_eq {
    ($actual:expr, $expected:expr) => {{
        let actual = &$actual[..];
        let expected = &$expected[..];
        if actual != expected {
            panic!(
                indoc! {"
                string not expected value:
                ============================EXPECTED==========================
                {}
                =============================ACTUAL===========================
                {}
                ==============================DIFF============================
                {}
                ==============================================================
            "},
                expected,
                actual,
                colored_diff::PrettyDifference { expected, actual },
            );
        }
    }};
}

/// Asserts `line` is a frame line for `function` at `file:line`.
macro_rules! assert_frame {
    ($actual:expr, $function:expr, $file:expr, $line:expr) => {{
        let actual: &str = &$actual[..];
        let pattern = frame_pattern($function, $file, $line);
        assert!(
            pattern.is_match(actual),
            "frame line {:?} does not match {:?}",
            actual,
            pattern.as_str(),
        );
    }};
}

/// An error from outside the crate, displayed as `EOF`.
pub fn eof() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "EOF")
}

pub fn frame_pattern(function: &str, file: &str, line: u32) -> Regex {
    Regex::new(&format!(
        r"^{}\t.*{}:{}$",
        regex::escape(function),
        regex::escape(file),
        line,
    ))
    .unwrap()
}

/// Splits a render into its lines.
pub fn split(rendered: &str) -> Vec<&str> {
    rendered.split('\n').collect()
}

/// Frame count of the stack captured by an error, `0` if it has none.
pub fn depth(error: &Error) -> usize {
    error.stack().map_or(0, stack::Stack::len)
}
