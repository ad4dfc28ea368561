#[macro_use]
mod common;

use std::error::Error as StdError;
use std::fmt;
use std::io;

use common::*;

const FILE: &str = "tests/test_lines.rs";

/// An error from outside the crate that carries its own source.
#[derive(Debug)]
struct CodeError {
    code: u16,
    source: io::Error,
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}", self.code)
    }
}

impl StdError for CodeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

fn code_error() -> CodeError {
    CodeError {
        code: 503,
        source: eof(),
    }
}

#[test]
fn test_lines_no_stack() {
    let error = with_message(with_stack(new("foo")), "bar");

    assert_eq!(lines(&error, false), ["bar", "foo"]);
}

#[test]
fn test_lines_external_only() {
    assert_eq!(lines(&eof(), false), ["EOF"]);
    assert_eq!(lines(&eof(), true), ["EOF"]);
}

#[test]
fn test_lines() {
    let (root, root_line) = (new("foo"), line!());
    let root_depth = depth(&root);
    let (stacked, line) = (with_stack(root), line!());
    let stacked_depth = depth(&stacked);
    let error = with_message(stacked, "bar");

    let lines = lines(&error, true);
    assert_eq!(lines.len(), 3);
    assert_str_eq!(lines[0], "bar");

    let frames = split(&lines[1]);
    assert_eq!(frames.len(), stacked_depth);
    assert_frame!(frames[0], "test_lines::test_lines", FILE, line);

    let foo = split(&lines[2]);
    assert_eq!(foo.len(), 1 + root_depth);
    assert_str_eq!(foo[0], "foo : ");
    assert_frame!(foo[1], "test_lines::test_lines", FILE, root_line);
}

#[test]
fn test_lines_wrap() {
    let (error, line) = (wrap(eof(), "read"), line!());

    let lines = lines(&error, true);
    let first = split(&lines[0]);
    assert_eq!(lines.len(), 2);
    assert_str_eq!(first[0], "read : ");
    assert_frame!(first[1], "test_lines::test_lines_wrap", FILE, line);
    assert_str_eq!(lines[1], "EOF");
}

#[test]
fn test_lines_descend_into_external_sources() {
    let error = with_message(code_error(), "fetch");

    assert_eq!(lines(&error, false), ["fetch", "code 503", "EOF"]);
    // `cause` stops at the external error, `lines` doesn't.
    assert_str_eq!(cause(&error).to_string(), "code 503");
}

/// An external error wrapping an error chain.
#[derive(Debug)]
struct Boundary(Error);

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("boundary")
    }
}

impl StdError for Boundary {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn test_lines_through_external_error_sources() {
    let inner = wrap(eof(), "inner");
    let outer = wrap(Boundary(inner), "outer");

    assert_eq!(lines(&outer, false), ["outer", "boundary", "inner", "EOF"]);
    assert_str_eq!(cause(&outer).to_string(), "boundary");
}

#[test]
fn test_lines_skip_details() {
    let error = with_message(errchain::with_details!(new("foo"), 1, "two"), "bar");

    assert_eq!(lines(&error, false), ["bar", "foo"]);
    assert_eq!(lines(&error, true).len(), 2);
}

#[test]
fn test_lines_without_stack_have_no_frames() {
    let error = wrap(with_message(wrap(new("a"), "b"), "c"), "d");

    for line in lines(&error, false) {
        assert!(!line.contains('\t'), "unexpected frame in {:?}", line);
        assert!(!line.contains('\n'), "unexpected frame in {:?}", line);
    }
}

#[test]
fn test_lines_one_stack_block_per_stack_link() {
    let error = wrap(with_message(wrap(new("a"), "b"), "c"), "d");
    let lines = lines(&error, true);

    let with_frames = lines.iter().filter(|line| line.contains('\t')).count();
    assert_eq!(lines.len(), 4);
    assert_eq!(with_frames, 3);
    assert_str_eq!(lines[1], "c");
}

#[test]
fn test_lines_with_config() {
    let error = wrap(new("foo"), "bar");
    let config = RenderConfig::new().with(with_msg_sep(" ~"));

    for line in lines_with(&error, true, &config) {
        assert!(line.contains(" ~\n"), "{:?}", line);
    }
}

#[test]
fn test_chain_follows_sources() {
    let error = with_message(code_error(), "fetch");
    let rendered: Vec<String> = error.chain().map(ToString::to_string).collect();

    assert_eq!(rendered, ["fetch: code 503", "code 503", "EOF"]);
    assert_eq!(Chain::new(&eof()).count(), 1);
}

#[test]
fn test_line_of_a_single_link() {
    let error = wrap(new("foo"), "bar");

    assert_str_eq!(error.line(false), "bar");
    assert!(error.line(true).starts_with("bar : \n"));
    assert_str_eq!(with_stack(eof()).line(false), "");
    assert_str_eq!(errchain::with_details!(eof(), 1).line(true), "");
}
