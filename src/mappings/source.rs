//! The line-oriented text format the board is stored in.
//!
//! ```text
//! food Things to eat
//! >img/apple.png apple
//! >img/bread.png a slice of bread
//! ```
//!
//! A line without the leading marker declares a category: its first
//! token is the key and the remainder is the caption. A marked line
//! declares an item of the most recent category. There is no escaping,
//! so keys cannot contain spaces and captions cannot span lines.

use crate::error::{NavigationError, Result};
use regex::Regex;
use std::io::Write;
use std::sync::OnceLock;

pub const ITEM_MARKER: char = '>';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLine<'a> {
    Category { key: &'a str, caption: &'a str },
    Item { key: &'a str, text: &'a str },
    Blank,
}

fn line_regex() -> &'static Regex {
    static LINE: OnceLock<Regex> = OnceLock::new();
    LINE.get_or_init(|| {
        Regex::new(r"^(?P<marker>>?)(?P<key>[^ ]*) (?P<rest>.*)$")
            .unwrap_or_else(|err| panic!("Logic error: bad source line pattern: {err}"))
    })
}

/// Classifies one line. `line_no` is 1-based and only used in errors.
pub fn parse_line(line_no: usize, line: &str) -> Result<SourceLine<'_>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(SourceLine::Blank);
    }
    let caps = line_regex()
        .captures(line)
        .ok_or_else(|| NavigationError::malformed(line_no, "missing separator"))?;
    let (Some(key), Some(rest)) = (caps.name("key"), caps.name("rest")) else {
        return Err(NavigationError::malformed(line_no, "missing separator"));
    };
    let key = key.as_str();
    if key.is_empty() {
        return Err(NavigationError::malformed(line_no, "empty key"));
    }
    let is_item = caps.name("marker").is_some_and(|m| !m.as_str().is_empty());
    Ok(if is_item {
        SourceLine::Item {
            key,
            text: rest.as_str(),
        }
    } else {
        SourceLine::Category {
            key,
            caption: rest.as_str(),
        }
    })
}

/// Whether `key` can be written as the first token of a line.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.chars().any(char::is_whitespace)
}

pub fn write_category(writer: &mut impl Write, key: &str, caption: &str) -> std::io::Result<()> {
    writeln!(writer, "{key} {caption}")
}

pub fn write_item(writer: &mut impl Write, key: &str, text: &str) -> std::io::Result<()> {
    writeln!(writer, "{ITEM_MARKER}{key} {text}")
}
