use std::error::Error;
use std::fmt;
use std::io;
use std::io::prelude::*;

use bstr::io::BufReadExt;
use bstr::ByteSlice;

use crate::registry::{Point, Registry};

/// A record line that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The line held a number of digit runs other than four.
    FieldCount { found: usize },
    /// A digit run does not fit in a `u64`; `offset` is the byte
    /// position where the run starts.
    Overflow { offset: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::FieldCount { found } => {
                write!(f, "expected 4 numbers, found {}", found)
            }
            ParseError::Overflow { offset } => {
                write!(f, "number at byte {} does not fit in a u64", offset)
            }
        }
    }
}

impl Error for ParseError {}

#[derive(Debug)]
pub enum LoadError {
    /// A line failed to parse under the abort policy. Line numbers
    /// are 1-based and count blank lines.
    Malformed { line: usize, cause: ParseError },
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Malformed { line, cause } => {
                write!(f, "line {}: {}", line, cause)
            }
            LoadError::Io(err) => write!(f, "input error: {}", err),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Malformed { cause, .. } => Some(cause),
            LoadError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> LoadError {
        LoadError::Io(err)
    }
}

/// What to do with a line that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Stop at the first malformed line, reporting which and why.
    Abort,
    /// Drop malformed lines, keeping a count of how many.
    Skip,
}

/// A registry built from an input stream, plus the number of lines
/// the skip policy dropped.
#[derive(Debug)]
pub struct Loaded {
    pub registry: Registry,
    pub skipped: usize,
}

/// Extracts one record, i.e. two points, from a line. Every maximal
/// run of ASCII digits is a field and every other byte is a
/// separator; exactly four fields must be present, read positionally
/// as `x1 y1 x2 y2`.
pub fn parse_record(line: &[u8]) -> Result<(Point, Point), ParseError> {
    let mut fields = [0u64; 4];
    let mut count = 0;

    let mut i = 0;
    while i < line.len() {
        if !line[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        let mut value: u64 = 0;
        while i < line.len() && line[i].is_ascii_digit() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(line[i] - b'0')))
                .ok_or(ParseError::Overflow { offset: start })?;
            i += 1;
        }

        if count < 4 {
            fields[count] = value;
        }
        count += 1;
    }

    if count != 4 {
        return Err(ParseError::FieldCount { found: count });
    }

    Ok((
        Point::new(fields[0], fields[1]),
        Point::new(fields[2], fields[3]),
    ))
}

/// Builds a registry from a reader, one record per line: parse the
/// line, register both points, merge their groups. Blank lines are
/// ignored; malformed lines follow the given policy.
pub fn load_registry<R: BufRead>(
    reader: R,
    policy: MalformedPolicy,
) -> Result<Loaded, LoadError> {
    let mut registry = Registry::new();
    let mut skipped = 0;
    let mut line_num = 0;

    for line in reader.byte_lines() {
        let line = line?;
        line_num += 1;

        if line.trim().is_empty() {
            continue;
        }

        match parse_record(&line) {
            Ok((a, b)) => {
                registry.register(a);
                registry.register(b);
                registry.union(a, b);
            }
            Err(cause) => match policy {
                MalformedPolicy::Abort => {
                    return Err(LoadError::Malformed {
                        line: line_num,
                        cause,
                    });
                }
                MalformedPolicy::Skip => skipped += 1,
            },
        }
    }

    Ok(Loaded { registry, skipped })
}
