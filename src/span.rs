//! Source location spans.
//!
//! A [`Span`] is the normalized form of the `span` field of a
//! `SourceCodeInfo.Location` record. Descriptor spans are zero-based and
//! come in two shapes: `[line, start_col, end_col]` when the element sits on
//! one line, and `[start_line, start_col, end_line, end_col]` otherwise.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{LocationError, Result};

/// A source location span representing a range in a schema file.
///
/// Values are copied verbatim from the location record and are zero-based.
/// End columns are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    /// A span that starts and ends on the same line.
    SingleLine {
        line: i32,
        start_column: i32,
        end_column: i32,
    },
    /// A span that crosses lines.
    MultiLine {
        start_line: i32,
        start_column: i32,
        end_line: i32,
        end_column: i32,
    },
}

impl Span {
    /// Placeholder for elements with no recorded source position.
    ///
    /// This has the same shape as a genuine zero-length span at the very
    /// start of a file. Use `FileDescriptorProto::has_source_info` to tell
    /// the two apart.
    pub const ZERO: Span = Span::SingleLine {
        line: 0,
        start_column: 0,
        end_column: 0,
    };

    /// Create a span covering part of a single line.
    pub fn single_line(line: i32, start_column: i32, end_column: i32) -> Self {
        Span::SingleLine {
            line,
            start_column,
            end_column,
        }
    }

    /// Create a span that crosses lines.
    pub fn multi_line(start_line: i32, start_column: i32, end_line: i32, end_column: i32) -> Self {
        Span::MultiLine {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Normalize a raw descriptor span.
    ///
    /// # Errors
    ///
    /// Returns `MalformedSpan` unless the slice holds exactly 3 or 4 values.
    pub fn from_raw(raw: &[i32]) -> Result<Self> {
        match *raw {
            [line, start_column, end_column] => Ok(Self::single_line(line, start_column, end_column)),
            [start_line, start_column, end_line, end_column] => Ok(Self::multi_line(
                start_line,
                start_column,
                end_line,
                end_column,
            )),
            _ => Err(LocationError::MalformedSpan { len: raw.len() }),
        }
    }

    /// Zero-based line the span starts on.
    pub fn start_line(&self) -> i32 {
        match *self {
            Span::SingleLine { line, .. } => line,
            Span::MultiLine { start_line, .. } => start_line,
        }
    }

    /// Zero-based column the span starts at.
    pub fn start_column(&self) -> i32 {
        match *self {
            Span::SingleLine { start_column, .. } | Span::MultiLine { start_column, .. } => {
                start_column
            }
        }
    }

    /// Zero-based line the span ends on.
    pub fn end_line(&self) -> i32 {
        match *self {
            Span::SingleLine { line, .. } => line,
            Span::MultiLine { end_line, .. } => end_line,
        }
    }

    /// Zero-based, exclusive end column.
    pub fn end_column(&self) -> i32 {
        match *self {
            Span::SingleLine { end_column, .. } | Span::MultiLine { end_column, .. } => end_column,
        }
    }

    /// Whether the span was recorded in the 4-integer form.
    pub fn is_multi_line(&self) -> bool {
        matches!(self, Span::MultiLine { .. })
    }

    /// The 3-or-4 integer form, exactly as it appears in the descriptor.
    pub fn to_vec(&self) -> Vec<i32> {
        match *self {
            Span::SingleLine {
                line,
                start_column,
                end_column,
            } => vec![line, start_column, end_column],
            Span::MultiLine {
                start_line,
                start_column,
                end_line,
                end_column,
            } => vec![start_line, start_column, end_line, end_column],
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Span::ZERO
    }
}

impl TryFrom<&[i32]> for Span {
    type Error = LocationError;

    fn try_from(raw: &[i32]) -> Result<Self> {
        Span::from_raw(raw)
    }
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_vec().serialize(serializer)
    }
}

/// Renders one-based `line:col-line:col`, the form editors and terminals expect.
impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            i64::from(self.start_line()) + 1,
            i64::from(self.start_column()) + 1,
            i64::from(self.end_line()) + 1,
            i64::from(self.end_column()) + 1
        )
    }
}
