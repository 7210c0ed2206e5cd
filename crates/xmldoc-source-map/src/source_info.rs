//! Source information attached to parsed nodes

use crate::types::{FileId, Location, Range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a node came from: a file and a range inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceInfo {
    pub file_id: FileId,
    pub range: Range,
}

impl SourceInfo {
    pub fn new(file_id: FileId, range: Range) -> Self {
        SourceInfo { file_id, range }
    }

    /// Build source info from two already resolved locations.
    pub fn from_locations(file_id: FileId, start: Location, end: Location) -> Self {
        SourceInfo {
            file_id,
            range: Range { start, end },
        }
    }

    pub fn start_offset(&self) -> usize {
        self.range.start.offset
    }

    pub fn end_offset(&self) -> usize {
        self.range.end.offset
    }

    /// 1-based line of the start of the range.
    pub fn line(&self) -> usize {
        self.range.start.row + 1
    }

    /// 1-based column of the start of the range.
    pub fn column(&self) -> usize {
        self.range.start.column + 1
    }
}

impl fmt::Display for SourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line(), self.column())
    }
}
