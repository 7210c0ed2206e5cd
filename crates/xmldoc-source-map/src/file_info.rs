//! Line index for offset-to-location lookups

use crate::types::Location;
use serde::{Deserialize, Serialize};

/// Line-break index of a file.
///
/// Stores the byte offset of every `\n` so a byte offset can be turned into
/// a (row, column) pair with a binary search instead of rescanning the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInformation {
    line_breaks: Vec<usize>,
    total_length: usize,
}

impl FileInformation {
    /// Index the line breaks of `content`.
    pub fn new(content: &str) -> Self {
        let line_breaks = content
            .bytes()
            .enumerate()
            .filter_map(|(idx, b)| (b == b'\n').then_some(idx))
            .collect();

        FileInformation {
            line_breaks,
            total_length: content.len(),
        }
    }

    /// Convert a byte offset to a [`Location`].
    ///
    /// A `\n` belongs to the row it terminates. Returns `None` when the
    /// offset lies past the end of the file.
    pub fn offset_to_location(&self, offset: usize) -> Option<Location> {
        if offset > self.total_length {
            return None;
        }

        let row = match self.line_breaks.binary_search(&offset) {
            Ok(idx) | Err(idx) => idx,
        };

        let line_start = if row == 0 {
            0
        } else {
            self.line_breaks[row - 1] + 1
        };

        Some(Location {
            offset,
            row,
            column: offset - line_start,
        })
    }

    pub fn total_length(&self) -> usize {
        self.total_length
    }

    pub fn line_count(&self) -> usize {
        self.line_breaks.len() + 1
    }
}
