//! Source context for managing files

use crate::file_info::FileInformation;
use crate::source_info::SourceInfo;
use crate::types::FileId;
use serde::{Deserialize, Serialize};

/// Registry of the files a read operation has loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceContext {
    files: Vec<SourceFile>,
}

/// A source file with its content and line index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// File path or identifier
    pub path: String,
    pub content: String,
    pub file_info: FileInformation,
}

impl SourceContext {
    pub fn new() -> Self {
        SourceContext { files: Vec::new() }
    }

    /// Add a file to the context and return its ID.
    pub fn add_file(&mut self, path: String, content: String) -> FileId {
        let id = FileId(self.files.len());
        let file_info = FileInformation::new(&content);
        self.files.push(SourceFile {
            path,
            content,
            file_info,
        });
        id
    }

    pub fn get_file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.0)
    }

    /// Resolve a byte range of a registered file into [`SourceInfo`].
    ///
    /// Returns `None` for unknown files or offsets past the end of the file.
    pub fn source_info(&self, id: FileId, start: usize, end: usize) -> Option<SourceInfo> {
        let file = self.get_file(id)?;
        let start = file.file_info.offset_to_location(start)?;
        let end = file.file_info.offset_to_location(end)?;
        Some(SourceInfo::from_locations(id, start, end))
    }

    /// Render a location as `path:line:column` for diagnostics.
    pub fn describe(&self, info: &SourceInfo) -> String {
        match self.get_file(info.file_id) {
            Some(file) => format!("{}:{}", file.path, info),
            None => info.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file_assigns_sequential_ids() {
        let mut ctx = SourceContext::new();
        let a = ctx.add_file("a.xml".into(), "<a/>".into());
        let b = ctx.add_file("b.xml".into(), "<b/>".into());

        assert_eq!(a, FileId(0));
        assert_eq!(b, FileId(1));
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get_file(b).unwrap().path, "b.xml");
    }

    #[test]
    fn test_describe_includes_path() {
        let mut ctx = SourceContext::new();
        let id = ctx.add_file("Lib.xml".into(), "<doc>\n<members/>\n</doc>".into());
        let info = ctx.source_info(id, 6, 16).unwrap();

        assert_eq!(ctx.describe(&info), "Lib.xml:2:1");
    }

    #[test]
    fn test_source_info_out_of_range() {
        let mut ctx = SourceContext::new();
        let id = ctx.add_file("a.xml".into(), "<a/>".into());

        assert!(ctx.source_info(id, 0, 100).is_none());
        assert!(ctx.source_info(FileId(7), 0, 1).is_none());
    }
}
