//! Source locations for documentation comment files.
//!
//! Every node produced by `xmldoc-xml`, and every documentation element built
//! on top of it, carries a [`SourceInfo`] pointing back at the file it was
//! read from. The types here are deliberately small: a documentation sidecar
//! file is parsed once, in memory, so a location is just a file id plus a
//! byte range with precomputed rows and columns.
//!
//! # Example
//!
//! ```rust
//! use xmldoc_source_map::*;
//!
//! let mut ctx = SourceContext::new();
//! let file_id = ctx.add_file("Lib.xml".into(), "<doc>\n  <members/>\n</doc>".into());
//!
//! let info = ctx.source_info(file_id, 8, 18).unwrap();
//! assert_eq!(info.line(), 2);
//! assert_eq!(info.column(), 3);
//! ```

pub mod context;
pub mod file_info;
pub mod source_info;
pub mod types;

pub use context::{SourceContext, SourceFile};
pub use file_info::FileInformation;
pub use source_info::SourceInfo;
pub use types::{FileId, Location, Range};
