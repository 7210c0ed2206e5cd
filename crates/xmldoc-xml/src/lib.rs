//! Source-tracked XML trees for documentation comment files.
//!
//! This crate wraps [`quick-xml`] and produces a tree of [`XmlElement`]s in
//! which every element, attribute, and text run knows where it came from.
//! It is the "already parsed XML" layer the documentation model is built on:
//! it keeps mixed content intact (text between inline elements is never
//! dropped) and leaves all interpretation of tags to its callers.
//!
//! # Example
//!
//! ```rust
//! use xmldoc_xml::parse;
//!
//! let xml = parse(r#"<member name="T:My.Foo">
//!   <summary>A <see cref="T:My.Bar"/>.</summary>
//! </member>"#).unwrap();
//!
//! assert_eq!(xml.root.get_attribute("name"), Some("T:My.Foo"));
//! let summary = xml.root.get_child("summary").unwrap();
//! assert_eq!(summary.elements().count(), 1);
//! assert_eq!(summary.source_info.line(), 2);
//! ```

pub mod error;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use parser::{parse, parse_with_file_id};
pub use types::{XmlAttribute, XmlDocument, XmlElement, XmlNode, XmlText};
pub use xmldoc_source_map::SourceInfo;
