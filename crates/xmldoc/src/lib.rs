//! Typed model for XML documentation comment files.
//!
//! Compilers write the documentation comments of a binary into an XML
//! sidecar file. This crate reads such a file into [`Member`]s, each owning
//! a tree of [`Element`]s (summary, remarks, params, code, cross-references
//! and so on), and can cross-link every member with the reflection metadata
//! of the binary it documents.
//!
//! # Reading a file
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let members = xmldoc::read(Path::new("bin/My.Library.xml"))?;
//! for member in &members {
//!     println!("{} {:?}", member.id(), member.kind());
//! }
//! # Ok::<(), xmldoc::Error>(())
//! ```
//!
//! # Resolving against metadata
//!
//! [`read_with_metadata`] takes any [`ReflectionSource`]; the in-memory
//! [`Assembly`] model implements it and can be loaded from a JSON dump.
//! Types are refined into interfaces, classes, enums and structs, and
//! extension methods record the type they extend:
//!
//! ```rust,no_run
//! use xmldoc::{Assembly, MemberKind};
//!
//! let assembly = Assembly::from_json(&std::fs::read_to_string("My.Library.json").unwrap())?;
//! for member in xmldoc::read_with_metadata(&assembly, None)? {
//!     if let MemberKind::ExtensionMethod { extended_type } = member.kind() {
//!         println!("{} extends {}", member.id(), extended_type);
//!     }
//! }
//! # Ok::<(), xmldoc::Error>(())
//! ```
//!
//! # Rendering
//!
//! Implement [`Visitor`] to walk elements and members, or use
//! [`PlainTextVisitor`] to turn documentation back into text.

pub mod config;
pub mod content;
pub mod doc_id;
pub mod element;
pub mod error;
pub mod identity;
pub mod member;
pub mod metadata;
pub mod normalize;
pub mod plain_text;
pub mod reader;
pub mod visitor;

pub use config::Config;
pub use element::{Element, ElementKind, ListKind};
pub use error::{Error, Result};
pub use identity::{IdentityMap, ReflectionHandle, ReflectionSource};
pub use member::{Member, MemberKind};
pub use metadata::{Assembly, TypeCategory, TypeRef};
pub use plain_text::{LineEnding, PlainTextVisitor};
pub use reader::{DocumentationFile, Reader, read, read_with_metadata};
pub use visitor::Visitor;
pub use xmldoc_source_map::SourceInfo;
