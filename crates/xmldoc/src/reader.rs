//! Reading documentation files into members.
//!
//! A documentation file looks like this:
//!
//! ```xml
//! <doc>
//!   <assembly><name>My.Library</name></assembly>
//!   <members>
//!     <member name="T:My.Namespace.Foo">
//!       <summary>A foo.</summary>
//!     </member>
//!   </members>
//! </doc>
//! ```
//!
//! [`read`] turns every named `<member>` into a [`Member`].
//! [`read_with_metadata`] finds the file next to a binary and resolves each
//! member against the binary's reflection metadata.

use crate::config::{Config, ReaderConfig};
use crate::content::parse_content;
use crate::error::{Error, Result};
use crate::identity::{IdentityMap, ReflectionSource};
use crate::member::Member;
use std::path::{Path, PathBuf};
use xmldoc_source_map::{FileId, SourceContext, SourceInfo};
use xmldoc_xml::{XmlDocument, XmlElement};

/// A parsed documentation file.
///
/// Members are built on demand from the XML tree; iterating twice parses
/// twice.
#[derive(Debug, Clone)]
pub struct DocumentationFile {
    path: PathBuf,
    sources: SourceContext,
    document: XmlDocument,
}

impl DocumentationFile {
    /// Read and parse the file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                Error::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::parse(path, content)
    }

    /// Parse documentation XML that was loaded from `path`.
    pub fn parse(path: impl Into<PathBuf>, content: String) -> Result<Self> {
        let path = path.into();
        let mut sources = SourceContext::new();
        let file_id = FileId(sources.len());

        let document =
            xmldoc_xml::parse_with_file_id(&content, file_id).map_err(|source| Error::Xml {
                path: path.clone(),
                source,
            })?;
        sources.add_file(path.display().to_string(), content);

        tracing::debug!(path = %path.display(), "Parsed documentation file");
        Ok(Self {
            path,
            sources,
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &XmlDocument {
        &self.document
    }

    /// The content of `<doc><assembly><name>`, if present.
    pub fn assembly_name(&self) -> Option<String> {
        let name = self
            .document
            .root
            .get_child("assembly")?
            .get_child("name")?
            .text_content();
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    /// Members as documented, without reflection metadata.
    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.member_nodes().map(|(id, node)| {
            Member::new(id, parse_content(node).collect(), Some(node.source_info))
        })
    }

    /// Members resolved against `map`.
    pub fn members_with<'a>(&'a self, map: &'a IdentityMap) -> impl Iterator<Item = Member> + 'a {
        self.member_nodes().map(move |(id, node)| {
            Member::resolve(id, parse_content(node).collect(), Some(node.source_info), map)
        })
    }

    /// The member with exactly this identifier.
    pub fn member(&self, id: &str) -> Option<Member> {
        self.member_nodes()
            .find(|(name, _)| *name == id)
            .map(|(id, node)| Member::new(id, parse_content(node).collect(), Some(node.source_info)))
    }

    /// Render a position in this file as `path:line:column`.
    pub fn describe(&self, info: &SourceInfo) -> String {
        self.sources.describe(info)
    }

    /// `<member>` elements with their `name`. Unnamed ones are skipped.
    fn member_nodes(&self) -> impl Iterator<Item = (&str, &XmlElement)> + '_ {
        self.document
            .root
            .get_children("members")
            .flat_map(|members| members.get_children("member"))
            .filter_map(|node| match node.get_attribute("name") {
                Some(name) => Some((name, node)),
                None => {
                    tracing::debug!(
                        location = %self.sources.describe(&node.source_info),
                        "Skipping member without a name"
                    );
                    None
                }
            })
    }
}

/// Resolve where the documentation for a binary lives.
///
/// An explicit path wins; otherwise the binary's own path with its
/// extension replaced by `extension`. The file must exist.
pub fn locate_documentation(
    explicit: Option<&Path>,
    binary_location: &Path,
    extension: &str,
) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => binary_location.with_extension(extension),
    };
    if path.is_file() {
        Ok(path)
    } else {
        Err(Error::NotFound { path })
    }
}

/// Reads documentation files according to a [`ReaderConfig`].
#[derive(Debug, Clone, Default)]
pub struct Reader {
    config: ReaderConfig,
}

impl Reader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.reader.clone())
    }

    /// Read every member of the file at `path`.
    pub fn read(&self, path: &Path) -> Result<Vec<Member>> {
        let file = DocumentationFile::open(path)?;
        let members: Vec<Member> = file.members().collect();
        tracing::debug!(path = %path.display(), members = members.len(), "Read documentation");
        Ok(members)
    }

    /// Read the documentation of `source` and resolve every member against
    /// its metadata.
    ///
    /// The file is `explicit` when given, otherwise it is looked up next to
    /// the binary.
    pub fn read_with_metadata(
        &self,
        source: &dyn ReflectionSource,
        explicit: Option<&Path>,
    ) -> Result<Vec<Member>> {
        let path = locate_documentation(explicit, source.location(), &self.config.extension)?;
        let file = DocumentationFile::open(&path)?;
        let map = IdentityMap::build(source);

        let members: Vec<Member> = file.members_with(&map).collect();
        tracing::debug!(
            path = %path.display(),
            members = members.len(),
            resolved = members.iter().filter(|m| m.handle().is_some()).count(),
            "Read documentation with reflection metadata"
        );
        Ok(members)
    }
}

/// Read every member of the documentation file at `path`.
pub fn read(path: &Path) -> Result<Vec<Member>> {
    Reader::default().read(path)
}

/// Read and resolve the documentation of a binary. See
/// [`Reader::read_with_metadata`].
pub fn read_with_metadata(
    source: &dyn ReflectionSource,
    explicit: Option<&Path>,
) -> Result<Vec<Member>> {
    Reader::default().read_with_metadata(source, explicit)
}
