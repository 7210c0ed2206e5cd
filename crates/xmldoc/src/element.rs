//! The documentation element tree.

use xmldoc_source_map::SourceInfo;

/// A node of a parsed documentation block.
///
/// The children are fixed when the element is built; there is no way to
/// mutate them afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    children: Vec<Element>,
    source_info: Option<SourceInfo>,
}

/// What an [`Element`] represents, with its tag-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Summary,
    Remarks,
    Example,
    Para,
    Param { name: String },
    ParamRef { name: String },
    TypeParam { name: String },
    TypeParamRef { name: String },
    /// `<code>`: a block of code, normalized in code mode.
    Code { content: String },
    /// `<c>`: inline code, normalized in plain-text mode.
    InlineCode { content: String },
    See {
        cref: Option<String>,
        langword: Option<String>,
        inner_text: String,
    },
    SeeAlso {
        cref: Option<String>,
        inner_text: String,
    },
    List { kind: ListKind },
    ListHeader,
    Term,
    Description,
    Item,
    Exception { cref: Option<String> },
    Value,
    Returns,
    Text { content: String },
    /// A tag the model does not know. The raw tag name is preserved.
    Unknown { name: String },
}

/// The `type` attribute of a `<list>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListKind {
    Bullet,
    Number,
    Table,
    /// No `type` attribute.
    #[default]
    Unspecified,
    Other(String),
}

impl ListKind {
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            None => ListKind::Unspecified,
            Some("bullet") => ListKind::Bullet,
            Some("number") => ListKind::Number,
            Some("table") => ListKind::Table,
            Some(other) => ListKind::Other(other.to_string()),
        }
    }
}

impl ElementKind {
    /// The XML tag this kind is read from.
    pub fn tag_name(&self) -> &str {
        match self {
            ElementKind::Summary => "summary",
            ElementKind::Remarks => "remarks",
            ElementKind::Example => "example",
            ElementKind::Para => "para",
            ElementKind::Param { .. } => "param",
            ElementKind::ParamRef { .. } => "paramref",
            ElementKind::TypeParam { .. } => "typeparam",
            ElementKind::TypeParamRef { .. } => "typeparamref",
            ElementKind::Code { .. } => "code",
            ElementKind::InlineCode { .. } => "c",
            ElementKind::See { .. } => "see",
            ElementKind::SeeAlso { .. } => "seealso",
            ElementKind::List { .. } => "list",
            ElementKind::ListHeader => "listheader",
            ElementKind::Term => "term",
            ElementKind::Description => "description",
            ElementKind::Item => "item",
            ElementKind::Exception { .. } => "exception",
            ElementKind::Value => "value",
            ElementKind::Returns => "returns",
            ElementKind::Text { .. } => "#text",
            ElementKind::Unknown { name } => name,
        }
    }
}

impl Element {
    pub fn new(kind: ElementKind, children: Vec<Element>, source_info: Option<SourceInfo>) -> Self {
        Self {
            kind,
            children,
            source_info,
        }
    }

    /// A text leaf without source information.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(
            ElementKind::Text {
                content: content.into(),
            },
            Vec::new(),
            None,
        )
    }

    /// A container element without source information.
    pub fn container(kind: ElementKind, children: Vec<Element>) -> Self {
        Self::new(kind, children, None)
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Where the element was read from, if it came from a file.
    pub fn source_info(&self) -> Option<&SourceInfo> {
        self.source_info.as_ref()
    }

    pub fn tag_name(&self) -> &str {
        self.kind.tag_name()
    }

    /// The text of this element and its subtree, in document order.
    ///
    /// Leaves contribute their content (`Text`, `Code`, `InlineCode`);
    /// everything else contributes its children.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            ElementKind::Text { content }
            | ElementKind::Code { content }
            | ElementKind::InlineCode { content } => out.push_str(content),
            _ => {
                for child in &self.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Direct children with the given tag name.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.tag_name() == tag)
    }
}
