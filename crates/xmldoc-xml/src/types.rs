//! Core types for source-tracked XML trees.

use xmldoc_source_map::SourceInfo;

/// An XML document with source location tracking.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    /// The root element of the document.
    pub root: XmlElement,

    /// Source location of the entire document.
    pub source_info: SourceInfo,
}

/// An XML element with source location tracking.
///
/// Unlike a data-oriented XML tree, text is never dropped here: documentation
/// markup is mixed content, and the whitespace between inline elements is
/// part of the prose.
#[derive(Debug, Clone)]
pub struct XmlElement {
    /// The local name of the element (without namespace prefix).
    pub name: String,

    /// Namespace prefix, if any.
    pub prefix: Option<String>,

    /// Attributes of this element, in document order.
    pub attributes: Vec<XmlAttribute>,

    /// Child nodes in document order.
    pub children: Vec<XmlNode>,

    /// Source location of the entire element (start tag through end tag).
    pub source_info: SourceInfo,
}

/// An XML attribute with source location tracking.
#[derive(Debug, Clone)]
pub struct XmlAttribute {
    /// The local name of the attribute (without namespace prefix).
    pub name: String,

    /// Namespace prefix, if any.
    pub prefix: Option<String>,

    /// The attribute value (after unescaping XML entities).
    pub value: String,

    /// Source location of the attribute, from its name to its closing quote.
    pub source_info: SourceInfo,
}

/// A child of an element.
#[derive(Debug, Clone)]
pub enum XmlNode {
    Element(XmlElement),
    Text(XmlText),
}

/// A run of character data. Adjacent text and CDATA sections are merged.
#[derive(Debug, Clone)]
pub struct XmlText {
    /// The text content (after unescaping XML entities).
    pub content: String,
    pub source_info: SourceInfo,
}

impl XmlDocument {
    pub fn new(root: XmlElement, source_info: SourceInfo) -> Self {
        Self { root, source_info }
    }
}

impl XmlElement {
    /// Create an element without children.
    pub fn new(
        name: impl Into<String>,
        attributes: Vec<XmlAttribute>,
        source_info: SourceInfo,
    ) -> Self {
        Self {
            name: name.into(),
            prefix: None,
            attributes,
            children: Vec::new(),
            source_info,
        }
    }

    /// Builder-style helper to set the children of an element.
    pub fn with_children(mut self, children: Vec<XmlNode>) -> Self {
        self.children = children;
        self
    }

    /// Get the value of the first attribute with the given local name.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.get_attribute_full(name).map(|a| a.value.as_str())
    }

    /// Get the first attribute with the given local name, with its source info.
    pub fn get_attribute_full(&self, name: &str) -> Option<&XmlAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|c| match c {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// Get child elements by local name.
    pub fn get_children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |e| e.name == name)
    }

    /// First child element with the given local name.
    pub fn get_child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.name == name)
    }

    /// The concatenated text of every descendant text node, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(text) => out.push_str(&text.content),
                XmlNode::Element(e) => e.collect_text(out),
            }
        }
    }
}

impl XmlAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>, source_info: SourceInfo) -> Self {
        Self {
            name: name.into(),
            prefix: None,
            value: value.into(),
            source_info,
        }
    }
}

impl XmlText {
    pub fn new(content: impl Into<String>, source_info: SourceInfo) -> Self {
        Self {
            content: content.into(),
            source_info,
        }
    }
}

impl XmlNode {
    pub fn source_info(&self) -> &SourceInfo {
        match self {
            XmlNode::Element(e) => &e.source_info,
            XmlNode::Text(t) => &t.source_info,
        }
    }
}
