//! Content parser: XML nodes to documentation [`Element`]s.

use crate::element::{Element, ElementKind, ListKind};
use crate::normalize::{TextMode, normalize};
use xmldoc_xml::{XmlElement, XmlNode};

/// Lazily parse the children of `element`.
///
/// Each call to `next` builds one element (with its whole subtree); siblings
/// that are never pulled are never parsed. Nothing is cached, so parsing the
/// same node twice does the work twice.
///
/// ```rust
/// use xmldoc::content::parse_content;
///
/// let xml = xmldoc_xml::parse("<member><summary>Hi.</summary><remarks/></member>").unwrap();
/// let first = parse_content(&xml.root).next().unwrap();
/// assert_eq!(first.tag_name(), "summary");
/// assert_eq!(first.text_content(), "Hi.");
/// ```
pub fn parse_content(element: &XmlElement) -> Content<'_> {
    Content {
        nodes: element.children.iter(),
    }
}

/// Iterator returned by [`parse_content`].
#[derive(Debug, Clone)]
pub struct Content<'a> {
    nodes: std::slice::Iter<'a, XmlNode>,
}

impl Iterator for Content<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        self.nodes.next().map(parse_node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl ExactSizeIterator for Content<'_> {}

/// Parse a single XML node.
pub fn parse_node(node: &XmlNode) -> Element {
    match node {
        XmlNode::Element(element) => parse_element(element),
        XmlNode::Text(text) => Element::new(
            ElementKind::Text {
                content: normalize(&text.content, TextMode::PlainText),
            },
            Vec::new(),
            Some(text.source_info),
        ),
    }
}

/// Parse an XML element, dispatching on its local name.
pub fn parse_element(element: &XmlElement) -> Element {
    let name = || attribute(element, "name").unwrap_or_default();
    let cref = || attribute(element, "cref");

    let (kind, children) = match element.name.as_str() {
        "summary" => (ElementKind::Summary, children(element)),
        "remarks" => (ElementKind::Remarks, children(element)),
        "example" => (ElementKind::Example, children(element)),
        "para" => (ElementKind::Para, children(element)),
        "param" => (ElementKind::Param { name: name() }, children(element)),
        "paramref" => (ElementKind::ParamRef { name: name() }, children(element)),
        "typeparam" => (ElementKind::TypeParam { name: name() }, children(element)),
        "typeparamref" => (ElementKind::TypeParamRef { name: name() }, children(element)),
        "code" => (
            ElementKind::Code {
                content: normalize(&element.text_content(), TextMode::Code),
            },
            Vec::new(),
        ),
        "c" => (
            ElementKind::InlineCode {
                content: normalize(&element.text_content(), TextMode::PlainText),
            },
            Vec::new(),
        ),
        "see" => (
            ElementKind::See {
                cref: cref(),
                langword: attribute(element, "langword"),
                inner_text: inner_text(element),
            },
            children(element),
        ),
        "seealso" => (
            ElementKind::SeeAlso {
                cref: cref(),
                inner_text: inner_text(element),
            },
            children(element),
        ),
        "list" => (
            ElementKind::List {
                kind: ListKind::from_attribute(element.get_attribute("type")),
            },
            children(element),
        ),
        "listheader" => (ElementKind::ListHeader, children(element)),
        "term" => (ElementKind::Term, children(element)),
        "description" => (ElementKind::Description, children(element)),
        "item" => (ElementKind::Item, children(element)),
        "exception" => (ElementKind::Exception { cref: cref() }, children(element)),
        "value" => (ElementKind::Value, children(element)),
        "returns" => (ElementKind::Returns, children(element)),
        other => (
            ElementKind::Unknown {
                name: other.to_string(),
            },
            children(element),
        ),
    };

    Element::new(kind, children, Some(element.source_info))
}

fn children(element: &XmlElement) -> Vec<Element> {
    parse_content(element).collect()
}

/// First attribute with the given name, if any.
fn attribute(element: &XmlElement, name: &str) -> Option<String> {
    element.get_attribute(name).map(str::to_string)
}

fn inner_text(element: &XmlElement) -> String {
    normalize(&element.text_content(), TextMode::PlainText)
}
