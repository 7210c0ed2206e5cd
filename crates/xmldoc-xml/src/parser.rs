//! XML parser that builds source-tracked [`XmlDocument`] trees.

use crate::{Error, Result, XmlAttribute, XmlDocument, XmlElement, XmlNode, XmlText};
use quick_xml::Reader;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use xmldoc_source_map::{FileId, FileInformation, SourceInfo};

/// Parse XML from a string.
///
/// # Example
///
/// ```rust
/// use xmldoc_xml::parse;
///
/// let xml = parse("<doc><members/></doc>").unwrap();
/// assert_eq!(xml.root.name, "doc");
/// ```
///
/// # Errors
///
/// Returns an error if the XML is malformed.
pub fn parse(content: &str) -> Result<XmlDocument> {
    parse_with_file_id(content, FileId(0))
}

/// Parse XML from a string with an associated file ID.
///
/// The file ID ends up in every [`SourceInfo`] of the tree so that locations
/// can later be resolved against a `SourceContext`.
pub fn parse_with_file_id(content: &str, file_id: FileId) -> Result<XmlDocument> {
    XmlParser::new(content, file_id).parse()
}

/// Internal parser state.
struct XmlParser<'a> {
    source: &'a str,
    reader: Reader<&'a [u8]>,
    file_id: FileId,
    file_info: FileInformation,
    /// Stack of elements being built.
    stack: Vec<BuildNode>,
}

/// An element whose end tag has not been seen yet.
struct BuildNode {
    name: String,
    prefix: Option<String>,
    attributes: Vec<XmlAttribute>,
    /// Byte offset of the `<` that opened this element.
    start_offset: usize,
    children: Vec<XmlNode>,
    /// Byte range of a trailing text run, so CDATA can be merged into it.
    open_text: Option<(usize, usize)>,
}

impl<'a> XmlParser<'a> {
    fn new(source: &'a str, file_id: FileId) -> Self {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;

        Self {
            source,
            reader,
            file_id,
            file_info: FileInformation::new(source),
            stack: Vec::new(),
        }
    }

    fn parse(&mut self) -> Result<XmlDocument> {
        let mut root: Option<XmlElement> = None;

        loop {
            let event_start = self.reader.buffer_position() as usize;

            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    self.handle_start(&e, event_start)?;
                }
                Ok(Event::End(e)) => {
                    let element = self.handle_end(&e)?;
                    self.attach(element, &mut root)?;
                }
                Ok(Event::Empty(e)) => {
                    let element = self.handle_empty(&e, event_start)?;
                    self.attach(element, &mut root)?;
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape().map_err(|err| Error::Syntax {
                        message: format!("Invalid text content: {}", err),
                        location: Some(self.make_source_info(event_start, event_start)),
                    })?;
                    self.push_text(&text, event_start);
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    self.push_text(&text, event_start);
                }
                Ok(Event::Comment(_) | Event::PI(_) | Event::Decl(_) | Event::DocType(_)) => {
                    // Comments, processing instructions and the prolog carry no content,
                    // but they do break up a text run.
                    if let Some(node) = self.stack.last_mut() {
                        node.open_text = None;
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    let position = self.reader.error_position() as usize;
                    return Err(Error::Syntax {
                        message: e.to_string(),
                        location: Some(self.make_source_info(position, position)),
                    });
                }
            }
        }

        if let Some(node) = self.stack.last() {
            return Err(Error::UnclosedElement {
                name: node.name.clone(),
                location: Some(self.make_source_info(node.start_offset, node.start_offset)),
            });
        }

        let root = root.ok_or(Error::NoRootElement)?;
        let source_info = self.make_source_info(0, self.source.len());
        Ok(XmlDocument::new(root, source_info))
    }

    /// Hand a finished element to its parent, or make it the document root.
    fn attach(&mut self, element: XmlElement, root: &mut Option<XmlElement>) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => {
                parent.children.push(XmlNode::Element(element));
                parent.open_text = None;
                Ok(())
            }
            None if root.is_some() => Err(Error::MultipleRoots {
                location: Some(element.source_info),
            }),
            None => {
                *root = Some(element);
                Ok(())
            }
        }
    }

    fn handle_start(&mut self, e: &BytesStart<'_>, event_start: usize) -> Result<()> {
        let (name, prefix) = split_name(e.name().as_ref());
        let attributes = self.parse_attributes(e, event_start)?;

        self.stack.push(BuildNode {
            name,
            prefix,
            attributes,
            start_offset: event_start,
            children: Vec::new(),
            open_text: None,
        });

        Ok(())
    }

    fn handle_end(&mut self, e: &BytesEnd<'_>) -> Result<XmlElement> {
        let (end_name, _) = split_name(e.name().as_ref());

        let node = self.stack.pop().ok_or_else(|| Error::UnexpectedEndTag {
            name: end_name.clone(),
        })?;

        if node.name != end_name {
            return Err(Error::MismatchedEndTag {
                expected: node.name,
                found: end_name,
                location: Some(self.make_source_info(node.start_offset, node.start_offset)),
            });
        }

        let end_offset = self.reader.buffer_position() as usize;

        Ok(XmlElement {
            name: node.name,
            prefix: node.prefix,
            attributes: node.attributes,
            children: node.children,
            source_info: self.make_source_info(node.start_offset, end_offset),
        })
    }

    fn handle_empty(&mut self, e: &BytesStart<'_>, event_start: usize) -> Result<XmlElement> {
        let (name, prefix) = split_name(e.name().as_ref());
        let attributes = self.parse_attributes(e, event_start)?;
        let end_offset = self.reader.buffer_position() as usize;

        Ok(XmlElement {
            name,
            prefix,
            attributes,
            children: Vec::new(),
            source_info: self.make_source_info(event_start, end_offset),
        })
    }

    fn push_text(&mut self, text: &str, event_start: usize) {
        let end_offset = self.reader.buffer_position() as usize;

        let Some(node) = self.stack.last() else {
            // Text outside the root element is insignificant.
            return;
        };

        let start_offset = match node.open_text {
            Some((start, _)) => start,
            None => event_start,
        };
        let source_info = self.make_source_info(start_offset, end_offset);

        let Some(node) = self.stack.last_mut() else {
            return;
        };
        match (node.open_text, node.children.last_mut()) {
            (Some(_), Some(XmlNode::Text(previous))) => {
                previous.content.push_str(text);
                previous.source_info = source_info;
            }
            _ => node
                .children
                .push(XmlNode::Text(XmlText::new(text, source_info))),
        }
        node.open_text = Some((start_offset, end_offset));
    }

    fn parse_attributes(&self, e: &BytesStart<'_>, tag_start: usize) -> Result<Vec<XmlAttribute>> {
        let mut attributes = Vec::new();

        // `e` holds the tag without its `<`, so offsets inside it are shifted by one.
        let content_start = tag_start + 1;
        let tag_str = String::from_utf8_lossy(e.as_ref()).into_owned();
        let mut search_from = e.name().as_ref().len();

        for attr_result in e.attributes() {
            let attr = attr_result?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let (name, prefix) = split_name(key.as_bytes());

            let value = attr.unescape_value().map_err(|err| Error::Syntax {
                message: format!("Invalid attribute value: {}", err),
                location: Some(self.make_source_info(tag_start, tag_start)),
            })?;

            let source_info = match attribute_span(&tag_str, search_from, &key) {
                Some((start, end)) => {
                    search_from = end;
                    self.make_source_info(content_start + start, content_start + end)
                }
                None => self.make_source_info(tag_start, content_start),
            };

            attributes.push(XmlAttribute {
                name,
                prefix,
                value: value.into_owned(),
                source_info,
            });
        }

        Ok(attributes)
    }

    fn make_source_info(&self, start: usize, end: usize) -> SourceInfo {
        let start = self.file_info.offset_to_location(start).unwrap_or_default();
        let end = self.file_info.offset_to_location(end).unwrap_or(start);
        SourceInfo::from_locations(self.file_id, start, end)
    }
}

/// Split a qualified name into its local name and optional prefix.
fn split_name(raw: &[u8]) -> (String, Option<String>) {
    let full_name = String::from_utf8_lossy(raw);
    match full_name.split_once(':') {
        Some((prefix, local)) => (local.to_string(), Some(prefix.to_string())),
        None => (full_name.into_owned(), None),
    }
}

/// Byte span of `name="value"` inside a tag body, searching from `from`.
///
/// The span runs from the first byte of the name to just past the closing
/// quote of the value.
fn attribute_span(tag: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let area = tag.get(from..)?;
    let mut rel = 0;

    // The name must be preceded by whitespace, otherwise `id` would match inside `cid`.
    let name_start = loop {
        let found = rel + area[rel..].find(name)?;
        let preceded_by_space = area[..found]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
        if preceded_by_space {
            break from + found;
        }
        rel = found + name.len();
    };

    let after_name = &tag[name_start + name.len()..];
    let eq = after_name.find('=')?;
    let after_eq = &after_name[eq + 1..];
    let quote_rel = after_eq.find(['"', '\''])?;
    let quote = after_eq[quote_rel..].chars().next()?;
    let close_rel = after_eq[quote_rel + 1..].find(quote)?;

    let value_end = name_start + name.len() + eq + 1 + quote_rel + 1 + close_rel + 1;
    Some((name_start, value_end))
}
