//! Plain-text rendering of documentation elements.

use crate::element::Element;
use crate::member::Member;
use crate::visitor::{Visitor, walk_element};
use serde::{Deserialize, Serialize};

/// Line break sequence written by [`PlainTextVisitor::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    /// `\r\n` on Windows, `\n` elsewhere.
    Native,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native => "\n",
        }
    }
}

/// Renders elements to plain text.
///
/// Text, inline code and parameter references are copied as-is, code blocks
/// sit on their own lines, and paragraphs are separated by exactly one line
/// break. Cross-references render as the referenced identifier without its
/// kind prefix.
///
/// The buffer always uses `\n`; the configured [`LineEnding`] is applied
/// when the text is taken out.
///
/// ```rust
/// use xmldoc::element::{Element, ElementKind};
/// use xmldoc::plain_text::PlainTextVisitor;
///
/// let summary = Element::container(ElementKind::Summary, vec![Element::text("Hello world.")]);
/// let mut visitor = PlainTextVisitor::new();
/// summary.accept(&mut visitor);
/// assert_eq!(visitor.text(), "Hello world.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlainTextVisitor {
    buffer: String,
    line_ending: LineEnding,
}

impl PlainTextVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_ending(line_ending: LineEnding) -> Self {
        Self {
            buffer: String::new(),
            line_ending,
        }
    }

    /// The text rendered so far.
    pub fn text(&self) -> String {
        match self.line_ending.as_str() {
            "\n" => self.buffer.clone(),
            eol => self.buffer.replace('\n', eol),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    fn at_line_start(&self) -> bool {
        self.buffer.is_empty() || self.buffer.ends_with('\n')
    }
}

impl Visitor for PlainTextVisitor {
    fn visit_text(&mut self, _element: &Element, content: &str) {
        self.buffer.push_str(content);
    }

    fn visit_inline_code(&mut self, _element: &Element, content: &str) {
        self.buffer.push_str(content);
    }

    fn visit_param_ref(&mut self, _element: &Element, name: &str) {
        self.buffer.push_str(name);
    }

    fn visit_type_param_ref(&mut self, _element: &Element, name: &str) {
        self.buffer.push_str(name);
    }

    fn visit_see(&mut self, _element: &Element, cref: Option<&str>, langword: Option<&str>) {
        match (cref, langword) {
            (Some(cref), _) if !cref.is_empty() => self.buffer.push_str(strip_kind_prefix(cref)),
            (_, Some(langword)) => self.buffer.push_str(langword),
            _ => {}
        }
    }

    fn visit_code(&mut self, _element: &Element, content: &str) {
        self.buffer.push('\n');
        self.buffer.push_str(content);
        self.buffer.push('\n');
    }

    fn visit_para(&mut self, element: &Element) {
        if !self.at_line_start() {
            self.buffer.push('\n');
        }
        walk_element(self, element);
        self.buffer.push('\n');
    }
}

/// `T:My.Foo` becomes `My.Foo`. Anything without a one-letter prefix is
/// returned unchanged.
fn strip_kind_prefix(cref: &str) -> &str {
    match cref.as_bytes() {
        [_, b':', ..] => &cref[2..],
        _ => cref,
    }
}

/// Render a sequence of elements with `\n` line breaks.
pub fn render(elements: &[Element]) -> String {
    let mut visitor = PlainTextVisitor::new();
    for element in elements {
        element.accept(&mut visitor);
    }
    visitor.text()
}

/// Render every element of a member's documentation block.
pub fn render_member(member: &Member, line_ending: LineEnding) -> String {
    let mut visitor = PlainTextVisitor::with_line_ending(line_ending);
    member.accept(&mut visitor);
    visitor.text()
}
