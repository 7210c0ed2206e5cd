//! Errors for malformed documentation XML.

use std::fmt;
use xmldoc_source_map::SourceInfo;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a document could not be turned into a tree.
#[derive(Debug, Clone)]
pub enum Error {
    /// Rejected by quick-xml: bad syntax, entities or attribute values.
    Syntax {
        message: String,
        location: Option<SourceInfo>,
    },

    /// The input ended while an element was still open.
    UnclosedElement {
        name: String,
        location: Option<SourceInfo>,
    },

    MismatchedEndTag {
        expected: String,
        found: String,
        location: Option<SourceInfo>,
    },

    /// A closing tag with no open element.
    UnexpectedEndTag { name: String },

    NoRootElement,

    MultipleRoots { location: Option<SourceInfo> },
}

impl Error {
    pub fn location(&self) -> Option<&SourceInfo> {
        match self {
            Error::Syntax { location, .. }
            | Error::UnclosedElement { location, .. }
            | Error::MismatchedEndTag { location, .. }
            | Error::MultipleRoots { location } => location.as_ref(),
            Error::UnexpectedEndTag { .. } | Error::NoRootElement => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax { message, .. } => write!(f, "XML syntax error: {}", message)?,
            Error::UnclosedElement { name, .. } => {
                write!(f, "Unexpected end of input: <{}> is never closed", name)?
            }
            Error::MismatchedEndTag {
                expected, found, ..
            } => write!(f, "Expected </{}>, found </{}>", expected, found)?,
            Error::UnexpectedEndTag { name } => {
                write!(f, "Closing tag </{}> has no matching start tag", name)?
            }
            Error::NoRootElement => write!(f, "Document has no root element")?,
            Error::MultipleRoots { .. } => write!(f, "Document has more than one root element")?,
        }

        if let Some(location) = self.location() {
            write!(f, " (at {})", location)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Syntax {
            message: format!("Malformed attribute: {}", err),
            location: None,
        }
    }
}
