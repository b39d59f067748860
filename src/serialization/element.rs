//! Persisted project-file element

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::collections::BTreeMap;
use std::fmt;
use std::io;
use thiserror::Error;

/// Tag of a persisted node element
pub const XML_NODE_ELEMENT: &str = "node";
/// Attribute carrying the display name
pub const XML_NAME_ATTRIBUTE: &str = "name";
/// Attribute carrying the free-text comment
pub const XML_COMMENT_ATTRIBUTE: &str = "comment";
/// Attribute carrying the type identifier
pub const XML_TYPE_ATTRIBUTE: &str = "type";

/// Errors raised by the element XML layer
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed XML attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("element is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("document ended inside an element")]
    UnexpectedEof,

    #[error("document contains no element")]
    Empty,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A named container with attributes and nested child elements
///
/// This is the structured form the host's generic serializer hands to and
/// receives from converters; the outer project container stays on the host
/// side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// A fresh `<node>` element
    pub fn node() -> Self {
        Element::new(XML_NODE_ELEMENT)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Parses the first (root) element of an XML fragment
    pub fn from_xml(input: &str) -> Result<Self, ProjectError> {
        let mut reader = Reader::from_str(input);
        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    stack.push(Self::from_start(&start)?);
                }
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or(ProjectError::UnexpectedEof)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Eof => {
                    return Err(if stack.is_empty() {
                        ProjectError::Empty
                    } else {
                        ProjectError::UnexpectedEof
                    });
                }
                _ => {}
            }
        }
    }

    /// Serializes this element and its subtree to XML
    pub fn to_xml(&self) -> Result<String, ProjectError> {
        let mut writer = Writer::new(Vec::new());
        self.write_into(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(|err| ProjectError::Utf8(err.utf8_error()))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, ProjectError> {
        let tag = std::str::from_utf8(start.name().as_ref())?.to_string();
        let mut element = Element::new(tag);
        for attribute in start.attributes() {
            let attribute = attribute?;
            let key = std::str::from_utf8(attribute.key.as_ref())?.to_string();
            let value = attribute.unescape_value()?.into_owned();
            element.attributes.insert(key, value);
        }
        Ok(element)
    }

    fn write_into<W: io::Write>(&self, writer: &mut Writer<W>) -> Result<(), ProjectError> {
        let mut start = BytesStart::new(self.tag.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            for child in &self.children {
                child.write_into(writer)?;
            }
            writer.write_event(Event::End(BytesEnd::new(self.tag.as_str())))?;
        }
        Ok(())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let xml = self.to_xml().map_err(|_| fmt::Error)?;
        f.write_str(&xml)
    }
}
