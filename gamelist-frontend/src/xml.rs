//! Minimal element tree over quick-xml events.
//!
//! Gamelist files are small and frequently contain more than one top-level
//! element, so they are read whole into this tree rather than streamed.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::FrontendError;

/// One XML element with its attributes, text content and child elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Direct children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First descendant with the given name, depth-first in document order.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// Every descendant element, depth-first in document order.
    pub fn descendants(&self) -> Vec<&XmlElement> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }

    /// Text content with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Parse a complete XML document into an element tree and return its root.
pub fn parse_document(text: &str) -> Result<XmlElement, FrontendError> {
    let mut xml = Reader::from_str(text);
    xml.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match xml.read_event()? {
            Event::Start(ref e) => stack.push(element_from_start(e)?),
            Event::Empty(ref e) => {
                let element = element_from_start(e)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => set_root(&mut root, element)?,
                }
            }
            Event::Text(ref e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current
                        .text
                        .push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                let finished = stack
                    .pop()
                    .ok_or_else(|| FrontendError::malformed("unexpected closing tag"))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(finished),
                    None => set_root(&mut root, finished)?,
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(FrontendError::malformed(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| FrontendError::malformed("document has no root element"))
}

/// Parse a fragment that may hold several top-level elements by wrapping it
/// in a synthetic `<root>` element.
pub fn parse_fragment(body: &str) -> Result<XmlElement, FrontendError> {
    parse_document(&format!("<root>{body}</root>"))
}

fn element_from_start(e: &BytesStart<'_>) -> Result<XmlElement, FrontendError> {
    let mut element = XmlElement::new(String::from_utf8_lossy(e.name().as_ref()));
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value()?.to_string();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn set_root(root: &mut Option<XmlElement>, element: XmlElement) -> Result<(), FrontendError> {
    if root.is_some() {
        return Err(FrontendError::malformed(format!(
            "second top-level element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}
