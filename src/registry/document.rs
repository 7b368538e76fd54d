//! In-memory element tree for the registry XML.
//!
//! The registry mixes text and markup inside a single element
//! (`<param>const <ptype>GLfloat</ptype> *<name>v</name></param>`), so each
//! element keeps the text before its first child (`text`) and the text that
//! follows its own closing tag (`tail`).

use std::io::Read;

use xml::reader::{EventReader, XmlEvent};
use xml::ParserConfig;

use crate::error::{Error, Result};

/// A parsed XML element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Local tag name
    pub name: String,

    /// Attributes in document order
    pub attributes: Vec<(String, String)>,

    /// Text between the start tag and the first child
    pub text: String,

    /// Text between the end tag and the next sibling
    pub tail: String,

    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First direct child with the given tag name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Direct children with the given tag name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// This element and all of its descendants with the given tag name,
    /// in document (pre-)order.
    pub fn descendants_named<'a>(&'a self, name: &'a str) -> Descendants<'a> {
        Descendants {
            stack: vec![self],
            name,
        }
    }
}

/// Pre-order iterator returned by [`Element::descendants_named`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
    name: &'a str,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(element) = self.stack.pop() {
            self.stack.extend(element.children.iter().rev());
            if element.name == self.name {
                return Some(element);
            }
        }
        None
    }
}

/// A parsed XML document.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse a complete document from a reader.
    pub fn parse<R: Read>(reader: R) -> Result<Self> {
        let config = ParserConfig::new()
            .whitespace_to_characters(true)
            .cdata_to_characters(true)
            .ignore_comments(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root = None;

        for event in EventReader::new_with_config(reader, config) {
            match event? {
                XmlEvent::StartElement {
                    name, attributes, ..
                } => {
                    let mut element = Element::new(name.local_name);
                    element.attributes = attributes
                        .into_iter()
                        .map(|attr| (attr.name.local_name, attr.value))
                        .collect();
                    stack.push(element);
                }
                XmlEvent::EndElement { .. } => {
                    // The reader rejects unbalanced tags before we get here.
                    let Some(element) = stack.pop() else {
                        continue;
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => root = Some(element),
                    }
                }
                XmlEvent::Characters(text)
                | XmlEvent::Whitespace(text)
                | XmlEvent::CData(text) => {
                    if let Some(current) = stack.last_mut() {
                        match current.children.last_mut() {
                            Some(previous) => previous.tail.push_str(&text),
                            None => current.text.push_str(&text),
                        }
                    }
                }
                _ => {}
            }
        }

        let root = root.ok_or_else(|| Error::malformed("document", "a root element"))?;
        Ok(Document { root })
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }
}
