//! Typed, read-only views over registry elements.
//!
//! Accessors that need a child element or attribute the schema requires
//! return [`Error::MalformedDocument`] when it is absent.

use super::document::Element;
use crate::error::{Error, Result};

/// Text of a required direct child, e.g. the `<name>` of a `<proto>`.
fn child_text<'a>(
    element: &'a Element,
    child: &str,
    owner: impl FnOnce() -> String,
) -> Result<&'a str> {
    match element.find(child) {
        Some(found) if !found.text.is_empty() => Ok(found.text.as_str()),
        Some(_) => Err(Error::malformed(owner(), format!("text in <{}>", child))),
        None => Err(Error::malformed(owner(), format!("<{}>", child))),
    }
}

/// A required attribute.
fn required_attr<'a>(
    element: &'a Element,
    attr: &str,
    owner: impl FnOnce() -> String,
) -> Result<&'a str> {
    element
        .attr(attr)
        .ok_or_else(|| Error::malformed(owner(), format!("attribute `{}`", attr)))
}

/// A `<feature>` element: one API version and the names it requires.
#[derive(Debug, Clone, Copy)]
pub struct Feature<'a> {
    element: &'a Element,
}

impl<'a> Feature<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        Feature { element }
    }

    fn describe(&self) -> String {
        match self.element.attr("name") {
            Some(name) => format!("feature `{}`", name),
            None => "feature".to_string(),
        }
    }

    /// The API family this feature belongs to (e.g. `gl`, `gles2`).
    pub fn api(&self) -> Result<&'a str> {
        required_attr(self.element, "api", || self.describe())
    }

    /// Names of every `<command>` referenced anywhere inside the feature.
    pub fn command_names(&self) -> impl Iterator<Item = Result<&'a str>> + 'a {
        let feature = *self;
        self.element.descendants_named("command").map(move |command| {
            required_attr(command, "name", || {
                format!("command reference in {}", feature.describe())
            })
        })
    }

    /// Names of every `<enum>` referenced anywhere inside the feature.
    pub fn enum_names(&self) -> impl Iterator<Item = Result<&'a str>> + 'a {
        let feature = *self;
        self.element.descendants_named("enum").map(move |e| {
            required_attr(e, "name", || format!("enum reference in {}", feature.describe()))
        })
    }
}

/// A `<command>` definition inside a `<commands>` group.
#[derive(Debug, Clone, Copy)]
pub struct Command<'a> {
    element: &'a Element,
    index: usize,
}

impl<'a> Command<'a> {
    pub(crate) fn new(element: &'a Element, index: usize) -> Self {
        Command { element, index }
    }

    /// The prototype carrying the function name and return type.
    pub fn proto(&self) -> Result<Proto<'a>> {
        self.element
            .find("proto")
            .map(Proto::new)
            .ok_or_else(|| Error::malformed(format!("command #{}", self.index + 1), "<proto>"))
    }

    /// The native function name.
    pub fn name(&self) -> Result<&'a str> {
        self.proto()?.name()
    }

    /// Parameters in declaration order.
    pub fn params(&self) -> impl Iterator<Item = Param<'a>> + 'a {
        let command = self.name().ok();
        self.element
            .descendants_named("param")
            .enumerate()
            .map(move |(index, element)| Param {
                element,
                command,
                index,
            })
    }
}

/// The `<proto>` of a command.
#[derive(Debug, Clone, Copy)]
pub struct Proto<'a> {
    element: &'a Element,
}

impl<'a> Proto<'a> {
    fn new(element: &'a Element) -> Self {
        Proto { element }
    }

    /// The native function name from the `<name>` child.
    pub fn name(&self) -> Result<&'a str> {
        child_text(self.element, "name", || "proto".to_string())
    }

    /// The named return type token, if the prototype has a `<ptype>`.
    pub fn ptype(&self) -> Option<&'a str> {
        self.element.find("ptype").map(|ptype| ptype.text.as_str())
    }

    /// Raw text preceding the first child, e.g. `void ` or `void *`.
    pub fn text(&self) -> &'a str {
        &self.element.text
    }
}

/// A `<param>` of a command.
#[derive(Debug, Clone, Copy)]
pub struct Param<'a> {
    element: &'a Element,
    command: Option<&'a str>,
    index: usize,
}

impl<'a> Param<'a> {
    /// Name of the command this parameter belongs to, when known.
    pub fn command(&self) -> Option<&'a str> {
        self.command
    }

    /// Position in the parameter list, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    fn describe(&self) -> String {
        match self.command {
            Some(command) => format!("param #{} of `{}`", self.index + 1, command),
            None => format!("param #{}", self.index + 1),
        }
    }

    /// The parameter name from the `<name>` child.
    pub fn name(&self) -> Result<&'a str> {
        child_text(self.element, "name", || self.describe())
    }

    /// The raw type descriptor.
    pub fn type_descriptor(&self) -> Result<TypeDescriptor<'a>> {
        if let Some(ptype) = self.element.find("ptype") {
            if ptype.text.is_empty() {
                return Err(Error::malformed(self.describe(), "text in <ptype>"));
            }
            return Ok(TypeDescriptor::Named {
                token: &ptype.text,
                leading: &self.element.text,
                suffix: &ptype.tail,
            });
        }

        if self.element.text.trim().is_empty() {
            return Err(Error::malformed(self.describe(), "a type"));
        }
        Ok(TypeDescriptor::Raw(&self.element.text))
    }
}

/// How a parameter spells its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDescriptor<'a> {
    /// A `<ptype>` token with the text around it.
    Named {
        /// The type token, e.g. `GLfloat`
        token: &'a str,
        /// Text before the token, e.g. `const `
        leading: &'a str,
        /// Qualifiers after the token, e.g. ` *const*`
        suffix: &'a str,
    },

    /// Free-form text with no named token, e.g. `const void *`.
    Raw(&'a str),
}

/// An `<enum>` definition inside an `<enums>` group.
#[derive(Debug, Clone, Copy)]
pub struct EnumDef<'a> {
    element: &'a Element,
}

impl<'a> EnumDef<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        EnumDef { element }
    }

    /// The constant name, e.g. `GL_TEXTURE_2D`.
    pub fn name(&self) -> Result<&'a str> {
        required_attr(self.element, "name", || "enum".to_string())
    }

    /// The literal value, passed through unmodified.
    pub fn value(&self) -> Result<&'a str> {
        required_attr(self.element, "value", || match self.element.attr("name") {
            Some(name) => format!("enum `{}`", name),
            None => "enum".to_string(),
        })
    }
}
