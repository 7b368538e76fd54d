//! The API registry model.
//!
//! Wraps the parsed registry document and exposes document-order traversal
//! over `<feature>` elements, the `<command>` elements of every `<commands>`
//! group, and the `<enum>` elements of every `<enums>` group.

pub mod document;
pub mod model;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

pub use document::{Document, Element};
pub use model::{Command, EnumDef, Feature, Param, Proto, TypeDescriptor};

use crate::error::{Error, Result};

/// A parsed API registry such as the Khronos `gl.xml`.
#[derive(Debug, Clone)]
pub struct Registry {
    document: Document,
}

impl Registry {
    /// Parse a registry from a reader.
    pub fn parse<R: Read>(reader: R) -> Result<Self> {
        let document = Document::parse(reader)?;
        tracing::debug!("parsed registry with root <{}>", document.root().name);
        Ok(Registry { document })
    }

    /// Read and parse a registry file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// All `<feature>` elements in document order.
    pub fn features(&self) -> impl Iterator<Item = Feature<'_>> {
        self.document
            .root()
            .descendants_named("feature")
            .map(Feature::new)
    }

    /// All `<command>` definitions of all `<commands>` groups, in document order.
    pub fn commands(&self) -> impl Iterator<Item = Command<'_>> {
        self.document
            .root()
            .descendants_named("commands")
            .flat_map(|group| group.children_named("command"))
            .enumerate()
            .map(|(index, element)| Command::new(element, index))
    }

    /// All `<enum>` definitions of all `<enums>` groups, in document order.
    pub fn enums(&self) -> impl Iterator<Item = EnumDef<'_>> {
        self.document
            .root()
            .descendants_named("enums")
            .flat_map(|group| group.descendants_named("enum"))
            .map(EnumDef::new)
    }
}

impl FromStr for Registry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RegistryFixture, SAMPLE_REGISTRY};

    #[test]
    fn test_features_in_order() {
        let registry: Registry = SAMPLE_REGISTRY.parse().unwrap();
        let apis: Vec<_> = registry.features().map(|f| f.api().unwrap()).collect();
        assert_eq!(apis, vec!["gl", "gl", "gles2"]);
    }

    #[test]
    fn test_commands_in_order() {
        let registry: Registry = SAMPLE_REGISTRY.parse().unwrap();
        let names: Vec<_> = registry.commands().map(|c| c.name().unwrap()).collect();
        assert_eq!(
            names,
            vec!["glClear", "glGetString", "glMapBuffer", "glVertexAttribPointer", "glShaderSource", "glGenTextures", "glReleaseShaderCompiler"]
        );
    }

    #[test]
    fn test_enums_skip_feature_references() {
        let registry: Registry = SAMPLE_REGISTRY.parse().unwrap();
        let names: Vec<_> = registry.enums().map(|e| e.name().unwrap()).collect();
        assert_eq!(
            names,
            vec!["GL_COLOR_BUFFER_BIT", "GL_2D", "GL_TEXTURE_2D", "GL_FIXED"]
        );
    }

    #[test]
    fn test_params_keep_order() {
        let registry: Registry = SAMPLE_REGISTRY.parse().unwrap();
        let command = registry
            .commands()
            .find(|c| c.name().unwrap() == "glVertexAttribPointer")
            .unwrap();

        let params: Vec<_> = command.params().map(|p| p.name().unwrap()).collect();
        assert_eq!(
            params,
            vec!["index", "size", "type", "normalized", "stride", "pointer"]
        );
        assert!(command.params().all(|p| p.command() == Some("glVertexAttribPointer")));
    }

    #[test]
    fn test_type_descriptor() {
        let registry = RegistryFixture::new()
            .command("<proto>void <name>glUniform1fv</name></proto><param><ptype>GLint</ptype> <name>location</name></param><param>const <ptype>GLfloat</ptype> *<name>value</name></param><param>const void *<name>data</name></param>")
            .build();

        let command = registry.commands().next().unwrap();
        let descriptors: Vec<_> = command
            .params()
            .map(|p| p.type_descriptor().unwrap())
            .collect();

        assert_eq!(
            descriptors,
            vec![
                TypeDescriptor::Named {
                    token: "GLint",
                    leading: "",
                    suffix: " "
                },
                TypeDescriptor::Named {
                    token: "GLfloat",
                    leading: "const ",
                    suffix: " *"
                },
                TypeDescriptor::Raw("const void *"),
            ]
        );
    }

    #[test]
    fn test_command_without_proto_is_malformed() {
        let registry = RegistryFixture::new()
            .command("<proto>void <name>glOk</name></proto>")
            .command("<param><ptype>GLint</ptype> <name>x</name></param>")
            .build();

        let err = registry.commands().nth(1).unwrap().name().unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedDocument { ref element, ref missing }
                if element == "command #2" && missing == "<proto>"
        ));
    }

    #[test]
    fn test_proto_without_name_is_malformed() {
        let registry = RegistryFixture::new()
            .command("<proto>void </proto>")
            .build();

        let err = registry.commands().next().unwrap().name().unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedDocument { ref element, ref missing }
                if element == "proto" && missing == "<name>"
        ));
    }

    #[test]
    fn test_param_without_type_is_malformed() {
        let registry = RegistryFixture::new()
            .command("<proto>void <name>glFoo</name></proto><param><name>x</name></param>")
            .build();

        let param = registry.commands().next().unwrap().params().next().unwrap();
        let err = param.type_descriptor().unwrap_err();
        assert_eq!(err.to_string(), "malformed registry: param #1 of `glFoo` is missing a type");
    }

    #[test]
    fn test_feature_without_api_is_malformed() {
        let registry: Registry = r#"<registry><feature name="GL_VERSION_1_0"/></registry>"#
            .parse()
            .unwrap();

        let err = registry.features().next().unwrap().api().unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed registry: feature `GL_VERSION_1_0` is missing attribute `api`"
        );
    }

    #[test]
    fn test_enum_without_value_is_malformed() {
        let registry = RegistryFixture::new()
            .raw_enum(r#"<enum name="GL_FOO"/>"#)
            .build();

        let err = registry.enums().next().unwrap().value().unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed registry: enum `GL_FOO` is missing attribute `value`"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = Registry::load(Path::new("/nonexistent/gl.xml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
