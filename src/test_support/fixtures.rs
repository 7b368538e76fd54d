//! Test fixtures for common test scenarios.
//!
//! Provides a small but representative registry and a builder for
//! one-off registries.

use crate::registry::Registry;

/// A trimmed-down `gl.xml` covering every type descriptor shape.
///
/// Features: two `gl` versions (overlapping) and one `gles2` version.
pub const SAMPLE_REGISTRY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<registry>
    <comment>Sample registry for tests</comment>
    <types>
        <type>typedef unsigned int <name>GLenum</name>;</type>
    </types>
    <groups>
        <group name="TextureTarget">
            <enum name="GL_TEXTURE_2D"/>
        </group>
    </groups>
    <enums namespace="GL" group="AttribMask" type="bitmask">
        <enum value="0x00004000" name="GL_COLOR_BUFFER_BIT"/>
        <enum value="0x0600" name="GL_2D"/>
    </enums>
    <enums namespace="GL" start="0x0DE0" end="0x0DFF">
        <enum value="0x0DE1" name="GL_TEXTURE_2D"/>
        <enum value="0x140C" name="GL_FIXED"/>
        <unused start="0x0DE2" end="0x0DFF"/>
    </enums>
    <commands namespace="GL">
        <command>
            <proto>void <name>glClear</name></proto>
            <param group="ClearBufferMask"><ptype>GLbitfield</ptype> <name>mask</name></param>
        </command>
        <command>
            <proto group="String">const <ptype>GLubyte</ptype> *<name>glGetString</name></proto>
            <param group="StringName"><ptype>GLenum</ptype> <name>name</name></param>
        </command>
        <command>
            <proto>void *<name>glMapBuffer</name></proto>
            <param group="BufferTargetARB"><ptype>GLenum</ptype> <name>target</name></param>
            <param group="BufferAccessARB"><ptype>GLenum</ptype> <name>access</name></param>
        </command>
        <command>
            <proto>void <name>glVertexAttribPointer</name></proto>
            <param><ptype>GLuint</ptype> <name>index</name></param>
            <param><ptype>GLint</ptype> <name>size</name></param>
            <param group="VertexAttribPointerType"><ptype>GLenum</ptype> <name>type</name></param>
            <param><ptype>GLboolean</ptype> <name>normalized</name></param>
            <param><ptype>GLsizei</ptype> <name>stride</name></param>
            <param len="COMPSIZE(size,type,stride)">const void *<name>pointer</name></param>
        </command>
        <command>
            <proto>void <name>glShaderSource</name></proto>
            <param class="shader"><ptype>GLuint</ptype> <name>shader</name></param>
            <param><ptype>GLsizei</ptype> <name>count</name></param>
            <param len="count">const <ptype>GLchar</ptype> *const*<name>string</name></param>
            <param len="count">const <ptype>GLint</ptype> *<name>length</name></param>
        </command>
        <command>
            <proto>void <name>glGenTextures</name></proto>
            <param><ptype>GLsizei</ptype> <name>n</name></param>
            <param len="n"><ptype>GLuint</ptype> *<name>textures</name></param>
        </command>
        <command>
            <proto>void <name>glReleaseShaderCompiler</name></proto>
        </command>
    </commands>
    <feature api="gl" name="GL_VERSION_1_0" number="1.0">
        <require>
            <enum name="GL_COLOR_BUFFER_BIT"/>
            <enum name="GL_TEXTURE_2D"/>
            <enum name="GL_2D"/>
            <command name="glClear"/>
            <command name="glGetString"/>
        </require>
    </feature>
    <feature api="gl" name="GL_VERSION_2_0" number="2.0">
        <require>
            <enum name="GL_TEXTURE_2D"/>
            <command name="glClear"/>
            <command name="glVertexAttribPointer"/>
            <command name="glShaderSource"/>
            <command name="glGenTextures"/>
            <command name="glMapBuffer"/>
        </require>
    </feature>
    <feature api="gles2" name="GL_ES_VERSION_2_0" number="2.0">
        <require>
            <enum name="GL_FIXED"/>
            <enum name="GL_TEXTURE_2D"/>
            <command name="glReleaseShaderCompiler"/>
            <command name="glClear"/>
        </require>
    </feature>
</registry>
"#;

/// Expected `gl` output for [`SAMPLE_REGISTRY`].
pub const SAMPLE_GL_OUTPUT: &str = "module gl

public extern function gladLoadGLLoader(loadproc function(name *char) -> *mut byte) -> i32

public extern mut glad_glClear function(mask i32)
public extern mut glad_glGetString function(name i32) -> i8
public extern mut glad_glMapBuffer function(target i32, access i32) -> *mut byte
public extern mut glad_glVertexAttribPointer function(index i32, size i32, type i32, normalized bool, stride i32, pointer_ *mut byte)
public extern mut glad_glShaderSource function(shader i32, count i32, string **char, length *i32)
public extern mut glad_glGenTextures function(n i32, textures *mut i32)

public const COLOR_BUFFER_BIT = 0x00004000 as i32
public const _2D = 0x0600 as i32
public const TEXTURE_2D = 0x0DE1 as i32
";

/// Builder for small registries in unit tests.
///
/// Commands and enums are only emitted when a feature references them.
#[derive(Debug, Clone, Default)]
pub struct RegistryFixture {
    commands: Vec<String>,
    enums: Vec<String>,
    features: Vec<String>,
}

impl RegistryFixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `<command>` with the given inner XML.
    pub fn command(mut self, body: &str) -> Self {
        self.commands.push(format!("<command>{}</command>", body));
        self
    }

    /// Add an `<enum name=.. value=..>` definition.
    pub fn enum_def(mut self, name: &str, value: &str) -> Self {
        self.enums
            .push(format!(r#"<enum value="{}" name="{}"/>"#, value, name));
        self
    }

    /// Add a verbatim element to the `<enums>` group.
    pub fn raw_enum(mut self, xml: &str) -> Self {
        self.enums.push(xml.to_string());
        self
    }

    /// Add a `<feature>` referencing the given commands and enums.
    pub fn feature(mut self, api: &str, commands: &[&str], enums: &[&str]) -> Self {
        let mut require = String::new();
        for name in commands {
            require.push_str(&format!(r#"<command name="{}"/>"#, name));
        }
        for name in enums {
            require.push_str(&format!(r#"<enum name="{}"/>"#, name));
        }
        self.features.push(format!(
            r#"<feature api="{}" name="F{}"><require>{}</require></feature>"#,
            api,
            self.features.len(),
            require
        ));
        self
    }

    /// Render the registry XML.
    pub fn to_xml(&self) -> String {
        format!(
            "<registry><enums>{}</enums><commands>{}</commands>{}</registry>",
            self.enums.concat(),
            self.commands.concat(),
            self.features.concat()
        )
    }

    /// Parse the rendered registry.
    pub fn build(&self) -> Registry {
        self.to_xml()
            .parse()
            .expect("fixture registry should be well-formed")
    }
}
