//! Declaration emission.
//!
//! Writes the Jelly module: header, loader declaration, one `extern`
//! function per retained command and one constant per retained enum, both
//! in registry document order.

use std::fmt::Write as _;

use super::filter::Membership;
use super::types::{resolve_param, resolve_return};
use crate::error::{Error, Result};
use crate::registry::{Command, EnumDef, Registry};

/// Declaration of the loader entry point, emitted unconditionally.
pub const LOADER_DECLARATION: &str =
    "public extern function gladLoadGLLoader(loadproc function(name *char) -> *mut byte) -> i32";

/// Prefix of every generated function pointer.
pub const FUNCTION_PREFIX: &str = "glad_";

/// Length of the namespace prefix (`GL_`) removed from enum names.
pub const ENUM_PREFIX_LEN: usize = 3;

/// Counts of emitted declarations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Number of function declarations
    pub functions: usize,
    /// Number of constant declarations
    pub constants: usize,
}

/// Renders the Jelly module for a registry and its feature membership.
pub struct Emitter<'a> {
    registry: &'a Registry,
    membership: &'a Membership,
    module: &'a str,
}

impl<'a> Emitter<'a> {
    /// Create an emitter writing a module called `module`.
    pub fn new(registry: &'a Registry, membership: &'a Membership, module: &'a str) -> Self {
        Emitter {
            registry,
            membership,
            module,
        }
    }

    /// Render the whole module.
    ///
    /// Fails on the first malformed element or unknown type; nothing is
    /// returned in that case.
    pub fn render(&self) -> Result<(String, EmitSummary)> {
        let mut out = String::new();
        let mut summary = EmitSummary::default();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "module {}", self.module);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", LOADER_DECLARATION);
        let _ = writeln!(out);

        for command in self.registry.commands() {
            let name = command.name()?;
            if !self.membership.contains_command(name) {
                continue;
            }
            let _ = writeln!(out, "{}", function_declaration(&command)?);
            summary.functions += 1;
        }

        let _ = writeln!(out);

        for def in self.registry.enums() {
            let name = def.name()?;
            if !self.membership.contains_enum(name) {
                continue;
            }
            let _ = writeln!(out, "{}", constant_declaration(&def)?);
            summary.constants += 1;
        }

        tracing::info!(
            functions = summary.functions,
            constants = summary.constants,
            "generated module `{}`",
            self.module
        );

        Ok((out, summary))
    }

    /// Render the module and write it to `sink` in one piece.
    pub fn write_to<W: std::io::Write>(&self, sink: &mut W) -> Result<EmitSummary> {
        let (text, summary) = self.render()?;
        sink.write_all(text.as_bytes())?;
        Ok(summary)
    }
}

/// `public extern mut glad_<name> function(<params>)[ -> <ret>]`
pub fn function_declaration(command: &Command<'_>) -> Result<String> {
    let proto = command.proto()?;
    let name = proto.name()?;

    let params = command
        .params()
        .map(|param| resolve_param(&param))
        .collect::<Result<Vec<_>>>()?;

    let mut decl = format!(
        "public extern mut {}{} function({})",
        FUNCTION_PREFIX,
        name,
        params.join(", ")
    );
    if let Some(ret) = resolve_return(&proto)? {
        decl.push_str(" -> ");
        decl.push_str(&ret);
    }

    tracing::debug!(command = name, params = params.len(), "resolved command");
    Ok(decl)
}

/// `public const <name> = <value> as i32`
pub fn constant_declaration(def: &EnumDef<'_>) -> Result<String> {
    let name = constant_name(def.name()?)?;
    Ok(format!("public const {} = {} as i32", name, def.value()?))
}

/// Strip the namespace prefix from an enum name, keeping it a valid
/// identifier: `GL_TEXTURE_2D` -> `TEXTURE_2D`, `GL_2D` -> `_2D`.
pub fn constant_name(name: &str) -> Result<String> {
    let stripped = name
        .get(ENUM_PREFIX_LEN..)
        .filter(|rest| !rest.is_empty())
        .ok_or_else(|| {
            Error::malformed(
                format!("enum `{}`", name),
                "a name after the namespace prefix",
            )
        })?;

    if stripped.starts_with(|c: char| c.is_ascii_digit()) {
        Ok(format!("_{}", stripped))
    } else {
        Ok(stripped.to_string())
    }
}
