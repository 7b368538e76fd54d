//! Type resolution from registry type tokens to Jelly types.
//!
//! Named tokens (`<ptype>`) go through the fixed [`TYPE_MAPPING`] table and
//! keep their pointer qualifiers; anonymous `void` pointers collapse to
//! [`OPAQUE_POINTER`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::registry::{Param, Proto, TypeDescriptor};

/// The Jelly spelling of an untyped mutable pointer.
pub const OPAQUE_POINTER: &str = "*mut byte";

/// Parameter names that are keywords in Jelly.
pub const RESERVED_WORDS: &[&str] = &["pointer"];

const TYPE_TABLE: &[(&str, &str)] = &[
    ("GLenum", "i32"),
    ("GLboolean", "bool"),
    ("GLbitfield", "i32"),
    ("GLbyte", "i8"),
    ("GLshort", "i16"),
    ("GLint", "i32"),
    ("GLubyte", "i8"),
    ("GLushort", "i16"),
    ("GLuint", "i32"),
    ("GLsizei", "i32"),
    ("GLfloat", "f32"),
    ("GLclampf", "f32"),
    ("GLdouble", "f64"),
    ("GLclampd", "f64"),
    ("GLchar", "char"),
    ("GLintptr", "isize"),
    ("GLsizeiptr", "isize"),
    ("GLint64", "i64"),
    ("GLuint64", "i64"),
    ("GLsync", "*mut byte"),
    (
        "GLDEBUGPROC",
        "function(source i32, type i32, id i32, severity i32, length i32, message *char, userParam *mut byte)",
    ),
];

/// Registry type token to Jelly type expression.
pub static TYPE_MAPPING: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TYPE_TABLE.iter().copied().collect());

/// Look up the Jelly type for a registry type token.
pub fn map_type(token: &str) -> Option<&'static str> {
    TYPE_MAPPING.get(token).copied()
}

/// Rename identifiers that collide with a Jelly keyword by appending `_`.
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if RESERVED_WORDS.contains(&name) {
        Cow::Owned(format!("{}_", name))
    } else {
        Cow::Borrowed(name)
    }
}

/// Rewrite the C qualifiers that follow a type token into a Jelly pointer
/// prefix.
///
/// Whitespace is dropped first. Each `const*` becomes an immutable `*`; a
/// bare `*` becomes `*mut ` unless the whole parameter is `const`-qualified,
/// in which case every level is immutable. Other text passes through.
///
/// ```
/// use jelly_glad::generator::types::rewrite_qualifiers;
///
/// assert_eq!(rewrite_qualifiers(" *", false), "*mut ");
/// assert_eq!(rewrite_qualifiers(" *", true), "*");
/// assert_eq!(rewrite_qualifiers(" *const*", false), "*mut *");
/// ```
pub fn rewrite_qualifiers(suffix: &str, leading_const: bool) -> String {
    let compact: String = suffix.chars().filter(|c| !c.is_whitespace()).collect();
    let mut prefix = String::with_capacity(compact.len() * 2);
    let mut rest = compact.as_str();

    while let Some(c) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("const*") {
            prefix.push('*');
            rest = after;
        } else if let Some(after) = rest.strip_prefix('*') {
            prefix.push_str(if leading_const { "*" } else { "*mut " });
            rest = after;
        } else {
            prefix.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    prefix
}

/// Jelly type for a parameter spelled without a named token, such as
/// `void *` or `const void **`.
///
/// `const` is discarded: every level becomes part of a mutable
/// [`OPAQUE_POINTER`].
pub fn resolve_raw_pointer(raw: &str) -> String {
    let compact: String = raw
        .replace("const", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!("{}{}", compact.replace("void*", ""), OPAQUE_POINTER)
}

/// Render a parameter as `name type`.
pub fn resolve_param(param: &Param<'_>) -> Result<String> {
    let name = escape_identifier(param.name()?);

    let ty = match param.type_descriptor()? {
        TypeDescriptor::Named {
            token,
            leading,
            suffix,
        } => {
            let base = map_type(token).ok_or_else(|| {
                Error::unknown_type(token, format!("parameter `{}` of {}", name, owner(param)))
            })?;
            let leading_const = leading.trim() == "const";
            format!("{}{}", rewrite_qualifiers(suffix, leading_const), base)
        }
        TypeDescriptor::Raw(raw) => resolve_raw_pointer(raw),
    };

    Ok(format!("{} {}", name, ty))
}

/// The Jelly result type of a prototype, or `None` for `void`.
///
/// Named return tokens are mapped without qualifier handling.
pub fn resolve_return(proto: &Proto<'_>) -> Result<Option<String>> {
    match proto.ptype() {
        Some(token) => {
            let mapped = map_type(token).ok_or_else(|| {
                let context = match proto.name() {
                    Ok(name) => format!("return type of `{}`", name),
                    Err(_) => "a return type".to_string(),
                };
                Error::unknown_type(token, context)
            })?;
            Ok(Some(mapped.to_string()))
        }
        None if proto.text().trim() == "void" => Ok(None),
        None => Ok(Some(OPAQUE_POINTER.to_string())),
    }
}

fn owner(param: &Param<'_>) -> String {
    match param.command() {
        Some(command) => format!("`{}`", command),
        None => "an unnamed command".to_string(),
    }
}
