//! Error types for registry ingestion and binding generation.
//!
//! Every failure is fatal: generation stops at the first error and nothing
//! is written to the output.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error raised while reading the registry or generating bindings.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum Error {
    /// A required child element, attribute or text is missing.
    #[error("malformed registry: {element} is missing {missing}")]
    #[diagnostic(
        code(jelly_glad::registry::malformed),
        help("Check that the registry follows the Khronos XML schema")
    )]
    MalformedDocument { element: String, missing: String },

    /// A named type token has no entry in the type mapping table.
    #[error("unknown type `{token}` in {context}")]
    #[diagnostic(
        code(jelly_glad::types::unknown),
        help("Add the type to the Jelly type mapping table")
    )]
    UnknownType { token: String, context: String },

    /// The registry is not well-formed XML.
    #[error("invalid registry XML: {0}")]
    #[diagnostic(code(jelly_glad::registry::xml))]
    Xml(#[from] xml::reader::Error),

    #[error(transparent)]
    #[diagnostic(code(jelly_glad::io))]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for [`Error::MalformedDocument`].
    pub fn malformed(element: impl Into<String>, missing: impl Into<String>) -> Self {
        Error::MalformedDocument {
            element: element.into(),
            missing: missing.into(),
        }
    }

    /// Shorthand for [`Error::UnknownType`].
    pub fn unknown_type(token: impl Into<String>, context: impl Into<String>) -> Self {
        Error::UnknownType {
            token: token.into(),
            context: context.into(),
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::MalformedDocument { element, missing } => {
                Diagnostic::error(format!("malformed registry: {} is missing {}", element, missing))
                    .with_suggestion(suggestions::MALFORMED_REGISTRY)
            }

            Error::UnknownType { token, context } => {
                Diagnostic::error(format!("unknown type `{}`", token))
                    .with_context(format!("referenced by {}", context))
                    .with_suggestion(suggestions::UNKNOWN_TYPE)
            }

            Error::Xml(err) => Diagnostic::error("registry is not well-formed XML")
                .with_context(err.to_string())
                .with_suggestion(suggestions::MALFORMED_REGISTRY),

            Error::Io(err) => Diagnostic::error(err.to_string()),
        }
    }
}
