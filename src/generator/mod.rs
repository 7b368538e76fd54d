//! Jelly binding generation.
//!
//! The pipeline runs in three steps over an already parsed [`Registry`]:
//! [`Membership::compute`] selects the names required by one API family,
//! then the [`Emitter`] walks commands and enums in document order, resolving
//! every parameter and return type through [`types`].

pub mod emit;
pub mod filter;
pub mod types;

pub use emit::{EmitSummary, Emitter};
pub use filter::Membership;

use crate::error::Result;
use crate::registry::Registry;
use crate::util::config::{DEFAULT_API, DEFAULT_MODULE};

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// API family to select features for
    pub api: String,

    /// Name written in the `module` header
    pub module: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            api: DEFAULT_API.to_string(),
            module: DEFAULT_MODULE.to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Set the API family.
    pub fn with_api(mut self, api: impl Into<String>) -> Self {
        self.api = api.into();
        self
    }

    /// Set the module name.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }
}

/// Generated module text.
#[derive(Debug, Clone)]
pub struct Bindings {
    /// The complete Jelly source
    pub code: String,

    /// Declaration counts
    pub summary: EmitSummary,
}

/// Generate the Jelly module for `registry`.
pub fn generate(registry: &Registry, opts: &GeneratorOptions) -> Result<Bindings> {
    let membership = Membership::compute(registry, &opts.api)?;
    if membership.is_empty() {
        tracing::warn!("no feature with api=\"{}\" found in registry", opts.api);
    }

    let (code, summary) = Emitter::new(registry, &membership, &opts.module).render()?;
    Ok(Bindings { code, summary })
}
