//! Implementation of a full generation run: read the registry, generate,
//! write the module.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::generator::{self, Bindings, GeneratorOptions};
use crate::registry::Registry;

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Registry XML to read
    pub registry: PathBuf,

    /// What to generate
    pub generator: GeneratorOptions,

    /// Destination file (None = caller handles the text)
    pub output: Option<PathBuf>,
}

impl GenerateOptions {
    /// Create options for the given registry file with default settings.
    pub fn new(registry: impl Into<PathBuf>) -> Self {
        GenerateOptions {
            registry: registry.into(),
            generator: GeneratorOptions::default(),
            output: None,
        }
    }

    /// Set the generator options.
    pub fn with_generator(mut self, generator: GeneratorOptions) -> Self {
        self.generator = generator;
        self
    }

    /// Write the module to a file.
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }
}

/// Generate bindings for `opts.registry`.
///
/// With an output path the file is only written once the whole module has
/// been generated.
pub fn generate(opts: &GenerateOptions) -> Result<Bindings> {
    tracing::debug!("reading registry {}", opts.registry.display());
    let registry = Registry::load(&opts.registry)
        .with_context(|| format!("failed to load registry: {}", opts.registry.display()))?;

    let bindings = generator::generate(&registry, &opts.generator)
        .with_context(|| format!("failed to generate bindings from {}", opts.registry.display()))?;

    if let Some(ref output) = opts.output {
        write_output(output, &bindings.code)?;
    }

    Ok(bindings)
}

fn write_output(path: &Path, code: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, code).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}
