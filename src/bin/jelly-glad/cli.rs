//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// jelly-glad - Generate Jelly loader bindings from an OpenGL XML registry
#[derive(Parser)]
#[command(name = "jelly-glad")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the API registry (e.g. gl.xml)
    pub registry: PathBuf,

    /// API family to generate bindings for [default: gl]
    #[arg(long, env = "JELLY_GLAD_API")]
    pub api: Option<String>,

    /// Name of the generated module [default: gl]
    #[arg(long)]
    pub module: Option<String>,

    /// Write the module to a file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to ./jelly-glad.toml and the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
