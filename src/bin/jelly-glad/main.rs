//! jelly-glad CLI - Jelly loader bindings from an OpenGL XML registry

use std::io::{IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use jelly_glad::ops::{self, GenerateOptions};
use jelly_glad::util::config::{self, Config};
use jelly_glad::util::Diagnostic;
use jelly_glad::GeneratorOptions;

fn main() {
    let cli = Cli::parse();

    // Set up logging; stdout carries the generated module
    let filter = if cli.verbose {
        EnvFilter::new("jelly_glad=debug")
    } else {
        EnvFilter::new("jelly_glad=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(&cli) {
        let color = !cli.no_color && std::io::stderr().is_terminal();
        eprint!("{}", report(&e, &cli).format(color));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    let generator = GeneratorOptions::default()
        .with_api(cli.api.as_deref().unwrap_or(config.api()))
        .with_module(cli.module.as_deref().unwrap_or(config.module()));

    let opts = GenerateOptions::new(&cli.registry)
        .with_generator(generator)
        .with_output(cli.output.clone());

    let bindings = ops::generate(&opts)?;

    if cli.output.is_none() {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(bindings.code.as_bytes())
            .and_then(|_| stdout.flush())
            .context("failed to write to standard output")?;
    }

    Ok(())
}

/// Resolve configuration: an explicit `--config` must load, the implicit
/// project and global files are optional.
fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(ref path) = cli.config {
        return Config::load(path);
    }

    let cwd = std::env::current_dir()?;
    let project = config::project_config_path(&cwd);
    let loaded = match config::global_config_path() {
        Some(global) => config::load_config(&global, &project),
        None => Config::load_or_default(&project),
    };

    tracing::debug!(api = loaded.api(), module = loaded.module(), "loaded config");
    Ok(loaded)
}

/// Build the diagnostic printed for a failed run.
fn report(err: &anyhow::Error, cli: &Cli) -> Diagnostic {
    match err.downcast_ref::<jelly_glad::Error>() {
        Some(gen_err) if !matches!(gen_err, jelly_glad::Error::Io(_)) => {
            gen_err.to_diagnostic().with_location(&cli.registry)
        }
        _ => Diagnostic::error(format!("{:#}", err)),
    }
}
