//! jelly-glad - Jelly loader bindings from an OpenGL XML registry
//!
//! This crate reads a Khronos-style API registry, selects the commands and
//! enums required by the features of one API family, and emits a Jelly
//! module of `extern` function pointers and integer constants that a
//! `gladLoadGLLoader` loader fills in at runtime.

pub mod error;
pub mod generator;
pub mod ops;
pub mod registry;
pub mod util;

/// Test utilities and fixtures for jelly-glad unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests.
#[cfg(test)]
pub mod test_support;

pub use error::{Error, Result};
pub use generator::{generate, Bindings, GeneratorOptions, Membership};
pub use registry::Registry;
pub use util::config::Config;
