//! High-level operations.
//!
//! This module contains the implementation of jelly-glad commands.

pub mod generate;

pub use generate::{generate, GenerateOptions};
