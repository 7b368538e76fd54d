//! Test utilities for jelly-glad unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use jelly_glad::test_support::RegistryFixture;
//!
//! #[test]
//! fn test_example() {
//!     let registry = RegistryFixture::new()
//!         .command("<proto>void <name>glFlush</name></proto>")
//!         .feature("gl", &["glFlush"], &[])
//!         .build();
//!
//!     // Run the generator over `registry`...
//! }
//! ```

pub mod fixtures;

pub use fixtures::*;
