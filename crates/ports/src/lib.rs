//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: locating C source files under a root directory
//! - [`frontend`]: preprocessing and parsing a file into a syntax tree
//!
//! These ports allow the use cases to remain independent of the walker,
//! the preprocessor and the grammar actually used.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod frontend;
