//! pkgset - OS package-set resolution for image builds
//!
//! This library computes the ordered list of OS packages an image build
//! needs for a target distribution, architecture and release.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (versions, templates, catalog model, resolver)
//! - [`catalogs`] - Built-in package catalogs
//! - [`infra`] - Infrastructure layer (platform directories)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod catalogs;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
