//! Core business logic module
//!
//! This module contains the resolution engine. Apart from [`settings`],
//! which reads the config file, it has NO I/O operations.
//!
//! # Submodules
//!
//! - [`system`] - Target system descriptor and the distro to family table
//! - [`version`] - Version and constraint evaluation
//! - [`template`] - `{{.key}}` package name templates
//! - [`catalog`] - Catalog lookup structures
//! - [`options`] - Per-call resolution options
//! - [`resolver`] - Package set resolution
//! - [`settings`] - Settings file

pub mod catalog;
pub mod options;
pub mod resolver;
pub mod settings;
pub mod system;
pub mod template;
pub mod version;
