//! Infrastructure layer
//!
//! Platform and filesystem concerns. The resolver itself never touches the
//! filesystem; only settings loading goes through here.

pub mod dirs;
