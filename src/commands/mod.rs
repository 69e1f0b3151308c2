//! Command implementations
//!
//! Each submodule implements one CLI subcommand on top of the shared
//! packaging pipeline in [`crate::packager`].

pub mod all;
pub mod completions;
pub mod list;
pub mod release;
pub mod single;
pub mod version;
