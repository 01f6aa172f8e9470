//! Command implementations.

pub mod archive;
pub mod completions;
pub mod note;
pub mod status;
pub mod version;
