//! Command implementations for podstatic CLI

pub mod apply;
pub mod completions;
pub mod helpers;
pub mod preview;
pub mod status;
pub mod version;
