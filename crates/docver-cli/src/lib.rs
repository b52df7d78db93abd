//! Library components of the `docver` CLI.

pub mod git;
pub mod logging;
pub mod pipeline;
pub mod types;
